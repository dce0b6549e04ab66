use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level ozone map configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OzoneConfig {
    /// Base map settings.
    #[serde(default)]
    pub map: MapToml,

    /// Search box settings.
    #[serde(default)]
    pub geocoder: GeocoderToml,

    /// Dataset location and validation.
    #[serde(default)]
    pub dataset: DatasetToml,

    /// Data layer settings.
    #[serde(default)]
    pub layer: LayerToml,

    /// Site popup settings.
    #[serde(default)]
    pub popup: PopupToml,

    /// Time-series chart settings.
    #[serde(default)]
    pub chart: ChartToml,

    /// Headless replay settings.
    #[serde(default)]
    pub replay: ReplayToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapToml {
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_center")]
    pub center: [f64; 2],
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default = "default_container")]
    pub container: String,
}

impl Default for MapToml {
    fn default() -> Self {
        Self {
            style: default_style(),
            center: default_center(),
            zoom: default_zoom(),
            container: default_container(),
        }
    }
}

fn default_style() -> String {
    "mapbox://styles/mapbox/streets-v11".to_string()
}
fn default_center() -> [f64; 2] {
    [-0.089932, 51.514442]
}
fn default_zoom() -> f64 {
    6.0
}
fn default_container() -> String {
    ozone_view::MAP_CONTAINER_ID.to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeocoderToml {
    #[serde(default)]
    pub access_token: String,
    #[serde(default = "default_proximity")]
    pub proximity: [f64; 2],
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub marker: bool,
}

impl Default for GeocoderToml {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            proximity: default_proximity(),
            placeholder: default_placeholder(),
            marker: false,
        }
    }
}

fn default_proximity() -> [f64; 2] {
    [-4.2518, 55.8642]
}
fn default_placeholder() -> String {
    "Search for places England".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetToml {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_on_malformed")]
    pub on_malformed: String,
}

impl Default for DatasetToml {
    fn default() -> Self {
        Self {
            url: default_url(),
            on_malformed: default_on_malformed(),
        }
    }
}

fn default_url() -> String {
    "ozone.geojson".to_string()
}
fn default_on_malformed() -> String {
    "skip".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerToml {
    #[serde(default = "default_layer_id")]
    pub id: String,
    #[serde(default)]
    pub filter_on_load: bool,
}

impl Default for LayerToml {
    fn default() -> Self {
        Self {
            id: default_layer_id(),
            filter_on_load: false,
        }
    }
}

fn default_layer_id() -> String {
    ozone_view::DEFAULT_LAYER_ID.to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PopupToml {
    #[serde(default = "default_offset")]
    pub offset: [f64; 2],
    #[serde(default = "default_class_name")]
    pub class_name: String,
}

impl Default for PopupToml {
    fn default() -> Self {
        Self {
            offset: default_offset(),
            class_name: default_class_name(),
        }
    }
}

fn default_offset() -> [f64; 2] {
    [0.0, -5.0]
}
fn default_class_name() -> String {
    "my-popup".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartToml {
    #[serde(default = "default_dataset_label")]
    pub dataset_label: String,
    #[serde(default = "default_y_title")]
    pub y_title: String,
}

impl Default for ChartToml {
    fn default() -> Self {
        Self {
            dataset_label: default_dataset_label(),
            y_title: default_y_title(),
        }
    }
}

fn default_dataset_label() -> String {
    "Ozone concentrations".to_string()
}
fn default_y_title() -> String {
    "Ozone Levels(ug/m³)".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplayToml {
    #[serde(default = "default_pick_radius")]
    pub pick_radius_deg: f64,
}

impl Default for ReplayToml {
    fn default() -> Self {
        Self {
            pick_radius_deg: default_pick_radius(),
        }
    }
}

fn default_pick_radius() -> f64 {
    0.01
}

/// Loads the configuration at `path`, or the defaults when `path` is `None`.
pub fn load(path: Option<&Path>) -> Result<OzoneConfig> {
    let Some(path) = path else {
        return Ok(OzoneConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg: OzoneConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.map.zoom, 6.0);
        assert_eq!(cfg.map.container, "map");
        assert_eq!(cfg.layer.id, "Ozone");
        assert_eq!(cfg.popup.offset, [0.0, -5.0]);
        assert_eq!(cfg.popup.class_name, "my-popup");
        assert_eq!(cfg.dataset.on_malformed, "skip");
        assert!(!cfg.geocoder.marker);
        assert!(!cfg.layer.filter_on_load);
        assert_eq!(cfg.chart.dataset_label, "Ozone concentrations");
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let cfg: OzoneConfig = toml::from_str(
            r#"
            [map]
            zoom = 9.5

            [dataset]
            url = "https://example.org/ozone.geojson"
            on_malformed = "reject"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.map.zoom, 9.5);
        assert_eq!(cfg.map.center, [-0.089932, 51.514442]);
        assert_eq!(cfg.dataset.url, "https://example.org/ozone.geojson");
        assert_eq!(cfg.dataset.on_malformed, "reject");
    }

    #[test]
    fn unknown_field_rejected() {
        let err = toml::from_str::<OzoneConfig>("[layer]\nname = \"x\"\n").unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn unknown_section_rejected() {
        assert!(toml::from_str::<OzoneConfig>("[legend]\n").is_err());
    }

    #[test]
    fn load_without_path_is_default() {
        let cfg = load(None).unwrap();
        assert_eq!(cfg.replay.pick_radius_deg, 0.01);
    }

    #[test]
    fn load_missing_file_has_context() {
        let err = load(Some(Path::new("/nonexistent/ozone.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}
