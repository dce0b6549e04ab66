//! Manifest command: everything the page needs to build the map, in one JSON
//! document.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, info_span};

use ozone_calendar::{FIRST_POSITION, LAST_POSITION, SLIDER_START};
use ozone_features::OzoneBand;
use ozone_view::{
    ACTIVE_MONTH_ID, LayerSpec, MAP_CONTAINER_ID, OZONE_CHART_ID, SLIDER_ID, ViewState,
    ZONE_SELECT_ID,
};

use crate::cli::ManifestArgs;
use crate::config::{self, OzoneConfig};
use crate::convert;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions<'a> {
    container: &'a str,
    style: &'a str,
    center: [f64; 2],
    zoom: f64,
}

#[derive(Debug, Serialize)]
struct Proximity {
    longitude: f64,
    latitude: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeocoderOptions<'a> {
    access_token: &'a str,
    marker: bool,
    placeholder: &'a str,
    proximity: Proximity,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PopupOptions<'a> {
    offset: [f64; 2],
    class_name: &'a str,
}

#[derive(Debug, Serialize)]
struct SliderOptions {
    min: u32,
    max: u32,
    value: u32,
    label: String,
}

#[derive(Debug, Serialize)]
struct LegendEntry {
    label: &'static str,
    colour: &'static str,
    max: Option<f64>,
}

#[derive(Debug, Serialize)]
struct DomIds {
    map: &'static str,
    slider: &'static str,
    zone: &'static str,
    active_month: &'static str,
    chart: &'static str,
}

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    map: MapOptions<'a>,
    geocoder: GeocoderOptions<'a>,
    controls: Value,
    layer: LayerSpec,
    legend: Vec<LegendEntry>,
    popup: PopupOptions<'a>,
    slider: SliderOptions,
    chart: Value,
    dom: DomIds,
}

/// Builds the manifest JSON for `config`.
pub fn build_manifest(config: &OzoneConfig) -> Result<Value> {
    let view_cfg = convert::build_view_config(config)?;
    convert::build_load_config(&config.dataset)?;
    let popup = view_cfg.popup_style();

    let mut layer = LayerSpec::circle(view_cfg.layer_id(), &config.dataset.url);
    if config.layer.filter_on_load {
        layer = layer.with_filter(ViewState::default().filter());
    }
    let legend = OzoneBand::ALL
        .into_iter()
        .map(|band| LegendEntry {
            label: band.label(),
            colour: band.colour(),
            max: band.upper_bound(),
        })
        .collect();

    let manifest = Manifest {
        map: MapOptions {
            container: &config.map.container,
            style: &config.map.style,
            center: config.map.center,
            zoom: config.map.zoom,
        },
        geocoder: GeocoderOptions {
            access_token: &config.geocoder.access_token,
            marker: config.geocoder.marker,
            placeholder: &config.geocoder.placeholder,
            proximity: Proximity {
                longitude: config.geocoder.proximity[0],
                latitude: config.geocoder.proximity[1],
            },
        },
        controls: serde_json::json!([
            {"type": "geocoder", "position": "top-right"},
            {"type": "navigation"},
            {
                "type": "geolocate",
                "position": "top-right",
                "options": {
                    "positionOptions": {"enableHighAccuracy": true},
                    "trackUserLocation": true,
                    "showUserHeading": true
                }
            }
        ]),
        layer,
        legend,
        popup: PopupOptions {
            offset: popup.offset(),
            class_name: popup.class_name(),
        },
        slider: SliderOptions {
            min: FIRST_POSITION,
            max: LAST_POSITION,
            value: FIRST_POSITION,
            label: SLIDER_START.to_string(),
        },
        chart: convert::build_chart_spec(&config.chart).to_json(),
        dom: DomIds {
            map: MAP_CONTAINER_ID,
            slider: SLIDER_ID,
            zone: ZONE_SELECT_ID,
            active_month: ACTIVE_MONTH_ID,
            chart: OZONE_CHART_ID,
        },
    };
    serde_json::to_value(&manifest).context("failed to serialize manifest")
}

/// Print or write the page manifest.
pub fn run(args: ManifestArgs) -> Result<()> {
    let _cmd = info_span!("manifest").entered();
    let config = config::load(args.config.as_deref())?;
    let manifest = build_manifest(&config)?;
    let json = serde_json::to_string_pretty(&manifest).context("failed to serialize manifest")?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("failed to write manifest: {}", path.display()))?;
            info!(path = %path.display(), "manifest written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
