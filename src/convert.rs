//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use crate::config::*;

use ozone_features::{LoadConfig, MalformedPolicy};
use ozone_view::{ChartSpec, PopupStyle, ViewConfig};

/// Parses a malformed-feature policy name into the corresponding enum variant.
pub fn parse_malformed_policy(s: &str) -> Result<MalformedPolicy> {
    match s.to_lowercase().as_str() {
        "skip" => Ok(MalformedPolicy::Skip),
        "reject" => Ok(MalformedPolicy::Reject),
        other => bail!("unknown on_malformed policy: {other:?} (expected \"skip\" or \"reject\")"),
    }
}

/// Builds a [`LoadConfig`] from the TOML dataset configuration.
pub fn build_load_config(dataset: &DatasetToml) -> Result<LoadConfig> {
    Ok(LoadConfig::default().with_policy(parse_malformed_policy(&dataset.on_malformed)?))
}

/// Builds a [`PopupStyle`] from the TOML popup configuration.
pub fn build_popup_style(popup: &PopupToml) -> Result<PopupStyle> {
    if popup.offset.iter().any(|v| !v.is_finite()) {
        bail!("popup offset must be finite, got {:?}", popup.offset);
    }
    if popup.class_name.trim().is_empty() {
        bail!("popup class_name must not be empty");
    }
    Ok(PopupStyle::default()
        .with_offset(popup.offset)
        .with_class_name(&popup.class_name))
}

/// Builds a [`ViewConfig`] from the layer and popup sections.
pub fn build_view_config(config: &OzoneConfig) -> Result<ViewConfig> {
    if config.layer.id.is_empty() {
        bail!("layer id must not be empty");
    }
    Ok(ViewConfig::default()
        .with_layer_id(&config.layer.id)
        .with_popup_style(build_popup_style(&config.popup)?))
}

/// Builds the initial [`ChartSpec`] from the TOML chart configuration.
pub fn build_chart_spec(chart: &ChartToml) -> ChartSpec {
    ChartSpec::default()
        .with_dataset_label(&chart.dataset_label)
        .with_y_title(&chart.y_title)
}

/// Validates the replay pick radius.
pub fn build_pick_radius(replay: &ReplayToml) -> Result<f64> {
    let r = replay.pick_radius_deg;
    if !r.is_finite() || r < 0.0 {
        bail!("pick_radius_deg must be a non-negative number, got {r}");
    }
    Ok(r)
}
