//! Capabilities the page runtime provides.

use ozone_features::Feature;
use ozone_filter::Expression;

use crate::popup::Popup;

/// Slider input element id.
pub const SLIDER_ID: &str = "slider";
/// Zone select element id.
pub const ZONE_SELECT_ID: &str = "Zone";
/// Month label element id.
pub const ACTIVE_MONTH_ID: &str = "active-month";
/// Chart canvas id.
pub const OZONE_CHART_ID: &str = "ozone-chart";
/// Map container id.
pub const MAP_CONTAINER_ID: &str = "map";

/// Pointer position in map-container pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

impl ScreenPoint {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The map widget plus the month label shown beside it.
pub trait MapHost {
    /// Whether a layer with this id has been added (the dataset may still be
    /// loading).
    fn has_layer(&self, layer_id: &str) -> bool;

    /// Replaces the filter of a layer.
    fn set_filter(&mut self, layer_id: &str, filter: &Expression);

    /// Rendered features under `point`, restricted to `layers`, in the map's
    /// own order.
    fn query_rendered_features(&self, point: ScreenPoint, layers: &[&str]) -> Vec<Feature>;

    /// Shows a popup, replacing any popup already open.
    fn show_popup(&mut self, popup: &Popup);

    /// Writes the active month label.
    fn set_month_label(&mut self, label: &str);
}

/// The time-series chart.
pub trait ChartHost {
    /// Replaces the x-axis labels.
    fn set_labels(&mut self, labels: Vec<String>);

    /// Replaces the data of one dataset.
    fn set_dataset(&mut self, index: usize, data: Vec<f64>);

    /// Redraws the chart.
    fn update(&mut self);
}
