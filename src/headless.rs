//! In-memory map and chart hosts for replaying events without a browser.
//!
//! Pointer positions are read as `(lng, lat)` directly: the headless map has
//! no projection, so `ScreenPoint { x, y }` picks sites within a radius in
//! degrees of `(x, y)`.

use tracing::trace;

use ozone_features::Feature;
use ozone_filter::Expression;
use ozone_view::{ChartHost, MapHost, Popup, ScreenPoint};

/// A map holding one circle layer over an in-memory dataset.
#[derive(Debug)]
pub struct HeadlessMap {
    layer_id: String,
    features: Vec<Feature>,
    pick_radius_deg: f64,
    layer_added: bool,
    filter: Option<Expression>,
    popup: Option<Popup>,
    month_label: Option<String>,
}

impl HeadlessMap {
    /// Creates a map whose layer `layer_id` will render `features`.
    ///
    /// The layer starts absent until [`add_layer`](Self::add_layer) is called.
    pub fn new(layer_id: impl Into<String>, features: Vec<Feature>, pick_radius_deg: f64) -> Self {
        Self {
            layer_id: layer_id.into(),
            features,
            pick_radius_deg,
            layer_added: false,
            filter: None,
            popup: None,
            month_label: None,
        }
    }

    /// Adds the data layer, unfiltered.
    pub fn add_layer(&mut self) {
        self.layer_added = true;
    }

    /// The filter currently applied to the data layer.
    pub fn filter(&self) -> Option<&Expression> {
        self.filter.as_ref()
    }

    /// The popup currently open.
    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    /// The text of the month label element.
    pub fn month_label(&self) -> Option<&str> {
        self.month_label.as_deref()
    }

    /// Features the layer currently renders, in dataset order.
    pub fn rendered(&self) -> impl Iterator<Item = &Feature> {
        self.features
            .iter()
            .filter(|f| self.layer_added && self.filter.as_ref().is_none_or(|e| e.matches(*f)))
    }

    fn within_pick_radius(&self, feature: &Feature, point: ScreenPoint) -> bool {
        let loc = feature.location();
        let (dx, dy) = (loc.lng - point.x, loc.lat - point.y);
        (dx * dx + dy * dy).sqrt() <= self.pick_radius_deg
    }
}

impl MapHost for HeadlessMap {
    fn has_layer(&self, layer_id: &str) -> bool {
        self.layer_added && layer_id == self.layer_id
    }

    fn set_filter(&mut self, layer_id: &str, filter: &Expression) {
        if layer_id == self.layer_id {
            self.filter = Some(filter.clone());
        }
    }

    fn query_rendered_features(&self, point: ScreenPoint, layers: &[&str]) -> Vec<Feature> {
        if !layers.contains(&self.layer_id.as_str()) {
            return Vec::new();
        }
        let hits: Vec<Feature> = self
            .rendered()
            .filter(|f| self.within_pick_radius(f, point))
            .cloned()
            .collect();
        trace!(x = point.x, y = point.y, n_hits = hits.len(), "picked features");
        hits
    }

    fn show_popup(&mut self, popup: &Popup) {
        self.popup = Some(popup.clone());
    }

    fn set_month_label(&mut self, label: &str) {
        self.month_label = Some(label.to_string());
    }
}

/// A chart that records what it was last given.
#[derive(Debug, Default)]
pub struct RecordingChart {
    labels: Vec<String>,
    data: Vec<f64>,
    redraws: usize,
}

impl RecordingChart {
    /// Current x-axis labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Current values of dataset 0.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Number of redraws requested.
    pub fn redraws(&self) -> usize {
        self.redraws
    }
}

impl ChartHost for RecordingChart {
    fn set_labels(&mut self, labels: Vec<String>) {
        self.labels = labels;
    }

    fn set_dataset(&mut self, index: usize, data: Vec<f64>) {
        // The page chart has a single dataset.
        if index == 0 {
            self.data = data;
        }
    }

    fn update(&mut self) {
        self.redraws += 1;
    }
}
