//! View synchroniser: routes UI events to the map and chart hosts.

use ozone_calendar::CalendarMonth;
use ozone_filter::ZoneSelector;
use tracing::debug;

use crate::chart::{ChartSeries, apply_series};
use crate::error::ViewError;
use crate::host::{ChartHost, MapHost, ScreenPoint};
use crate::inspect::{hover_series, popup_for};
use crate::layer::DEFAULT_LAYER_ID;
use crate::popup::{Popup, PopupStyle};
use crate::state::ViewState;

/// Static settings of a view.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    layer_id: String,
    popup: PopupStyle,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            layer_id: DEFAULT_LAYER_ID.to_string(),
            popup: PopupStyle::default(),
        }
    }
}

impl ViewConfig {
    /// Set the id of the data layer the view filters and queries.
    pub fn with_layer_id(mut self, id: impl Into<String>) -> Self {
        self.layer_id = id.into();
        self
    }

    /// Set the popup style.
    pub fn with_popup_style(mut self, style: PopupStyle) -> Self {
        self.popup = style;
        self
    }

    /// Returns the data layer id.
    pub fn layer_id(&self) -> &str {
        &self.layer_id
    }

    /// Returns the popup style.
    pub fn popup_style(&self) -> &PopupStyle {
        &self.popup
    }
}

/// UI events the page runtime forwards to the core.
pub trait ViewEvents {
    /// Slider moved to `position`. Returns the month now shown.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Calendar`] for positions off the slider; nothing
    /// is changed in that case.
    fn on_slider_change(&mut self, position: i64) -> Result<CalendarMonth, ViewError>;

    /// Zone select changed to the raw select value.
    fn on_zone_change(&mut self, zone: &str);

    /// Map clicked. Returns the popup shown, if any feature was hit.
    fn on_feature_click(&mut self, point: ScreenPoint) -> Option<Popup>;

    /// Pointer moved over the map. Returns the series sent to the chart, if
    /// any feature was hit.
    fn on_feature_hover(&mut self, point: ScreenPoint) -> Option<ChartSeries>;
}

/// The map page's view: owned state plus the hosts it drives.
#[derive(Debug)]
pub struct OzoneView<M, C> {
    config: ViewConfig,
    state: ViewState,
    map: M,
    chart: C,
}

impl<M: MapHost, C: ChartHost> OzoneView<M, C> {
    /// Creates a view in the initial state (every zone, first slider month).
    pub fn new(map: M, chart: C, config: ViewConfig) -> Self {
        Self {
            config,
            state: ViewState::default(),
            map,
            chart,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Returns the map host.
    pub fn map(&self) -> &M {
        &self.map
    }

    /// Returns the map host mutably, e.g. to add the data layer once it loads.
    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    /// Returns the chart host.
    pub fn chart(&self) -> &C {
        &self.chart
    }

    /// Pushes the current filter to the data layer. Returns `false` when the
    /// layer is not on the map yet.
    pub fn refresh_filter(&mut self) -> bool {
        let layer_id = self.config.layer_id.as_str();
        if !self.map.has_layer(layer_id) {
            debug!(layer = layer_id, "data layer not present, filter skipped");
            return false;
        }
        let filter = self.state.filter();
        debug!(
            layer = layer_id,
            zone = %self.state.zone(),
            month = %self.state.month(),
            "applying filter"
        );
        self.map.set_filter(layer_id, &filter);
        true
    }

    fn query(&self, point: ScreenPoint) -> Vec<ozone_features::Feature> {
        self.map
            .query_rendered_features(point, &[self.config.layer_id.as_str()])
    }
}

impl<M: MapHost, C: ChartHost> ViewEvents for OzoneView<M, C> {
    #[tracing::instrument(skip(self))]
    fn on_slider_change(&mut self, position: i64) -> Result<CalendarMonth, ViewError> {
        self.state = self.state.with_position(position)?;
        let month = self.state.month();
        debug!(month = %month, "selected month");
        self.map.set_month_label(&month.to_string());
        self.refresh_filter();
        Ok(month)
    }

    #[tracing::instrument(skip(self))]
    fn on_zone_change(&mut self, zone: &str) {
        self.state = self.state.with_zone(ZoneSelector::from(zone));
        self.refresh_filter();
    }

    #[tracing::instrument(skip(self))]
    fn on_feature_click(&mut self, point: ScreenPoint) -> Option<Popup> {
        let features = self.query(point);
        let Some(popup) = popup_for(&features, &self.config.popup) else {
            debug!("no features at click point");
            return None;
        };
        self.map.show_popup(&popup);
        Some(popup)
    }

    #[tracing::instrument(skip(self))]
    fn on_feature_hover(&mut self, point: ScreenPoint) -> Option<ChartSeries> {
        let features = self.query(point);
        let Some(series) = hover_series(&features) else {
            debug!("no features at hover point");
            return None;
        };
        debug!(
            n_hit = features.len(),
            n_points = series.len(),
            "hover chart update"
        );
        apply_series(&mut self.chart, &series);
        Some(series)
    }
}
