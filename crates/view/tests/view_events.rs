//! Integration tests: UI events driven through mock hosts.

use approx::assert_relative_eq;
use ozone_features::{Feature, LngLat};
use ozone_filter::Expression;
use ozone_view::{
    ChartHost, MapHost, OzoneView, Popup, PopupStyle, ScreenPoint, ViewConfig, ViewError,
    ViewEvents,
};
use serde_json::json;

#[derive(Default)]
struct MockMap {
    has_layer: bool,
    hits: Vec<Feature>,
    filters: Vec<(String, Expression)>,
    popups: Vec<Popup>,
    labels: Vec<String>,
}

impl MapHost for MockMap {
    fn has_layer(&self, _layer_id: &str) -> bool {
        self.has_layer
    }

    fn set_filter(&mut self, layer_id: &str, filter: &Expression) {
        self.filters.push((layer_id.to_string(), filter.clone()));
    }

    fn query_rendered_features(&self, _point: ScreenPoint, _layers: &[&str]) -> Vec<Feature> {
        self.hits.clone()
    }

    fn show_popup(&mut self, popup: &Popup) {
        self.popups.push(popup.clone());
    }

    fn set_month_label(&mut self, label: &str) {
        self.labels.push(label.to_string());
    }
}

#[derive(Default)]
struct MockChart {
    labels: Vec<String>,
    data: Vec<f64>,
    redraws: usize,
}

impl ChartHost for MockChart {
    fn set_labels(&mut self, labels: Vec<String>) {
        self.labels = labels;
    }

    fn set_dataset(&mut self, index: usize, data: Vec<f64>) {
        assert_eq!(index, 0);
        self.data = data;
    }

    fn update(&mut self) {
        self.redraws += 1;
    }
}

fn site(zone: &str, month: &str, ozone: f64) -> Feature {
    Feature::new(
        format!("{zone} {month}"),
        month.parse().unwrap(),
        "Urban",
        zone,
        ozone,
        "ug/m3",
        LngLat::new(-0.1, 51.5),
    )
    .unwrap()
}

fn view_with_layer() -> OzoneView<MockMap, MockChart> {
    let map = MockMap {
        has_layer: true,
        ..MockMap::default()
    };
    OzoneView::new(map, MockChart::default(), ViewConfig::default())
}

fn last_filter(view: &OzoneView<MockMap, MockChart>) -> serde_json::Value {
    view.map().filters.last().unwrap().1.to_json()
}

const POINT: ScreenPoint = ScreenPoint { x: 10.0, y: 20.0 };

#[test]
fn slider_sets_label_for_each_segment() {
    let mut view = view_with_layer();
    for (position, expected) in [(1, "2023-09"), (5, "2024-01"), (17, "2025-01")] {
        let month = view.on_slider_change(position).unwrap();
        assert_eq!(month.to_string(), expected);
        assert_eq!(view.map().labels.last().unwrap(), expected);
    }
}

#[test]
fn slider_applies_filter_with_current_zone() {
    let mut view = view_with_layer();
    view.on_zone_change("LondonZone");
    view.on_slider_change(7).unwrap();
    assert_eq!(
        last_filter(&view),
        json!([
            "all",
            ["==", ["to-string", ["get", "Month"]], "2024-03"],
            ["==", ["to-string", ["get", "Zone"]], "LondonZone"]
        ])
    );
    assert_eq!(view.map().filters.last().unwrap().0, "Ozone");
}

#[test]
fn zone_change_uses_current_month() {
    let mut view = view_with_layer();
    view.on_slider_change(2).unwrap();
    view.on_zone_change("all");
    assert_eq!(
        last_filter(&view),
        json!(["all", ["==", ["to-string", ["get", "Month"]], "2023-10"]])
    );
}

#[test]
fn zone_change_before_slider_uses_initial_month() {
    let mut view = view_with_layer();
    view.on_zone_change("B");
    assert_eq!(
        last_filter(&view),
        json!([
            "all",
            ["==", ["to-string", ["get", "Month"]], "2023-09"],
            ["==", ["to-string", ["get", "Zone"]], "B"]
        ])
    );
}

#[test]
fn missing_layer_skips_filter_but_updates_state_and_label() {
    let mut view = OzoneView::new(MockMap::default(), MockChart::default(), ViewConfig::default());
    view.on_slider_change(5).unwrap();
    view.on_zone_change("A");
    assert!(view.map().filters.is_empty());
    assert_eq!(view.map().labels, ["2024-01"]);
    assert_eq!(view.state().month().to_string(), "2024-01");

    view.map_mut().has_layer = true;
    assert!(view.refresh_filter());
    assert_eq!(view.map().filters.len(), 1);
}

#[test]
fn out_of_range_slider_changes_nothing() {
    let mut view = view_with_layer();
    view.on_slider_change(3).unwrap();
    let err = view.on_slider_change(29).unwrap_err();
    assert!(matches!(err, ViewError::Calendar(_)));
    assert_eq!(view.state().month().to_string(), "2023-11");
    assert_eq!(view.map().labels.len(), 1);
    assert_eq!(view.map().filters.len(), 1);
}

#[test]
fn repeated_filter_is_identical() {
    let mut view = view_with_layer();
    view.on_zone_change("A");
    view.on_zone_change("A");
    let filters = &view.map().filters;
    assert_eq!(filters.len(), 2);
    assert_eq!(filters[0], filters[1]);
}

#[test]
fn click_without_hits_is_noop() {
    let mut view = view_with_layer();
    assert!(view.on_feature_click(POINT).is_none());
    assert!(view.map().popups.is_empty());
}

#[test]
fn click_shows_popup_for_first_feature() {
    let mut view = view_with_layer();
    view.map_mut().hits = vec![site("A", "2024-01", 40.0), site("B", "2024-01", 60.0)];
    let popup = view.on_feature_click(POINT).unwrap();
    assert_eq!(view.map().popups, [popup.clone()]);
    assert!(popup.html().contains("<h3>📍A 2024-01</h3>"));
    assert_eq!(popup.offset(), PopupStyle::default().offset());
    assert_eq!(popup.lng_lat(), LngLat::new(-0.1, 51.5));
}

#[test]
fn hover_sends_first_zone_series_to_chart() {
    let mut view = view_with_layer();
    view.map_mut().hits = vec![
        site("A", "2024-01", 40.0),
        site("A", "2024-02", 55.0),
        site("B", "2024-01", 70.0),
    ];
    let series = view.on_feature_hover(POINT).unwrap();
    assert_eq!(series.labels(), ["2024-01", "2024-02"]);
    assert_eq!(view.chart().labels, ["2024-01", "2024-02"]);
    assert_eq!(view.chart().data.len(), 2);
    assert_relative_eq!(view.chart().data[0], 40.0);
    assert_relative_eq!(view.chart().data[1], 55.0);
    assert_eq!(view.chart().redraws, 1);
}

#[test]
fn hover_without_hits_leaves_chart_alone() {
    let mut view = view_with_layer();
    assert!(view.on_feature_hover(POINT).is_none());
    assert_eq!(view.chart().redraws, 0);
}

#[test]
fn custom_layer_id_is_used() {
    let config = ViewConfig::default().with_layer_id("Readings");
    let map = MockMap {
        has_layer: true,
        ..MockMap::default()
    };
    let mut view = OzoneView::new(map, MockChart::default(), config);
    view.on_zone_change("A");
    assert_eq!(view.map().filters[0].0, "Readings");
}
