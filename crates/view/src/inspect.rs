//! Feature inspection for pointer events.
//!
//! Both functions work only on the features the map returned for the
//! pointer position, never on the full dataset.

use ozone_features::Feature;

use crate::chart::ChartSeries;
use crate::popup::{Popup, PopupStyle};

/// Popup for the first queried feature, `None` when nothing was hit.
pub fn popup_for(features: &[Feature], style: &PopupStyle) -> Option<Popup> {
    features.first().map(|f| Popup::for_feature(f, style))
}

/// Month/ozone series of the queried features sharing the first feature's
/// zone, in encounter order. `None` when nothing was hit.
pub fn hover_series(features: &[Feature]) -> Option<ChartSeries> {
    let zone = features.first()?.zone();
    let (labels, values): (Vec<String>, Vec<f64>) = features
        .iter()
        .filter(|f| f.zone() == zone)
        .map(|f| (f.month().to_string(), f.ozone()))
        .unzip();
    // unzip keeps both sides the same length.
    ChartSeries::new(labels, values).ok()
}
