//! # ozone-features
//!
//! Validated monitoring-site records for the ozone map. Bridges the
//! loosely-typed GeoJSON features served by the map dataset into a typed
//! [`Feature`] with a parsed [`CalendarMonth`](ozone_calendar::CalendarMonth)
//! and a numeric ozone reading, plus the ozone band table used to style the
//! map layer.

mod band;
mod error;
mod feature;
mod reader;
mod validate;

pub use band::{OzoneBand, RADIUS_STOPS, circle_radius};
pub use error::FeatureError;
pub use feature::{
    Feature, LngLat, PROP_MONTH, PROP_OZONE, PROP_SITE_TYPE, PROP_SITENAME, PROP_STATUS,
    PROP_ZONE, PropertyValue, number_text,
};
pub use reader::{
    LoadConfig, LoadedFeatures, MalformedPolicy, features_from_geojson, parse_feature_collection,
    read_feature_collection,
};
