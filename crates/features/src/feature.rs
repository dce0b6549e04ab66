//! Typed monitoring-site feature.

use geojson::JsonObject;
use ozone_calendar::CalendarMonth;
use serde_json::Value as JsonValue;

use crate::error::FeatureError;
use crate::validate::ValidationCollector;

/// Site name property.
pub const PROP_SITENAME: &str = "Sitename";
/// Reading month property (`YYYY-MM`).
pub const PROP_MONTH: &str = "Month";
/// Site classification property.
pub const PROP_SITE_TYPE: &str = "Site Type";
/// Geographic zone property.
pub const PROP_ZONE: &str = "Zone";
/// Monthly ozone reading property.
pub const PROP_OZONE: &str = "Ozone";
/// Reading status / unit property.
pub const PROP_STATUS: &str = "Status";

/// Geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LngLat {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl LngLat {
    /// Creates a new position.
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Returns `[lng, lat]`, the order map libraries expect.
    pub fn to_array(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

/// A borrowed view of one feature property, as seen by map expressions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue<'a> {
    /// A text property.
    Text(&'a str),
    /// A numeric property.
    Number(f64),
}

/// One monthly ozone reading at one monitoring site.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    site_name: String,
    month: CalendarMonth,
    month_label: String,
    site_type: String,
    zone: String,
    ozone: f64,
    status: String,
    location: LngLat,
}

impl Feature {
    /// Creates a feature from already-typed fields.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::Validation`] if `ozone` or a coordinate is not
    /// finite.
    pub fn new(
        site_name: impl Into<String>,
        month: CalendarMonth,
        site_type: impl Into<String>,
        zone: impl Into<String>,
        ozone: f64,
        status: impl Into<String>,
        location: LngLat,
    ) -> Result<Self, FeatureError> {
        let mut c = ValidationCollector::new();
        if !ozone.is_finite() {
            c.push(format!("{PROP_OZONE} must be finite, got {ozone}"));
        }
        if !location.lng.is_finite() || !location.lat.is_finite() {
            c.push(format!(
                "coordinates must be finite, got [{}, {}]",
                location.lng, location.lat
            ));
        }
        c.finish()?;
        Ok(Self {
            site_name: site_name.into(),
            month,
            month_label: month.to_string(),
            site_type: site_type.into(),
            zone: zone.into(),
            ozone,
            status: status.into(),
            location,
        })
    }

    /// Converts a GeoJSON point feature, reporting every problem at once.
    ///
    /// `Zone`, `Sitename`, `Site Type` and `Status` accept strings or numbers;
    /// `Ozone` accepts a number or a numeric string; `Month` must be a
    /// `YYYY-MM` string.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::Validation`] if the geometry is not a point or
    /// any property is missing or malformed.
    pub fn from_geojson(feature: &geojson::Feature) -> Result<Self, FeatureError> {
        let mut c = ValidationCollector::new();
        let parsed = Self::collect(feature, &mut c);
        c.finish()?;
        parsed.ok_or_else(|| FeatureError::Validation {
            count: 1,
            details: "incomplete feature".to_string(),
        })
    }

    pub(crate) fn collect(feature: &geojson::Feature, c: &mut ValidationCollector) -> Option<Self> {
        let location = point_location(feature, c);
        let empty = JsonObject::new();
        let props = feature.properties.as_ref().unwrap_or(&empty);

        let site_name = text_property(props, PROP_SITENAME, c);
        let site_type = text_property(props, PROP_SITE_TYPE, c);
        let zone = text_property(props, PROP_ZONE, c);
        let status = text_property(props, PROP_STATUS, c);
        let ozone = number_property(props, PROP_OZONE, c);
        let month = month_property(props, c);

        let month = month?;
        Some(Self {
            site_name: site_name?,
            month,
            month_label: month.to_string(),
            site_type: site_type?,
            zone: zone?,
            ozone: ozone?,
            status: status?,
            location: location?,
        })
    }

    /// Returns the site name.
    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    /// Returns the month of the reading.
    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    /// Returns the site type.
    pub fn site_type(&self) -> &str {
        &self.site_type
    }

    /// Returns the zone identifier.
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Returns the ozone reading.
    pub fn ozone(&self) -> f64 {
        self.ozone
    }

    /// Returns the status / unit text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the point location.
    pub fn location(&self) -> LngLat {
        self.location
    }

    /// Looks up a property by its dataset name.
    ///
    /// `Month` is exposed as its `YYYY-MM` label, `Ozone` as a number.
    /// Unknown names return `None`.
    pub fn property(&self, name: &str) -> Option<PropertyValue<'_>> {
        match name {
            PROP_SITENAME => Some(PropertyValue::Text(&self.site_name)),
            PROP_SITE_TYPE => Some(PropertyValue::Text(&self.site_type)),
            PROP_ZONE => Some(PropertyValue::Text(&self.zone)),
            PROP_STATUS => Some(PropertyValue::Text(&self.status)),
            PROP_MONTH => Some(PropertyValue::Text(&self.month_label)),
            PROP_OZONE => Some(PropertyValue::Number(self.ozone)),
            _ => None,
        }
    }
}

fn point_location(feature: &geojson::Feature, c: &mut ValidationCollector) -> Option<LngLat> {
    let Some(geometry) = feature.geometry.as_ref() else {
        c.push("missing geometry");
        return None;
    };
    match &geometry.value {
        geojson::Value::Point(position) if position.len() >= 2 => {
            let (lng, lat) = (position[0], position[1]);
            if lng.is_finite() && lat.is_finite() {
                Some(LngLat::new(lng, lat))
            } else {
                c.push(format!("coordinates must be finite, got [{lng}, {lat}]"));
                None
            }
        }
        geojson::Value::Point(position) => {
            c.push(format!(
                "point needs at least 2 coordinates, got {}",
                position.len()
            ));
            None
        }
        other => {
            c.push(format!("expected Point geometry, got {}", geometry_kind(other)));
            None
        }
    }
}

fn geometry_kind(value: &geojson::Value) -> &'static str {
    match value {
        geojson::Value::Point(_) => "Point",
        geojson::Value::MultiPoint(_) => "MultiPoint",
        geojson::Value::LineString(_) => "LineString",
        geojson::Value::MultiLineString(_) => "MultiLineString",
        geojson::Value::Polygon(_) => "Polygon",
        geojson::Value::MultiPolygon(_) => "MultiPolygon",
        geojson::Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// Text form of a number as the map's `to-string` writes it: integral
/// values without a fractional part, infinities as `Infinity`.
pub fn number_text(n: f64) -> String {
    if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

fn text_property(props: &JsonObject, key: &str, c: &mut ValidationCollector) -> Option<String> {
    match props.get(key) {
        Some(JsonValue::String(s)) => Some(s.clone()),
        Some(JsonValue::Number(n)) => {
            Some(n.as_f64().map_or_else(|| n.to_string(), number_text))
        }
        None | Some(JsonValue::Null) => {
            c.push(format!("missing property '{key}'"));
            None
        }
        Some(other) => {
            c.push(format!("property '{key}' must be text, got {other}"));
            None
        }
    }
}

fn number_property(props: &JsonObject, key: &str, c: &mut ValidationCollector) -> Option<f64> {
    let value = match props.get(key) {
        Some(JsonValue::Number(n)) => n.as_f64(),
        Some(JsonValue::String(s)) => s.trim().parse::<f64>().ok(),
        None | Some(JsonValue::Null) => {
            c.push(format!("missing property '{key}'"));
            return None;
        }
        Some(_) => None,
    };
    match value {
        Some(v) if v.is_finite() => Some(v),
        _ => {
            c.push(format!(
                "property '{key}' is not numeric: {}",
                props.get(key).map(JsonValue::to_string).unwrap_or_default()
            ));
            None
        }
    }
}

fn month_property(props: &JsonObject, c: &mut ValidationCollector) -> Option<CalendarMonth> {
    match props.get(PROP_MONTH) {
        Some(JsonValue::String(s)) => match s.parse::<CalendarMonth>() {
            Ok(m) => Some(m),
            Err(e) => {
                c.push(format!("property '{PROP_MONTH}': {e}"));
                None
            }
        },
        None | Some(JsonValue::Null) => {
            c.push(format!("missing property '{PROP_MONTH}'"));
            None
        }
        Some(other) => {
            c.push(format!("property '{PROP_MONTH}' must be a YYYY-MM string, got {other}"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geojson_feature(json: &str) -> geojson::Feature {
        match json.parse::<geojson::GeoJson>().unwrap() {
            geojson::GeoJson::Feature(f) => f,
            other => panic!("expected a Feature, got {other:?}"),
        }
    }

    const LONDON: &str = r#"{
        "type": "Feature",
        "geometry": {"type": "Point", "coordinates": [-0.0899, 51.5144]},
        "properties": {
            "Sitename": "London Bloomsbury",
            "Month": "2024-03",
            "Site Type": "Urban Background",
            "Zone": "Greater London",
            "Ozone": "54.2",
            "Status": "ug/m3"
        }
    }"#;

    #[test]
    fn from_geojson_valid() {
        let f = Feature::from_geojson(&geojson_feature(LONDON)).unwrap();
        assert_eq!(f.site_name(), "London Bloomsbury");
        assert_eq!(f.month().to_string(), "2024-03");
        assert_eq!(f.site_type(), "Urban Background");
        assert_eq!(f.zone(), "Greater London");
        assert_eq!(f.ozone(), 54.2);
        assert_eq!(f.status(), "ug/m3");
        assert_eq!(f.location(), LngLat::new(-0.0899, 51.5144));
    }

    #[test]
    fn numeric_ozone_and_zone_accepted() {
        let f = Feature::from_geojson(&geojson_feature(
            r#"{"type": "Feature",
                "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
                "properties": {"Sitename": "A", "Month": "2024-01", "Site Type": "Rural",
                               "Zone": 7, "Ozone": 40, "Status": "ug/m3"}}"#,
        ))
        .unwrap();
        assert_eq!(f.zone(), "7");
        assert_eq!(f.ozone(), 40.0);
    }

    #[test]
    fn integral_float_zone_has_no_fraction() {
        let f = Feature::from_geojson(&geojson_feature(
            r#"{"type": "Feature",
                "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
                "properties": {"Sitename": 12.5, "Month": "2024-01", "Site Type": "Rural",
                               "Zone": 7.0, "Ozone": 40, "Status": "ug/m3"}}"#,
        ))
        .unwrap();
        assert_eq!(f.zone(), "7");
        assert_eq!(f.site_name(), "12.5");
    }

    #[test]
    fn number_text_forms() {
        assert_eq!(number_text(7.0), "7");
        assert_eq!(number_text(-0.0), "0");
        assert_eq!(number_text(40.5), "40.5");
        assert_eq!(number_text(f64::INFINITY), "Infinity");
        assert_eq!(number_text(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn every_problem_reported() {
        let err = Feature::from_geojson(&geojson_feature(
            r#"{"type": "Feature",
                "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]},
                "properties": {"Sitename": "A", "Month": "2024-1", "Site Type": "Rural",
                               "Ozone": "n/a", "Status": "ug/m3"}}"#,
        ))
        .unwrap_err();
        match err {
            FeatureError::Validation { count, details } => {
                assert_eq!(count, 4, "details: {details}");
                assert!(details.contains("expected Point geometry, got LineString"));
                assert!(details.contains("missing property 'Zone'"));
                assert!(details.contains("property 'Ozone' is not numeric"));
                assert!(details.contains("invalid month label \"2024-1\""));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn missing_properties_object() {
        let err = Feature::from_geojson(&geojson_feature(
            r#"{"type": "Feature",
                "geometry": {"type": "Point", "coordinates": [1.0, 2.0]},
                "properties": null}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, FeatureError::Validation { count: 6, .. }));
    }

    #[test]
    fn property_lookup() {
        let f = Feature::from_geojson(&geojson_feature(LONDON)).unwrap();
        assert_eq!(f.property(PROP_MONTH), Some(PropertyValue::Text("2024-03")));
        assert_eq!(
            f.property(PROP_ZONE),
            Some(PropertyValue::Text("Greater London"))
        );
        assert_eq!(f.property(PROP_OZONE), Some(PropertyValue::Number(54.2)));
        assert_eq!(f.property("Altitude"), None);
    }

    #[test]
    fn new_rejects_non_finite() {
        let month = CalendarMonth::new(2024, 1).unwrap();
        let err = Feature::new(
            "A",
            month,
            "Rural",
            "Z",
            f64::NAN,
            "ug/m3",
            LngLat::new(0.0, 0.0),
        )
        .unwrap_err();
        assert!(matches!(err, FeatureError::Validation { count: 1, .. }));
    }
}
