//! Circle layer definition handed to the map library.

use ozone_filter::{Expression, circle_color_expression, circle_radius_expression};
use serde::Serialize;

/// Layer id used when none is configured.
pub const DEFAULT_LAYER_ID: &str = "Ozone";

/// A `circle` layer over a remote GeoJSON source.
#[derive(Debug, Clone, Serialize)]
pub struct LayerSpec {
    id: String,
    #[serde(rename = "type")]
    kind: &'static str,
    source: Source,
    paint: Paint,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<Expression>,
}

#[derive(Debug, Clone, Serialize)]
struct Source {
    #[serde(rename = "type")]
    kind: &'static str,
    data: String,
}

#[derive(Debug, Clone, Serialize)]
struct Paint {
    #[serde(rename = "circle-radius")]
    radius: Expression,
    #[serde(rename = "circle-opacity")]
    opacity: f64,
    #[serde(rename = "circle-color")]
    color: Expression,
}

impl LayerSpec {
    /// Circle layer `id` over the dataset at `data_url`, styled by ozone band.
    pub fn circle(id: impl Into<String>, data_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: "circle",
            source: Source {
                kind: "geojson",
                data: data_url.into(),
            },
            paint: Paint {
                radius: circle_radius_expression(),
                opacity: 1.0,
                color: circle_color_expression(),
            },
            filter: None,
        }
    }

    /// Set an initial filter.
    pub fn with_filter(mut self, filter: Expression) -> Self {
        self.filter = Some(filter);
        self
    }

    /// JSON form.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn circle_layer_json() {
        let layer = LayerSpec::circle(DEFAULT_LAYER_ID, "https://example.test/features");
        let v = layer.to_json();
        assert_eq!(v["id"], json!("Ozone"));
        assert_eq!(v["type"], json!("circle"));
        assert_eq!(
            v["source"],
            json!({"type": "geojson", "data": "https://example.test/features"})
        );
        assert_eq!(v["paint"]["circle-opacity"], json!(1.0));
        assert_eq!(v["paint"]["circle-color"][0], json!("case"));
        assert_eq!(v["paint"]["circle-radius"][0], json!("interpolate"));
        assert!(v.get("filter").is_none());
    }

    #[test]
    fn initial_filter_serialised() {
        let filter = Expression::all(vec![]);
        let v = LayerSpec::circle("Ozone", "u").with_filter(filter).to_json();
        assert_eq!(v["filter"], json!(["all"]));
    }
}
