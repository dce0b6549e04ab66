//! Site detail popup.

use ozone_features::{Feature, LngLat};
use serde::Serialize;

/// Placement and CSS class shared by every popup.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupStyle {
    offset: [f64; 2],
    class_name: String,
}

impl Default for PopupStyle {
    fn default() -> Self {
        Self {
            offset: [0.0, -5.0],
            class_name: "my-popup".to_string(),
        }
    }
}

impl PopupStyle {
    /// Set the pixel offset from the anchor.
    pub fn with_offset(mut self, offset: [f64; 2]) -> Self {
        self.offset = offset;
        self
    }

    /// Set the CSS class.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Returns the pixel offset.
    pub fn offset(&self) -> [f64; 2] {
        self.offset
    }

    /// Returns the CSS class.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

/// A popup anchored at a site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    lng_lat: [f64; 2],
    offset: [f64; 2],
    class_name: String,
    html: String,
}

impl Popup {
    /// Builds the detail popup for `feature`.
    pub fn for_feature(feature: &Feature, style: &PopupStyle) -> Self {
        Self {
            lng_lat: feature.location().to_array(),
            offset: style.offset(),
            class_name: style.class_name().to_string(),
            html: popup_html(feature),
        }
    }

    /// Anchor position.
    pub fn lng_lat(&self) -> LngLat {
        LngLat::new(self.lng_lat[0], self.lng_lat[1])
    }

    /// Pixel offset from the anchor.
    pub fn offset(&self) -> [f64; 2] {
        self.offset
    }

    /// CSS class.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// HTML body.
    pub fn html(&self) -> &str {
        &self.html
    }
}

/// HTML body listing a site's properties. All property text is escaped.
pub fn popup_html(feature: &Feature) -> String {
    let rows = [
        ("Date", feature.month().to_string()),
        ("Site Type", feature.site_type().to_string()),
        ("Zone", feature.zone().to_string()),
        ("Ozone", feature.ozone().to_string()),
        ("Unit", feature.status().to_string()),
    ];
    let mut html = format!("<h3>📍{}</h3>\n", escape_html(feature.site_name()));
    for (label, value) in rows {
        html.push_str(&format!(
            "<p><strong>{label}:</strong> {}</p>\n",
            escape_html(&value)
        ));
    }
    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
