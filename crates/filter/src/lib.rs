//! # ozone-filter
//!
//! Declarative expressions for the ozone map layer.
//!
//! Expressions are immutable trees that serialise to the map library's
//! JSON-array form (`["all", ["==", ["to-string", ["get", "Month"]], "2024-03"]]`)
//! and can also be evaluated locally against a feature, so a headless host
//! renders exactly what the browser would.
//!
//! ```ignore
//! use ozone_calendar::month_for_position;
//! use ozone_filter::{ZoneSelector, build_filter};
//!
//! let month = month_for_position(7).unwrap();
//! let filter = build_filter(&ZoneSelector::from("LondonZone"), &month);
//! println!("{}", filter.to_json());
//! ```

mod build;
mod error;
mod expr;
mod paint;
mod zone;

pub use build::build_filter;
pub use error::EvalError;
pub use expr::{Expression, PropertySource, Value};
pub use paint::{circle_color_expression, circle_radius_expression, ozone_number};
pub use zone::{ALL_ZONES, ZoneSelector};
