//! # ozone-calendar
//!
//! Pure month arithmetic behind the ozone map's time slider.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["slider position (1..=28)"] -->|"month_for_position()"| B["CalendarMonth"]
//!     B -->|"position_for_month()"| A
//!     B -->|"Display"| C["\"YYYY-MM\""]
//!     C -->|"FromStr"| B
//!     B -->|".next()"| B
//!     B -->|"month_sequence()"| D["Vec of CalendarMonth"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use ozone_calendar::{CalendarMonth, month_for_position, position_for_month};
//!
//! let month = month_for_position(5).unwrap(); // first 2024 stop
//! assert_eq!(month.to_string(), "2024-01");
//!
//! let parsed: CalendarMonth = "2025-03".parse().unwrap();
//! assert_eq!(position_for_month(parsed).unwrap(), 19);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Calendar month value with canonical `YYYY-MM` label |
//! | `position` | Slider position <-> month mapping |
//! | `sequence` | Contiguous month runs |
//! | `error` | Error types |

mod error;
mod month;
mod position;
mod sequence;

pub use error::CalendarError;
pub use month::CalendarMonth;
pub use position::{
    FIRST_POSITION, LAST_POSITION, SLIDER_END, SLIDER_START, month_for_position,
    position_for_month, slider_months,
};
pub use sequence::{month_sequence, months_between, months_from};
