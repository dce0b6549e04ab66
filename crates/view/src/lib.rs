//! # ozone-view
//!
//! Event-driven core of the ozone map page.
//!
//! The page runtime owns the map, the chart and the DOM; this crate owns the
//! rules that connect them. Hosts implement [`MapHost`] and [`ChartHost`],
//! then forward UI events to an [`OzoneView`] through [`ViewEvents`]:
//!
//! ```mermaid
//! graph LR
//!     S["slider input"] --> V["OzoneView"]
//!     Z["zone select"] --> V
//!     V -->|"ViewState::filter()"| F["MapHost::set_filter"]
//!     V --> L["MapHost::set_month_label"]
//!     C["click"] --> V -->|"popup_for()"| P["MapHost::show_popup"]
//!     H["hover"] --> V -->|"hover_series()"| A["apply_series -> ChartHost"]
//! ```
//!
//! Every handler runs to completion on the caller's thread; a later event
//! simply overwrites the effects of an earlier one.

mod chart;
mod error;
mod host;
mod inspect;
mod layer;
mod popup;
mod state;
mod sync;

pub use chart::{ChartSeries, ChartSpec, apply_series};
pub use error::ViewError;
pub use host::{
    ACTIVE_MONTH_ID, ChartHost, MAP_CONTAINER_ID, MapHost, OZONE_CHART_ID, SLIDER_ID, ScreenPoint,
    ZONE_SELECT_ID,
};
pub use inspect::{hover_series, popup_for};
pub use layer::{DEFAULT_LAYER_ID, LayerSpec};
pub use popup::{Popup, PopupStyle, popup_html};
pub use state::ViewState;
pub use sync::{OzoneView, ViewConfig, ViewEvents};
