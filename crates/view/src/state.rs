//! Owned view state and its transitions.

use ozone_calendar::{CalendarMonth, SLIDER_START, month_for_position};
use ozone_filter::{Expression, ZoneSelector, build_filter};

use crate::error::ViewError;

/// Zone and month currently shown.
///
/// Transitions never mutate; they return the next state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    zone: ZoneSelector,
    month: CalendarMonth,
}

impl Default for ViewState {
    /// Every zone, first slider month.
    fn default() -> Self {
        Self {
            zone: ZoneSelector::All,
            month: SLIDER_START,
        }
    }
}

impl ViewState {
    /// Returns the selected zone.
    pub fn zone(&self) -> &ZoneSelector {
        &self.zone
    }

    /// Returns the selected month.
    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    /// State after moving the slider to `position`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Calendar`] for positions off the slider.
    pub fn with_position(&self, position: i64) -> Result<Self, ViewError> {
        let month = month_for_position(position)?;
        Ok(self.with_month(month))
    }

    /// State after selecting `month` directly.
    pub fn with_month(&self, month: CalendarMonth) -> Self {
        Self {
            zone: self.zone.clone(),
            month,
        }
    }

    /// State after selecting `zone`.
    pub fn with_zone(&self, zone: ZoneSelector) -> Self {
        Self {
            zone,
            month: self.month,
        }
    }

    /// The layer filter for this state.
    pub fn filter(&self) -> Expression {
        build_filter(&self.zone, &self.month)
    }
}
