//! Error types for the ozone-view crate.

use ozone_calendar::CalendarError;

/// Error type for all fallible view operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewError {
    /// Slider or month error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Returned when chart labels and values differ in length.
    #[error("chart series length mismatch: {labels} labels, {values} values")]
    SeriesLengthMismatch {
        /// Number of labels.
        labels: usize,
        /// Number of values.
        values: usize,
    },
}
