//! Error types for the ozone-calendar crate.

/// Error type for all fallible operations in the ozone-calendar crate.
///
/// Covers month numbers outside 1..=12, slider positions outside the
/// slider's domain, months the slider cannot reach, and malformed
/// `YYYY-MM` labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a slider position falls outside the slider's domain.
    #[error("slider position {position} out of range (must be {min}..={max})")]
    PositionOutOfRange {
        /// The rejected position.
        position: i64,
        /// First valid position.
        min: u32,
        /// Last valid position.
        max: u32,
    },

    /// Returned when a month has no slider position.
    #[error("month {month} is not on the slider (must be {first}..={last})")]
    MonthNotOnSlider {
        /// Label of the unreachable month.
        month: String,
        /// Label of the first slider month.
        first: String,
        /// Label of the last slider month.
        last: String,
    },

    /// Returned when a label is not a zero-padded `YYYY-MM` string.
    #[error("invalid month label {label:?} (expected YYYY-MM)")]
    InvalidLabel {
        /// The label that failed to parse.
        label: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_position_out_of_range() {
        let err = CalendarError::PositionOutOfRange {
            position: 29,
            min: 1,
            max: 28,
        };
        assert_eq!(
            err.to_string(),
            "slider position 29 out of range (must be 1..=28)"
        );
    }

    #[test]
    fn error_month_not_on_slider() {
        let err = CalendarError::MonthNotOnSlider {
            month: "2023-08".to_string(),
            first: "2023-09".to_string(),
            last: "2025-12".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "month 2023-08 is not on the slider (must be 2023-09..=2025-12)"
        );
    }

    #[test]
    fn error_invalid_label() {
        let err = CalendarError::InvalidLabel {
            label: "2024/01".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid month label \"2024/01\" (expected YYYY-MM)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
