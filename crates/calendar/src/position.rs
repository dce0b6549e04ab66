//! Slider position <-> calendar month mapping.
//!
//! The slider covers September 2023 through December 2025 in three
//! segments: positions 1..=4 are Sep..Dec 2023, 5..=16 are 2024 and
//! 17..=28 are 2025.

use crate::error::CalendarError;
use crate::month::CalendarMonth;
use crate::sequence::months_between;

/// First valid slider position.
pub const FIRST_POSITION: u32 = 1;

/// Last valid slider position.
pub const LAST_POSITION: u32 = 28;

/// Month at [`FIRST_POSITION`], the view's initial month.
pub const SLIDER_START: CalendarMonth = CalendarMonth::from_parts_unchecked(2023, 9);

/// Month at [`LAST_POSITION`].
pub const SLIDER_END: CalendarMonth = CalendarMonth::from_parts_unchecked(2025, 12);

/// Maps a slider position to its calendar month.
///
/// # Errors
///
/// Returns [`CalendarError::PositionOutOfRange`] for positions outside
/// [`FIRST_POSITION`]..=[`LAST_POSITION`]. Out-of-range input is rejected,
/// never clamped or wrapped.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(month_for_position(1).unwrap().to_string(), "2023-09");
/// assert_eq!(month_for_position(17).unwrap().to_string(), "2025-01");
/// ```
pub fn month_for_position(position: i64) -> Result<CalendarMonth, CalendarError> {
    let (year, month) = match position {
        1..=4 => (2023, 8 + position),
        5..=16 => (2024, position - 4),
        17..=28 => (2025, position - 16),
        _ => {
            return Err(CalendarError::PositionOutOfRange {
                position,
                min: FIRST_POSITION,
                max: LAST_POSITION,
            });
        }
    };
    // Every arm yields 1..=12.
    CalendarMonth::new(year, month as u8)
}

/// Maps a calendar month back to its slider position.
///
/// # Errors
///
/// Returns [`CalendarError::MonthNotOnSlider`] for months before September
/// 2023 or after December 2025.
pub fn position_for_month(month: CalendarMonth) -> Result<u32, CalendarError> {
    let position = match (month.year(), month.month()) {
        (2023, m @ 9..=12) => u32::from(m) - 8,
        (2024, m) => u32::from(m) + 4,
        (2025, m) => u32::from(m) + 16,
        _ => {
            return Err(CalendarError::MonthNotOnSlider {
                month: month.to_string(),
                first: SLIDER_START.to_string(),
                last: SLIDER_END.to_string(),
            });
        }
    };
    Ok(position)
}

/// Returns every slider month in position order.
pub fn slider_months() -> Vec<CalendarMonth> {
    months_between(SLIDER_START, SLIDER_END)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(position: i64) -> String {
        month_for_position(position).unwrap().to_string()
    }

    #[test]
    fn first_segment() {
        assert_eq!(label(1), "2023-09");
        assert_eq!(label(4), "2023-12");
    }

    #[test]
    fn second_segment() {
        assert_eq!(label(5), "2024-01");
        assert_eq!(label(16), "2024-12");
    }

    #[test]
    fn third_segment() {
        assert_eq!(label(17), "2025-01");
        assert_eq!(label(28), "2025-12");
    }

    #[test]
    fn zero_rejected() {
        assert_eq!(
            month_for_position(0).unwrap_err(),
            CalendarError::PositionOutOfRange {
                position: 0,
                min: 1,
                max: 28,
            }
        );
    }

    #[test]
    fn past_end_rejected() {
        assert!(matches!(
            month_for_position(29),
            Err(CalendarError::PositionOutOfRange { position: 29, .. })
        ));
        assert!(month_for_position(-3).is_err());
    }

    #[test]
    fn inverse_of_first_segment() {
        let sep = CalendarMonth::new(2023, 9).unwrap();
        assert_eq!(position_for_month(sep).unwrap(), 1);
    }

    #[test]
    fn inverse_rejects_before_slider() {
        let aug = CalendarMonth::new(2023, 8).unwrap();
        assert_eq!(
            position_for_month(aug).unwrap_err(),
            CalendarError::MonthNotOnSlider {
                month: "2023-08".to_string(),
                first: "2023-09".to_string(),
                last: "2025-12".to_string(),
            }
        );
    }

    #[test]
    fn inverse_rejects_after_slider() {
        let jan = CalendarMonth::new(2026, 1).unwrap();
        assert!(position_for_month(jan).is_err());
    }

    #[test]
    fn slider_bounds_match_positions() {
        assert_eq!(month_for_position(1).unwrap(), SLIDER_START);
        assert_eq!(month_for_position(28).unwrap(), SLIDER_END);
    }

    #[test]
    fn slider_months_len() {
        let months = slider_months();
        assert_eq!(months.len(), 28);
        assert_eq!(months[0].to_string(), "2023-09");
        assert_eq!(months[27].to_string(), "2025-12");
    }

    #[test]
    fn slider_months_follow_positions() {
        for (i, month) in slider_months().into_iter().enumerate() {
            let position = FIRST_POSITION + i as u32;
            assert_eq!(month_for_position(i64::from(position)).unwrap(), month);
            assert_eq!(position_for_month(month).unwrap(), position);
        }
    }
}
