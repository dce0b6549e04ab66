//! Contiguous month runs.

use std::iter;

use crate::month::CalendarMonth;

/// Unbounded run of months starting at `start`.
pub fn months_from(start: CalendarMonth) -> impl Iterator<Item = CalendarMonth> {
    iter::successors(Some(start), |m| Some(m.next()))
}

/// `n_months` consecutive months from `start`, crossing year ends.
///
/// ```ignore
/// let start = CalendarMonth::new(2023, 11).unwrap();
/// let labels: Vec<String> = month_sequence(start, 3).iter().map(|m| m.to_string()).collect();
/// assert_eq!(labels, ["2023-11", "2023-12", "2024-01"]);
/// ```
pub fn month_sequence(start: CalendarMonth, n_months: usize) -> Vec<CalendarMonth> {
    months_from(start).take(n_months).collect()
}

/// Every month from `first` to `last` inclusive; empty when `last` is
/// before `first`.
pub fn months_between(first: CalendarMonth, last: CalendarMonth) -> Vec<CalendarMonth> {
    let span = first.months_until(last);
    if span < 0 {
        return Vec::new();
    }
    month_sequence(first, span as usize + 1)
}
