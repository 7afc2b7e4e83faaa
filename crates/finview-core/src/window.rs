//! Trailing-window selection over the historical segment.

use serde::{Deserialize, Serialize};

use crate::domain::{Point, Timeframe};

/// Timeframe-to-count table for the trailing window.
///
/// Injected as immutable configuration, never read from a module global.
/// `YearToDate` is always unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowTable {
    pub one_week: usize,
    pub one_month: usize,
    pub three_months: usize,
}

impl WindowTable {
    pub const fn new(one_week: usize, one_month: usize, three_months: usize) -> Self {
        Self {
            one_week,
            one_month,
            three_months,
        }
    }

    /// Trailing point count for a timeframe; `None` means unbounded.
    pub const fn points(self, timeframe: Timeframe) -> Option<usize> {
        match timeframe {
            Timeframe::OneWeek => Some(self.one_week),
            Timeframe::OneMonth => Some(self.one_month),
            Timeframe::ThreeMonths => Some(self.three_months),
            Timeframe::YearToDate => None,
        }
    }
}

impl Default for WindowTable {
    fn default() -> Self {
        Self::new(5, 22, 66)
    }
}

/// Trailing window of `past` for the given timeframe.
///
/// An unbounded selector, or a window at least as long as `past`, yields
/// `past` unchanged. Callers must not rely on reference identity, only on
/// content.
pub fn trailing_window<'a>(
    past: &'a [Point],
    timeframe: Timeframe,
    table: &WindowTable,
) -> &'a [Point] {
    match table.points(timeframe) {
        Some(count) if count < past.len() => &past[past.len() - count..],
        _ => past,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    fn past(len: usize) -> Vec<Point> {
        (1..=len)
            .map(|i| Point::past(format!("P{i}"), 100.0 + i as f64).expect("valid point"))
            .collect()
    }

    #[test]
    fn returns_trailing_points_for_bounded_timeframe() {
        let history = past(30);
        let window = trailing_window(&history, Timeframe::OneMonth, &WindowTable::default());

        assert_eq!(window.len(), 22);
        assert_eq!(window, &history[8..]);
    }

    #[test]
    fn short_history_is_returned_unchanged() {
        let history = past(10);
        let window = trailing_window(&history, Timeframe::OneMonth, &WindowTable::default());
        assert_eq!(window, history.as_slice());
    }

    #[test]
    fn year_to_date_is_unbounded() {
        let history = past(200);
        let window = trailing_window(&history, Timeframe::YearToDate, &WindowTable::default());
        assert_eq!(window.len(), 200);
    }

    #[test]
    fn alternate_table_changes_window_size() {
        let history = past(10);
        let table = WindowTable::new(3, 22, 66);
        let window = trailing_window(&history, Timeframe::OneWeek, &table);

        assert_eq!(window.len(), 3);
        assert_eq!(window[0].label, "P8");
    }
}
