//! Anchored stitching of the forecast segment onto the displayed history.

use crate::domain::Point;

/// Prefixes `future` with a copy of the last displayed historical point so
/// the two chart segments share exactly one boundary point.
///
/// The anchor is the last element of `windowed_past`, falling back to the
/// last element of the unwindowed `full_past` when the window is empty. The
/// anchor is a value copy; styling the joined segment can never mutate the
/// historical segment. With no anchor at all (both pasts empty) the future
/// is returned unanchored.
pub fn join_forecast(windowed_past: &[Point], full_past: &[Point], future: &[Point]) -> Vec<Point> {
    match windowed_past.last().or_else(|| full_past.last()) {
        Some(anchor) => {
            let mut joined = Vec::with_capacity(future.len() + 1);
            joined.push(anchor.clone());
            joined.extend_from_slice(future);
            joined
        }
        None => future.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, value: f64, is_future: bool) -> Point {
        Point::new(label, value, is_future).expect("valid point")
    }

    #[test]
    fn prepends_anchor_from_windowed_past() {
        let past = vec![point("P1", 10.0, false), point("P2", 11.0, false)];
        let future = vec![point("F1", 12.0, true)];

        let joined = join_forecast(&past, &past, &future);

        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].label, "P2");
        assert_eq!(joined[1].label, "F1");
    }

    #[test]
    fn empty_future_yields_single_anchor_point() {
        let past = vec![point("P1", 10.0, false)];
        let joined = join_forecast(&past, &past, &[]);
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].label, "P1");
    }

    #[test]
    fn falls_back_to_unwindowed_past_for_anchor() {
        let full_past = vec![point("P1", 10.0, false), point("P2", 11.0, false)];
        let future = vec![point("F1", 12.0, true)];

        let joined = join_forecast(&[], &full_past, &future);

        assert_eq!(joined[0].label, "P2");
        assert_eq!(joined.len(), 2);
    }

    #[test]
    fn no_anchor_leaves_future_unanchored() {
        let future = vec![point("F1", 12.0, true)];
        assert_eq!(join_forecast(&[], &[], &future), future);
        assert!(join_forecast(&[], &[], &[]).is_empty());
    }

    #[test]
    fn anchor_is_a_value_copy() {
        let past = vec![point("P1", 10.0, false)];
        let mut joined = join_forecast(&past, &past, &[]);

        joined[0].is_future = true;

        assert!(!past[0].is_future);
    }
}
