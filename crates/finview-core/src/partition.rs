//! Splitting the combined series into historical and forecast segments.

use crate::domain::Point;
use crate::ValidationError;

/// Stable split of a combined chronological series by the per-point flag.
///
/// Every point lands in exactly one of the two outputs, relative order is
/// preserved, and nothing is deduplicated. A point violating the upstream
/// data contract fails the whole split; that is a caller bug, not a state
/// the chart recovers from.
pub fn partition(series: &[Point]) -> Result<(Vec<Point>, Vec<Point>), ValidationError> {
    let mut past = Vec::with_capacity(series.len());
    let mut future = Vec::new();

    for point in series {
        point.validate()?;
        if point.is_future {
            future.push(point.clone());
        } else {
            past.push(point.clone());
        }
    }

    Ok((past, future))
}
