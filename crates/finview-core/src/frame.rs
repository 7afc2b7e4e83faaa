//! One-pass assembly of the per-render chart frame.

use serde::{Deserialize, Serialize};

use crate::axis::{axis_domain, AxisDomain};
use crate::domain::{Point, Timeframe};
use crate::join::join_forecast;
use crate::partition::partition;
use crate::window::{trailing_window, WindowTable};
use crate::ValidationError;

/// The three values the chart presenter consumes per render.
///
/// `windowed_past` is drawn solid, `joined_future` dashed; the two share
/// exactly one boundary point (the anchor) so the line reads as continuous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub windowed_past: Vec<Point>,
    pub joined_future: Vec<Point>,
    pub domain: AxisDomain,
}

impl ChartFrame {
    /// Runs partition, windowing, join, and axis scaling over a raw series.
    ///
    /// Pure function of `(series, timeframe, table)`; frames are safe to
    /// memoize on that key. An empty visible set is downgraded to the
    /// fallback axis range plus a warning; malformed points propagate.
    pub fn compute(
        series: &[Point],
        timeframe: Timeframe,
        table: &WindowTable,
    ) -> Result<(Self, Vec<String>), ValidationError> {
        let (past, future) = partition(series)?;
        let windowed_past = trailing_window(&past, timeframe, table).to_vec();
        let joined_future = join_forecast(&windowed_past, &past, &future);

        let mut warnings = Vec::new();
        let domain = match axis_domain(windowed_past.iter().chain(joined_future.iter())) {
            Ok(domain) => domain,
            Err(ValidationError::EmptyVisibleSet) => {
                warnings.push(String::from(
                    "no visible points, value axis fell back to [0, 1]",
                ));
                AxisDomain::EMPTY_FALLBACK
            }
            Err(other) => return Err(other),
        };

        Ok((
            Self {
                windowed_past,
                joined_future,
                domain,
            },
            warnings,
        ))
    }
}
