//! Padded value-axis range over the visible points.

use serde::{Deserialize, Serialize};

use crate::domain::Point;
use crate::ValidationError;

/// Fraction of the raw value spread added above and below the axis.
const PAD_RATIO: f64 = 0.08;

/// Numeric range used to scale the chart's value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    /// Range substituted by callers when nothing is visible.
    pub const EMPTY_FALLBACK: Self = Self { min: 0.0, max: 1.0 };

    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

/// Padded min/max over the visible value set.
///
/// Accepts any iteration order; only the value set matters. The pad is
/// `max(1, round(spread * 0.08))`, so a flat series still gets a two-unit
/// axis instead of a zero-height one. An empty visible set is an explicit
/// `EmptyVisibleSet` failure; the caller substitutes
/// [`AxisDomain::EMPTY_FALLBACK`] rather than rendering a degenerate chart.
pub fn axis_domain<'a, I>(visible: I) -> Result<AxisDomain, ValidationError>
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut values = visible.into_iter().map(|point| point.value);
    let first = values.next().ok_or(ValidationError::EmptyVisibleSet)?;
    let (raw_min, raw_max) = values.fold((first, first), |(low, high), value| {
        (low.min(value), high.max(value))
    });

    let pad = ((raw_max - raw_min) * PAD_RATIO).round().max(1.0);

    Ok(AxisDomain {
        min: raw_min - pad,
        max: raw_max + pad,
    })
}
