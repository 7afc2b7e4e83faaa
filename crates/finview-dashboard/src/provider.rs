//! Series input boundary.

use finview_core::{Point, ValidationError};

/// External source of the combined historical + forecast series.
///
/// Transport and format are out of scope; implementations only promise the
/// three point fields and ascending time order, with insertion order as the
/// time order.
pub trait SeriesProvider {
    fn raw_series(&self) -> Result<Vec<Point>, ValidationError>;
}

/// Fixed in-memory series, validated on read.
///
/// Stands in for the real data/forecast feed; `sample` seeds the demo data
/// set (fifteen observed points, one "today" point, five forecast points).
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    points: Vec<Point>,
}

impl StaticProvider {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn sample() -> Self {
        let observed = [
            ("P1", 172.3),
            ("P2", 174.8),
            ("P3", 178.6),
            ("P4", 181.2),
            ("P5", 179.4),
            ("P6", 176.1),
            ("P7", 177.8),
            ("P8", 182.5),
            ("P9", 185.7),
            ("P10", 183.2),
            ("P11", 186.9),
            ("P12", 189.1),
            ("P13", 188.0),
            ("P14", 190.4),
            ("P15", 187.7),
            ("T0", 188.9),
        ];
        let forecast = [
            ("F1", 190.5),
            ("F2", 192.1),
            ("F3", 194.8),
            ("F4", 197.3),
            ("F5", 199.6),
        ];

        let points = observed
            .iter()
            .map(|&(label, value)| sample_point(label, value, false))
            .chain(
                forecast
                    .iter()
                    .map(|&(label, value)| sample_point(label, value, true)),
            )
            .collect();

        Self { points }
    }
}

fn sample_point(label: &str, value: f64, is_future: bool) -> Point {
    Point {
        label: label.to_owned(),
        value,
        is_future,
    }
}

impl SeriesProvider for StaticProvider {
    fn raw_series(&self) -> Result<Vec<Point>, ValidationError> {
        for point in &self.points {
            point.validate()?;
        }
        Ok(self.points.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_series_has_sixteen_past_and_five_future_points() {
        let series = StaticProvider::sample()
            .raw_series()
            .expect("sample must be valid");

        assert_eq!(series.len(), 21);
        assert_eq!(series.iter().filter(|p| !p.is_future).count(), 16);
        assert_eq!(series.iter().filter(|p| p.is_future).count(), 5);
        assert_eq!(series[15].label, "T0");
    }

    #[test]
    fn malformed_point_is_rejected_at_the_boundary() {
        let provider = StaticProvider::new(vec![sample_point("P1", f64::NAN, false)]);
        let err = provider.raw_series().expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFiniteValue { .. }));
    }
}
