use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// One chart sample: an ordinal label on the time axis and a price.
///
/// `label` is an opaque orderable key, not a parsed timestamp; insertion
/// order of a series is its time order. `is_future` separates observed
/// prices from forecast prices and defaults to false when absent in the
/// upstream payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub is_future: bool,
}

impl Point {
    pub fn new(
        label: impl Into<String>,
        value: f64,
        is_future: bool,
    ) -> Result<Self, ValidationError> {
        let point = Self {
            label: label.into(),
            value,
            is_future,
        };
        point.validate()?;
        Ok(point)
    }

    /// Observed (historical) sample.
    pub fn past(label: impl Into<String>, value: f64) -> Result<Self, ValidationError> {
        Self::new(label, value, false)
    }

    /// Forecast sample.
    pub fn forecast(label: impl Into<String>, value: f64) -> Result<Self, ValidationError> {
        Self::new(label, value, true)
    }

    /// Checks the upstream data contract: non-empty label, finite value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::EmptyLabel);
        }
        if !self.value.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "value" });
        }
        Ok(())
    }
}
