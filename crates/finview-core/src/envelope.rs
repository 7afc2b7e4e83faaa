use serde::{Deserialize, Serialize};

use crate::domain::{Timeframe, UtcDateTime};
use crate::ValidationError;

/// Response envelope for machine-readable dashboard outputs.
///
/// `data` is what the presenter consumes; `meta` and `warnings` exist for
/// observability and the non-fatal degradations (selector fallback, empty
/// axis) the render path is allowed to take.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub meta: EnvelopeMeta,
    pub data: T,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl<T> Envelope<T> {
    pub fn new(meta: EnvelopeMeta, data: T) -> Self {
        Self {
            meta,
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

/// Metadata attached to every envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeMeta {
    pub request_id: String,
    pub generated_at: UtcDateTime,
    pub timeframe: Timeframe,
    pub series_version: u64,
    pub cache_hit: bool,
}

impl EnvelopeMeta {
    pub fn new(
        request_id: impl Into<String>,
        timeframe: Timeframe,
        series_version: u64,
        cache_hit: bool,
    ) -> Result<Self, ValidationError> {
        let request_id = request_id.into();
        if request_id.trim().len() < 8 {
            return Err(ValidationError::InvalidRequestId);
        }

        Ok(Self {
            request_id,
            generated_at: UtcDateTime::now(),
            timeframe,
            series_version,
            cache_hit,
        })
    }
}
