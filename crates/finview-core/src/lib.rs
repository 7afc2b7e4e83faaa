//! Core contracts for finview.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - The chart-frame pipeline: partition, windowing, join, axis scaling
//! - Response envelope for presenter-facing outputs

pub mod axis;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod frame;
pub mod join;
pub mod partition;
pub mod window;

pub use axis::{axis_domain, AxisDomain};
pub use domain::{Point, Timeframe, UtcDateTime};
pub use envelope::{Envelope, EnvelopeMeta};
pub use error::ValidationError;
pub use frame::ChartFrame;
pub use join::join_forecast;
pub use partition::partition;
pub use window::{trailing_window, WindowTable};
