//! Dashboard composition layer for finview.
//!
//! Owns the immutable configuration tables, the series input boundary, and
//! the render state whose output is handed to the external chart presenter.

pub mod config;
pub mod error;
pub mod provider;
pub mod state;

pub use config::{DashboardConfig, KpiCard, SidebarSummary};
pub use error::DashboardError;
pub use provider::{SeriesProvider, StaticProvider};
pub use state::DashboardState;
