//! Dashboard render state and frame memoization.

use std::collections::HashMap;

use tracing::{debug, info, warn};
use uuid::Uuid;

use finview_core::{ChartFrame, Envelope, EnvelopeMeta, Point, Timeframe};

use crate::config::{DashboardConfig, KpiCard, SidebarSummary};
use crate::error::DashboardError;
use crate::provider::SeriesProvider;

/// Owns one render cycle's inputs and the frames derived from them.
///
/// The series snapshot is immutable for the duration of a computation pass;
/// replacing it bumps the version and drops every memoized frame. Frames
/// are a pure function of `(series version, timeframe)`, which is the cache
/// key.
#[derive(Debug)]
pub struct DashboardState {
    config: DashboardConfig,
    series: Vec<Point>,
    series_version: u64,
    timeframe: Timeframe,
    frames: HashMap<(u64, Timeframe), ChartFrame>,
    pending_warnings: Vec<String>,
}

impl DashboardState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            series: Vec::new(),
            series_version: 0,
            timeframe: Timeframe::YearToDate,
            frames: HashMap::new(),
            pending_warnings: Vec::new(),
        }
    }

    /// State seeded from a series provider, full history selected.
    pub fn from_provider(
        config: DashboardConfig,
        provider: &impl SeriesProvider,
    ) -> Result<Self, DashboardError> {
        let mut state = Self::new(config);
        state.set_series(provider.raw_series()?);
        Ok(state)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn kpis(&self) -> &[KpiCard] {
        &self.config.kpis
    }

    pub fn sidebar(&self) -> &SidebarSummary {
        &self.config.sidebar
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn series_version(&self) -> u64 {
        self.series_version
    }

    /// Replace the series snapshot. Frames derived from earlier versions
    /// are dropped wholesale.
    pub fn set_series(&mut self, points: Vec<Point>) {
        self.series = points;
        self.series_version += 1;
        self.frames.clear();
        info!(
            version = self.series_version,
            points = self.series.len(),
            "series snapshot replaced"
        );
    }

    /// Select a timeframe from a raw UI string.
    ///
    /// Unknown keys are non-fatal: the unbounded window is selected and the
    /// fallback is reported in the next envelope.
    pub fn select_timeframe(&mut self, raw: &str) -> Timeframe {
        self.timeframe = match raw.parse::<Timeframe>() {
            Ok(timeframe) => timeframe,
            Err(_) => {
                warn!(value = raw, "unknown timeframe, showing full history");
                self.pending_warnings
                    .push(format!("unknown timeframe '{raw}', showing full history"));
                Timeframe::YearToDate
            }
        };
        self.timeframe
    }

    /// Frame for the current `(series version, timeframe)` pair, computed
    /// on first use and memoized until the series changes.
    pub fn render(&mut self) -> Result<Envelope<ChartFrame>, DashboardError> {
        let key = (self.series_version, self.timeframe);
        let mut warnings = std::mem::take(&mut self.pending_warnings);

        let cached = self.frames.get(&key).cloned();
        let cache_hit = cached.is_some();
        let frame = match cached {
            Some(frame) => {
                debug!(
                    version = key.0,
                    timeframe = %key.1,
                    "frame served from cache"
                );
                frame
            }
            None => {
                let (frame, frame_warnings) =
                    ChartFrame::compute(&self.series, self.timeframe, &self.config.windows)?;
                warnings.extend(frame_warnings);
                self.frames.insert(key, frame.clone());
                debug!(
                    version = key.0,
                    timeframe = %key.1,
                    visible = frame.windowed_past.len() + frame.joined_future.len(),
                    "frame computed"
                );
                frame
            }
        };

        let meta = EnvelopeMeta::new(request_id(), self.timeframe, self.series_version, cache_hit)?;
        Ok(Envelope::new(meta, frame).with_warnings(warnings))
    }

    /// Serialized envelope for presenters consuming JSON.
    pub fn render_json(&mut self, pretty: bool) -> Result<String, DashboardError> {
        let envelope = self.render()?;
        let payload = if pretty {
            serde_json::to_string_pretty(&envelope)?
        } else {
            serde_json::to_string(&envelope)?
        };
        Ok(payload)
    }
}

fn request_id() -> String {
    Uuid::new_v4().simple().to_string()
}
