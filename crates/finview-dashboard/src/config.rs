//! Immutable dashboard configuration tables.
//!
//! The KPI strip, the sidebar figures, and the timeframe window table are
//! injected at construction, not read from module-global state.

use serde::{Deserialize, Serialize};

use finview_core::{ValidationError, WindowTable};

/// Static display figure shown in the KPI strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiCard {
    pub label: String,
    pub value: String,
}

impl KpiCard {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Figures for the collapsible detail sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SidebarSummary {
    pub price: f64,
    pub volume: f64,
    pub ratio: f64,
    pub daily_change_pct: f64,
}

impl SidebarSummary {
    pub fn new(
        price: f64,
        volume: f64,
        ratio: f64,
        daily_change_pct: f64,
    ) -> Result<Self, ValidationError> {
        validate_finite("price", price)?;
        validate_finite("volume", volume)?;
        validate_finite("ratio", ratio)?;
        validate_finite("daily_change_pct", daily_change_pct)?;

        Ok(Self {
            price,
            volume,
            ratio,
            daily_change_pct,
        })
    }

    /// Signed two-decimal rendering of the daily change, e.g. `+0.54%`.
    pub fn daily_change_display(&self) -> String {
        let sign = if self.daily_change_pct >= 0.0 { "+" } else { "" };
        format!("{sign}{:.2}%", self.daily_change_pct)
    }
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

/// Immutable configuration injected into the dashboard at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub kpis: Vec<KpiCard>,
    pub sidebar: SidebarSummary,
    pub windows: WindowTable,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            kpis: vec![
                KpiCard::new("MAPE", "7.8%"),
                KpiCard::new("Hit rate", "59.2%"),
                KpiCard::new("Sharpe", "0.71"),
                KpiCard::new("Max drawdown", "-1.13%"),
            ],
            sidebar: SidebarSummary {
                price: 198.45,
                volume: 18.28,
                ratio: 0.47,
                daily_change_pct: 0.54,
            },
            windows: WindowTable::default(),
        }
    }
}
