use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Supported trailing-window selectors for the price chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "YTD")]
    YearToDate,
}

impl Timeframe {
    pub const ALL: [Self; 4] = [
        Self::OneWeek,
        Self::OneMonth,
        Self::ThreeMonths,
        Self::YearToDate,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneWeek => "1W",
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::YearToDate => "YTD",
        }
    }

    /// Total parse for UI input: unrecognized keys select the unbounded
    /// window instead of failing.
    pub fn parse_lossy(value: &str) -> Self {
        Self::from_str(value).unwrap_or(Self::YearToDate)
    }
}

impl Display for Timeframe {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "1W" => Ok(Self::OneWeek),
            "1M" => Ok(Self::OneMonth),
            "3M" => Ok(Self::ThreeMonths),
            "YTD" => Ok(Self::YearToDate),
            other => Err(ValidationError::InvalidTimeframe {
                value: other.to_owned(),
            }),
        }
    }
}
