//! Region strategy table: currency symbol, action channel, and CSV column mapping.
//!
//! Region only changes presentation and import heuristics, never numeric thresholds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[serde(rename = "IN")]
    India,
    #[default]
    #[serde(rename = "US")]
    UnitedStates,
}

/// Outreach channel preferred for a region.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionChannel {
    Whatsapp,
    Email,
}

/// Order of day and month in slash/dash dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOrder {
    DayFirst,
    MonthFirst,
}

/// How a row of a regional accounting export reveals its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionRule {
    /// Inflow iff the named column contains the marker substring.
    ColumnContains {
        column: &'static str,
        marker: &'static str,
    },
    /// Inflow iff the raw parsed amount is positive.
    SignedAmount,
}

/// Column names of the region's accounting export (non app-native rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    /// Tried in order; first non-empty wins.
    pub payee: &'static [&'static str],
    pub description: &'static str,
    pub amount: &'static str,
    pub date: &'static str,
    pub direction: DirectionRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionProfile {
    pub currency_symbol: &'static str,
    pub preferred_channel: ActionChannel,
    pub csv_columns: ColumnMap,
    pub day_order: DayOrder,
}

const INDIA: RegionProfile = RegionProfile {
    currency_symbol: "₹",
    preferred_channel: ActionChannel::Whatsapp,
    csv_columns: ColumnMap {
        payee: &["Party Name", "Particulars"],
        description: "Vch Type",
        amount: "Amount",
        date: "Date",
        direction: DirectionRule::ColumnContains {
            column: "Vch Type",
            marker: "Receipt",
        },
    },
    day_order: DayOrder::DayFirst,
};

const UNITED_STATES: RegionProfile = RegionProfile {
    currency_symbol: "$",
    preferred_channel: ActionChannel::Email,
    csv_columns: ColumnMap {
        payee: &["Name"],
        description: "Memo/Description",
        amount: "Amount",
        date: "Date",
        direction: DirectionRule::SignedAmount,
    },
    day_order: DayOrder::MonthFirst,
};

impl Region {
    pub fn code(&self) -> &'static str {
        match self {
            Region::India => "IN",
            Region::UnitedStates => "US",
        }
    }

    pub fn profile(&self) -> &'static RegionProfile {
        match self {
            Region::India => &INDIA,
            Region::UnitedStates => &UNITED_STATES,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IN" => Ok(Region::India),
            "US" => Ok(Region::UnitedStates),
            other => Err(anyhow::anyhow!("unknown region: {other} (expected IN or US)")),
        }
    }
}
