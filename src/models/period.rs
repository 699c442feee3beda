//! Period model and the provider snapshot.
//!
//! This module defines the fixed set of rolling periods the statistics
//! are computed over, and [`PeriodSnapshot`], the data the external
//! provider supplies for all of them at once.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ShiftCount;

/// A rolling time window over which shifts are aggregated.
///
/// # Example
///
/// ```
/// use fonici_stats::models::Period;
///
/// assert_eq!(Period::LastYear.as_str(), "last_year");
/// assert_eq!(Period::ALL.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// The last month.
    LastMonth,
    /// The last four months.
    LastQuadrimester,
    /// The last twelve months.
    LastYear,
}

impl Period {
    /// Every period, shortest window first.
    pub const ALL: [Period; 3] = [
        Period::LastMonth,
        Period::LastQuadrimester,
        Period::LastYear,
    ];

    /// Returns the snake_case identifier used in configuration and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::LastMonth => "last_month",
            Period::LastQuadrimester => "last_quadrimester",
            Period::LastYear => "last_year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shift counts for every period, as produced by the period data provider.
///
/// Each list is assumed to be already filtered to its date window and
/// deduplicated by engineer. The engine never mutates a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSnapshot {
    /// Shift counts for the last month.
    #[serde(default)]
    pub last_month: Vec<ShiftCount>,
    /// Shift counts for the last four months.
    #[serde(default)]
    pub last_quadrimester: Vec<ShiftCount>,
    /// Shift counts for the last year.
    #[serde(default)]
    pub last_year: Vec<ShiftCount>,
}

impl PeriodSnapshot {
    /// Returns the shift counts for the given period.
    pub fn entries(&self, period: Period) -> &[ShiftCount] {
        match period {
            Period::LastMonth => &self.last_month,
            Period::LastQuadrimester => &self.last_quadrimester,
            Period::LastYear => &self.last_year,
        }
    }
}
