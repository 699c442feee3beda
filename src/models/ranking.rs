//! Ranking output models.
//!
//! This module contains [`RankedEntry`], one row of a period's usage table,
//! [`PeriodRanking`], the full table handed to renderers, and
//! [`DifferentialDisplay`], the per-period choice of whether the gap to the
//! leader is surfaced.

use serde::{Deserialize, Serialize};

use super::Period;

/// Whether leader-relative differentials are surfaced for a period.
///
/// # Example
///
/// ```
/// use fonici_stats::models::DifferentialDisplay;
///
/// assert_eq!(DifferentialDisplay::from(true), DifferentialDisplay::Shown);
/// assert!(!DifferentialDisplay::Hidden.is_shown());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferentialDisplay {
    /// Differentials are included for every entry below the leader.
    Shown,
    /// Differentials are stripped from the output.
    #[default]
    Hidden,
}

impl DifferentialDisplay {
    /// Returns true if differentials should be surfaced.
    pub fn is_shown(&self) -> bool {
        matches!(self, DifferentialDisplay::Shown)
    }
}

impl From<bool> for DifferentialDisplay {
    fn from(include: bool) -> Self {
        if include {
            DifferentialDisplay::Shown
        } else {
            DifferentialDisplay::Hidden
        }
    }
}

/// One row of a ranked usage table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based position in the table.
    pub rank: u32,
    /// The engineer's display name.
    pub engineer_name: String,
    /// Shifts covered in the period.
    pub shift_count: i64,
    /// Shifts behind the leader. Absent for the leader and when hidden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub differential_from_leader: Option<i64>,
}

impl RankedEntry {
    /// Returns true if this entry is the period leader.
    pub fn is_leader(&self) -> bool {
        self.rank == 1
    }
}

/// The ranked usage table for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRanking {
    /// The period the table covers, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    /// The display title for the table.
    pub title: String,
    /// Whether differentials were kept in `entries`.
    pub differential_display: DifferentialDisplay,
    /// Entries in rank order.
    pub entries: Vec<RankedEntry>,
}

impl PeriodRanking {
    /// Returns the leader, if the period has any engineers.
    pub fn leader(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }
}
