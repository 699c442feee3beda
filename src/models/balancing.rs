//! Balancing output models.
//!
//! This module contains [`BalancingSuggestion`], the per-engineer target
//! produced by the balancing engine, and [`BalancingPlan`], the suggestions
//! for a whole period together with the totals they were derived from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Period;

/// The direction a suggestion moves an engineer's workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The engineer should take more shifts.
    Increase,
    /// The engineer should give shifts away.
    Decrease,
    /// The engineer is already at the target.
    Unchanged,
}

/// A recommended shift target for one engineer.
///
/// `delta` always equals `suggested_shift_count - current_shift_count`.
///
/// # Example
///
/// ```
/// use fonici_stats::models::{BalancingSuggestion, Direction};
///
/// let suggestion = BalancingSuggestion {
///     engineer_name: "Marco".to_string(),
///     current_shift_count: 30,
///     suggested_shift_count: 20,
///     delta: -10,
/// };
/// assert_eq!(suggestion.direction(), Direction::Decrease);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancingSuggestion {
    /// The engineer's display name.
    pub engineer_name: String,
    /// Shifts covered in the reference period.
    pub current_shift_count: i64,
    /// Recommended shifts for the same period.
    pub suggested_shift_count: i64,
    /// Change needed to reach the suggestion.
    pub delta: i64,
}

impl BalancingSuggestion {
    /// Returns the direction of the suggested change.
    pub fn direction(&self) -> Direction {
        match self.delta {
            d if d > 0 => Direction::Increase,
            d if d < 0 => Direction::Decrease,
            _ => Direction::Unchanged,
        }
    }
}

/// Balancing suggestions for a period, with the figures they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancingPlan {
    /// The reference period, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    /// Number of engineers in the reference period.
    pub engineer_count: usize,
    /// Sum of all shifts in the reference period.
    pub total_shifts: i64,
    /// The exact per-engineer mean, before rounding.
    pub ideal_mean: Decimal,
    /// Suggestions ordered by absolute delta, largest first.
    pub suggestions: Vec<BalancingSuggestion>,
}

impl BalancingPlan {
    /// Sum of all suggested shift counts.
    ///
    /// Every suggestion is the mean rounded to a whole shift, so this may
    /// differ from `total_shifts` by up to half a shift per engineer.
    pub fn suggested_total(&self) -> i64 {
        self.suggestions
            .iter()
            .map(|s| s.suggested_shift_count)
            .sum()
    }
}
