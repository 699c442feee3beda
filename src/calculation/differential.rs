//! Differential display policy.
//!
//! Ranking always computes the gap to the leader; whether a caller sees it
//! is decided per call with a [`DifferentialDisplay`], never from a label.

use crate::error::EngineResult;
use crate::models::{DifferentialDisplay, RankedEntry, ShiftCount};

use super::ranking::rank;

/// Applies a differential display policy to ranked entries.
///
/// `Shown` returns the entries untouched. `Hidden` clears every
/// `differential_from_leader` and leaves ranks, names, and counts as they are.
pub fn apply_differential_display(
    mut entries: Vec<RankedEntry>,
    display: DifferentialDisplay,
) -> Vec<RankedEntry> {
    if !display.is_shown() {
        for entry in &mut entries {
            entry.differential_from_leader = None;
        }
    }
    entries
}

/// Ranks entries and applies a differential display policy in one call.
///
/// # Examples
///
/// ```
/// use fonici_stats::calculation::rank_with_display;
/// use fonici_stats::models::{DifferentialDisplay, ShiftCount};
///
/// let entries = vec![ShiftCount::new("A", 9), ShiftCount::new("B", 4)];
///
/// let hidden = rank_with_display(&entries, DifferentialDisplay::Hidden).unwrap();
/// assert_eq!(hidden[1].differential_from_leader, None);
///
/// let shown = rank_with_display(&entries, true.into()).unwrap();
/// assert_eq!(shown[1].differential_from_leader, Some(5));
/// ```
pub fn rank_with_display(
    entries: &[ShiftCount],
    display: DifferentialDisplay,
) -> EngineResult<Vec<RankedEntry>> {
    Ok(apply_differential_display(rank(entries)?, display))
}
