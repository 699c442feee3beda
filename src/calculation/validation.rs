//! Input validation for shift count lists.
//!
//! Every engine operation validates its input with [`validate_shift_counts`]
//! before computing anything. The engine never silently corrects data.

use std::collections::HashSet;

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftCount;

/// Checks that a period's shift counts are well-formed.
///
/// # Returns
///
/// Returns `Ok(())` for an empty list or a list where every entry is valid,
/// or `InvalidInput` on the first entry that:
/// - has a blank engineer name
/// - has a negative shift count
/// - repeats an engineer name already seen in the list
///
/// # Examples
///
/// ```
/// use fonici_stats::calculation::validate_shift_counts;
/// use fonici_stats::models::ShiftCount;
///
/// let entries = vec![ShiftCount::new("A", 3), ShiftCount::new("A", 4)];
/// assert!(validate_shift_counts(&entries).is_err());
/// ```
pub fn validate_shift_counts(entries: &[ShiftCount]) -> EngineResult<()> {
    let mut seen = HashSet::with_capacity(entries.len());

    for entry in entries {
        if entry.engineer_name.trim().is_empty() {
            return Err(EngineError::InvalidInput {
                engineer: entry.engineer_name.clone(),
                message: "engineer name must not be blank".to_string(),
            });
        }

        if entry.shift_count < 0 {
            return Err(EngineError::InvalidInput {
                engineer: entry.engineer_name.clone(),
                message: format!("negative shift count {}", entry.shift_count),
            });
        }

        if !seen.insert(entry.engineer_name.as_str()) {
            return Err(EngineError::InvalidInput {
                engineer: entry.engineer_name.clone(),
                message: "duplicate engineer name within period".to_string(),
            });
        }
    }

    Ok(())
}
