//! Shift count model.
//!
//! This module defines [`ShiftCount`], the unit the period data provider
//! hands to the engine: one engineer and the number of shifts they covered
//! in a period.

use serde::{Deserialize, Serialize};

/// The number of shifts one engineer covered in a period.
///
/// Counts are signed so that malformed provider data can be represented and
/// rejected by validation instead of failing at deserialization time.
///
/// # Examples
///
/// ```
/// use fonici_stats::models::ShiftCount;
///
/// let entry = ShiftCount::new("Marco", 12);
/// assert_eq!(entry.engineer_name, "Marco");
/// assert_eq!(entry.shift_count, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCount {
    /// The engineer's display name, unique within a period.
    #[serde(rename = "name")]
    pub engineer_name: String,
    /// Shifts covered in the period.
    pub shift_count: i64,
}

impl ShiftCount {
    /// Creates a new shift count entry.
    pub fn new(engineer_name: impl Into<String>, shift_count: i64) -> Self {
        Self {
            engineer_name: engineer_name.into(),
            shift_count,
        }
    }
}
