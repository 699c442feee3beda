//! Request types for the statistics API.
//!
//! This module defines the JSON request structures for the `/rankings` and
//! `/balancing` endpoints. `/statistics` accepts a
//! [`PeriodSnapshot`](crate::models::PeriodSnapshot) directly.

use serde::{Deserialize, Serialize};

use crate::models::{Period, ShiftCount};

/// Request body for the `/rankings` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingRequest {
    /// The period the entries belong to, used for the title and default policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    /// The shift counts to rank.
    pub entries: Vec<ShiftCount>,
    /// Overrides the configured differential display when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_differential: Option<bool>,
}

/// Request body for the `/balancing` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancingRequest {
    /// The period the entries belong to. Defaults to the configured reference period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    /// The shift counts to balance.
    pub entries: Vec<ShiftCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ranking_request() {
        let json = r#"{
            "period": "last_quadrimester",
            "entries": [
                { "name": "Marco", "shift_count": 12 },
                { "name": "Luca", "shift_count": 9 }
            ],
            "include_differential": true
        }"#;

        let request: RankingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.period, Some(Period::LastQuadrimester));
        assert_eq!(request.entries.len(), 2);
        assert_eq!(request.include_differential, Some(true));
    }

    #[test]
    fn test_ranking_request_optional_fields() {
        let json = r#"{ "entries": [] }"#;

        let request: RankingRequest = serde_json::from_str(json).unwrap();
        assert!(request.period.is_none());
        assert!(request.include_differential.is_none());
    }

    #[test]
    fn test_balancing_request_requires_entries() {
        let json = r#"{ "period": "last_year" }"#;
        assert!(serde_json::from_str::<BalancingRequest>(json).is_err());
    }
}
