//! Statistics report models.
//!
//! This module contains the [`StatisticsReport`] type and its associated
//! structures that capture everything the statistics screen renders: the
//! ranked tables, chart series, the balancing plan, and an audit trace of
//! how each was produced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BalancingPlan, Period, PeriodRanking};

/// A single step in the audit trace recording an engine decision.
///
/// Each step captures the input, output, and reasoning for one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a report.
///
/// # Example
///
/// ```
/// use fonici_stats::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 1234,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of engine steps.
    pub steps: Vec<AuditStep>,
    /// The total computation duration in microseconds.
    pub duration_us: u64,
}

/// One bar of a period chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// The engineer's display name (category axis).
    pub engineer_name: String,
    /// Shifts covered in the period (value axis).
    pub shift_count: i64,
}

/// The bar chart data for one period, in ranking order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// The period the chart covers.
    pub period: Period,
    /// The display title for the chart.
    pub title: String,
    /// One point per engineer.
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Builds the chart series matching a ranked table.
    pub fn from_ranking(period: Period, title: impl Into<String>, ranking: &PeriodRanking) -> Self {
        Self {
            period,
            title: title.into(),
            points: ranking
                .entries
                .iter()
                .map(|e| ChartPoint {
                    engineer_name: e.engineer_name.clone(),
                    shift_count: e.shift_count,
                })
                .collect(),
        }
    }
}

/// The complete output of one statistics computation.
///
/// Renderers consume this read-only: they must not reorder entries or
/// recompute any numeric field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was computed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that computed the report.
    pub engine_version: String,
    /// The dashboard title.
    pub title: String,
    /// One ranked table per configured period, in configuration order.
    pub rankings: Vec<PeriodRanking>,
    /// One chart series per configured period, in configuration order.
    pub chart_series: Vec<ChartSeries>,
    /// The display title for the balancing table.
    pub balancing_title: String,
    /// Balancing suggestions for the reference period.
    pub balancing: BalancingPlan,
    /// Complete audit trace of engine decisions.
    pub audit_trace: AuditTrace,
}

impl StatisticsReport {
    /// Returns the ranked table for a period, if it was configured.
    pub fn ranking(&self, period: Period) -> Option<&PeriodRanking> {
        self.rankings.iter().find(|r| r.period == Some(period))
    }
}
