//! Statistics report assembly.
//!
//! This module runs the whole engine over a provider snapshot: one ranking
//! per configured period, followed by the balancing plan for the reference
//! period.

use std::time::Instant;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::config::StatisticsConfig;
use crate::error::EngineResult;
use crate::models::{AuditTrace, ChartSeries, PeriodSnapshot, StatisticsReport};

use super::balancing::calculate_balancing;
use super::ranking::rank_period;

/// The version string recorded on every report.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds the full statistics report for a snapshot.
///
/// Periods are ranked in configuration order, each with its configured
/// differential display, then the reference period is balanced. The
/// snapshot is only read.
///
/// # Returns
///
/// Returns the report, or an error if:
/// - any ranked period contains invalid entries (`InvalidInput`)
/// - the reference period is empty (`EmptyInput`)
///
/// # Examples
///
/// ```
/// use fonici_stats::calculation::build_statistics_report;
/// use fonici_stats::config::StatisticsConfig;
/// use fonici_stats::models::{Period, PeriodSnapshot, ShiftCount};
///
/// let snapshot = PeriodSnapshot {
///     last_month: vec![ShiftCount::new("A", 3), ShiftCount::new("B", 5)],
///     last_quadrimester: vec![ShiftCount::new("A", 12), ShiftCount::new("B", 15)],
///     last_year: vec![ShiftCount::new("A", 40), ShiftCount::new("B", 44)],
/// };
///
/// let report = build_statistics_report(&snapshot, &StatisticsConfig::default()).unwrap();
/// assert_eq!(report.rankings.len(), 3);
/// assert_eq!(report.ranking(Period::LastYear).unwrap().entries[0].engineer_name, "B");
/// assert_eq!(report.balancing.suggestions[0].suggested_shift_count, 42);
/// ```
pub fn build_statistics_report(
    snapshot: &PeriodSnapshot,
    config: &StatisticsConfig,
) -> EngineResult<StatisticsReport> {
    let start_time = Instant::now();
    let mut steps = Vec::new();
    let mut step_number: u32 = 1;

    let dashboard = config.dashboard();
    let mut rankings = Vec::with_capacity(dashboard.periods.len());
    let mut chart_series = Vec::with_capacity(dashboard.periods.len());

    for view in &dashboard.periods {
        let result = rank_period(view, snapshot.entries(view.period), step_number)?;
        steps.push(result.audit_step);
        step_number += 1;

        chart_series.push(ChartSeries::from_ranking(
            view.period,
            view.chart_title(),
            &result.ranking,
        ));
        rankings.push(result.ranking);
    }

    let balancing_config = config.balancing();
    let reference_period = balancing_config.reference_period;
    let balancing = calculate_balancing(
        Some(reference_period),
        snapshot.entries(reference_period),
        step_number,
    )?;
    steps.push(balancing.audit_step);

    let duration = start_time.elapsed();
    debug!(
        periods = rankings.len(),
        reference_period = %reference_period,
        duration_us = duration.as_micros() as u64,
        "Built statistics report"
    );

    Ok(StatisticsReport {
        report_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        title: dashboard.title.clone(),
        rankings,
        chart_series,
        balancing_title: balancing_config.title.clone(),
        balancing: balancing.plan,
        audit_trace: AuditTrace {
            steps,
            duration_us: duration.as_micros() as u64,
        },
    })
}
