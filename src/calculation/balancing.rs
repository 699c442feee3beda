//! Workload balancing functionality.
//!
//! This module computes a redistribution of shifts toward parity: every
//! engineer in the reference period is pointed at the period mean.
//!
//! The mean is kept as an exact [`Decimal`] and rounded once, half to even,
//! to produce the suggested count. The delta is derived from that rounded
//! target, so `suggested_shift_count - current_shift_count == delta` holds
//! for every suggestion. Because each target is rounded on its own, the
//! suggested total can differ from the current total by up to half a shift
//! per engineer.

use std::cmp::Reverse;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, BalancingPlan, BalancingSuggestion, Period, ShiftCount};

use super::validation::validate_shift_counts;

/// Rounds the ideal mean to a whole shift target using banker's rounding.
///
/// # Examples
///
/// ```
/// use fonici_stats::calculation::round_shift_target;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_shift_target(Decimal::from_str("20.5").unwrap()), Decimal::from(20));
/// assert_eq!(round_shift_target(Decimal::from_str("21.5").unwrap()), Decimal::from(22));
/// assert_eq!(round_shift_target(Decimal::from_str("20.6").unwrap()), Decimal::from(21));
/// ```
pub fn round_shift_target(ideal_mean: Decimal) -> Decimal {
    ideal_mean.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

/// Computes balancing suggestions over one period's shift counts.
///
/// # Returns
///
/// Returns one suggestion per engineer, sorted by absolute delta (largest
/// first, ties in input order), or an error if:
/// - the list is empty (`EmptyInput`)
/// - any entry is invalid (`InvalidInput`)
///
/// # Examples
///
/// ```
/// use fonici_stats::calculation::compute_balancing;
/// use fonici_stats::models::ShiftCount;
///
/// let suggestions = compute_balancing(&[
///     ShiftCount::new("A", 10),
///     ShiftCount::new("B", 20),
///     ShiftCount::new("C", 30),
/// ]).unwrap();
///
/// let order: Vec<(&str, i64)> = suggestions
///     .iter()
///     .map(|s| (s.engineer_name.as_str(), s.delta))
///     .collect();
/// assert_eq!(order, vec![("A", 10), ("C", -10), ("B", 0)]);
/// ```
pub fn compute_balancing(entries: &[ShiftCount]) -> EngineResult<Vec<BalancingSuggestion>> {
    Ok(build_plan(None, entries)?.suggestions)
}

/// The result of balancing one period, including the plan and audit step.
#[derive(Debug, Clone)]
pub struct BalancingResult {
    /// The balancing plan with totals and ordered suggestions.
    pub plan: BalancingPlan,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the full balancing plan for a period.
///
/// # Arguments
///
/// * `period` - The reference period, recorded on the plan when known
/// * `entries` - The period's shift counts
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_balancing(
    period: Option<Period>,
    entries: &[ShiftCount],
    step_number: u32,
) -> EngineResult<BalancingResult> {
    let plan = build_plan(period, entries)?;
    let target = round_shift_target(plan.ideal_mean);
    let moved: i64 = plan
        .suggestions
        .iter()
        .filter(|s| s.delta > 0)
        .map(|s| s.delta)
        .sum();

    let audit_step = AuditStep {
        step_number,
        rule_id: "workload_balancing".to_string(),
        rule_name: "Workload Balancing Toward Mean".to_string(),
        input: serde_json::json!({
            "period": period.map(|p| p.as_str()),
            "engineers": plan.engineer_count,
            "total_shifts": plan.total_shifts,
        }),
        output: serde_json::json!({
            "ideal_mean": plan.ideal_mean.normalize().to_string(),
            "suggested_shift_count": target.normalize().to_string(),
            "suggested_total": plan.suggested_total(),
            "shifts_to_add": moved,
        }),
        reasoning: format!(
            "Balanced {} shifts across {} engineers: mean {} rounded half-to-even to {}",
            plan.total_shifts,
            plan.engineer_count,
            plan.ideal_mean.round_dp(2).normalize(),
            target.normalize()
        ),
    };

    Ok(BalancingResult { plan, audit_step })
}

fn build_plan(period: Option<Period>, entries: &[ShiftCount]) -> EngineResult<BalancingPlan> {
    if entries.is_empty() {
        return Err(EngineError::EmptyInput {
            message: "cannot balance a period with no engineers".to_string(),
        });
    }
    validate_shift_counts(entries)?;

    let total_shifts = entries.iter().try_fold(0i64, |acc, e| {
        acc.checked_add(e.shift_count)
            .ok_or_else(|| EngineError::InvalidInput {
                engineer: e.engineer_name.clone(),
                message: "shift total exceeds the supported range".to_string(),
            })
    })?;

    let engineer_count = entries.len();
    let ideal_mean = Decimal::from(total_shifts) / Decimal::from(engineer_count as u64);
    // The mean lies between the smallest and largest count, so it fits in i64
    let suggested = round_shift_target(ideal_mean)
        .to_i64()
        .ok_or_else(|| EngineError::InvalidInput {
            engineer: String::new(),
            message: format!("balancing target {} out of range", ideal_mean),
        })?;

    let mut suggestions: Vec<BalancingSuggestion> = entries
        .iter()
        .map(|e| BalancingSuggestion {
            engineer_name: e.engineer_name.clone(),
            current_shift_count: e.shift_count,
            suggested_shift_count: suggested,
            delta: suggested - e.shift_count,
        })
        .collect();
    // sort_by_key is stable: equal magnitudes keep input order
    suggestions.sort_by_key(|s| Reverse(s.delta.unsigned_abs()));

    debug!(
        engineers = engineer_count,
        total_shifts = total_shifts,
        ideal_mean = %ideal_mean,
        suggested = suggested,
        "Computed balancing plan"
    );

    Ok(BalancingPlan {
        period,
        engineer_count,
        total_shifts,
        ideal_mean,
        suggestions,
    })
}
