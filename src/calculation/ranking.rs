//! Period ranking functionality.
//!
//! This module turns a period's shift counts into a ranked usage table,
//! ordered by shift count with the gap to the leader for every entry below
//! rank 1.

use tracing::debug;

use crate::config::PeriodView;
use crate::error::EngineResult;
use crate::models::{AuditStep, PeriodRanking, RankedEntry, ShiftCount};

use super::differential::apply_differential_display;
use super::validation::validate_shift_counts;

/// Ranks engineers by shift count, highest first.
///
/// Equal counts keep their input order. The leader has no differential;
/// every other entry carries `leader.shift_count - entry.shift_count`.
///
/// # Returns
///
/// Returns one `RankedEntry` per input entry with ranks `1..=n`, or
/// `InvalidInput` if any count is negative or a name is blank or repeated.
///
/// # Examples
///
/// ```
/// use fonici_stats::calculation::rank;
/// use fonici_stats::models::ShiftCount;
///
/// let ranked = rank(&[
///     ShiftCount::new("A", 10),
///     ShiftCount::new("B", 10),
///     ShiftCount::new("C", 5),
/// ]).unwrap();
///
/// assert_eq!(ranked[0].engineer_name, "A");
/// assert_eq!(ranked[0].differential_from_leader, None);
/// assert_eq!(ranked[1].differential_from_leader, Some(0));
/// assert_eq!(ranked[2].differential_from_leader, Some(5));
/// ```
pub fn rank(entries: &[ShiftCount]) -> EngineResult<Vec<RankedEntry>> {
    validate_shift_counts(entries)?;

    let mut sorted: Vec<&ShiftCount> = entries.iter().collect();
    // sort_by is stable: ties keep input order
    sorted.sort_by(|a, b| b.shift_count.cmp(&a.shift_count));

    let leader_count = sorted.first().map_or(0, |e| e.shift_count);

    let ranked: Vec<RankedEntry> = sorted
        .into_iter()
        .enumerate()
        .map(|(index, entry)| RankedEntry {
            rank: (index + 1) as u32,
            engineer_name: entry.engineer_name.clone(),
            shift_count: entry.shift_count,
            differential_from_leader: (index > 0).then(|| leader_count - entry.shift_count),
        })
        .collect();

    debug!(
        entries = ranked.len(),
        leader_count = leader_count,
        "Ranked shift counts"
    );

    Ok(ranked)
}

/// The result of ranking one configured period, including the table and audit step.
#[derive(Debug, Clone)]
pub struct RankPeriodResult {
    /// The ranked table with the period's display policy applied.
    pub ranking: PeriodRanking,
    /// The audit step recording this ranking.
    pub audit_step: AuditStep,
}

/// Ranks one period and applies its configured differential display.
///
/// # Arguments
///
/// * `view` - The period's configured title and differential display
/// * `entries` - The period's shift counts
/// * `step_number` - The step number for audit trail sequencing
pub fn rank_period(
    view: &PeriodView,
    entries: &[ShiftCount],
    step_number: u32,
) -> EngineResult<RankPeriodResult> {
    let ranked = rank(entries)?;
    let entries_out = apply_differential_display(ranked, view.differential);

    let leader = entries_out.first();
    let last_differential = entries_out.last().and_then(|e| e.differential_from_leader);

    let audit_step = AuditStep {
        step_number,
        rule_id: "period_ranking".to_string(),
        rule_name: "Period Usage Ranking".to_string(),
        input: serde_json::json!({
            "period": view.period.as_str(),
            "engineers": entries.len(),
            "differential": view.differential,
        }),
        output: serde_json::json!({
            "leader": leader.map(|e| e.engineer_name.as_str()),
            "leader_shift_count": leader.map(|e| e.shift_count),
            "max_differential": last_differential,
        }),
        reasoning: match leader {
            Some(leader) => format!(
                "Ranked {} engineers for {} by shift count; leader {} with {} shifts ({})",
                entries_out.len(),
                view.period,
                leader.engineer_name,
                leader.shift_count,
                if view.differential.is_shown() {
                    "differentials shown"
                } else {
                    "differentials hidden"
                }
            ),
            None => format!("No engineers recorded for {}", view.period),
        },
    };

    Ok(RankPeriodResult {
        ranking: PeriodRanking {
            period: Some(view.period),
            title: view.title.clone(),
            differential_display: view.differential,
            entries: entries_out,
        },
        audit_step,
    })
}
