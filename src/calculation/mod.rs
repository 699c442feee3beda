//! Calculation logic for the workload statistics engine.
//!
//! This module contains the pure engine functions: input validation,
//! ranking by shift count with leader-relative differentials, the
//! differential display policy, balancing toward the period mean, and
//! assembly of the full statistics report.

mod balancing;
mod differential;
mod ranking;
mod statistics;
mod validation;

pub use balancing::{BalancingResult, calculate_balancing, compute_balancing, round_shift_target};
pub use differential::{apply_differential_display, rank_with_display};
pub use ranking::{RankPeriodResult, rank, rank_period};
pub use statistics::{ENGINE_VERSION, build_statistics_report};
pub use validation::validate_shift_counts;
