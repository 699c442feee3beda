//! Core data models for the workload statistics engine.
//!
//! This module contains all the domain models used throughout the engine.

mod balancing;
mod period;
mod ranking;
mod report;
mod shift_count;

pub use balancing::{BalancingPlan, BalancingSuggestion, Direction};
pub use period::{Period, PeriodSnapshot};
pub use ranking::{DifferentialDisplay, PeriodRanking, RankedEntry};
pub use report::{AuditStep, AuditTrace, ChartPoint, ChartSeries, StatisticsReport};
pub use shift_count::ShiftCount;
