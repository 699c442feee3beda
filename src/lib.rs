//! Workload statistics engine for studio sound engineers.
//!
//! This crate ranks engineers by shifts covered over rolling periods (last
//! month, last four months, last year), reports each engineer's gap to the
//! leader, and suggests a redistribution of shifts toward the period mean.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
