//! Configuration loading and management for the statistics dashboard.
//!
//! This module provides functionality to load the dashboard layout and
//! balancing settings from YAML files, with built-in defaults for callers
//! that have no configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use fonici_stats::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/fonici").unwrap();
//! println!("Loaded dashboard: {}", config.config().dashboard().title);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BalancingConfig, DashboardConfig, PeriodView, StatisticsConfig};
