//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading dashboard
//! and balancing configuration from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{DifferentialDisplay, Period};

use super::types::{BalancingConfig, DashboardConfig, PeriodView, StatisticsConfig};

/// Loads and provides access to statistics configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query per-period views and balancing settings.
///
/// # Directory Structure
///
/// ```text
/// config/fonici/
/// ├── dashboard.yaml   # Title and per-period views
/// └── balancing.yaml   # Reference period for balancing
/// ```
///
/// # Example
///
/// ```no_run
/// use fonici_stats::config::ConfigLoader;
/// use fonici_stats::models::Period;
///
/// let loader = ConfigLoader::load("./config/fonici").unwrap();
///
/// let view = loader.view(Period::LastYear).unwrap();
/// println!("Table title: {}", view.title);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: StatisticsConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/fonici")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The dashboard lists no periods, or lists a period twice
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let dashboard_path = path.join("dashboard.yaml");
        let dashboard = Self::load_yaml::<DashboardConfig>(&dashboard_path)?;
        Self::validate_dashboard(&dashboard, &dashboard_path)?;

        let balancing_path = path.join("balancing.yaml");
        let balancing = Self::load_yaml::<BalancingConfig>(&balancing_path)?;

        Ok(Self {
            config: StatisticsConfig::new(dashboard, balancing),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: StatisticsConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_dashboard(dashboard: &DashboardConfig, path: &Path) -> EngineResult<()> {
        if dashboard.periods.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: "dashboard must list at least one period".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for view in &dashboard.periods {
            if !seen.insert(view.period) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("period '{}' is listed more than once", view.period),
                });
            }
        }

        Ok(())
    }

    /// Returns the underlying statistics configuration.
    pub fn config(&self) -> &StatisticsConfig {
        &self.config
    }

    /// Gets the configured view for a period.
    ///
    /// Returns `None` if the dashboard does not show the period.
    pub fn view(&self, period: Period) -> Option<&PeriodView> {
        self.config.view(period)
    }

    /// Gets the differential display for a period, `Hidden` if unconfigured.
    pub fn differential_display(&self, period: Period) -> DifferentialDisplay {
        self.config.differential_display(period)
    }

    /// Gets the period balancing is computed over.
    pub fn reference_period(&self) -> Period {
        self.config.balancing().reference_period
    }
}
