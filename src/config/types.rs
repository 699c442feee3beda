//! Configuration types for the statistics dashboard.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::{DifferentialDisplay, Period};

/// How one period is presented on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PeriodView {
    /// The period this view renders.
    pub period: Period,
    /// The table title.
    pub title: String,
    /// Whether the gap to the leader is surfaced.
    #[serde(default)]
    pub differential: DifferentialDisplay,
    /// The chart title. Falls back to the table title when absent.
    #[serde(default)]
    pub chart_title: Option<String>,
}

impl PeriodView {
    /// Returns the chart title for this period.
    pub fn chart_title(&self) -> &str {
        self.chart_title.as_deref().unwrap_or(&self.title)
    }
}

/// Dashboard configuration file structure (`dashboard.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardConfig {
    /// The dashboard title.
    pub title: String,
    /// The periods to rank, in display order.
    pub periods: Vec<PeriodView>,
}

/// Balancing configuration file structure (`balancing.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BalancingConfig {
    /// The period the balancing plan is computed over.
    #[serde(default = "default_reference_period")]
    pub reference_period: Period,
    /// The balancing table title.
    pub title: String,
}

fn default_reference_period() -> Period {
    Period::LastYear
}

/// The complete statistics configuration.
///
/// # Example
///
/// ```
/// use fonici_stats::config::StatisticsConfig;
/// use fonici_stats::models::{DifferentialDisplay, Period};
///
/// let config = StatisticsConfig::default();
/// assert_eq!(config.differential_display(Period::LastMonth), DifferentialDisplay::Hidden);
/// assert_eq!(config.differential_display(Period::LastYear), DifferentialDisplay::Shown);
/// assert_eq!(config.balancing().reference_period, Period::LastYear);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsConfig {
    dashboard: DashboardConfig,
    balancing: BalancingConfig,
}

impl StatisticsConfig {
    /// Creates a new StatisticsConfig from its component parts.
    pub fn new(dashboard: DashboardConfig, balancing: BalancingConfig) -> Self {
        Self {
            dashboard,
            balancing,
        }
    }

    /// Returns the dashboard configuration.
    pub fn dashboard(&self) -> &DashboardConfig {
        &self.dashboard
    }

    /// Returns the balancing configuration.
    pub fn balancing(&self) -> &BalancingConfig {
        &self.balancing
    }

    /// Returns the configured view for a period, if the dashboard shows it.
    pub fn view(&self, period: Period) -> Option<&PeriodView> {
        self.dashboard.periods.iter().find(|v| v.period == period)
    }

    /// Returns the differential display configured for a period.
    ///
    /// Periods the dashboard does not show default to `Hidden`.
    pub fn differential_display(&self, period: Period) -> DifferentialDisplay {
        self.view(period)
            .map(|v| v.differential)
            .unwrap_or_default()
    }
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        let view = |period, title: &str, chart_title: &str, differential| PeriodView {
            period,
            title: title.to_string(),
            differential,
            chart_title: Some(chart_title.to_string()),
        };

        Self {
            dashboard: DashboardConfig {
                title: "Statistiche Fonici".to_string(),
                periods: vec![
                    view(
                        Period::LastMonth,
                        "Utilizzo Ultimo Mese",
                        "Grafico Ultimo Mese",
                        DifferentialDisplay::Hidden,
                    ),
                    view(
                        Period::LastQuadrimester,
                        "Utilizzo Ultimo Quadrimestre",
                        "Grafico Ultimo Quadrimestre",
                        DifferentialDisplay::Shown,
                    ),
                    view(
                        Period::LastYear,
                        "Utilizzo Ultimo Anno",
                        "Grafico Ultimo Anno",
                        DifferentialDisplay::Shown,
                    ),
                ],
            },
            balancing: BalancingConfig {
                reference_period: Period::LastYear,
                title: "Suggerimenti per Bilanciamento".to_string(),
            },
        }
    }
}
