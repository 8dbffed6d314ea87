//! Analysis module - Pure domain services over proposal data.
//!
//! - `scenario_metrics` - Budget to leads/closed/CPL/CAC/margin ranges
//! - `capacity` - Projected closed jobs versus the team's KPI target

mod capacity;
mod scenario_metrics;

pub use capacity::CapacityCheck;
pub use scenario_metrics::{compute_metrics, MetricsCalculator, ScenarioMetrics};
