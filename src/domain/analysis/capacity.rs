//! Capacity check - compares projected closed jobs against the KPI target.

use crate::domain::proposal::KpiSettings;

use super::ScenarioMetrics;

/// Outcome of comparing a scenario's best case against team capacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityCheck {
    /// Best-case closed jobs for the scenario.
    pub projected_closed_max: f64,
    /// The `closedJobsTarget` KPI.
    pub closed_jobs_target: f64,
}

impl CapacityCheck {
    pub fn evaluate(metrics: &ScenarioMetrics, kpis: &KpiSettings) -> Self {
        Self {
            projected_closed_max: metrics.closed_range.max,
            closed_jobs_target: kpis.closed_jobs_target,
        }
    }

    /// True when the best case would close more jobs than the team targets.
    pub fn is_at_risk(&self) -> bool {
        self.projected_closed_max > self.closed_jobs_target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValueRange;

    fn metrics(closed_max: f64) -> ScenarioMetrics {
        ScenarioMetrics {
            total_budget: 5000.0,
            leads_range: ValueRange::new(20.0, 25.0),
            closed_range: ValueRange::new(4.0, closed_max),
            cpl_range: ValueRange::new(200.0, 250.0),
            cac_range: ValueRange::new(1000.0, 1250.0),
            margin_dollars: 0.0,
        }
    }

    fn kpis(target: f64) -> KpiSettings {
        KpiSettings {
            closed_jobs_target: target,
            cpl_target: 250.0,
            cac_target: 400.0,
            reviews_target: 40.0,
            capacity_note: String::new(),
            sales_team_size: 2.0,
        }
    }

    #[test]
    fn flags_risk_when_best_case_exceeds_target() {
        assert!(CapacityCheck::evaluate(&metrics(5.5), &kpis(5.0)).is_at_risk());
    }

    #[test]
    fn target_equal_to_best_case_is_not_a_risk() {
        assert!(!CapacityCheck::evaluate(&metrics(5.0), &kpis(5.0)).is_at_risk());
    }
}
