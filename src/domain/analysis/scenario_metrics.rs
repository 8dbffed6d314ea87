//! Scenario Metrics Engine - Budget allocation to expected outcome ranges.
//!
//! Extrapolates linearly from a scenario's calibration point
//! (`base_budget`, `base_lead_range`) to the current channel spend. The
//! computation is total: degenerate input (zero calibration budget, zero close
//! rate, empty channel list) produces finite values through explicit guards
//! rather than relying on NaN/infinity propagation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValueRange;
use crate::domain::proposal::{BudgetAssumptions, BudgetScenario};

/// Derived outcome ranges for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioMetrics {
    /// Sum of channel amounts.
    pub total_budget: f64,
    pub leads_range: ValueRange,
    pub closed_range: ValueRange,
    /// Cost per lead. `min` pairs with the high lead estimate.
    pub cpl_range: ValueRange,
    /// Cost per closed customer. `min` pairs with the high closed estimate.
    pub cac_range: ValueRange,
    pub margin_dollars: f64,
}

/// Calculator for scenario metrics.
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Computes the metrics for a scenario under the given assumptions.
    ///
    /// # Edge Cases
    /// - `base_budget == 0`: leads and closed collapse to `[0, 0]`
    /// - Zero leads or closed: CPL/CAC saturate at `total_budget`
    /// - Non-finite spend (a NaN amount, or a sum that overflows): treated as zero
    pub fn compute(scenario: &BudgetScenario, assumptions: &BudgetAssumptions) -> ScenarioMetrics {
        let total_budget = finite_or_zero(scenario.total_budget());

        let leads_range = ValueRange::new(
            finite_or_zero(Self::extrapolate(total_budget, scenario.base_lead_range.min, scenario.base_budget)),
            finite_or_zero(Self::extrapolate(total_budget, scenario.base_lead_range.max, scenario.base_budget)),
        );

        let close_rate = assumptions.close_rate.as_fraction();
        let closed_range = leads_range.map(|leads| finite_or_zero(leads * close_rate));

        // Inverse pairing: the best case (most leads) has the lowest cost.
        let cpl_range = ValueRange::new(
            cost_per(total_budget, leads_range.max),
            cost_per(total_budget, leads_range.min),
        );
        let cac_range = ValueRange::new(
            cost_per(total_budget, closed_range.max),
            cost_per(total_budget, closed_range.min),
        );

        let margin_dollars = finite_or_zero(
            closed_range.midpoint() * assumptions.avg_ticket * assumptions.gross_margin.as_fraction(),
        );

        ScenarioMetrics {
            total_budget,
            leads_range,
            closed_range,
            cpl_range,
            cac_range,
            margin_dollars,
        }
    }

    /// `total * (base_leads / base_budget)`, or zero when the rate is undefined.
    fn extrapolate(total_budget: f64, base_leads: f64, base_budget: f64) -> f64 {
        if base_budget == 0.0 || !base_budget.is_finite() {
            return 0.0;
        }
        total_budget * (base_leads / base_budget)
    }
}

/// Convenience wrapper around [`MetricsCalculator::compute`].
pub fn compute_metrics(scenario: &BudgetScenario, assumptions: &BudgetAssumptions) -> ScenarioMetrics {
    MetricsCalculator::compute(scenario, assumptions)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Spend divided by volume; zero volume means the whole spend.
fn cost_per(total_budget: f64, volume: f64) -> f64 {
    if volume > 0.0 {
        finite_or_zero(total_budget / volume)
    } else {
        total_budget
    }
}
