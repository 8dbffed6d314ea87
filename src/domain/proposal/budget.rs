//! Budget vocabulary: global assumptions, scenarios and spend channels.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChannelId, Percentage, ScenarioId, ValidationError, ValueRange};

/// Global economics shared by every scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAssumptions {
    /// Average revenue per closed job, in dollars.
    pub avg_ticket: f64,
    pub gross_margin: Percentage,
    pub close_rate: Percentage,
    #[serde(rename = "targetCPLMin")]
    pub target_cpl_min: f64,
    #[serde(rename = "targetCPLMax")]
    pub target_cpl_max: f64,
    #[serde(rename = "targetCAC")]
    pub target_cac: f64,
}

/// One spend line item within a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetChannel {
    pub id: ChannelId,
    pub name: String,
    /// Monthly spend in dollars; user-adjustable within `[min, max]`.
    pub amount: f64,
    pub min: f64,
    pub max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl BudgetChannel {
    /// Creates a channel with a freshly generated id.
    pub fn new(name: impl Into<String>, amount: f64, min: f64, max: f64) -> Self {
        Self {
            id: ChannelId::generate(),
            name: name.into(),
            amount,
            min,
            max,
            step: None,
        }
    }

    /// Returns a copy with the amount replaced, rejecting values outside `[min, max]`.
    pub fn with_amount(&self, amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() || amount < self.min || amount > self.max {
            return Err(ValidationError::out_of_range(
                "amount", self.min, self.max, amount,
            ));
        }
        Ok(Self {
            amount,
            ..self.clone()
        })
    }
}

/// A named budget allocation plan with its calibration point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetScenario {
    pub id: ScenarioId,
    pub name: String,
    pub headline: String,
    pub description: String,
    pub channels: Vec<BudgetChannel>,
    /// Expected leads at `base_budget` dollars.
    pub base_lead_range: ValueRange,
    /// Calibration spend. Independent of the channel amounts.
    pub base_budget: f64,
}

impl BudgetScenario {
    /// Sum of all channel amounts.
    pub fn total_budget(&self) -> f64 {
        self.channels.iter().map(|c| c.amount).sum()
    }

    /// Finds a channel by id.
    pub fn channel(&self, id: &ChannelId) -> Option<&BudgetChannel> {
        self.channels.iter().find(|c| &c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> BudgetScenario {
        BudgetScenario {
            id: ScenarioId::new("scenario-a").unwrap(),
            name: "Scenario A".to_string(),
            headline: "Entry point".to_string(),
            description: "Lean budget".to_string(),
            channels: vec![
                BudgetChannel::new("LSA", 1000.0, 0.0, 5000.0),
                BudgetChannel::new("Nextdoor", 500.0, 0.0, 4000.0),
            ],
            base_lead_range: ValueRange::new(8.0, 12.0),
            base_budget: 2000.0,
        }
    }

    #[test]
    fn total_budget_sums_channels_not_base_budget() {
        assert_eq!(scenario().total_budget(), 1500.0);
    }

    #[test]
    fn total_budget_of_empty_scenario_is_zero() {
        let mut s = scenario();
        s.channels.clear();
        assert_eq!(s.total_budget(), 0.0);
    }

    #[test]
    fn with_amount_accepts_bounds() {
        let channel = BudgetChannel::new("LSA", 1000.0, 0.0, 5000.0);
        assert_eq!(channel.with_amount(5000.0).unwrap().amount, 5000.0);
        assert_eq!(channel.with_amount(0.0).unwrap().amount, 0.0);
        assert_eq!(channel.amount, 1000.0);
    }

    #[test]
    fn with_amount_rejects_out_of_bounds() {
        let channel = BudgetChannel::new("LSA", 1000.0, 0.0, 5000.0);
        assert!(matches!(
            channel.with_amount(5000.5),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(channel.with_amount(f64::NAN).is_err());
    }

    #[test]
    fn assumptions_use_original_wire_names() {
        let assumptions = BudgetAssumptions {
            avg_ticket: 15000.0,
            gross_margin: Percentage::new(35.0),
            close_rate: Percentage::new(20.0),
            target_cpl_min: 200.0,
            target_cpl_max: 250.0,
            target_cac: 400.0,
        };
        let json = serde_json::to_value(&assumptions).unwrap();
        assert_eq!(json["avgTicket"], 15000.0);
        assert_eq!(json["targetCPLMin"], 200.0);
        assert_eq!(json["targetCPLMax"], 250.0);
        assert_eq!(json["targetCAC"], 400.0);
        assert_eq!(json["closeRate"], 20.0);
    }

    #[test]
    fn channel_step_is_omitted_when_absent() {
        let channel = BudgetChannel::new("PPC", 1500.0, 0.0, 8000.0);
        let json = serde_json::to_value(&channel).unwrap();
        assert!(json.get("step").is_none());

        let stepped = BudgetChannel {
            step: Some(100.0),
            ..channel
        };
        let json = serde_json::to_value(&stepped).unwrap();
        assert_eq!(json["step"], 100.0);
    }
}
