//! ProposalDocument aggregate - the single versioned proposal state.
//!
//! The document is never mutated in place once it is shared. Every edit
//! method borrows the current snapshot and returns a replacement, so readers
//! holding the previous snapshot never observe a partial update.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{compute_metrics, CapacityCheck, ScenarioMetrics};
use crate::domain::foundation::{ChannelId, DomainError, ErrorCode, Percentage, ScenarioId};

use super::{
    BlufObjectives, BudgetAssumptions, BudgetScenario, Decision, IcpItem, KpiSettings, Milestone,
    RaidBoard, Task,
};

/// The whole editable proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalDocument {
    /// Schema tag; see [`super::CURRENT_VERSION`].
    pub version: u32,
    /// Proposal date, `YYYY-MM-DD`.
    pub date: String,
    pub bluf_objectives: BlufObjectives,
    pub icp_outline: Vec<IcpItem>,
    pub budget_assumptions: BudgetAssumptions,
    pub budget_scenarios: Vec<BudgetScenario>,
    /// Non-owning reference into `budget_scenarios`; may dangle.
    pub selected_scenario_id: ScenarioId,
    pub kpis: KpiSettings,
    pub tasks: Vec<Task>,
    pub raid: RaidBoard,
    pub decisions: Vec<Decision>,
    pub milestones: Vec<Milestone>,
}

impl ProposalDocument {
    // ════════════════════════════════════════════════════════════════════════
    // Queries
    // ════════════════════════════════════════════════════════════════════════

    /// Finds a scenario by id.
    pub fn scenario(&self, id: &ScenarioId) -> Option<&BudgetScenario> {
        self.budget_scenarios.iter().find(|s| &s.id == id)
    }

    /// The selected scenario, or `None` when the selection dangles.
    pub fn selected_scenario(&self) -> Option<&BudgetScenario> {
        self.scenario(&self.selected_scenario_id)
    }

    /// Metrics for the selected scenario; `None` means no active scenario.
    pub fn active_metrics(&self) -> Option<ScenarioMetrics> {
        self.selected_scenario()
            .map(|scenario| compute_metrics(scenario, &self.budget_assumptions))
    }

    /// Capacity check for the selected scenario against the KPI target.
    pub fn capacity_check(&self) -> Option<CapacityCheck> {
        self.active_metrics()
            .map(|metrics| CapacityCheck::evaluate(&metrics, &self.kpis))
    }

    // ════════════════════════════════════════════════════════════════════════
    // Immutable edits
    // ════════════════════════════════════════════════════════════════════════

    pub fn with_date(&self, date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..self.clone()
        }
    }

    pub fn with_bluf_objectives(&self, bluf_objectives: BlufObjectives) -> Self {
        Self {
            bluf_objectives,
            ..self.clone()
        }
    }

    pub fn with_icp_outline(&self, icp_outline: Vec<IcpItem>) -> Self {
        Self {
            icp_outline,
            ..self.clone()
        }
    }

    pub fn with_budget_assumptions(&self, budget_assumptions: BudgetAssumptions) -> Self {
        Self {
            budget_assumptions,
            ..self.clone()
        }
    }

    pub fn with_kpis(&self, kpis: KpiSettings) -> Self {
        Self {
            kpis,
            ..self.clone()
        }
    }

    pub fn with_tasks(&self, tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..self.clone()
        }
    }

    pub fn with_raid(&self, raid: RaidBoard) -> Self {
        Self {
            raid,
            ..self.clone()
        }
    }

    pub fn with_decisions(&self, decisions: Vec<Decision>) -> Self {
        Self {
            decisions,
            ..self.clone()
        }
    }

    pub fn with_milestones(&self, milestones: Vec<Milestone>) -> Self {
        Self {
            milestones,
            ..self.clone()
        }
    }

    /// Points the selection at `id`. The id is not required to exist.
    pub fn select_scenario(&self, id: ScenarioId) -> Self {
        Self {
            selected_scenario_id: id,
            ..self.clone()
        }
    }

    /// Replaces the scenario with the same id.
    ///
    /// # Errors
    ///
    /// - `ScenarioNotFound` if no scenario has that id
    pub fn replace_scenario(&self, scenario: BudgetScenario) -> Result<Self, DomainError> {
        if self.scenario(&scenario.id).is_none() {
            return Err(scenario_not_found(&scenario.id));
        }

        let budget_scenarios = self
            .budget_scenarios
            .iter()
            .map(|existing| {
                if existing.id == scenario.id {
                    scenario.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();

        Ok(Self {
            budget_scenarios,
            ..self.clone()
        })
    }

    /// Appends a scenario created by the user.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a scenario with the same id already exists
    pub fn add_scenario(&self, scenario: BudgetScenario) -> Result<Self, DomainError> {
        if self.scenario(&scenario.id).is_some() {
            return Err(DomainError::validation("scenario_id", "Scenario id already in use")
                .with_detail("scenario_id", scenario.id.as_str()));
        }

        let mut budget_scenarios = self.budget_scenarios.clone();
        budget_scenarios.push(scenario);
        Ok(Self {
            budget_scenarios,
            ..self.clone()
        })
    }

    /// Removes a scenario. The selection is left untouched and may dangle.
    pub fn remove_scenario(&self, id: &ScenarioId) -> Self {
        Self {
            budget_scenarios: self
                .budget_scenarios
                .iter()
                .filter(|s| &s.id != id)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    /// Sets the close rate (0-100).
    ///
    /// # Errors
    ///
    /// `OutOfRange` if the rate is not a finite value in `[0, 100]`.
    pub fn set_close_rate(&self, rate: f64) -> Result<Self, DomainError> {
        let close_rate = Percentage::try_new(rate)?;
        Ok(self.with_budget_assumptions(BudgetAssumptions {
            close_rate,
            ..self.budget_assumptions.clone()
        }))
    }

    /// Sets the gross margin (0-100).
    ///
    /// # Errors
    ///
    /// `OutOfRange` if the margin is not a finite value in `[0, 100]`.
    pub fn set_gross_margin(&self, margin: f64) -> Result<Self, DomainError> {
        let gross_margin = Percentage::try_new(margin)?;
        Ok(self.with_budget_assumptions(BudgetAssumptions {
            gross_margin,
            ..self.budget_assumptions.clone()
        }))
    }

    /// Sets one channel's spend, enforcing the channel's `[min, max]` bounds.
    ///
    /// # Errors
    ///
    /// - `ScenarioNotFound` / `ChannelNotFound` for unknown ids
    /// - `OutOfRange` if the amount falls outside the channel bounds
    pub fn set_channel_amount(
        &self,
        scenario_id: &ScenarioId,
        channel_id: &ChannelId,
        amount: f64,
    ) -> Result<Self, DomainError> {
        let scenario = self
            .scenario(scenario_id)
            .ok_or_else(|| scenario_not_found(scenario_id))?;

        let channel = scenario.channel(channel_id).ok_or_else(|| {
            DomainError::new(ErrorCode::ChannelNotFound, "Channel not found")
                .with_detail("scenario_id", scenario_id.as_str())
                .with_detail("channel_id", channel_id.as_str())
        })?;
        let updated_channel = channel.with_amount(amount)?;

        let updated = BudgetScenario {
            channels: scenario
                .channels
                .iter()
                .map(|c| {
                    if &c.id == channel_id {
                        updated_channel.clone()
                    } else {
                        c.clone()
                    }
                })
                .collect(),
            ..scenario.clone()
        };

        self.replace_scenario(updated)
    }
}

fn scenario_not_found(id: &ScenarioId) -> DomainError {
    DomainError::new(ErrorCode::ScenarioNotFound, "Scenario not found")
        .with_detail("scenario_id", id.as_str())
}
