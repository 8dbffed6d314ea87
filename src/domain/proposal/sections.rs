//! Narrative and tracking sections of a proposal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::EntryId;

/// Bottom-line-up-front summary with objectives and notes.
///
/// `bluf` and `objectives` hold one bullet per line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlufObjectives {
    pub bluf: String,
    pub objectives: String,
    pub notes: String,
}

/// One row of the ideal-customer-profile outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcpItem {
    pub id: EntryId,
    pub label: String,
    pub details: String,
}

impl IcpItem {
    pub fn new(label: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            id: EntryId::generate(),
            label: label.into(),
            details: details.into(),
        }
    }
}

/// KPI targets and team capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSettings {
    pub closed_jobs_target: f64,
    pub cpl_target: f64,
    pub cac_target: f64,
    pub reviews_target: f64,
    pub capacity_note: String,
    pub sales_team_size: f64,
}

/// Delivery status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "At Risk")]
    AtRisk,
    #[serde(rename = "Client Needed")]
    ClientNeeded,
    Backlog,
}

impl TaskStatus {
    /// Returns the display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::OnTrack => "On Track",
            TaskStatus::AtRisk => "At Risk",
            TaskStatus::ClientNeeded => "Client Needed",
            TaskStatus::Backlog => "Backlog",
        }
    }

    /// Traffic-light marker used in the printable summary.
    pub fn marker(&self) -> &'static str {
        match self {
            TaskStatus::OnTrack => "🟢",
            TaskStatus::AtRisk => "🟡",
            TaskStatus::ClientNeeded => "🟠",
            TaskStatus::Backlog => "⚪",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntryId,
    pub owner: String,
    pub description: String,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(owner: impl Into<String>, description: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id: EntryId::generate(),
            owner: owner.into(),
            description: description.into(),
            status,
        }
    }
}

/// Risks, assumptions, issues and dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RaidBoard {
    pub risks: Vec<String>,
    pub assumptions: Vec<String>,
    pub issues: Vec<String>,
    pub dependencies: Vec<String>,
}

/// Decision log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub id: EntryId,
    pub summary: String,
    pub decider: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MilestoneStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Complete,
}

impl MilestoneStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MilestoneStatus::NotStarted => "Not Started",
            MilestoneStatus::InProgress => "In Progress",
            MilestoneStatus::Complete => "Complete",
        }
    }
}

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: EntryId,
    pub name: String,
    pub target_date: String,
    pub status: MilestoneStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Milestone {
    pub fn new(name: impl Into<String>, target_date: impl Into<String>, status: MilestoneStatus) -> Self {
        Self {
            id: EntryId::generate(),
            name: name.into(),
            target_date: target_date.into(),
            status,
            notes: None,
        }
    }
}
