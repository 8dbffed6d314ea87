//! Proposal module - The versioned document model.
//!
//! - `document` - `ProposalDocument` aggregate and its immutable edits
//! - `budget` - Assumptions, scenarios and channels
//! - `sections` - BLUF, ICP, KPIs, tasks, RAID, decisions, milestones
//! - `schema` - Version constant and payload validation
//! - `defaults` - The fallback template

mod budget;
mod defaults;
mod document;
mod schema;
mod sections;

pub use budget::{BudgetAssumptions, BudgetChannel, BudgetScenario};
pub use document::ProposalDocument;
pub use schema::{document_from_value, is_compatible, payload_version, SchemaError, CURRENT_VERSION};
pub use sections::{
    BlufObjectives, Decision, IcpItem, KpiSettings, Milestone, MilestoneStatus, RaidBoard, Task,
    TaskStatus,
};
