//! Default proposal template.
//!
//! Used whenever no valid link or stored snapshot is available. Construction
//! cannot fail. Scenario and decision ids are fixed; ids of channels, ICP
//! rows, tasks and milestones are generated per call.

use chrono::Utc;

use crate::domain::foundation::{EntryId, Percentage, ScenarioId, ValueRange};

use super::{
    BlufObjectives, BudgetAssumptions, BudgetChannel, BudgetScenario, Decision, IcpItem,
    KpiSettings, Milestone, MilestoneStatus, ProposalDocument, RaidBoard, Task, TaskStatus,
    CURRENT_VERSION,
};

impl ProposalDocument {
    /// Builds the template document dated today (UTC).
    pub fn default_document() -> Self {
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        Self::default_document_on(today)
    }

    /// Builds the template document with an explicit date.
    pub fn default_document_on(date: impl Into<String>) -> Self {
        let date = date.into();
        let budget_scenarios = default_scenarios();
        let selected_scenario_id = budget_scenarios
            .get(1)
            .or_else(|| budget_scenarios.first())
            .map(|s| s.id.clone())
            .unwrap_or_else(|| fixed_scenario_id("scenario-a"));

        Self {
            version: CURRENT_VERSION,
            bluf_objectives: BlufObjectives {
                bluf: "Win 2–3 full-roof installs monthly at ≤ $400 CAC\n\
                       Build compounding demand in Fort Bend with social proof"
                    .to_string(),
                objectives: "Stand up Auxilium GTM rhythm in 30 days\n\
                             Hit 40 public reviews within 90 days\n\
                             Validate paid + organic mix to fuel 2025 scale"
                    .to_string(),
                notes: "Primary offer: full-roof replacement with financing CTA. \
                        Add upsell path for gutters & insulation."
                    .to_string(),
            },
            icp_outline: default_icp_outline(),
            budget_assumptions: BudgetAssumptions {
                avg_ticket: 15000.0,
                gross_margin: Percentage::new(35.0),
                close_rate: Percentage::new(20.0),
                target_cpl_min: 200.0,
                target_cpl_max: 250.0,
                target_cac: 400.0,
            },
            budget_scenarios,
            selected_scenario_id,
            kpis: KpiSettings {
                closed_jobs_target: 5.0,
                cpl_target: 250.0,
                cac_target: 400.0,
                reviews_target: 40.0,
                capacity_note: "Current 2-person sales team. Add overflow plan if closed jobs \
                                exceed 5 per month or stagger spend."
                    .to_string(),
                sales_team_size: 2.0,
            },
            tasks: default_tasks(),
            raid: RaidBoard {
                risks: strings(&[
                    "Lead over-influx vs 2-person team",
                    "Budget burn before CAC known",
                    "Duplicate review wording flagged",
                ]),
                assumptions: strings(&["4–5 jobs/mo manageable", "90-day ROI test"]),
                issues: Vec::new(),
                dependencies: strings(&["Ops data from client"]),
            },
            decisions: vec![Decision {
                id: fixed_entry_id("D001"),
                summary: "Proceed with phased discovery".to_string(),
                decider: "Sean".to_string(),
                date: date.clone(),
            }],
            milestones: vec![
                Milestone::new("Discovery Complete", date.clone(), MilestoneStatus::InProgress),
                Milestone::new("Proposal Delivered", date.clone(), MilestoneStatus::NotStarted),
                Milestone::new("Mailer 1–3", date.clone(), MilestoneStatus::NotStarted),
                Milestone::new("Pilot Live", date.clone(), MilestoneStatus::NotStarted),
                Milestone::new("Channel CAC Report", date.clone(), MilestoneStatus::NotStarted),
            ],
            date,
        }
    }
}

fn default_scenarios() -> Vec<BudgetScenario> {
    vec![
        BudgetScenario {
            id: fixed_scenario_id("scenario-a"),
            name: "Scenario A — $2k/mo".to_string(),
            headline: "Entry point to validate channels".to_string(),
            description: "Lean budget to test LSA, Nextdoor, and compounding SEO content."
                .to_string(),
            base_lead_range: ValueRange::new(8.0, 12.0),
            base_budget: 2000.0,
            channels: vec![
                BudgetChannel::new("LSA", 1000.0, 0.0, 5000.0),
                BudgetChannel::new("Nextdoor", 500.0, 0.0, 4000.0),
                BudgetChannel::new("SEO / Content", 500.0, 0.0, 4000.0),
            ],
        },
        BudgetScenario {
            id: fixed_scenario_id("scenario-b"),
            name: "Scenario B — $5k/mo".to_string(),
            headline: "Aggressive omni-channel mix".to_string(),
            description: "Adds PPC scale and EDDM to accelerate lead flow.".to_string(),
            base_lead_range: ValueRange::new(20.0, 25.0),
            base_budget: 5000.0,
            channels: vec![
                BudgetChannel::new("LSA", 2000.0, 0.0, 8000.0),
                BudgetChannel::new("PPC", 1500.0, 0.0, 8000.0),
                BudgetChannel::new("Nextdoor", 500.0, 0.0, 4000.0),
                BudgetChannel::new("EDDM", 1000.0, 0.0, 6000.0),
            ],
        },
        BudgetScenario {
            id: fixed_scenario_id("scenario-c"),
            name: "Scenario C — $8k/mo".to_string(),
            headline: "Full-funnel acceleration".to_string(),
            description:
                "Adds paid social to saturate the market while direct mail sustains recall."
                    .to_string(),
            base_lead_range: ValueRange::new(35.0, 45.0),
            base_budget: 8000.0,
            channels: vec![
                BudgetChannel::new("LSA", 3000.0, 0.0, 10000.0),
                BudgetChannel::new("PPC", 2500.0, 0.0, 10000.0),
                BudgetChannel::new("Nextdoor", 1000.0, 0.0, 5000.0),
                BudgetChannel::new("Paid Social", 1000.0, 0.0, 5000.0),
                BudgetChannel::new("EDDM", 500.0, 0.0, 5000.0),
            ],
        },
    ]
}

fn default_icp_outline() -> Vec<IcpItem> {
    vec![
        IcpItem::new("Demographics", "Homeowners 35–65, HHI $100k+, long-term residents"),
        IcpItem::new(
            "Geos",
            "Sugar Land, Sienna, Missouri City; ZIPs 77479, 77459, 77478, 77498",
        ),
        IcpItem::new("Property", "1995–2010 builds; 2.5–4k sq ft; asphalt shingles"),
        IcpItem::new(
            "Triggers",
            "Aging roof, storm exposure, premium hikes/denials, resale prep",
        ),
        IcpItem::new("Financial", "Retail/cash friendly; open to financing"),
        IcpItem::new(
            "Behavior",
            "Google/Nextdoor heavy; needs 30+ 5⭐ reviews; education-led content",
        ),
        IcpItem::new("Exclusions", "Renters, repair-only, out-of-area (>30 min)"),
    ]
}

fn default_tasks() -> Vec<Task> {
    vec![
        Task::new(
            "Imran (Strategy)",
            "Phase 0 recap + ICP; Budget model; EDDM scope",
            TaskStatus::OnTrack,
        ),
        Task::new(
            "Shabir (Sales)",
            "Competitor scan (3–5 local roofers)",
            TaskStatus::OnTrack,
        ),
        Task::new(
            "Ammar (Content)",
            "10 post ideas, 3 blog angles, TikTok/IG reel concepts; quick reel “3 signs you need a new roof”",
            TaskStatus::AtRisk,
        ),
        Task::new(
            "Sean & Zach (Client)",
            "Avg ticket, margin targets, close rate, CRM status; approve budget tier & primary offer; review contact fuel",
            TaskStatus::ClientNeeded,
        ),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// Seed ids are non-empty literals; the fallbacks exist only to keep
// construction infallible.
fn fixed_scenario_id(id: &str) -> ScenarioId {
    ScenarioId::new(id).unwrap_or_else(|_| ScenarioId::generate())
}

fn fixed_entry_id(id: &str) -> EntryId {
    EntryId::new(id).unwrap_or_else(|_| EntryId::generate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::proposal::is_compatible;

    #[test]
    fn default_document_is_stamped_with_current_version() {
        let doc = ProposalDocument::default_document();
        assert_eq!(doc.version, CURRENT_VERSION);
        assert!(is_compatible(&doc));
    }

    #[test]
    fn default_document_dates_today() {
        let doc = ProposalDocument::default_document();
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        // Allow for a midnight rollover between the two calls.
        assert_eq!(doc.date.len(), today.len());
        assert_eq!(doc.decisions[0].date, doc.date);
    }

    #[test]
    fn default_document_selects_scenario_b() {
        let doc = ProposalDocument::default_document_on("2025-01-15");
        assert_eq!(doc.selected_scenario_id.as_str(), "scenario-b");
        assert!(doc.selected_scenario().is_some());
    }

    #[test]
    fn default_scenarios_match_their_calibration_budget() {
        let doc = ProposalDocument::default_document_on("2025-01-15");
        let totals: Vec<f64> = doc.budget_scenarios.iter().map(|s| s.total_budget()).collect();
        assert_eq!(totals, vec![2000.0, 5000.0, 8000.0]);
        for scenario in &doc.budget_scenarios {
            assert_eq!(scenario.total_budget(), scenario.base_budget);
        }
    }

    #[test]
    fn default_seed_sections_are_populated() {
        let doc = ProposalDocument::default_document_on("2025-01-15");
        assert_eq!(doc.icp_outline.len(), 7);
        assert_eq!(doc.tasks.len(), 4);
        assert_eq!(doc.raid.risks.len(), 3);
        assert!(doc.raid.issues.is_empty());
        assert_eq!(doc.decisions[0].id.as_str(), "D001");
        assert_eq!(doc.milestones.len(), 5);
        assert!(doc
            .milestones
            .iter()
            .all(|m| m.target_date == "2025-01-15"));
    }

    #[test]
    fn fixed_content_is_deterministic_apart_from_generated_ids() {
        let a = ProposalDocument::default_document_on("2025-01-15");
        let b = ProposalDocument::default_document_on("2025-01-15");
        assert_eq!(a.bluf_objectives, b.bluf_objectives);
        assert_eq!(a.budget_assumptions, b.budget_assumptions);
        assert_eq!(a.kpis, b.kpis);
        assert_eq!(a.raid, b.raid);
        assert_ne!(a.budget_scenarios[0].channels[0].id, b.budget_scenarios[0].channels[0].id);
    }

    #[test]
    fn bluf_keeps_one_bullet_per_line() {
        let doc = ProposalDocument::default_document_on("2025-01-15");
        let lines: Vec<&str> = doc.bluf_objectives.bluf.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("Build compounding demand"));
    }
}
