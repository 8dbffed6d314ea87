//! Markdown proposal renderer.
//!
//! Produces the printable hand-off copy of a proposal: header, BLUF and
//! objectives, ICP summary, the selected scenario with its metrics and channel
//! table, KPI targets, tasks, RAID, decisions and milestones.

use crate::domain::proposal::{ProposalDocument, RaidBoard};
use crate::ports::{ProposalRenderer, RenderOptions};

use super::format::{format_currency, format_number, format_range};

const NONE_RECORDED: &str = "*None recorded.*";

/// Markdown implementation of [`ProposalRenderer`].
#[derive(Debug, Clone, Default)]
pub struct MarkdownProposalRenderer;

impl MarkdownProposalRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_header(&self, document: &ProposalDocument, options: &RenderOptions) -> String {
        let mut section = format!("# {}\n\n", options.title);
        if !options.subtitle.is_empty() {
            section.push_str(&format!("*{}*\n\n", options.subtitle));
        }
        section.push_str(&format!("**Date:** {}\n\n", document.date));
        section
    }

    fn render_bluf(&self, document: &ProposalDocument, options: &RenderOptions) -> String {
        let mut section = String::new();
        let groups = [
            ("BLUF", bullet_lines(&document.bluf_objectives.bluf)),
            ("Objectives", bullet_lines(&document.bluf_objectives.objectives)),
        ];

        for (heading, items) in groups {
            if items.is_empty() && !options.include_empty_sections {
                continue;
            }
            section.push_str(&format!("## {}\n\n", heading));
            push_bullets(&mut section, &items);
        }
        section
    }

    fn render_icp(&self, document: &ProposalDocument, options: &RenderOptions) -> String {
        if document.icp_outline.is_empty() && !options.include_empty_sections {
            return String::new();
        }

        let mut section = String::from("## ICP Summary\n\n");
        if document.icp_outline.is_empty() {
            section.push_str(NONE_RECORDED);
            section.push_str("\n\n");
        }
        for item in &document.icp_outline {
            section.push_str(&format!("### {}\n\n", item.label));
            if !item.details.trim().is_empty() {
                section.push_str(item.details.trim_end());
                section.push_str("\n\n");
            }
        }
        section
    }

    fn render_scenario(&self, document: &ProposalDocument) -> String {
        let (scenario, metrics) = match (document.selected_scenario(), document.active_metrics()) {
            (Some(scenario), Some(metrics)) => (scenario, metrics),
            _ => return String::from("## Selected Budget Scenario\n\n*No scenario selected.*\n\n"),
        };

        let mut section = format!("## Selected Budget Scenario: {}\n\n", scenario.name);
        if !scenario.headline.is_empty() {
            section.push_str(&format!("**{}**\n\n", scenario.headline));
        }
        if !scenario.description.is_empty() {
            section.push_str(&format!("{}\n\n", scenario.description));
        }

        section.push_str("| Metric | Projection |\n|---|---|\n");
        let rows = [
            ("Monthly Budget", format_currency(metrics.total_budget)),
            ("Expected Leads", format_range(metrics.leads_range, format_number)),
            ("Closed Jobs", format_range(metrics.closed_range, format_number)),
            ("Est. CPL", format_range(metrics.cpl_range, format_currency)),
            ("Est. CAC", format_range(metrics.cac_range, format_currency)),
            ("Gross Margin", format_currency(metrics.margin_dollars)),
        ];
        for (label, value) in rows {
            section.push_str(&format!("| {} | {} |\n", label, value));
        }
        section.push('\n');

        section.push_str("| Channel | Monthly Allocation |\n|---|---:|\n");
        for channel in &scenario.channels {
            section.push_str(&format!(
                "| {} | {} |\n",
                table_cell(&channel.name),
                format_currency(channel.amount)
            ));
        }
        section.push('\n');

        if let Some(check) = document.capacity_check() {
            if check.is_at_risk() {
                section.push_str(&format!(
                    "> **Capacity Risk:** selected plan projects up to {} closed jobs/mo, \
                     above the target of {}. Confirm staffing or stage the rollout.\n\n",
                    format_number(check.projected_closed_max),
                    format_number(check.closed_jobs_target)
                ));
            }
        }
        section
    }

    fn render_kpis(&self, document: &ProposalDocument) -> String {
        let kpis = &document.kpis;
        let mut section = String::from("## KPI Targets & Capacity\n\n");
        section.push_str(&format!(
            "- Closed Jobs / mo: {}\n",
            format_number(kpis.closed_jobs_target)
        ));
        section.push_str(&format!("- Target CPL: {}\n", format_currency(kpis.cpl_target)));
        section.push_str(&format!("- Target CAC: {}\n", format_currency(kpis.cac_target)));
        section.push_str(&format!(
            "- Reviews (90d): {}\n",
            format_number(kpis.reviews_target)
        ));
        section.push_str(&format!(
            "- Sales Team: {} closers\n\n",
            format_number(kpis.sales_team_size)
        ));

        for line in kpis.capacity_note.lines().filter(|l| !l.trim().is_empty()) {
            section.push_str(&format!("> {}\n", line.trim()));
        }
        if !kpis.capacity_note.trim().is_empty() {
            section.push('\n');
        }
        section
    }

    fn render_tasks(&self, document: &ProposalDocument, options: &RenderOptions) -> String {
        if document.tasks.is_empty() && !options.include_empty_sections {
            return String::new();
        }

        let mut section = String::from("## Tasks & Owners\n\n");
        if document.tasks.is_empty() {
            section.push_str(NONE_RECORDED);
            section.push_str("\n\n");
            return section;
        }

        section.push_str("| Owner | Deliverable | Status |\n|---|---|---|\n");
        for task in &document.tasks {
            section.push_str(&format!(
                "| {} | {} | {} {} |\n",
                table_cell(&task.owner),
                table_cell(&task.description),
                task.status.marker(),
                task.status.label()
            ));
        }
        section.push('\n');
        section
    }

    fn render_raid(&self, raid: &RaidBoard, options: &RenderOptions) -> String {
        let groups = [
            ("Risks", &raid.risks),
            ("Assumptions", &raid.assumptions),
            ("Issues", &raid.issues),
            ("Dependencies", &raid.dependencies),
        ];

        let mut body = String::new();
        for (heading, values) in groups {
            if values.is_empty() && !options.include_empty_sections {
                continue;
            }
            body.push_str(&format!("### {}\n\n", heading));
            let items: Vec<&str> = values.iter().map(String::as_str).collect();
            push_bullets(&mut body, &items);
        }

        if body.is_empty() {
            return body;
        }
        format!("## Risks & Assumptions\n\n{}", body)
    }

    fn render_decisions(&self, document: &ProposalDocument, options: &RenderOptions) -> String {
        if document.decisions.is_empty() && !options.include_empty_sections {
            return String::new();
        }

        let mut section = String::from("## Decision Log\n\n");
        if document.decisions.is_empty() {
            section.push_str(NONE_RECORDED);
            section.push('\n');
        }
        for decision in &document.decisions {
            section.push_str(&format!(
                "- **{}** ({}): {} _Decider: {}_\n",
                decision.id.as_str().to_uppercase(),
                decision.date,
                decision.summary,
                decision.decider
            ));
        }
        section.push('\n');
        section
    }

    fn render_milestones(&self, document: &ProposalDocument, options: &RenderOptions) -> String {
        if document.milestones.is_empty() && !options.include_empty_sections {
            return String::new();
        }

        let mut section = String::from("## Milestones\n\n");
        if document.milestones.is_empty() {
            section.push_str(NONE_RECORDED);
            section.push('\n');
        }
        for milestone in &document.milestones {
            section.push_str(&format!(
                "- **{}** ({}) [{}]",
                milestone.name,
                milestone.target_date,
                milestone.status.label()
            ));
            if let Some(notes) = milestone.notes.as_deref().filter(|n| !n.trim().is_empty()) {
                section.push_str(&format!(": {}", notes.trim()));
            }
            section.push('\n');
        }
        section.push('\n');
        section
    }
}

impl ProposalRenderer for MarkdownProposalRenderer {
    fn render(&self, document: &ProposalDocument, options: &RenderOptions) -> String {
        let mut doc = String::new();

        doc.push_str(&self.render_header(document, options));
        doc.push_str(&self.render_bluf(document, options));
        doc.push_str(&self.render_icp(document, options));
        doc.push_str(&self.render_scenario(document));
        doc.push_str(&self.render_kpis(document));
        doc.push_str(&self.render_tasks(document, options));
        doc.push_str(&self.render_raid(&document.raid, options));
        doc.push_str(&self.render_decisions(document, options));
        doc.push_str(&self.render_milestones(document, options));

        doc.push_str("---\n\n*Prepared by Auxilium*\n");
        doc
    }

    fn metrics_headline(&self, document: &ProposalDocument) -> String {
        match document.active_metrics() {
            Some(metrics) => format!(
                "{} budget → {}–{} CAC",
                format_currency(metrics.total_budget),
                format_currency(metrics.cac_range.min),
                format_currency(metrics.cac_range.max)
            ),
            None => "Select a scenario to view CAC".to_string(),
        }
    }
}

/// Splits newline-separated text into trimmed, non-empty items.
fn bullet_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn push_bullets(section: &mut String, items: &[&str]) {
    if items.is_empty() {
        section.push_str(NONE_RECORDED);
        section.push('\n');
    }
    for item in items {
        section.push_str(&format!("- {}\n", item));
    }
    section.push('\n');
}

/// Escapes pipes and flattens newlines so text stays inside one table cell.
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ScenarioId;
    use crate::domain::proposal::{BlufObjectives, TaskStatus};

    fn sample() -> ProposalDocument {
        ProposalDocument::default_document_on("2025-01-15")
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Headline
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn headline_shows_budget_and_cac_range() {
        let renderer = MarkdownProposalRenderer::new();
        assert_eq!(
            renderer.metrics_headline(&sample()),
            "$5,000 budget → $1,000–$1,250 CAC"
        );
    }

    #[test]
    fn headline_without_active_scenario() {
        let renderer = MarkdownProposalRenderer::new();
        let doc = sample().select_scenario(ScenarioId::new("missing").unwrap());
        assert_eq!(renderer.metrics_headline(&doc), "Select a scenario to view CAC");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Full render
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn render_contains_all_sections() {
        let renderer = MarkdownProposalRenderer::new();
        let markdown = renderer.render(&sample(), &RenderOptions::default());

        assert!(markdown.starts_with("# Go-To-Market Proposal\n"));
        assert!(markdown.contains("**Date:** 2025-01-15"));
        for heading in [
            "## BLUF",
            "## Objectives",
            "## ICP Summary",
            "## Selected Budget Scenario: Scenario B",
            "## KPI Targets & Capacity",
            "## Tasks & Owners",
            "## Risks & Assumptions",
            "## Decision Log",
            "## Milestones",
        ] {
            assert!(markdown.contains(heading), "missing {}", heading);
        }
    }

    #[test]
    fn render_includes_metrics_and_channels() {
        let renderer = MarkdownProposalRenderer::new();
        let markdown = renderer.render(&sample(), &RenderOptions::default());

        assert!(markdown.contains("| Monthly Budget | $5,000 |"));
        assert!(markdown.contains("| Expected Leads | 20 – 25 |"));
        assert!(markdown.contains("| Closed Jobs | 4 – 5 |"));
        assert!(markdown.contains("| Est. CAC | $1,000 – $1,250 |"));
        assert!(markdown.contains("| LSA | $2,000 |"));
        assert!(markdown.contains("**D001** (2025-01-15)"));
    }

    #[test]
    fn render_marks_task_status() {
        let renderer = MarkdownProposalRenderer::new();
        let doc = sample();
        let markdown = renderer.render(&doc, &RenderOptions::default());

        let task = &doc.tasks[0];
        assert!(markdown.contains(&format!(
            "{} {}",
            task.status.marker(),
            task.status.label()
        )));
        assert_eq!(TaskStatus::AtRisk.marker(), "🟡");
    }

    #[test]
    fn render_with_dangling_selection_uses_placeholder() {
        let renderer = MarkdownProposalRenderer::new();
        let doc = sample().select_scenario(ScenarioId::new("missing").unwrap());
        let markdown = renderer.render(&doc, &RenderOptions::default());

        assert!(markdown.contains("*No scenario selected.*"));
        assert!(!markdown.contains("Monthly Budget"));
    }

    #[test]
    fn render_flags_capacity_risk() {
        let renderer = MarkdownProposalRenderer::new();
        let doc = sample();
        let mut kpis = doc.kpis.clone();
        kpis.closed_jobs_target = 2.0;
        let markdown = renderer.render(&doc.with_kpis(kpis), &RenderOptions::default());

        assert!(markdown.contains("**Capacity Risk:**"));
    }

    #[test]
    fn empty_sections_follow_options() {
        let renderer = MarkdownProposalRenderer::new();
        let doc = sample()
            .with_bluf_objectives(BlufObjectives::default())
            .with_tasks(Vec::new())
            .with_raid(RaidBoard::default())
            .with_decisions(Vec::new());

        let full = renderer.render(&doc, &RenderOptions::default());
        assert!(full.contains("## Tasks & Owners\n\n*None recorded.*"));
        assert!(full.contains("### Risks\n\n*None recorded.*"));

        let compact = renderer.render(&doc, &RenderOptions::compact());
        assert!(!compact.contains("## BLUF"));
        assert!(!compact.contains("## Tasks & Owners"));
        assert!(!compact.contains("## Risks & Assumptions"));
        assert!(!compact.contains("## Decision Log"));
        assert!(compact.contains("## Milestones"));
    }

    #[test]
    fn table_cells_escape_pipes_and_newlines() {
        assert_eq!(table_cell("a|b\nc"), "a\\|b<br>c");
    }
}
