use crate::infra::demo_campus;
use career_ai::error::AppError;
use career_ai::journeys::readiness::{
    JourneyEngine, JourneyService, JourneyStatusView, ReadinessSnapshot, StudentId,
};
use career_ai::journeys::roster::RosterImporter;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct JourneyStatusArgs {
    /// Student has a completed profile
    #[arg(long)]
    pub(crate) has_profile: bool,
    /// Number of uploaded documents
    #[arg(long, default_value_t = 0)]
    pub(crate) documents: i64,
    /// Number of verified documents
    #[arg(long, default_value_t = 0)]
    pub(crate) verified_documents: i64,
    /// Precomputed composite score (0-100)
    #[arg(long)]
    pub(crate) score: Option<i64>,
    /// Number of generated reports
    #[arg(long, default_value_t = 0)]
    pub(crate) reports: i64,
    /// Evaluate a roster CSV export instead of the flags above
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional roster CSV export to append a bulk evaluation section
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
}

pub(crate) fn run_journey_status(args: JourneyStatusArgs) -> Result<(), AppError> {
    if let Some(path) = args.roster_csv {
        return render_roster(&path);
    }

    let snapshot = ReadinessSnapshot::from_wire(
        args.has_profile,
        args.documents,
        args.verified_documents,
        args.score,
        args.reports,
    );
    let view = JourneyEngine.journey(&snapshot).status_view();
    render_journey("snapshot", &view);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Career readiness journey demo");

    let campus = Arc::new(demo_campus());
    let service = JourneyService::new(
        campus.clone(),
        campus.clone(),
        campus.clone(),
        campus,
    );

    for id in ["tariq", "leila", "sofia"] {
        let student = StudentId(id.to_string());
        let view = service.status(&student);
        render_journey(id, &view);

        let score = service.score_status(&student);
        match serde_json::to_string_pretty(&score) {
            Ok(json) => println!("  Score payload:\n{}", indent(&json)),
            Err(err) => println!("  Score payload unavailable: {}", err),
        }
    }

    if let Some(path) = args.roster_csv {
        println!();
        render_roster(&path)?;
    }

    Ok(())
}

fn render_journey(name: &str, view: &JourneyStatusView) {
    println!();
    println!(
        "Student '{}': stage {} ({}) at {}% completion",
        name, view.stage, view.stage_label, view.completion
    );
    println!("  {}", view.encouraging_message);

    println!("  Milestones:");
    for milestone in &view.milestones {
        println!(
            "    {}. {} [{}] - {}",
            milestone.stage, milestone.name, milestone.status_label, milestone.description
        );
    }

    if view.next_actions.is_empty() {
        println!("  Next actions: all caught up");
    } else {
        println!("  Next actions:");
        for action in &view.next_actions {
            println!(
                "    - [{}] {} -> {} ({})",
                action.priority.label(),
                action.title,
                action.link,
                action.description
            );
        }
    }
}

fn render_roster(path: &PathBuf) -> Result<(), AppError> {
    let entries = RosterImporter::from_path(path)?;
    let engine = JourneyEngine;

    println!("Roster evaluation ({} students):", entries.len());
    for entry in &entries {
        let state = engine.journey(&entry.snapshot);
        let focus = state
            .next_actions
            .first()
            .map(|action| action.title)
            .unwrap_or("all caught up");
        println!(
            "  {}: stage {} ({}), {}% complete, next: {}",
            entry.student_id,
            state.stage.id(),
            state.stage.label(),
            state.completion,
            focus
        );
    }

    Ok(())
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
