use super::domain::{JourneyStage, NextAction, ScoreBreakdown, StudentId};
use super::journey::JourneyState;
use super::scoring::ScoreInsights;
use serde::Serialize;
use std::collections::BTreeMap;

/// Render status of one milestone in the five-item journey list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    Completed,
    Current,
    Unlocked,
    Locked,
}

impl MilestoneStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Current => "Current",
            Self::Unlocked => "Unlocked",
            Self::Locked => "Locked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilestoneView {
    pub stage: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub status: MilestoneStatus,
    pub status_label: &'static str,
}

/// Wire shape consumed by the dashboard: integer stage id plus labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyStatusView {
    pub stage: u8,
    pub stage_label: &'static str,
    pub completion: u8,
    pub can_access_stages: BTreeMap<u8, bool>,
    pub next_actions: Vec<NextAction>,
    pub encouraging_message: &'static str,
    pub milestones: Vec<MilestoneView>,
}

impl JourneyState {
    pub fn status_view(&self) -> JourneyStatusView {
        JourneyStatusView {
            stage: self.stage.id(),
            stage_label: self.stage.label(),
            completion: self.completion,
            can_access_stages: self.can_access_stages.clone(),
            next_actions: self.next_actions.clone(),
            encouraging_message: self.encouraging_message,
            milestones: self.milestones(),
        }
    }

    /// Per-stage render status: completed behind the current stage,
    /// unlocked when accessible but not yet reached, locked otherwise.
    pub fn milestones(&self) -> Vec<MilestoneView> {
        let current = self.stage.id();

        JourneyStage::ordered()
            .into_iter()
            .map(|stage| {
                let id = stage.id();
                let status = if id < current {
                    MilestoneStatus::Completed
                } else if id == current {
                    MilestoneStatus::Current
                } else if self.can_access_stages.get(&id).copied().unwrap_or(false) {
                    MilestoneStatus::Unlocked
                } else {
                    MilestoneStatus::Locked
                };

                MilestoneView {
                    stage: id,
                    name: stage.label(),
                    description: stage.blurb(),
                    status,
                    status_label: status.label(),
                }
            })
            .collect()
    }
}

/// Factor fractions for display. `None` renders as "N/A"; a missing
/// factor is never shown as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdownView {
    pub soft_skills: Option<f32>,
    pub skill_coverage: Option<f32>,
    pub practical_evidence: Option<f32>,
    pub market_factor: Option<f32>,
    pub meta_factor: Option<f32>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub diagnostics: BTreeMap<String, f32>,
}

impl ScoreBreakdownView {
    pub fn from_breakdown(breakdown: &ScoreBreakdown) -> Self {
        Self {
            soft_skills: breakdown.soft_skills,
            skill_coverage: breakdown.skill_coverage,
            practical_evidence: breakdown.practical_evidence,
            market_factor: breakdown.market_factor,
            meta_factor: breakdown.meta_factor,
            diagnostics: breakdown.diagnostics.clone(),
        }
    }
}

/// Analysis-page payload: composite plus breakdown plus narrative
/// insights. `score`/`tier` stay `null` when nothing is computable yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreStatusView {
    pub student_id: StudentId,
    pub score: Option<u8>,
    pub tier: Option<&'static str>,
    pub breakdown: Option<ScoreBreakdownView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub improvements: Vec<&'static str>,
}

impl ScoreStatusView {
    pub fn not_generated(student_id: StudentId) -> Self {
        Self {
            student_id,
            score: None,
            tier: None,
            breakdown: None,
            strengths: Vec::new(),
            improvements: Vec::new(),
        }
    }

    pub fn with_insights(mut self, insights: ScoreInsights) -> Self {
        self.strengths = insights.strengths;
        self.improvements = insights.improvements;
        self
    }
}

/// One row of a bulk roster evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntryView {
    pub student_id: StudentId,
    pub stage: u8,
    pub stage_label: &'static str,
    pub completion: u8,
    pub next_action: Option<&'static str>,
}
