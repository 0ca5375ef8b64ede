use std::sync::Arc;

use super::domain::{
    clamp_score, ReadinessSnapshot, ReadinessTier, StudentId, VerificationStatus,
};
use super::journey::JourneyEngine;
use super::providers::{
    DocumentProvider, ProfileProvider, ReportProvider, ScoreProvider, ScoreRecord,
};
use super::scoring::{CompositeScore, ScoreEngine, ScoreWeights};
use super::views::{JourneyStatusView, RosterEntryView, ScoreBreakdownView, ScoreStatusView};
use crate::journeys::roster::RosterEntry;
use serde::Serialize;
use tracing::{debug, warn};

/// Assembles one consistent snapshot per call from the four collaborator
/// boundaries, then invokes the engines exactly once. Individual
/// collaborator failures degrade to absent values; they are never
/// surfaced as errors, since "no profile yet" is a valid state.
pub struct JourneyService<P, D, S, R> {
    profiles: Arc<P>,
    documents: Arc<D>,
    scores: Arc<S>,
    reports: Arc<R>,
    score_engine: ScoreEngine,
    journey_engine: JourneyEngine,
}

impl<P, D, S, R> JourneyService<P, D, S, R>
where
    P: ProfileProvider + 'static,
    D: DocumentProvider + 'static,
    S: ScoreProvider + 'static,
    R: ReportProvider + 'static,
{
    pub fn new(profiles: Arc<P>, documents: Arc<D>, scores: Arc<S>, reports: Arc<R>) -> Self {
        Self::with_weights(profiles, documents, scores, reports, ScoreWeights::default())
    }

    pub fn with_weights(
        profiles: Arc<P>,
        documents: Arc<D>,
        scores: Arc<S>,
        reports: Arc<R>,
        weights: ScoreWeights,
    ) -> Self {
        Self {
            profiles,
            documents,
            scores,
            reports,
            score_engine: ScoreEngine::new(weights),
            journey_engine: JourneyEngine,
        }
    }

    /// Fetch from each collaborator independently and normalize into one
    /// snapshot. Each fetch failure is logged and replaced with the
    /// absent/default value, so the worst case is a consistent stage-1
    /// journey.
    pub fn snapshot(&self, student: &StudentId) -> ReadinessSnapshot {
        let has_profile = match self.profiles.has_profile(student) {
            Ok(flag) => flag,
            Err(err) => {
                warn!(%student, error = %err, "profile lookup failed; assuming no profile");
                false
            }
        };

        let documents = match self.documents.documents_for(student) {
            Ok(documents) => documents,
            Err(err) => {
                warn!(%student, error = %err, "document lookup failed; assuming none uploaded");
                Vec::new()
            }
        };
        let verified_document_count = documents
            .iter()
            .filter(|record| record.verification_status == VerificationStatus::Verified)
            .count() as u32;

        let score_record = match self.scores.latest_score(student) {
            Ok(record) => record,
            Err(err) => {
                warn!(%student, error = %err, "score lookup failed; treating score as not generated");
                None
            }
        };
        let composite_score = score_record
            .as_ref()
            .and_then(|record| self.composite_from(record));

        let report_count = match self.reports.report_count(student) {
            Ok(count) => count,
            Err(err) => {
                warn!(%student, error = %err, "report lookup failed; assuming none generated");
                0
            }
        };

        ReadinessSnapshot {
            has_profile,
            document_count: documents.len() as u32,
            verified_document_count,
            composite_score: composite_score.map(|composite| composite.score),
            report_count,
        }
    }

    /// Full journey derivation for the dashboard.
    pub fn status(&self, student: &StudentId) -> JourneyStatusView {
        let snapshot = self.snapshot(student);
        self.journey_engine.journey(&snapshot).status_view()
    }

    /// Re-derive after a profile or document change. The previous state
    /// is replaced wholesale; nothing is patched in place.
    pub fn refresh(&self, student: &StudentId) -> RefreshSummary {
        let state = self.journey_engine.journey(&self.snapshot(student));
        debug!(%student, stage = state.stage.id(), completion = state.completion, "journey rederived");

        RefreshSummary {
            message: "Journey status refreshed",
            stage: state.stage.id(),
            completion: state.completion,
        }
    }

    /// Analysis-page payload: composite, tier, breakdown, and insights.
    pub fn score_status(&self, student: &StudentId) -> ScoreStatusView {
        let record = match self.scores.latest_score(student) {
            Ok(record) => record,
            Err(err) => {
                warn!(%student, error = %err, "score lookup failed; reporting score as not generated");
                None
            }
        };

        let Some(record) = record else {
            return ScoreStatusView::not_generated(student.clone());
        };

        let composite = self.composite_from(&record);
        let mut view = ScoreStatusView {
            student_id: student.clone(),
            score: composite.map(|composite| composite.score),
            tier: composite.map(|composite| composite.tier.label()),
            breakdown: record
                .breakdown
                .as_ref()
                .map(ScoreBreakdownView::from_breakdown),
            strengths: Vec::new(),
            improvements: Vec::new(),
        };

        if let Some(breakdown) = &record.breakdown {
            view = view.with_insights(self.score_engine.insights(breakdown));
        }

        view
    }

    /// Bulk journey derivation over roster-imported snapshots.
    pub fn roster_overview(&self, entries: &[RosterEntry]) -> Vec<RosterEntryView> {
        entries
            .iter()
            .map(|entry| {
                let state = self.journey_engine.journey(&entry.snapshot);
                RosterEntryView {
                    student_id: entry.student_id.clone(),
                    stage: state.stage.id(),
                    stage_label: state.stage.label(),
                    completion: state.completion,
                    next_action: state.next_actions.first().map(|action| action.title),
                }
            })
            .collect()
    }

    /// Prefer the upstream precomputed composite; fall back to composing
    /// from the breakdown. Neither present means no score yet.
    fn composite_from(&self, record: &ScoreRecord) -> Option<CompositeScore> {
        match (record.score, record.breakdown.as_ref()) {
            (Some(raw), _) => {
                let score = clamp_score(raw);
                Some(CompositeScore {
                    score,
                    tier: ReadinessTier::for_score(score),
                })
            }
            (None, Some(breakdown)) => Some(self.score_engine.compose(breakdown)),
            (None, None) => None,
        }
    }
}

/// Response body for the explicit refresh endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshSummary {
    pub message: &'static str,
    pub stage: u8,
    pub completion: u8,
}
