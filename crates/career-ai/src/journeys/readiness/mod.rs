//! Career readiness aggregation and journey progression.
//!
//! A pure, deterministic core: one [`domain::ReadinessSnapshot`] in, one
//! [`journey::JourneyState`] out. Snapshot assembly from the collaborator
//! services lives in [`service`], behind the trait seams in [`providers`],
//! so network timing never leaks into derived state.

pub mod domain;
mod journey;
mod planner;
pub mod providers;
pub mod router;
mod scoring;
pub mod service;
mod stages;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    ActionPriority, JourneyStage, NextAction, ReadinessSnapshot, ReadinessTier, ScoreBreakdown,
    SnapshotState, StudentId, VerificationStatus,
};
pub use journey::{JourneyEngine, JourneyState, SnapshotPending};
pub use planner::plan;
pub use providers::{
    DocumentProvider, DocumentRecord, ProfileProvider, ProviderError, ReportProvider,
    ScoreProvider, ScoreRecord,
};
pub use router::journey_router;
pub use scoring::{CompositeScore, ScoreEngine, ScoreInsights, ScoreWeights};
pub use service::{JourneyService, RefreshSummary};
pub use stages::{derive_progress, StageProgress};
pub use views::{
    JourneyStatusView, MilestoneStatus, MilestoneView, RosterEntryView, ScoreBreakdownView,
    ScoreStatusView,
};
