use super::domain::{JourneyStage, NextAction, ReadinessSnapshot, SnapshotState};
use super::planner;
use super::stages::{self, StageProgress};
use serde::Serialize;
use std::collections::BTreeMap;

/// Raised when aggregation is requested before the snapshot has loaded.
/// The caller renders a loading state, never zeroed progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("journey snapshot is still loading")]
pub struct SnapshotPending;

/// Complete journey derivation for one snapshot. Always replaced
/// wholesale on re-derivation; there is no partial update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyState {
    pub stage: JourneyStage,
    pub completion: u8,
    pub can_access_stages: BTreeMap<u8, bool>,
    pub next_actions: Vec<NextAction>,
    pub encouraging_message: &'static str,
}

/// Composes stage gating, action planning, and the encouragement banner.
/// Stateless and side-effect free; concurrent aggregations are
/// independent.
#[derive(Debug, Default, Clone, Copy)]
pub struct JourneyEngine;

impl JourneyEngine {
    /// Aggregate a snapshot that may still be loading. A pending snapshot
    /// yields [`SnapshotPending`] rather than a zeroed journey.
    pub fn aggregate(&self, snapshot: &SnapshotState) -> Result<JourneyState, SnapshotPending> {
        match snapshot {
            SnapshotState::Pending => Err(SnapshotPending),
            SnapshotState::Loaded(snapshot) => Ok(self.journey(snapshot)),
        }
    }

    /// Derive the journey for a fully-loaded snapshot.
    pub fn journey(&self, snapshot: &ReadinessSnapshot) -> JourneyState {
        let StageProgress {
            stage,
            completion,
            can_access,
        } = stages::derive_progress(snapshot);

        JourneyState {
            stage,
            completion,
            can_access_stages: can_access,
            next_actions: planner::plan(snapshot),
            encouraging_message: encouraging_message(completion),
        }
    }
}

/// Fixed non-overlapping completion bands, matched low to high.
pub(crate) fn encouraging_message(completion: u8) -> &'static str {
    match completion {
        0..=29 => "Just getting started! Keep going",
        30..=59 => "Great progress! You're doing well",
        60..=89 => "Almost there! Keep it up",
        _ => "Excellent! You're nearly done",
    }
}
