use super::domain::{JourneyStage, ReadinessSnapshot, STAGE_COUNT};
use serde::Serialize;
use std::collections::BTreeMap;

/// Gating outcome for one snapshot: the stage the student should focus on,
/// coarse completion, and per-stage access flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageProgress {
    pub stage: JourneyStage,
    pub completion: u8,
    pub can_access: BTreeMap<u8, bool>,
}

/// Evaluate the cumulative unlock table. Each stage's condition implies
/// every lower stage's condition, so the current stage is simply the
/// highest unlocked one. Never fails.
pub fn derive_progress(snapshot: &ReadinessSnapshot) -> StageProgress {
    let unlocked = unlock_flags(snapshot);

    let can_access = JourneyStage::ordered()
        .into_iter()
        .zip(unlocked.iter())
        .map(|(stage, flag)| (stage.id(), *flag))
        .collect();

    StageProgress {
        stage: current_stage(&unlocked),
        completion: completion_percentage(&unlocked),
        can_access,
    }
}

fn unlock_flags(snapshot: &ReadinessSnapshot) -> [bool; STAGE_COUNT] {
    let onboarding = snapshot.has_profile;
    let uploads = onboarding && snapshot.document_count >= 1;
    let scored = uploads && snapshot.composite_score.is_some();
    let reported = scored && snapshot.report_count >= 1;

    [true, onboarding, uploads, scored, reported]
}

fn current_stage(unlocked: &[bool; STAGE_COUNT]) -> JourneyStage {
    JourneyStage::ordered()
        .into_iter()
        .zip(unlocked.iter())
        .filter_map(|(stage, flag)| flag.then_some(stage))
        .last()
        .unwrap_or(JourneyStage::ProfileOnboarding)
}

/// Coarse progress proxy in steps of 20%. Stage n is complete once stage
/// n+1 unlocks; the terminal stage has no further gate and completes
/// together with its own unlock.
fn completion_percentage(unlocked: &[bool; STAGE_COUNT]) -> u8 {
    let mut completed = unlocked.iter().skip(1).filter(|flag| **flag).count();
    if unlocked[STAGE_COUNT - 1] {
        completed += 1;
    }

    (completed * 100 / STAGE_COUNT) as u8
}
