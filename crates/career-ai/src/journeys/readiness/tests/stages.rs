use super::common::*;
use crate::journeys::readiness::domain::JourneyStage;
use crate::journeys::readiness::stages::derive_progress;

#[test]
fn fresh_student_sits_at_stage_one_with_zero_completion() {
    let progress = derive_progress(&snapshot(false, 0, None, 0));

    assert_eq!(progress.stage, JourneyStage::ProfileOnboarding);
    assert_eq!(progress.completion, 0);
    assert_eq!(progress.can_access.get(&1), Some(&true));
    for stage in 2..=5u8 {
        assert_eq!(progress.can_access.get(&stage), Some(&false));
    }
}

#[test]
fn fully_progressed_student_reaches_stage_five_at_full_completion() {
    let progress = derive_progress(&snapshot(true, 2, Some(75), 1));

    assert_eq!(progress.stage, JourneyStage::ImprovementActions);
    assert_eq!(progress.completion, 100);
    assert!(progress.can_access.values().all(|unlocked| *unlocked));
}

#[test]
fn stages_are_cumulative_not_independent() {
    // documents uploaded but no profile: later conditions cannot hold
    let progress = derive_progress(&snapshot(false, 3, Some(80), 2));

    assert_eq!(progress.stage, JourneyStage::ProfileOnboarding);
    assert_eq!(progress.completion, 0);
    assert_eq!(progress.can_access.get(&3), Some(&false));
}

#[test]
fn completion_advances_in_twenty_percent_steps() {
    assert_eq!(derive_progress(&snapshot(true, 0, None, 0)).completion, 20);
    assert_eq!(derive_progress(&snapshot(true, 1, None, 0)).completion, 40);
    assert_eq!(derive_progress(&snapshot(true, 1, Some(55), 0)).completion, 60);
    assert_eq!(derive_progress(&snapshot(true, 1, Some(55), 1)).completion, 100);
}

#[test]
fn current_stage_is_the_first_incomplete_milestone() {
    assert_eq!(
        derive_progress(&snapshot(true, 0, None, 0)).stage,
        JourneyStage::UploadAndVerification
    );
    assert_eq!(
        derive_progress(&snapshot(true, 2, None, 0)).stage,
        JourneyStage::CrsGeneration
    );
    assert_eq!(
        derive_progress(&snapshot(true, 2, Some(48), 0)).stage,
        JourneyStage::PathwayNavigation
    );
}

#[test]
fn score_without_documents_does_not_skip_the_upload_stage() {
    let progress = derive_progress(&snapshot(true, 0, Some(50), 0));

    assert_eq!(progress.stage, JourneyStage::UploadAndVerification);
    assert_eq!(progress.completion, 20);
    assert_eq!(progress.can_access.get(&4), Some(&false));
}

#[test]
fn gating_invariant_holds_across_the_state_grid() {
    for has_profile in [false, true] {
        for document_count in [0u32, 1, 4] {
            for composite_score in [None, Some(10u8), Some(90)] {
                for report_count in [0u32, 2] {
                    let progress = derive_progress(&snapshot(
                        has_profile,
                        document_count,
                        composite_score,
                        report_count,
                    ));

                    // every stage below an unlocked stage must itself be unlocked
                    let mut previous = true;
                    for stage in 1..=5u8 {
                        let unlocked = progress.can_access.get(&stage).copied().unwrap_or(false);
                        assert!(
                            previous || !unlocked,
                            "stage {stage} unlocked without its predecessor"
                        );
                        previous = unlocked;
                    }

                    assert!(progress.completion <= 100);
                    let current = progress.stage.id();
                    assert_eq!(progress.can_access.get(&current), Some(&true));
                }
            }
        }
    }
}
