use super::common::*;
use crate::journeys::readiness::domain::ReadinessTier;
use crate::journeys::readiness::scoring::ScoreEngine;

#[test]
fn perfect_factors_compose_to_one_hundred() {
    let engine = ScoreEngine::default();
    let composite = engine.compose(&breakdown(Some(1.0), Some(1.0), Some(1.0)));

    assert_eq!(composite.score, 100);
    assert_eq!(composite.tier, ReadinessTier::JobReady);
}

#[test]
fn zero_factors_compose_to_zero() {
    let engine = ScoreEngine::default();
    let composite = engine.compose(&breakdown(Some(0.0), Some(0.0), Some(0.0)));

    assert_eq!(composite.score, 0);
    assert_eq!(composite.tier, ReadinessTier::GettingStarted);
}

#[test]
fn tier_boundaries_are_inclusive() {
    let engine = ScoreEngine::default();

    // 0.60·1.0 + 0.25·0.4 = 0.70 exactly
    let job_ready = engine.compose(&breakdown(Some(1.0), Some(0.4), Some(0.0)));
    assert_eq!(job_ready.score, 70);
    assert_eq!(job_ready.tier, ReadinessTier::JobReady);

    // 0.60·0.5 + 0.25·0.4 = 0.40 exactly
    let progressing = engine.compose(&breakdown(Some(0.5), Some(0.4), Some(0.0)));
    assert_eq!(progressing.score, 40);
    assert_eq!(progressing.tier, ReadinessTier::ProgressingWell);

    let getting_started = engine.compose(&breakdown(Some(0.65), Some(0.0), Some(0.0)));
    assert_eq!(getting_started.score, 39);
    assert_eq!(getting_started.tier, ReadinessTier::GettingStarted);
}

#[test]
fn missing_factors_count_as_zero_in_the_composite() {
    let engine = ScoreEngine::default();
    let composite = engine.compose(&breakdown(Some(1.0), None, None));

    assert_eq!(composite.score, 60);
}

#[test]
fn out_of_range_fractions_are_clamped_not_rejected() {
    let engine = ScoreEngine::default();
    let composite = engine.compose(&breakdown(Some(1.5), Some(-0.3), Some(f32::NAN)));

    // 1.5 clamps to 1.0, -0.3 and NaN contribute nothing
    assert_eq!(composite.score, 60);
}

#[test]
fn market_and_meta_factors_never_enter_the_composite() {
    let engine = ScoreEngine::default();

    let mut with_modifiers = breakdown(Some(0.8), Some(0.6), Some(0.4));
    with_modifiers.market_factor = Some(0.1);
    with_modifiers.meta_factor = Some(0.1);

    let plain = engine.compose(&breakdown(Some(0.8), Some(0.6), Some(0.4)));
    let modified = engine.compose(&with_modifiers);

    assert_eq!(plain.score, modified.score);
}

#[test]
fn composite_is_monotone_in_each_core_factor() {
    let engine = ScoreEngine::default();
    let steps: Vec<f32> = (0..=10).map(|step| step as f32 / 10.0).collect();

    for &fixed_a in &steps {
        for &fixed_b in &steps {
            let mut previous = 0;
            for &moving in &steps {
                let soft = engine
                    .compose(&breakdown(Some(moving), Some(fixed_a), Some(fixed_b)))
                    .score;
                assert!(soft >= previous, "soft_skills not monotone at {moving}");
                previous = soft;
            }

            let mut previous = 0;
            for &moving in &steps {
                let coverage = engine
                    .compose(&breakdown(Some(fixed_a), Some(moving), Some(fixed_b)))
                    .score;
                assert!(coverage >= previous, "skill_coverage not monotone at {moving}");
                previous = coverage;
            }

            let mut previous = 0;
            for &moving in &steps {
                let practical = engine
                    .compose(&breakdown(Some(fixed_a), Some(fixed_b), Some(moving)))
                    .score;
                assert!(
                    practical >= previous,
                    "practical_evidence not monotone at {moving}"
                );
                previous = practical;
            }
        }
    }
}

#[test]
fn insights_reflect_factor_thresholds() {
    let engine = ScoreEngine::default();

    let strong = engine.insights(&breakdown(Some(0.8), Some(0.7), Some(0.6)));
    assert!(strong.strengths.contains(&"Strong soft skills foundation"));
    assert!(strong.strengths.contains(&"Good technical skill coverage"));
    assert!(strong.strengths.contains(&"Practical experience evident"));
    assert!(strong.improvements.is_empty());

    let weak = engine.insights(&breakdown(Some(0.2), Some(0.2), Some(0.1)));
    assert!(weak.strengths.is_empty());
    assert!(weak
        .improvements
        .contains(&"Complete soft skill courses to boost your score"));
    assert!(weak
        .improvements
        .contains(&"Undertake more projects or internships"));
}

#[test]
fn insights_consult_diagnostics_for_evidence_confidence() {
    let engine = ScoreEngine::default();

    let mut with_diagnostics = breakdown(Some(0.55), Some(0.5), Some(0.4));
    with_diagnostics
        .diagnostics
        .insert("evidence_confidence".to_string(), 0.3);
    with_diagnostics
        .diagnostics
        .insert("data_completeness".to_string(), 0.5);

    let insights = engine.insights(&with_diagnostics);
    assert!(insights.improvements.contains(&"Upload verified certificates"));
    assert!(insights
        .improvements
        .contains(&"Complete your profile details"));
}
