mod insights;
mod weights;

pub use insights::ScoreInsights;
pub use weights::ScoreWeights;

use super::domain::{ReadinessTier, ScoreBreakdown};
use serde::Serialize;

/// Composite readiness score with its qualitative tier. Recomputed on
/// demand; never cached across requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompositeScore {
    pub score: u8,
    pub tier: ReadinessTier,
}

/// Stateless aggregator folding factor fractions into one composite score.
pub struct ScoreEngine {
    weights: ScoreWeights,
}

impl ScoreEngine {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Weighted sum of the three core factors, scaled to 0..=100.
    /// Out-of-range fractions are clamped rather than rejected; upstream
    /// data is not validated.
    pub fn compose(&self, breakdown: &ScoreBreakdown) -> CompositeScore {
        let core = self.weights.soft_skills * clamp_fraction(breakdown.soft_skills)
            + self.weights.skill_coverage * clamp_fraction(breakdown.skill_coverage)
            + self.weights.practical_evidence * clamp_fraction(breakdown.practical_evidence);

        let score = (core * 100.0).round().clamp(0.0, 100.0) as u8;

        CompositeScore {
            score,
            tier: ReadinessTier::for_score(score),
        }
    }

    pub fn insights(&self, breakdown: &ScoreBreakdown) -> ScoreInsights {
        insights::derive_insights(breakdown)
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new(ScoreWeights::default())
    }
}

fn clamp_fraction(value: Option<f32>) -> f32 {
    match value {
        Some(fraction) if fraction.is_finite() => fraction.clamp(0.0, 1.0),
        _ => 0.0,
    }
}
