/// Fixed weighting over the three core readiness factors. The weights sum
/// to 1.0; `market_factor` and `meta_factor` are surfaced as diagnostics
/// and never enter the weighted sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub soft_skills: f32,
    pub skill_coverage: f32,
    pub practical_evidence: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            soft_skills: 0.60,
            skill_coverage: 0.25,
            practical_evidence: 0.15,
        }
    }
}
