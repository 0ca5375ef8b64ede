use super::super::domain::ScoreBreakdown;
use serde::Serialize;

/// Narrative strengths and improvement prompts derived from the factor
/// fractions, shown next to the breakdown on the analysis page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreInsights {
    pub strengths: Vec<&'static str>,
    pub improvements: Vec<&'static str>,
}

pub(crate) fn derive_insights(breakdown: &ScoreBreakdown) -> ScoreInsights {
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    if let Some(soft_skills) = breakdown.soft_skills {
        if soft_skills > 0.6 {
            strengths.push("Strong soft skills foundation");
        }
        if soft_skills < 0.5 {
            improvements.push("Complete soft skill courses to boost your score");
        }
    }

    if let Some(coverage) = breakdown.skill_coverage {
        if coverage > 0.6 {
            strengths.push("Good technical skill coverage");
        }
        if coverage < 0.4 {
            improvements.push("Acquire more domain-specific skills");
        }
    }

    if let Some(practical) = breakdown.practical_evidence {
        if practical > 0.5 {
            strengths.push("Practical experience evident");
        }
        if practical < 0.3 {
            improvements.push("Undertake more projects or internships");
        }
    }

    if let Some(market) = breakdown.market_factor {
        if market > 0.7 {
            strengths.push("Role aligns well with market demand");
        }
    }

    if let Some(confidence) = breakdown.diagnostics.get("evidence_confidence") {
        if *confidence > 0.7 {
            strengths.push("High confidence in uploaded evidence");
        }
        if *confidence < 0.5 {
            improvements.push("Upload verified certificates");
        }
    }

    if let Some(completeness) = breakdown.diagnostics.get("data_completeness") {
        if *completeness < 0.6 {
            improvements.push("Complete your profile details");
        }
    }

    ScoreInsights {
        strengths,
        improvements,
    }
}
