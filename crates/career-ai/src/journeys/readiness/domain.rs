use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Opaque student identifier handed in by the session layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed catalogue of the five journey milestones, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyStage {
    ProfileOnboarding,
    UploadAndVerification,
    CrsGeneration,
    PathwayNavigation,
    ImprovementActions,
}

pub const STAGE_COUNT: usize = 5;

impl JourneyStage {
    pub const fn ordered() -> [Self; STAGE_COUNT] {
        [
            Self::ProfileOnboarding,
            Self::UploadAndVerification,
            Self::CrsGeneration,
            Self::PathwayNavigation,
            Self::ImprovementActions,
        ]
    }

    pub const fn id(self) -> u8 {
        match self {
            Self::ProfileOnboarding => 1,
            Self::UploadAndVerification => 2,
            Self::CrsGeneration => 3,
            Self::PathwayNavigation => 4,
            Self::ImprovementActions => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ProfileOnboarding => "Profile Onboarding",
            Self::UploadAndVerification => "Upload & Verification",
            Self::CrsGeneration => "CRS Generation",
            Self::PathwayNavigation => "Pathway Navigation",
            Self::ImprovementActions => "Improvement Actions",
        }
    }

    pub const fn blurb(self) -> &'static str {
        match self {
            Self::ProfileOnboarding => "Complete your profile",
            Self::UploadAndVerification => "Add certificates",
            Self::CrsGeneration => "Get your score",
            Self::PathwayNavigation => "Explore careers",
            Self::ImprovementActions => "Start upskilling",
        }
    }
}

/// Priority bucket for a recommended action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPriority {
    High,
    Medium,
    Low,
}

impl ActionPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Recommended, linkable task nudging the student toward the next stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextAction {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub priority: ActionPriority,
}

/// Qualitative bucket for a composite readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessTier {
    JobReady,
    ProgressingWell,
    GettingStarted,
}

impl ReadinessTier {
    pub const JOB_READY_MIN: u8 = 70;
    pub const PROGRESSING_MIN: u8 = 40;

    /// Thresholds are inclusive at the lower bound, checked high to low.
    pub const fn for_score(score: u8) -> Self {
        if score >= Self::JOB_READY_MIN {
            Self::JobReady
        } else if score >= Self::PROGRESSING_MIN {
            Self::ProgressingWell
        } else {
            Self::GettingStarted
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::JobReady => "Job Ready",
            Self::ProgressingWell => "Progressing Well",
            Self::GettingStarted => "Getting Started",
        }
    }
}

/// Verification state reported by the document service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Verified => "Verified",
            Self::Rejected => "Rejected",
        }
    }
}

/// Named factor fractions from the score service. Absent factors stay
/// absent for display ("N/A") and count as zero only inside the weighted
/// composite. Extra upstream metrics land in `diagnostics` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(default)]
    pub soft_skills: Option<f32>,
    #[serde(default)]
    pub skill_coverage: Option<f32>,
    #[serde(default)]
    pub practical_evidence: Option<f32>,
    #[serde(default)]
    pub market_factor: Option<f32>,
    #[serde(default)]
    pub meta_factor: Option<f32>,
    #[serde(default, flatten)]
    pub diagnostics: BTreeMap<String, f32>,
}

/// One consistent snapshot of everything the journey derivation needs.
///
/// Counts are unsigned by construction; [`ReadinessSnapshot::from_wire`] is
/// the single place untrusted collaborator numbers get clamped, so the
/// engines never observe malformed state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessSnapshot {
    pub has_profile: bool,
    pub document_count: u32,
    pub verified_document_count: u32,
    pub composite_score: Option<u8>,
    pub report_count: u32,
}

impl ReadinessSnapshot {
    /// Normalize untrusted wire values. Negative counts and out-of-range
    /// scores are clamped and logged, never rejected.
    pub fn from_wire(
        has_profile: bool,
        document_count: i64,
        verified_document_count: i64,
        composite_score: Option<i64>,
        report_count: i64,
    ) -> Self {
        Self {
            has_profile,
            document_count: clamp_count(document_count, "document_count"),
            verified_document_count: clamp_count(verified_document_count, "verified_document_count"),
            composite_score: composite_score.map(clamp_score),
            report_count: clamp_count(report_count, "report_count"),
        }
    }
}

/// Loading marker for the snapshot. Aggregation refuses to run on
/// [`SnapshotState::Pending`] so the caller renders a loading state instead
/// of zeroed progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotState {
    Pending,
    Loaded(ReadinessSnapshot),
}

impl SnapshotState {
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

fn clamp_count(raw: i64, field: &'static str) -> u32 {
    if raw < 0 {
        tracing::warn!(field, raw, "negative count clamped to zero");
        return 0;
    }
    u32::try_from(raw).unwrap_or(u32::MAX)
}

pub(crate) fn clamp_score(raw: i64) -> u8 {
    if !(0..=100).contains(&raw) {
        tracing::warn!(raw, "composite score outside 0..=100 clamped");
    }
    raw.clamp(0, 100) as u8
}
