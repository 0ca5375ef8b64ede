use super::domain::{ScoreBreakdown, StudentId, VerificationStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Uploaded document as reported by the document service. Upstream fields
/// beyond these are dropped during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub name: String,
    pub verification_status: VerificationStatus,
    #[serde(default)]
    pub uploaded_on: Option<NaiveDate>,
}

/// Latest persisted score for a student: a precomputed composite, a
/// factor breakdown, or both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub breakdown: Option<ScoreBreakdown>,
    #[serde(default)]
    pub generated_on: Option<NaiveDate>,
}

/// Profile service boundary: does a profile record exist for the student.
pub trait ProfileProvider: Send + Sync {
    fn has_profile(&self, student: &StudentId) -> Result<bool, ProviderError>;
}

/// Document service boundary.
pub trait DocumentProvider: Send + Sync {
    fn documents_for(&self, student: &StudentId) -> Result<Vec<DocumentRecord>, ProviderError>;
}

/// Score service boundary.
pub trait ScoreProvider: Send + Sync {
    fn latest_score(&self, student: &StudentId) -> Result<Option<ScoreRecord>, ProviderError>;
}

/// Report service boundary: count of generated reports.
pub trait ReportProvider: Send + Sync {
    fn report_count(&self, student: &StudentId) -> Result<u32, ProviderError>;
}

/// Collaborator failure. Every variant is recoverable: the snapshot
/// assembly substitutes an absent value and keeps going.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("record not found")]
    NotFound,
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
    #[error("malformed collaborator response: {0}")]
    Malformed(String),
}
