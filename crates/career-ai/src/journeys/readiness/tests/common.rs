use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::journeys::readiness::domain::{
    ReadinessSnapshot, ScoreBreakdown, StudentId, VerificationStatus,
};
use crate::journeys::readiness::providers::{
    DocumentProvider, DocumentRecord, ProfileProvider, ProviderError, ReportProvider,
    ScoreProvider, ScoreRecord,
};
use crate::journeys::readiness::service::JourneyService;

pub(super) fn student(id: &str) -> StudentId {
    StudentId(id.to_string())
}

pub(super) fn snapshot(
    has_profile: bool,
    document_count: u32,
    composite_score: Option<u8>,
    report_count: u32,
) -> ReadinessSnapshot {
    ReadinessSnapshot {
        has_profile,
        document_count,
        verified_document_count: 0,
        composite_score,
        report_count,
    }
}

pub(super) fn breakdown(
    soft_skills: Option<f32>,
    skill_coverage: Option<f32>,
    practical_evidence: Option<f32>,
) -> ScoreBreakdown {
    ScoreBreakdown {
        soft_skills,
        skill_coverage,
        practical_evidence,
        ..ScoreBreakdown::default()
    }
}

pub(super) fn verified_document(name: &str) -> DocumentRecord {
    DocumentRecord {
        name: name.to_string(),
        verification_status: VerificationStatus::Verified,
        uploaded_on: None,
    }
}

pub(super) fn pending_document(name: &str) -> DocumentRecord {
    DocumentRecord {
        name: name.to_string(),
        verification_status: VerificationStatus::Pending,
        uploaded_on: None,
    }
}

/// Seed describing one student held by the in-memory collaborator double.
#[derive(Debug, Clone, Default)]
pub(super) struct StudentSeed {
    pub(super) has_profile: bool,
    pub(super) documents: Vec<DocumentRecord>,
    pub(super) score: Option<ScoreRecord>,
    pub(super) report_count: u32,
}

/// In-memory stand-in for all four collaborator services.
#[derive(Default, Clone)]
pub(super) struct MemoryCampus {
    students: Arc<Mutex<HashMap<String, StudentSeed>>>,
}

impl MemoryCampus {
    pub(super) fn enroll(&self, id: &str, seed: StudentSeed) {
        self.students
            .lock()
            .expect("campus mutex poisoned")
            .insert(id.to_string(), seed);
    }

    fn seed(&self, student: &StudentId) -> StudentSeed {
        self.students
            .lock()
            .expect("campus mutex poisoned")
            .get(&student.0)
            .cloned()
            .unwrap_or_default()
    }
}

impl ProfileProvider for MemoryCampus {
    fn has_profile(&self, student: &StudentId) -> Result<bool, ProviderError> {
        Ok(self.seed(student).has_profile)
    }
}

impl DocumentProvider for MemoryCampus {
    fn documents_for(&self, student: &StudentId) -> Result<Vec<DocumentRecord>, ProviderError> {
        Ok(self.seed(student).documents)
    }
}

impl ScoreProvider for MemoryCampus {
    fn latest_score(&self, student: &StudentId) -> Result<Option<ScoreRecord>, ProviderError> {
        Ok(self.seed(student).score)
    }
}

impl ReportProvider for MemoryCampus {
    fn report_count(&self, student: &StudentId) -> Result<u32, ProviderError> {
        Ok(self.seed(student).report_count)
    }
}

/// Collaborator double whose every fetch fails, for degradation tests.
pub(super) struct OfflineCampus;

impl ProfileProvider for OfflineCampus {
    fn has_profile(&self, _student: &StudentId) -> Result<bool, ProviderError> {
        Err(ProviderError::Unavailable("profile service offline".to_string()))
    }
}

impl DocumentProvider for OfflineCampus {
    fn documents_for(&self, _student: &StudentId) -> Result<Vec<DocumentRecord>, ProviderError> {
        Err(ProviderError::Unavailable("document service offline".to_string()))
    }
}

impl ScoreProvider for OfflineCampus {
    fn latest_score(&self, _student: &StudentId) -> Result<Option<ScoreRecord>, ProviderError> {
        Err(ProviderError::Unavailable("score service offline".to_string()))
    }
}

impl ReportProvider for OfflineCampus {
    fn report_count(&self, _student: &StudentId) -> Result<u32, ProviderError> {
        Err(ProviderError::NotFound)
    }
}

pub(super) type CampusService = JourneyService<MemoryCampus, MemoryCampus, MemoryCampus, MemoryCampus>;

pub(super) fn campus_service() -> (CampusService, MemoryCampus) {
    let campus = MemoryCampus::default();
    let shared = Arc::new(campus.clone());
    let service = JourneyService::new(shared.clone(), shared.clone(), shared.clone(), shared);
    (service, campus)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
