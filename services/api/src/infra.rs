use career_ai::journeys::readiness::{
    DocumentProvider, DocumentRecord, ProfileProvider, ProviderError, ReportProvider,
    ScoreBreakdown, ScoreProvider, ScoreRecord, StudentId, VerificationStatus,
};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Everything the in-memory campus knows about one student.
#[derive(Debug, Clone, Default)]
pub(crate) struct StudentRecord {
    pub(crate) has_profile: bool,
    pub(crate) documents: Vec<DocumentRecord>,
    pub(crate) score: Option<ScoreRecord>,
    pub(crate) report_count: u32,
}

/// In-memory stand-in for the four collaborator services. Real
/// deployments swap this for HTTP-backed providers; the engine never
/// knows the difference.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCampus {
    records: Arc<Mutex<HashMap<String, StudentRecord>>>,
}

impl InMemoryCampus {
    pub(crate) fn enroll(&self, id: &str, record: StudentRecord) {
        self.records
            .lock()
            .expect("campus mutex poisoned")
            .insert(id.to_string(), record);
    }

    fn record(&self, student: &StudentId) -> StudentRecord {
        self.records
            .lock()
            .expect("campus mutex poisoned")
            .get(&student.0)
            .cloned()
            .unwrap_or_default()
    }
}

impl ProfileProvider for InMemoryCampus {
    fn has_profile(&self, student: &StudentId) -> Result<bool, ProviderError> {
        Ok(self.record(student).has_profile)
    }
}

impl DocumentProvider for InMemoryCampus {
    fn documents_for(&self, student: &StudentId) -> Result<Vec<DocumentRecord>, ProviderError> {
        Ok(self.record(student).documents)
    }
}

impl ScoreProvider for InMemoryCampus {
    fn latest_score(&self, student: &StudentId) -> Result<Option<ScoreRecord>, ProviderError> {
        Ok(self.record(student).score)
    }
}

impl ReportProvider for InMemoryCampus {
    fn report_count(&self, student: &StudentId) -> Result<u32, ProviderError> {
        Ok(self.record(student).report_count)
    }
}

/// Campus preloaded with three students at different journey stages, used
/// by the CLI demo and `serve --demo-data`.
pub(crate) fn demo_campus() -> InMemoryCampus {
    let campus = InMemoryCampus::default();

    // fresh signup, nothing on file
    campus.enroll("tariq", StudentRecord::default());

    // mid-journey: profile and documents in, score pending
    campus.enroll(
        "leila",
        StudentRecord {
            has_profile: true,
            documents: vec![
                demo_document("bsc-transcript.pdf", VerificationStatus::Verified, 2026, 6, 12),
                demo_document("aws-certificate.pdf", VerificationStatus::Pending, 2026, 7, 3),
            ],
            score: None,
            report_count: 0,
        },
    );

    // nearly done: scored from a breakdown and one report generated
    campus.enroll(
        "sofia",
        StudentRecord {
            has_profile: true,
            documents: vec![
                demo_document("msc-transcript.pdf", VerificationStatus::Verified, 2026, 5, 20),
                demo_document("internship-letter.pdf", VerificationStatus::Verified, 2026, 5, 28),
            ],
            score: Some(ScoreRecord {
                score: None,
                breakdown: Some(demo_breakdown()),
                generated_on: NaiveDate::from_ymd_opt(2026, 6, 1),
            }),
            report_count: 1,
        },
    );

    campus
}

fn demo_document(
    name: &str,
    verification_status: VerificationStatus,
    year: i32,
    month: u32,
    day: u32,
) -> DocumentRecord {
    DocumentRecord {
        name: name.to_string(),
        verification_status,
        uploaded_on: NaiveDate::from_ymd_opt(year, month, day),
    }
}

fn demo_breakdown() -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown {
        soft_skills: Some(0.82),
        skill_coverage: Some(0.74),
        practical_evidence: Some(0.6),
        market_factor: Some(0.71),
        meta_factor: Some(0.66),
        ..ScoreBreakdown::default()
    };
    breakdown
        .diagnostics
        .insert("evidence_confidence".to_string(), 0.78);
    breakdown
        .diagnostics
        .insert("data_completeness".to_string(), 0.9);
    breakdown
}
