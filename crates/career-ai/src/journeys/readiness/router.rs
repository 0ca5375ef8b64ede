use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::StudentId;
use super::providers::{DocumentProvider, ProfileProvider, ReportProvider, ScoreProvider};
use super::service::JourneyService;
use crate::journeys::roster::RosterImporter;

/// Router builder exposing the journey and score endpoints.
pub fn journey_router<P, D, S, R>(service: Arc<JourneyService<P, D, S, R>>) -> Router
where
    P: ProfileProvider + 'static,
    D: DocumentProvider + 'static,
    S: ScoreProvider + 'static,
    R: ReportProvider + 'static,
{
    Router::new()
        .route(
            "/api/v1/students/:student_id/journey",
            get(journey_status_handler::<P, D, S, R>),
        )
        .route(
            "/api/v1/students/:student_id/journey/refresh",
            post(journey_refresh_handler::<P, D, S, R>),
        )
        .route(
            "/api/v1/students/:student_id/score",
            get(score_status_handler::<P, D, S, R>),
        )
        .route("/api/v1/journey/roster", post(roster_handler::<P, D, S, R>))
        .with_state(service)
}

pub(crate) async fn journey_status_handler<P, D, S, R>(
    State(service): State<Arc<JourneyService<P, D, S, R>>>,
    Path(student_id): Path<String>,
) -> Response
where
    P: ProfileProvider + 'static,
    D: DocumentProvider + 'static,
    S: ScoreProvider + 'static,
    R: ReportProvider + 'static,
{
    let student = StudentId(student_id);
    let view = service.status(&student);
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn journey_refresh_handler<P, D, S, R>(
    State(service): State<Arc<JourneyService<P, D, S, R>>>,
    Path(student_id): Path<String>,
) -> Response
where
    P: ProfileProvider + 'static,
    D: DocumentProvider + 'static,
    S: ScoreProvider + 'static,
    R: ReportProvider + 'static,
{
    let student = StudentId(student_id);
    let summary = service.refresh(&student);
    (StatusCode::OK, Json(summary)).into_response()
}

pub(crate) async fn score_status_handler<P, D, S, R>(
    State(service): State<Arc<JourneyService<P, D, S, R>>>,
    Path(student_id): Path<String>,
) -> Response
where
    P: ProfileProvider + 'static,
    D: DocumentProvider + 'static,
    S: ScoreProvider + 'static,
    R: ReportProvider + 'static,
{
    let student = StudentId(student_id);
    let view = service.score_status(&student);
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn roster_handler<P, D, S, R>(
    State(service): State<Arc<JourneyService<P, D, S, R>>>,
    body: String,
) -> Response
where
    P: ProfileProvider + 'static,
    D: DocumentProvider + 'static,
    S: ScoreProvider + 'static,
    R: ReportProvider + 'static,
{
    match RosterImporter::from_reader(Cursor::new(body.into_bytes())) {
        Ok(entries) => {
            let students = service.roster_overview(&entries);
            let payload = json!({
                "count": students.len(),
                "students": students,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}
