use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::State;
use axum::{Json, Router, routing::post};
use sanctuary_screening::{AssessmentRecord, ScreeningOutcome};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(assess))
}

/// Runs one assessment. Classifier failures come back as the
/// `unavailable` outcome with status 200: the warning is page content,
/// not a transport error.
#[tracing::instrument(name = "POST /assess", skip(state, record))]
pub async fn assess(
    State(state): State<AppState>,
    Json(record): Json<AssessmentRecord>,
) -> Result<Json<ScreeningOutcome>, ApiError> {
    record
        .validate()
        .map_err(|err| ApiError::bad_request(err.to_string()))?;

    Ok(Json(state.evaluator.evaluate(&record)))
}
