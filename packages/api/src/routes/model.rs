use crate::state::AppState;
use axum::extract::State;
use axum::{Json, Router, routing::get};
use sanctuary_screening::ModelInfo;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_model))
}

#[tracing::instrument(name = "GET /model", skip(state))]
pub async fn get_model(State(state): State<AppState>) -> Json<ModelInfo> {
    Json(state.model_info.clone())
}
