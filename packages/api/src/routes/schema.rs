use crate::state::AppState;
use axum::{Json, Router, routing::get};
use sanctuary_screening::form::{self, FieldSpec};
use sanctuary_screening::messages;
use schemars::JsonSchema;
use serde::Serialize;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_schema))
}

/// Machine-readable description of the assessment form.
#[derive(Serialize, JsonSchema)]
pub struct FormDefinition {
    pub fields: Vec<FieldSpec>,
    pub disclaimer: &'static str,
}

#[tracing::instrument(name = "GET /schema")]
pub async fn get_schema() -> Json<FormDefinition> {
    Json(FormDefinition {
        fields: form::fields(),
        disclaimer: messages::DISCLAIMER,
    })
}
