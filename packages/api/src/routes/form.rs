use crate::error::ApiError;
use crate::state::AppState;
use axum::response::Html;
use axum::{Router, routing::get};
use minijinja::{Environment, context};
use sanctuary_screening::{form, messages};

const FORM_TEMPLATE: &str = include_str!("../../templates/form.html");

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(form_page))
}

/// The interactive assessment form, rendered straight from the field
/// definitions.
#[tracing::instrument(name = "GET /")]
pub async fn form_page() -> Result<Html<String>, ApiError> {
    let mut env = Environment::new();
    env.add_template("form", FORM_TEMPLATE)
        .map_err(|err| ApiError::internal(err.to_string()))?;

    let html = env
        .get_template("form")
        .and_then(|template| {
            template.render(context! {
                fields => form::fields(),
                disclaimer => messages::DISCLAIMER,
            })
        })
        .map_err(|err| ApiError::internal(err.to_string()))?;

    Ok(Html(html))
}
