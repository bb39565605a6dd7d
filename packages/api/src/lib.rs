//! HTTP surface of the screening service: the form page plus a small JSON
//! API under `/api/v1`.

use axum::Router;
use tower_http::cors::CorsLayer;

pub mod error;
pub mod routes;
pub mod state;

pub use axum;

use state::AppState;

pub fn construct_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/health", routes::health::routes())
        .nest("/schema", routes::schema::routes())
        .nest("/model", routes::model::routes())
        .nest("/assess", routes::assess::routes());

    Router::new()
        .merge(routes::form::routes())
        .nest("/api/v1", api)
        .with_state(state)
        .layer(CorsLayer::permissive())
}
