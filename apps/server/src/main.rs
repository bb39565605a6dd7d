#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use dotenv::dotenv;
use sanctuary_api::{construct_router, state::State};
use sanctuary_screening::{ArtifactClassifier, RiskEvaluator, ScreeningArtifact};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Sanctuary Screening Service");

    let config = config::Config::from_env()?;
    tracing::info!(
        "Loaded configuration: model_path={}",
        config.model_path.display()
    );

    // One-time blocking load; the artifact is read-only for the rest of
    // the process lifetime.
    let artifact = ScreeningArtifact::load(&config.model_path)?;
    tracing::info!("Loaded screening model: {}", artifact.model);

    let model_info = artifact.info();
    let evaluator = RiskEvaluator::new(Arc::new(ArtifactClassifier::new(artifact)));
    let state = Arc::new(State::new(evaluator, model_info));

    let app = construct_router(state);

    let addr = format!("{}:{}", config.bind_addr, config.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
