//! Epiwatch Web Server
//!
//! Run with: cargo run -p epiwatch-web

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use epiwatch_context::ContextDirectory;
use epiwatch_model::ModelArtifact;
use epiwatch_store::MemoryRecordStore;
use epiwatch_web::config::Config;
use epiwatch_web::state::{AppEvent, AppState, LoadedModel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting Epiwatch Web Server...");

    let config = Config::load()?;

    // A missing artifact is tolerated: the service runs and reports 503
    // on assessments until an operator installs a model.
    let model = ModelArtifact::load_if_present(&config.model.artifact_path)?
        .map(LoadedModel::from_artifact);

    let directory = match &config.context.directory_path {
        Some(path) => ContextDirectory::load(path)?,
        None => ContextDirectory::builtin(),
    };

    let store = Arc::new(MemoryRecordStore::new());
    let state = AppState::new(model, directory, store);

    if let Some(model) = &state.model {
        let _ = state.event_tx.send(AppEvent::ModelLoaded {
            family: model.family.to_string(),
            version: model.version.clone(),
        });
    }

    let app = epiwatch_web::router::build_router(state);

    let addr: SocketAddr = config.server.bind.parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
