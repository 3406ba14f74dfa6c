//! Shared application state for the web server.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use epiwatch_context::ContextDirectory;
use epiwatch_model::{ModelArtifact, Scorer};
use epiwatch_store::RecordStore;

/// Events pushed to connected clients via SSE.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// An assessment finished and was recorded
    AssessmentCompleted {
        region: String,
        risk_level: String,
        probability: f64,
    },
    /// A model artifact was loaded
    ModelLoaded { family: String, version: String },
}

impl AppEvent {
    /// SSE event name, so clients can addEventListener per kind.
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::AssessmentCompleted { .. } => "assessment_completed",
            AppEvent::ModelLoaded { .. } => "model_loaded",
        }
    }
}

/// A scorer together with its artifact metadata.
pub struct LoadedModel {
    pub scorer: Arc<dyn Scorer>,
    pub family: &'static str,
    pub version: String,
    pub trained_at: Option<DateTime<Utc>>,
}

impl LoadedModel {
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        let family = artifact.family();
        let version = artifact.version.clone();
        let trained_at = artifact.trained_at;
        Self {
            scorer: Arc::new(artifact),
            family,
            version,
            trained_at,
        }
    }
}

/// Shared state injected into every Axum handler.
pub struct AppState {
    /// None until an operator installs a model artifact
    pub model: Option<LoadedModel>,
    pub directory: ContextDirectory,
    pub store: Arc<dyn RecordStore>,
    /// Broadcast channel for SSE push events
    pub event_tx: broadcast::Sender<AppEvent>,
}

impl AppState {
    pub fn new(
        model: Option<LoadedModel>,
        directory: ContextDirectory,
        store: Arc<dyn RecordStore>,
    ) -> Self {
        let (event_tx, _) = broadcast::channel(256);
        Self {
            model,
            directory,
            store,
            event_tx,
        }
    }

    pub fn scorer(&self) -> Option<&dyn Scorer> {
        self.model.as_ref().map(|m| m.scorer.as_ref())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.event_tx.subscribe()
    }
}

pub type SharedState = Arc<AppState>;
