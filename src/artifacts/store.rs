use crate::artifacts::{LinearModel, OneHotEncoder, StandardScaler};
use crate::config::ArtifactSettings;
use serde::de::DeserializeOwned;
use std::fs;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while loading fitted artifacts from storage
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The three fitted artifacts, loaded once at startup and shared read-only
/// across requests. Nothing mutates them after load, so `Arc` sharing needs
/// no locking.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    pub encoder: Arc<OneHotEncoder>,
    pub scaler: Arc<StandardScaler>,
    pub model: Arc<LinearModel>,
}

impl ArtifactStore {
    /// Load all three artifacts from their configured paths.
    /// A missing or corrupt artifact is fatal to the caller; nothing retries.
    pub fn load(settings: &ArtifactSettings) -> Result<Self, ArtifactError> {
        Ok(Self {
            encoder: Arc::new(load_json(&settings.encoder_path)?),
            scaler: Arc::new(load_json(&settings.scaler_path)?),
            model: Arc::new(load_json(&settings.model_path)?),
        })
    }
}

fn load_json<T: DeserializeOwned>(path: &str) -> Result<T, ArtifactError> {
    let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_string(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: path.to_string(),
        source,
    })
}
