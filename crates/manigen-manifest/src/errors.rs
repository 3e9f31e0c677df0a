use std::io;
use thiserror::Error;

/// Errors that can occur while reading configs or writing the manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse build config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to serialize manifest: {0}")]
    Json(#[from] serde_json::Error),
}
