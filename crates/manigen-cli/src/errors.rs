//! Error types for the manigen binary
//!
//! Everything here is fatal: the run stops and no manifest is written.
//! Per-release problems never surface as errors; they are logged and the
//! release is skipped.

use manigen_config::ConfigError;
use manigen_github::GithubError;
use manigen_manifest::ManifestError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManigenError {
    #[error("Missing required environment configuration")]
    Config(#[from] ConfigError),

    #[error("Failed to fetch releases for {repository}: {source}")]
    Releases {
        repository: String,
        #[source]
        source: GithubError,
    },

    #[error("Could not find {0} in the repository or the working directory")]
    GlobalConfigUnavailable(String),

    #[error("Invalid {origin}: {source}")]
    GlobalConfigInvalid {
        origin: String,
        #[source]
        source: ManifestError,
    },

    #[error("Failed to write manifest: {0}")]
    Manifest(#[from] ManifestError),
}
