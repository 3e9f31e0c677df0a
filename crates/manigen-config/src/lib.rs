//! Settings for the manigen manifest generator
//!
//! Everything the pipeline needs to know about its environment is read once,
//! at the entry point, into a [`Settings`] value that is then passed down
//! explicitly. Nothing below `main` looks at the process environment.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Repository identifier in `owner/name` form
pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";
/// Access token sent with every API request
pub const ENV_TOKEN: &str = "GITHUB_TOKEN";
/// Optional API base URL (GitHub Actions exports this one too)
pub const ENV_API_URL: &str = "GITHUB_API_URL";
/// Optional path of a plain-text log file
pub const ENV_LOG_FILE: &str = "MANIGEN_LOG_FILE";

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Plugin build description, read both from the repository and locally
pub const CONFIG_FILE: &str = "build.yaml";
/// Branch holding the current global plugin metadata
pub const DEFAULT_BRANCH: &str = "main";
/// Output written into the working directory
pub const OUTPUT_FILE: &str = "manifest.json";
/// Packaged plugin archive
pub const ARCHIVE_SUFFIX: &str = ".zip";
/// Checksum companion of the archive
pub const CHECKSUM_SUFFIX: &str = ".md5";

pub const USER_AGENT: &str = concat!("manigen/", env!("CARGO_PKG_VERSION"));

/// Errors raised while building [`Settings`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("GITHUB_REPOSITORY must be in owner/name form, got '{0}'")]
    InvalidRepository(String),
}

/// A GitHub repository, split into owner and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    /// Parse an `owner/name` identifier
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let value = value.trim();
        match value.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Repository {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(ConfigError::InvalidRepository(value.to_string())),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Resolved run settings
#[derive(Clone)]
pub struct Settings {
    pub repository: Repository,
    pub token: String,
    /// API base URL without trailing slash
    pub api_url: String,
    /// Directory holding the local config fallback and the output file
    pub work_dir: PathBuf,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Build settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    ///
    /// Empty values count as unset. Both the repository and the token are
    /// checked before anything else happens, so a misconfigured run never
    /// reaches the network.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let repository = get(ENV_REPOSITORY).ok_or(ConfigError::Missing(ENV_REPOSITORY))?;
        let token = get(ENV_TOKEN).ok_or(ConfigError::Missing(ENV_TOKEN))?;
        let repository = Repository::parse(&repository)?;

        let api_url = get(ENV_API_URL)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Settings {
            repository,
            token,
            api_url,
            work_dir: PathBuf::from("."),
            log_file: get(ENV_LOG_FILE).map(PathBuf::from),
        })
    }

    /// Anchor local reads and the output write at `dir`
    pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = dir.into();
        self
    }

    /// Local fallback copy of the build config
    pub fn local_config_path(&self) -> PathBuf {
        self.work_dir.join(CONFIG_FILE)
    }

    pub fn output_path(&self) -> PathBuf {
        self.work_dir.join(OUTPUT_FILE)
    }
}

// Keeps the token out of debug output and logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("repository", &self.repository)
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("work_dir", &self.work_dir)
            .field("log_file", &self.log_file)
            .finish()
    }
}
