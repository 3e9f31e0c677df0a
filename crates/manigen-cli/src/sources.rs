//! Where build configs come from
//!
//! The global build config is looked up in an ordered list of sources; the
//! first one that yields content wins. Every lookup reports plain presence or
//! absence, failures are logged here and never propagate.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use manigen_config::{Settings, CONFIG_FILE, DEFAULT_BRANCH};
use manigen_github::RepositoryApi;

use crate::logger;

/// One place a build config may be read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file in the repository at a branch or tag
    Remote { path: String, git_ref: String },
    /// A file on the local filesystem
    Local(PathBuf),
}

impl ConfigSource {
    /// Sources for the global plugin metadata, in lookup order
    pub fn global_sources(settings: &Settings) -> Vec<ConfigSource> {
        vec![
            ConfigSource::Remote {
                path: CONFIG_FILE.to_string(),
                git_ref: DEFAULT_BRANCH.to_string(),
            },
            ConfigSource::Local(settings.local_config_path()),
        ]
    }

    /// The build config at a release tag
    pub fn at_tag(tag: &str) -> ConfigSource {
        ConfigSource::Remote {
            path: CONFIG_FILE.to_string(),
            git_ref: tag.to_string(),
        }
    }

    /// Read this source; `None` when it has nothing to offer
    pub fn fetch<A>(&self, api: &A) -> Option<String>
    where
        A: RepositoryApi + ?Sized,
    {
        match self {
            ConfigSource::Remote { path, git_ref } => fetch_remote_file(api, path, git_ref),
            ConfigSource::Local(path) => match fs::read_to_string(path) {
                Ok(content) if !content.trim().is_empty() => Some(content),
                Ok(_) => {
                    logger::warn(&format!("{} is empty", path.display()));
                    None
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    logger::debug(&format!("{} does not exist", path.display()));
                    None
                }
                Err(e) => {
                    logger::warn(&format!("Failed to read {}: {}", path.display(), e));
                    None
                }
            },
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Remote { path, git_ref } => write!(f, "{} at {}", path, git_ref),
            ConfigSource::Local(path) => write!(f, "local {}", path.display()),
        }
    }
}

/// Fetch a repository file at `git_ref`
///
/// Not-found and every transport or decoding failure come back as `None`;
/// failures are logged.
pub fn fetch_remote_file<A>(api: &A, path: &str, git_ref: &str) -> Option<String>
where
    A: RepositoryApi + ?Sized,
{
    match api.file_content(path, git_ref) {
        Ok(Some(content)) => Some(content),
        Ok(None) => {
            logger::info(&format!("File not found: {} at {}", path, git_ref));
            None
        }
        Err(e) => {
            logger::warn(&format!("Error fetching {} from {}: {}", path, git_ref, e));
            None
        }
    }
}

/// First source in `sources` that yields content, with that content
pub fn resolve_first<'a, A>(
    sources: &'a [ConfigSource],
    api: &A,
) -> Option<(&'a ConfigSource, String)>
where
    A: RepositoryApi + ?Sized,
{
    sources.iter().find_map(|source| {
        logger::step(&format!("Trying {}", source));
        source.fetch(api).map(|content| (source, content))
    })
}
