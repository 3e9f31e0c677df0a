//! GitHub API payloads
//!
//! Only the fields manigen reads are modeled; everything else in the API
//! response is ignored.

use base64::Engine;
use serde::Deserialize;

use crate::errors::GithubError;

/// GitHub release metadata
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

impl Release {
    /// Neither a draft nor a prerelease
    pub fn is_published(&self) -> bool {
        !self.draft && !self.prerelease
    }

    /// First asset whose file name ends with `suffix`
    pub fn find_asset(&self, suffix: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.name.ends_with(suffix))
    }
}

/// GitHub release asset
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
}

/// Response of the repository contents endpoint for a single file
#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct ContentResponse {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

/// Decode the base64 `content` field of a contents response
///
/// GitHub wraps the payload at 60 columns, so whitespace is dropped first.
pub(crate) fn decode_content(content: &str) -> Result<String, GithubError> {
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = base64::engine::general_purpose::STANDARD.decode(compact)?;
    Ok(String::from_utf8(bytes)?)
}
