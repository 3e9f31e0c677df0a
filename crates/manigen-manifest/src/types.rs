use crate::build_config::GlobalConfig;
use serde::{Deserialize, Serialize};

/// Checksum published when a release ships no checksum file
pub const SENTINEL_CHECKSUM: &str = "00000000000000000000000000000000";

/// Top-level plugin manifest
///
/// Serialized as the global identity fields followed by `versions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(flatten)]
    pub global: GlobalConfig,
    #[serde(default)]
    pub versions: Vec<VersionEntry>,
}

impl Manifest {
    pub fn new(global: GlobalConfig) -> Self {
        Manifest {
            global,
            versions: Vec::new(),
        }
    }
}

/// One published plugin version
///
/// Every key is always written; `changelog`, `targetAbi` and `timestamp` are
/// `null` when the source did not provide them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionEntry {
    pub version: String,
    pub changelog: Option<String>,
    pub target_abi: Option<String>,
    pub source_url: String,
    pub checksum: String,
    pub timestamp: Option<String>,
}

/// Strip the leading `v` from a release tag
pub fn version_from_tag(tag: &str) -> &str {
    tag.trim_start_matches('v')
}

/// First whitespace-delimited token of a checksum file
///
/// Handles both the bare `hash` form and the `md5sum` style `hash  filename`.
pub fn parse_checksum(content: &str) -> Option<&str> {
    content.split_whitespace().next()
}
