//! Manigen Manifest Types
//!
//! Types for the published plugin manifest and for the `build.yaml` documents
//! it is assembled from, plus the JSON writer for the final `manifest.json`.
//!
//! The manifest lists global plugin identity fields followed by one entry per
//! published release, in the order the releases were supplied.

pub mod build_config;
pub mod errors;
pub mod manifest_writer;
pub mod types;

pub use build_config::{BuildConfig, GlobalConfig};
pub use errors::ManifestError;
pub use manifest_writer::{read_from_path, to_json_bytes, write_to_path};
pub use types::{parse_checksum, version_from_tag, Manifest, VersionEntry, SENTINEL_CHECKSUM};
