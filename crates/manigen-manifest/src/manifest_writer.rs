//! Manifest writer
//!
//! The manifest is rendered as JSON indented with four spaces, keys in
//! declaration order. Writing goes through a temporary sibling file that is
//! renamed over the target, so a reader never sees a half-written manifest.

use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::ManifestError;
use crate::types::Manifest;

const INDENT: &[u8] = b"    ";

/// Render the manifest as indented JSON
pub fn to_json_bytes(manifest: &Manifest) -> Result<Vec<u8>, ManifestError> {
    let mut buffer = Vec::with_capacity(4 * 1024);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    manifest.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Write the manifest to `output_path`, replacing any existing file
pub fn write_to_path(manifest: &Manifest, output_path: &Path) -> Result<(), ManifestError> {
    debug!("Writing manifest to: {:?}", output_path);

    let content = to_json_bytes(manifest)?;

    let temp_path = output_path.with_extension("json.tmp");
    fs::write(&temp_path, &content)?;
    if let Err(err) = fs::rename(&temp_path, output_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err.into());
    }

    info!("Manifest written to: {:?}", output_path);
    info!("Total versions: {}", manifest.versions.len());

    Ok(())
}

/// Read a manifest back from disk (primarily for testing)
pub fn read_from_path(manifest_path: &Path) -> Result<Manifest, ManifestError> {
    debug!("Reading manifest from: {:?}", manifest_path);

    let content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&content)?;
    Ok(manifest)
}
