//! Manifest generation pipeline
//!
//! Strictly sequential: list releases, resolve the global plugin metadata,
//! then enrich each published release in API order. A release that cannot
//! produce a complete entry is skipped with a warning; only the release list,
//! the global metadata and the final write can fail the run.

use manigen_config::{Settings, ARCHIVE_SUFFIX, CHECKSUM_SUFFIX, CONFIG_FILE};
use manigen_github::{Release, RepositoryApi};
use manigen_manifest::{
    parse_checksum, version_from_tag, write_to_path, BuildConfig, GlobalConfig, Manifest,
    VersionEntry, SENTINEL_CHECKSUM,
};

use crate::errors::ManigenError;
use crate::logger;
use crate::sources::{resolve_first, ConfigSource};

/// Generate the manifest and write it to the configured output path
///
/// Returns the number of versions written.
pub fn run<A>(settings: &Settings, api: &A) -> Result<usize, ManigenError>
where
    A: RepositoryApi + ?Sized,
{
    let manifest = generate(settings, api)?;
    let output_path = settings.output_path();
    write_to_path(&manifest, &output_path)?;
    Ok(manifest.versions.len())
}

/// Build the manifest in memory
pub fn generate<A>(settings: &Settings, api: &A) -> Result<Manifest, ManigenError>
where
    A: RepositoryApi + ?Sized,
{
    logger::info(&format!("Generating manifest for {}...", settings.repository));

    logger::spinner_start(&format!("Fetching releases for {}", settings.repository));
    let releases = match api.list_releases() {
        Ok(releases) => {
            logger::spinner_success(&format!("Found {} releases", releases.len()));
            releases
        }
        Err(source) => {
            logger::spinner_error("Failed to fetch releases");
            return Err(ManigenError::Releases {
                repository: settings.repository.to_string(),
                source,
            });
        }
    };

    let global = resolve_global_config(settings, api)?;
    let mut manifest = Manifest::new(global);

    for release in &releases {
        if let Some(entry) = process_release(release, api) {
            manifest.versions.push(entry);
        }
    }

    Ok(manifest)
}

/// Global plugin metadata from the first source that has it
pub fn resolve_global_config<A>(settings: &Settings, api: &A) -> Result<GlobalConfig, ManigenError>
where
    A: RepositoryApi + ?Sized,
{
    let sources = ConfigSource::global_sources(settings);
    let Some((source, content)) = resolve_first(&sources, api) else {
        return Err(ManigenError::GlobalConfigUnavailable(CONFIG_FILE.to_string()));
    };
    logger::info(&format!("Using global metadata from {}", source));

    GlobalConfig::from_yaml(&content).map_err(|e| ManigenError::GlobalConfigInvalid {
        origin: source.to_string(),
        source: e,
    })
}

/// Version entry for one release, or `None` when the release is skipped
pub fn process_release<A>(release: &Release, api: &A) -> Option<VersionEntry>
where
    A: RepositoryApi + ?Sized,
{
    let tag = release.tag_name.as_str();
    if !release.is_published() {
        logger::debug(&format!("Skipping {}: draft or prerelease", tag));
        return None;
    }

    let version = version_from_tag(tag);
    logger::info(&format!("Processing release {} (version {})...", tag, version));

    let Some(content) = ConfigSource::at_tag(tag).fetch(api) else {
        logger::warn(&format!("{} not found for tag {}. Skipping.", CONFIG_FILE, tag));
        return None;
    };
    let build_config = match BuildConfig::from_yaml(&content) {
        Ok(config) => config,
        Err(e) => {
            logger::warn(&format!("Invalid {} for tag {}: {}. Skipping.", CONFIG_FILE, tag, e));
            return None;
        }
    };

    let Some(archive) = release.find_asset(ARCHIVE_SUFFIX) else {
        logger::warn(&format!("Skipping {}: no {} asset found.", tag, ARCHIVE_SUFFIX));
        return None;
    };

    Some(VersionEntry {
        version: version.to_string(),
        changelog: release.body.clone(),
        target_abi: build_config.target_abi,
        source_url: archive.browser_download_url.clone(),
        checksum: resolve_checksum(release, api),
        timestamp: release.published_at.clone(),
    })
}

/// Checksum published next to the archive, or the sentinel
pub fn resolve_checksum<A>(release: &Release, api: &A) -> String
where
    A: RepositoryApi + ?Sized,
{
    let Some(asset) = release.find_asset(CHECKSUM_SUFFIX) else {
        logger::warn(&format!(
            "No {} asset found for {}.",
            CHECKSUM_SUFFIX, release.tag_name
        ));
        return SENTINEL_CHECKSUM.to_string();
    };
    logger::debug(&format!("Found checksum asset: {}", asset.name));

    match api.download_text(&asset.browser_download_url) {
        Ok(text) => match parse_checksum(&text) {
            Some(checksum) => checksum.to_string(),
            None => {
                logger::warn(&format!("Checksum asset {} is empty", asset.name));
                SENTINEL_CHECKSUM.to_string()
            }
        },
        Err(e) => {
            logger::warn(&format!("Failed to read checksum asset {}: {}", asset.name, e));
            SENTINEL_CHECKSUM.to_string()
        }
    }
}
