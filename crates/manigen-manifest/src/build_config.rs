//! `build.yaml` parsing
//!
//! The same file serves two purposes: on the default branch it carries the
//! plugin identity published at the top of the manifest, and at each release
//! tag it carries the host ABI that release was built against. Only the
//! fields below are read; the rest of the build description is ignored.

use crate::errors::ManifestError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Plugin identity fields copied into the manifest header
///
/// Fields missing from the YAML stay `None` and are left out of the output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, deserialize_with = "scalar_string", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        rename = "imageUrl",
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
}

impl GlobalConfig {
    pub fn from_yaml(content: &str) -> Result<Self, ManifestError> {
        parse_yaml(content)
    }
}

/// Per-release build settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BuildConfig {
    #[serde(rename = "targetAbi", default, deserialize_with = "scalar_string")]
    pub target_abi: Option<String>,
}

impl BuildConfig {
    pub fn from_yaml(content: &str) -> Result<Self, ManifestError> {
        parse_yaml(content)
    }
}

// An empty document parses as null and yields the all-absent default.
fn parse_yaml<T>(content: &str) -> Result<T, ManifestError>
where
    T: DeserializeOwned + Default,
{
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_yaml::from_value(value)?)
}

/// Accept any YAML scalar as a string
///
/// `targetAbi: 10.8` or `guid: 1234` are common in hand-written files and
/// would otherwise fail a plain `String` field. Null, sequences and mappings
/// are treated as absent.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }))
}
