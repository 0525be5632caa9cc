//! Feed envelope and catalog entry types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Treat both a missing key and an explicit `null` as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One page of the datagrepper `/raw` endpoint
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Messages {
    /// Query echo, kept as-is
    #[serde(default)]
    pub arguments: serde_json::Value,
    #[serde(default)]
    pub count: u64,
    /// Total number of pages for the query
    pub pages: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub raw_messages: Vec<RawMessage>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawMessage {
    #[serde(default)]
    pub msg_id: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    pub msg: IndexBuiltMessage,
}

/// Body of an "index built" notification
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IndexBuiltMessage {
    pub artifact: Artifact,
    pub index: Index,
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Artifact {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nvr: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Index {
    #[serde(default, deserialize_with = "null_as_default")]
    pub added_bundle_images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub index_image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ocp_version: String,
}

/// Latest known index image for one (OCP version, operator, operator version)
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogEntry {
    #[serde(rename = "operator")]
    pub component: String,
    #[serde(rename = "bundleImage")]
    pub component_image: String,
    #[serde(rename = "bundleRelease")]
    pub component_release: String,
    #[serde(rename = "bundleVersion")]
    pub component_version: String,
    #[serde(rename = "ocpVersion")]
    pub platform_version: String,
    #[serde(rename = "indexImage")]
    pub index_image: String,
    #[serde(rename = "indexNumber")]
    pub index_number: String,
    #[serde(rename = "generatedAt")]
    pub generated_at: DateTime<Utc>,
}
