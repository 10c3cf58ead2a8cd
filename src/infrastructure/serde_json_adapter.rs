use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct BookmarksFileDto {
    pub roots: BookmarkRootsDto,

    /// `checksum`, `version`, `sync_metadata`, ...
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookmarkRootsDto {
    /// The only root this tool renders ("Other bookmarks"). Kept raw so each
    /// node is decoded only once its `type` is known.
    pub other: Value,

    /// `bookmark_bar`, `synced` and friends.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A `url` or `folder` node. Children stay raw for the same reason as
/// [`BookmarkRootsDto::other`]: unknown kinds may carry any shape.
#[derive(Debug, Clone, Deserialize)]
pub struct BookmarkNodeDto {
    #[serde(rename = "type")]
    pub node_type: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub children: Option<Vec<Value>>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Read the whole export and parse it as untyped JSON.
pub async fn read_bookmarks_json(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    parse_bookmarks_json(&raw)
}

/// Parse without serde_json's nesting limit; deeply nested folder trees are
/// legitimate exports.
pub fn parse_bookmarks_json(raw: &str) -> Result<Value> {
    let mut de = serde_json::Deserializer::from_str(raw);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de).context("parsing bookmarks JSON")?;
    de.end().context("parsing bookmarks JSON")?;
    Ok(value)
}

pub fn decode_bookmarks(value: Value) -> Result<BookmarksFileDto> {
    serde_json::from_value(value).context("decoding bookmarks document")
}

pub fn decode_node(value: &Value) -> Result<BookmarkNodeDto> {
    BookmarkNodeDto::deserialize(value).context("decoding bookmark node")
}
