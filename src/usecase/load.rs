use crate::domain::model::BookmarkNode;
use crate::infrastructure::schema_validator::validate_other_root;
use crate::infrastructure::serde_json_adapter::decode_bookmarks;
use crate::usecase::build::build_tree;
use anyhow::Result;
use serde_json::Value;

/// Validate a parsed export and return the typed `roots.other` tree.
pub fn load_other_root(bookmarks: Value) -> Result<BookmarkNode> {
    validate_other_root(&bookmarks)?;
    let dto = decode_bookmarks(bookmarks)?;
    build_tree(&dto.roots.other, "other")
}
