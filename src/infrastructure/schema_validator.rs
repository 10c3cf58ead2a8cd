use anyhow::{anyhow, Result};
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

fn compile_schema(content: &str, what: &str) -> JSONSchema {
    let schema: Value =
        serde_json::from_str(content).unwrap_or_else(|e| panic!("invalid {what} schema: {e}"));
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .unwrap_or_else(|e| panic!("failed to compile {what} schema: {e}"))
}

static BOOKMARKS_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    compile_schema(include_str!("../schemas/bookmarks_schema.json"), "bookmarks")
});

static FOLDER_SCHEMA: Lazy<JSONSchema> =
    Lazy::new(|| compile_schema(include_str!("../schemas/folder_schema.json"), "folder"));

static URL_SCHEMA: Lazy<JSONSchema> =
    Lazy::new(|| compile_schema(include_str!("../schemas/url_schema.json"), "URL"));

fn check(schema: &JSONSchema, value: &Value, what: &str) -> Result<()> {
    match schema.validate(value) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!("{what} validation failed:\n{}", error_list.join("\n")))
        }
    }
}

/// Validate the document envelope: `roots.other` must exist and be a folder.
pub fn validate_bookmarks_file(bookmarks: &Value) -> Result<()> {
    check(&BOOKMARKS_SCHEMA, bookmarks, "Bookmarks file")
}

pub fn validate_folder_item(folder: &Value) -> Result<()> {
    check(&FOLDER_SCHEMA, folder, "Folder item")
}

pub fn validate_url_item(url_item: &Value) -> Result<()> {
    check(&URL_SCHEMA, url_item, "URL item")
}

/// Validate the envelope and then every node below `roots.other`.
///
/// Other roots are not rendered, so their shape is not checked.
pub fn validate_other_root(bookmarks: &Value) -> Result<()> {
    validate_bookmarks_file(bookmarks)?;

    if let Some(other) = bookmarks.get("roots").and_then(|roots| roots.get("other")) {
        validate_bookmark_tree(other, "other")?;
    }

    Ok(())
}

fn validate_bookmark_tree(node: &Value, path: &str) -> Result<()> {
    let Some(type_str) = node.get("type").and_then(Value::as_str) else {
        return Err(anyhow!("node at {path} has no string `type`"));
    };

    match type_str {
        "folder" => {
            validate_folder_item(node).map_err(|e| e.context(format!("at {path}")))?;
            if let Some(children) = node.get("children").and_then(Value::as_array) {
                for (i, child) in children.iter().enumerate() {
                    validate_bookmark_tree(child, &format!("{path}/{i}"))?;
                }
            }
        }
        "url" => {
            validate_url_item(node).map_err(|e| e.context(format!("at {path}")))?;
        }
        // Unknown node types are rendered as nothing, not rejected.
        _ => {}
    }

    Ok(())
}
