use crate::domain::model::{BookmarkNode, Folder, Link, NodeKind};
use crate::infrastructure::serde_json_adapter::decode_node;
use anyhow::{anyhow, Context, Result};
use serde_json::Value;

/// Turn a raw JSON subtree into the typed tree. `path` locates the node
/// (`other/2/0`) in error messages.
///
/// A node is decoded only after its `type` is read: unknown kinds become
/// [`BookmarkNode::Unknown`] whatever their other fields hold, while `url`
/// and `folder` nodes must carry the fields their kind requires.
pub fn build_tree(node: &Value, path: &str) -> Result<BookmarkNode> {
    let node_type = node
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("node at {path} has no string `type`"))?;

    let decode = || decode_node(node).with_context(|| format!("at {path}"));
    match NodeKind::from_type(node_type) {
        NodeKind::Other(kind) => Ok(BookmarkNode::Unknown { kind }),
        NodeKind::Url => {
            let dto = decode()?;
            let name = required(dto.name, "name", "link", path)?;
            let url = required(dto.url, "url", "link", path)?;
            Ok(BookmarkNode::Link(Link { name, url }))
        }
        NodeKind::Folder => {
            let dto = decode()?;
            let id = required(dto.id, "id", "folder", path)?;
            let name = required(dto.name, "name", "folder", path)?;
            let children = dto
                .children
                .ok_or_else(|| anyhow!("folder at {path} has no `children`"))?
                .iter()
                .enumerate()
                .map(|(i, child)| build_tree(child, &format!("{path}/{i}")))
                .collect::<Result<Vec<_>>>()?;
            Ok(BookmarkNode::Folder(Folder { id, name, children }))
        }
    }
}

fn required(field: Option<String>, field_name: &str, what: &str, path: &str) -> Result<String> {
    field.ok_or_else(|| anyhow!("{what} at {path} has no `{field_name}`"))
}
