use crate::domain::model::BookmarkNode;
use crate::usecase::options::RenderOptions;

/// Whether a child node makes it into its parent's list.
///
/// Only folders are filtered; links and unknown nodes always pass.
pub fn is_included(node: &BookmarkNode, options: &RenderOptions) -> bool {
    match node {
        BookmarkNode::Folder(folder) if folder.is_hidden() => options.include_hidden,
        _ => true,
    }
}
