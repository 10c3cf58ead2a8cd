use crate::domain::model::BookmarkNode;
use crate::usecase::convert::render_folder;
use crate::usecase::render::RenderContext;
use crate::usecase::stats::RenderStats;
use tracing::debug;

/// Render only the folders whose name is in `ctx.options.folders`.
///
/// Matching is exact and case-sensitive. A matched folder is rendered whole
/// (hidden-folder filtering still applies below it); a non-matching folder
/// contributes the concatenated extraction of its children, so nested and
/// repeated matches are all found. Links never render directly.
pub fn extract_folders(
    node: &BookmarkNode,
    ctx: &RenderContext<'_>,
    stats: &mut RenderStats,
) -> String {
    match node {
        BookmarkNode::Link(_) | BookmarkNode::Unknown { .. } => String::new(),
        BookmarkNode::Folder(folder) if ctx.options.folders.contains(&folder.name) => {
            stats.folders_matched += 1;
            debug!(folder = %folder.name, id = %folder.id, "extracting folder");
            render_folder(folder, ctx, stats)
        }
        BookmarkNode::Folder(folder) => folder
            .children
            .iter()
            .map(|child| extract_folders(child, ctx, stats))
            .collect(),
    }
}
