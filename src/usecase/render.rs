use crate::domain::model::BookmarkNode;
use crate::domain::traits::{HostExtractor, MarkupEscaper};
use crate::usecase::convert::render_node;
use crate::usecase::extract::extract_folders;
use crate::usecase::options::RenderOptions;
use crate::usecase::stats::RenderStats;
use tracing::{debug, info, warn};

/// Everything a render pass reads; nothing in here is mutated.
pub struct RenderContext<'a> {
    pub options: &'a RenderOptions,
    pub hosts: &'a dyn HostExtractor,
    pub escaper: &'a dyn MarkupEscaper,
}

/// Render the tree body (no stylesheet or header) and return it with the stats.
pub fn render_tree(root: &BookmarkNode, ctx: &RenderContext<'_>) -> (String, RenderStats) {
    let mut stats = RenderStats::default();

    let body = if ctx.options.is_extraction() {
        let body = extract_folders(root, ctx, &mut stats);
        if stats.folders_matched == 0 {
            warn!(
                folders = ?ctx.options.folders,
                "no folder matched the requested names"
            );
        }
        body
    } else {
        render_node(root, ctx, &mut stats).unwrap_or_default()
    };

    let mode = if ctx.options.is_extraction() { "extract" } else { "full" };
    info!(
        mode,
        links = stats.links,
        folders = stats.folders,
        folders_matched = stats.folders_matched,
        hidden_skipped = stats.hidden_skipped,
        unknown_dropped = stats.unknown_dropped,
        "rendered bookmarks"
    );
    debug!(
        total_links = root.link_count(),
        rendered_links = stats.links,
        "links in export vs rendered"
    );

    (body, stats)
}
