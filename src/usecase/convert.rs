use crate::domain::model::{BookmarkNode, Folder, Link};
use crate::usecase::render::RenderContext;
use crate::usecase::select::is_included;
use crate::usecase::stats::RenderStats;
use tracing::debug;

/// Render one node, pre-order. Unknown node kinds render as `None`.
pub fn render_node(
    node: &BookmarkNode,
    ctx: &RenderContext<'_>,
    stats: &mut RenderStats,
) -> Option<String> {
    match node {
        BookmarkNode::Link(link) => Some(render_link(link, ctx, stats)),
        BookmarkNode::Folder(folder) => Some(render_folder(folder, ctx, stats)),
        BookmarkNode::Unknown { kind } => {
            stats.unknown_dropped += 1;
            debug!(kind = %kind, "dropping node of unrecognised type");
            None
        }
    }
}

fn render_link(link: &Link, ctx: &RenderContext<'_>, stats: &mut RenderStats) -> String {
    stats.links += 1;

    let mut out = format!(
        r#"<a href="{}">{}</a>"#,
        ctx.escaper.escape(&link.url),
        ctx.escaper.escape(&link.name)
    );
    if !ctx.options.hide_netloc {
        let host = ctx.hosts.host(&link.url);
        out.push_str(&format!(" ({})", ctx.escaper.escape(&host)));
    }
    out
}

/// Toggle checkbox, its two labels, then the filtered children as a list.
pub fn render_folder(folder: &Folder, ctx: &RenderContext<'_>, stats: &mut RenderStats) -> String {
    stats.folders += 1;

    let id = ctx.escaper.escape(&folder.id);
    let name = ctx.escaper.escape(&folder.name);

    let mut items = Vec::with_capacity(folder.children.len());
    for child in &folder.children {
        if !is_included(child, ctx.options) {
            stats.hidden_skipped += 1;
            if let Some(hidden) = child.as_folder() {
                debug!(parent = %folder.name, folder = %hidden.name, "skipping hidden folder");
            }
            continue;
        }
        if let Some(rendered) = render_node(child, ctx, stats) {
            items.push(rendered);
        }
    }

    format!(
        concat!(
            r#"<input type="checkbox" id="{id}"/>"#,
            r#"<label class="f" for="{id}">{name} [+]</label>"#,
            r#"<label class="s" for="{id}">{name} [-]</label>"#,
            "{list}"
        ),
        id = id,
        name = name,
        list = make_list(&items)
    )
}

fn make_list(items: &[String]) -> String {
    let contents: Vec<String> = items.iter().map(|el| format!("<li>{el}</li>")).collect();
    format!("<ul>\n{}\n</ul>", contents.join("\n"))
}
