use bookmarks_to_html::domain::model::BookmarkNode;
use bookmarks_to_html::infrastructure::html_encoder::AsciiHtmlEscaper;
use bookmarks_to_html::infrastructure::serde_json_adapter::read_bookmarks_json;
use bookmarks_to_html::infrastructure::url_netloc::DefaultHostExtractor;
use bookmarks_to_html::usecase::document::assemble_document;
use bookmarks_to_html::usecase::load::load_other_root;
use bookmarks_to_html::usecase::options::RenderOptions;
use bookmarks_to_html::usecase::render::{render_tree, RenderContext};
use bookmarks_to_html::usecase::stats::RenderStats;
use serde_json::json;
use std::path::Path;

async fn fixture() -> BookmarkNode {
    let value = read_bookmarks_json(Path::new("tests/resources/BookmarksMini"))
        .await
        .expect("read BookmarksMini");
    load_other_root(value).expect("load other root")
}

fn render(root: &BookmarkNode, options: &RenderOptions) -> (String, RenderStats) {
    let ctx = RenderContext {
        options,
        hosts: &DefaultHostExtractor,
        escaper: &AsciiHtmlEscaper,
    };
    let (body, stats) = render_tree(root, &ctx);
    (assemble_document(&body, stats.links), stats)
}

fn extract_opts(names: &[&str]) -> RenderOptions {
    RenderOptions {
        folders: names.iter().map(|n| n.to_string()).collect(),
        ..RenderOptions::default()
    }
}

fn count_anchors(doc: &str) -> usize {
    doc.matches("<a href=").count()
}

#[tokio::test]
async fn default_mode_counts_only_visible_links() {
    let root = fixture().await;
    let (doc, stats) = render(&root, &RenderOptions::default());

    assert_eq!(stats.links, 4);
    assert_eq!(count_anchors(&doc), 4);
    assert!(doc.contains("There are 4 links.<br><br>\n"));
    assert!(!doc.contains(".private"));
    assert!(!doc.contains("Payroll"));
    assert!(!doc.contains(".hidden-root"));
    assert!(!doc.contains("Secret work"));
    assert!(!doc.contains("Bar link"));
    assert_eq!(stats.hidden_skipped, 2);
    assert_eq!(stats.unknown_dropped, 1);
}

#[tokio::test]
async fn include_hidden_restores_hidden_folders_in_place() {
    let root = fixture().await;
    let options = RenderOptions {
        include_hidden: true,
        ..RenderOptions::default()
    };
    let (doc, stats) = render(&root, &options);

    assert_eq!(stats.links, 6);
    assert!(doc.contains("There are 6 links."));

    let jira = doc.find("Jira").expect("Jira");
    let private = doc.find(".private [+]").expect(".private");
    let reading = doc.find("Reading [+]").expect("Reading");
    let hidden_root = doc.find(".hidden-root [+]").expect(".hidden-root");
    let empty = doc.find("Empty [+]").expect("Empty");
    assert!(jira < private && private < reading && reading < hidden_root && hidden_root < empty);
}

#[tokio::test]
async fn children_render_in_input_order() {
    let root = fixture().await;
    let (doc, _) = render(&root, &RenderOptions::default());

    let rust = doc.find(">Rust</a>").expect("Rust");
    let work = doc.find("Work [+]").expect("Work");
    let reading = doc.find("Reading [+]").expect("Reading");
    let cafe = doc.find("Caf&#233;").expect("Cafe");
    let old_wiki = doc.find("Old wiki").expect("Old wiki");
    let empty = doc.find("Empty [+]").expect("Empty");
    assert!(rust < work && work < reading && reading < cafe && cafe < old_wiki && old_wiki < empty);
}

#[tokio::test]
async fn extraction_renders_every_work_folder_and_nothing_else() {
    let root = fixture().await;
    let (doc, stats) = render(&root, &extract_opts(&["Work"]));

    assert_eq!(stats.folders_matched, 3);
    assert_eq!(stats.links, 3);
    assert!(doc.contains("There are 3 links."));
    assert_eq!(doc.matches("Work [+]").count(), 3);
    assert!(doc.contains("Secret work"));
    assert!(!doc.contains("Payroll"));
    assert!(!doc.contains("Reading"));
    assert!(!doc.contains("Other bookmarks"));
    assert!(!doc.contains(">Rust</a>"));
    assert!(!doc.contains("Caf&#233;"));
}

#[tokio::test]
async fn extraction_with_include_hidden_counts_nested_hidden_links() {
    let root = fixture().await;
    let options = RenderOptions {
        include_hidden: true,
        ..extract_opts(&["Work"])
    };
    let (doc, stats) = render(&root, &options);

    assert_eq!(stats.links, 4);
    assert!(doc.contains("Payroll"));
}

#[tokio::test]
async fn extraction_without_match_yields_empty_tree() {
    let root = fixture().await;
    let (doc, stats) = render(&root, &extract_opts(&["Nope"]));

    assert_eq!(stats.links, 0);
    assert!(doc.contains("There are 0 links."));
    assert!(doc.ends_with("</label><br><br>\n\n"));
}

#[tokio::test]
async fn output_is_escaped_printable_ascii() {
    let root = fixture().await;
    let (doc, _) = render(&root, &RenderOptions::default());

    assert!(doc.contains("Jira &lt;tickets&gt;"));
    assert!(!doc.contains("<tickets>"));
    assert!(doc.contains("Caf&#233; &#9749; notes"));
    assert!(doc.contains(r#"href="https://jira.example.com/browse?x=1&amp;y=2""#));
    assert!(doc
        .bytes()
        .all(|b| b == b'\n' || (b' '..=b'~').contains(&b)));
}

#[tokio::test]
async fn netloc_suffix_follows_hide_netloc() {
    let root = fixture().await;

    let (doc, _) = render(&root, &RenderOptions::default());
    assert!(doc.contains(">Rust</a> (www.rust-lang.org)"));
    assert!(doc.contains("notes</a> (blog.example.org:8443)"));

    let options = RenderOptions {
        hide_netloc: true,
        ..RenderOptions::default()
    };
    let (doc, _) = render(&root, &options);
    assert!(doc.contains(">Rust</a></li>"));
    assert!(!doc.contains("(www.rust-lang.org)"));
}

#[tokio::test]
async fn rendering_is_deterministic() {
    let root = fixture().await;
    let options = extract_opts(&["Work", "Reading"]);

    let (first, _) = render(&root, &options);
    let (second, _) = render(&fixture().await, &options);
    assert_eq!(first, second);
}

#[test]
fn hidden_folder_scenario() {
    let doc = json!({
        "roots": {
            "other": {
                "type": "folder",
                "id": "1",
                "name": "other",
                "children": [
                    {"type": "url", "name": "Ex", "url": "https://ex.com/a"},
                    {"type": "folder", "id": "2", "name": ".hid", "children": [
                        {"type": "url", "name": "A", "url": "https://a.example/"}
                    ]}
                ]
            }
        }
    });
    let root = load_other_root(doc).expect("load");

    let (out, stats) = render(&root, &RenderOptions::default());
    assert_eq!(stats.links, 1);
    assert!(!out.contains(".hid"));

    let options = RenderOptions {
        include_hidden: true,
        ..RenderOptions::default()
    };
    let (out, stats) = render(&root, &options);
    assert_eq!(stats.links, 2);
    assert!(out.contains(".hid [+]"));
    assert!(out.contains(r#"<a href="https://a.example/">A</a>"#));
}
