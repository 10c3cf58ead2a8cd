use crate::infrastructure::html_encoder::AsciiHtmlEscaper;
use crate::infrastructure::serde_json_adapter::read_bookmarks_json;
use crate::infrastructure::url_netloc::DefaultHostExtractor;
use crate::usecase::document::assemble_document;
use crate::usecase::load::load_other_root;
use crate::usecase::options::RenderOptions;
use crate::usecase::render::{render_tree, RenderContext};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::io::{self, AsyncWriteExt};
use tracing::debug;

pub const DEFAULT_BOOKMARKS_PATH: &str =
    "~/Library/Application Support/Google/Chrome/Profile 1/Bookmarks";

const LONG_ABOUT: &str = "Exports Google Chrome bookmarks to a single HTML file that uses only CSS \
to render the folder tree.\n\nExample:\n\n    bookmarks-to-html > bookmarks.html";

/// Render Chrome bookmarks as a collapsible, CSS-only HTML page on stdout.
#[derive(Parser, Debug)]
#[command(name = "bookmarks-to-html", about, long_about = LONG_ABOUT)]
pub struct Cli {
    /// Path of your Chrome bookmarks file
    #[arg(env = "BOOKMARKS_PATH", default_value = DEFAULT_BOOKMARKS_PATH)]
    pub path: String,

    /// Extract only those folders
    #[arg(long, num_args = 1.., value_name = "NAME")]
    pub folders: Vec<String>,

    /// Include folders prefixed with a dot
    #[arg(long)]
    pub include_hidden: bool,

    /// Hide the base url of the site
    #[arg(long)]
    pub hide_netloc: bool,
}

impl Cli {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            include_hidden: self.include_hidden,
            hide_netloc: self.hide_netloc,
            folders: self.folders.iter().cloned().collect(),
        }
    }

    pub fn input_path(&self) -> PathBuf {
        expand_path(&self.path)
    }
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let document = render_document(&cli).await?;

    let mut stdout = io::stdout();
    stdout
        .write_all(document.as_bytes())
        .await
        .context("writing document to stdout")?;
    stdout.flush().await.context("flushing stdout")?;
    Ok(())
}

/// Parse `args` (including the program name) and return the document.
pub async fn run_with_args(args: &[String]) -> Result<String> {
    let cli = Cli::try_parse_from(args)?;
    render_document(&cli).await
}

pub async fn render_document(cli: &Cli) -> Result<String> {
    let path = cli.input_path();
    debug!(path = %path.display(), "reading bookmarks");

    let bookmarks = read_bookmarks_json(&path)
        .await
        .with_context(|| format!("reading input bookmarks JSON: {}", path.display()))?;
    let root = load_other_root(bookmarks)
        .with_context(|| format!("validating bookmarks: {}", path.display()))?;

    let options = cli.render_options();
    let ctx = RenderContext {
        options: &options,
        hosts: &DefaultHostExtractor,
        escaper: &AsciiHtmlEscaper,
    };
    let (body, stats) = render_tree(&root, &ctx);

    Ok(assemble_document(&body, stats.links))
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}
