//! Binary entrypoint.
//!
//! The document goes to stdout, so logs are written to stderr. `RUST_LOG`
//! controls verbosity (default `warn`).

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    bookmarks_to_html::interface::cli::run().await
}
