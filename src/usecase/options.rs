use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render dot-prefixed folders too.
    pub include_hidden: bool,
    /// Drop the ` (host)` suffix after each link.
    pub hide_netloc: bool,
    /// Exact folder names to extract; empty renders the whole tree.
    pub folders: BTreeSet<String>,
}

impl RenderOptions {
    pub fn is_extraction(&self) -> bool {
        !self.folders.is_empty()
    }
}
