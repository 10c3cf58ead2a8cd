/// Accumulated while rendering; `links` is the count printed in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub links: usize,
    pub folders: usize,
    pub folders_matched: usize,
    pub hidden_skipped: usize,
    pub unknown_dropped: usize,
}
