#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Folder,
    Url,
    Other(String),
}

impl NodeKind {
    pub fn from_type(raw: &str) -> Self {
        match raw {
            "folder" => NodeKind::Folder,
            "url" => NodeKind::Url,
            other => NodeKind::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    /// DOM anchor for the folder's toggle; unique within one export.
    pub id: String,
    pub name: String,
    pub children: Vec<BookmarkNode>,
}

impl Folder {
    /// Dot-prefixed folders are left out unless the caller asks for them.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkNode {
    Link(Link),
    Folder(Folder),
    /// Any node whose `type` is neither `url` nor `folder` (e.g. separators).
    Unknown { kind: String },
}

impl BookmarkNode {
    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            BookmarkNode::Folder(folder) => Some(folder),
            _ => None,
        }
    }

    /// Number of links anywhere below (or at) this node, ignoring any filtering.
    pub fn link_count(&self) -> usize {
        match self {
            BookmarkNode::Link(_) => 1,
            BookmarkNode::Folder(folder) => folder.children.iter().map(Self::link_count).sum(),
            BookmarkNode::Unknown { .. } => 0,
        }
    }
}
