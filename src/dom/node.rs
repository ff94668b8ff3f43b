//! Tree node base
//!
//! Uses NodeId (u32) for compact node references. `NodeHeader` carries the
//! linkage and bookkeeping every node kind shares, including the source
//! dirty indicator that gates the zero-copy extend path.

/// Compact node identifier (index into the owning tree's arena)
pub type NodeId = u32;

/// Type of document node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Document root
    Document,
    /// Element node
    Element,
    /// Escaped text content
    Text,
    /// Comment
    Comment,
    /// Raw, unescaped data (script/style bodies)
    Data,
}

/// Shared per-node bookkeeping.
///
/// The dirty flag records that the node's payload no longer matches the
/// bytes it was scanned from; once set, spans may not be extended in place.
#[derive(Debug, Clone)]
pub struct NodeHeader {
    /// Type of this node
    pub kind: NodeKind,
    /// Parent node (None while detached)
    pub parent: Option<NodeId>,
    /// Previous sibling
    pub prev_sibling: Option<NodeId>,
    /// Next sibling
    pub next_sibling: Option<NodeId>,
    /// Depth in document tree
    pub depth: u16,
    /// Base URI inherited at parse time
    pub base_uri: String,
    source_dirty: bool,
}

impl NodeHeader {
    /// Create a detached header
    pub fn new(kind: NodeKind) -> Self {
        NodeHeader {
            kind,
            parent: None,
            prev_sibling: None,
            next_sibling: None,
            depth: 0,
            base_uri: String::new(),
            source_dirty: false,
        }
    }

    /// Set the base URI
    pub fn set_base_uri(&mut self, base_uri: impl Into<String>) {
        self.base_uri = base_uri.into();
    }

    /// Record that the payload diverged from its source bytes
    #[inline]
    pub fn mark_source_dirty(&mut self) {
        self.source_dirty = true;
    }

    /// Check the dirty indicator
    #[inline]
    pub fn is_source_dirty(&self) -> bool {
        self.source_dirty
    }

    /// Drop tree linkage, keeping kind, base URI, and dirty state
    pub fn detach(&mut self) {
        self.parent = None;
        self.prev_sibling = None;
        self.next_sibling = None;
        self.depth = 0;
    }

    /// Check if this is a raw data node
    #[inline]
    pub fn is_data(&self) -> bool {
        self.kind == NodeKind::Data
    }
}
