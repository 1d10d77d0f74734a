//! Document-level types.

use super::{LayerNode, NodeContent};
use serde::{Deserialize, Serialize};

/// A decoded PSD document, ready for layout rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerDocument {
    /// Document metadata (canvas size, format version, counts)
    pub metadata: Metadata,

    /// Top-level layer nodes, in document order
    pub root: Vec<LayerNode>,
}

impl LayerDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            root: Vec::new(),
        }
    }

    /// Create a document from metadata and top-level nodes.
    pub fn with_nodes(metadata: Metadata, root: Vec<LayerNode>) -> Self {
        Self { metadata, root }
    }

    /// Add a top-level node.
    pub fn add_node(&mut self, node: LayerNode) {
        self.root.push(node);
    }

    /// Check if the document has any layers.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[LayerNode]) -> usize {
            nodes.iter().map(|n| 1 + count(n.children())).sum()
        }
        count(&self.root)
    }

    /// Number of leaf nodes in the tree.
    pub fn leaf_count(&self) -> usize {
        fn count(nodes: &[LayerNode]) -> usize {
            nodes
                .iter()
                .map(|n| match &n.content {
                    NodeContent::Group { children } => count(children),
                    NodeContent::Leaf { .. } => 1,
                })
                .sum()
        }
        count(&self.root)
    }

    /// Number of group nodes in the tree.
    pub fn group_count(&self) -> usize {
        self.node_count() - self.leaf_count()
    }
}

impl Default for LayerDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Source file name, if the document came from a file
    pub source: Option<String>,

    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// PSD format version word (1 = PSD, 2 = PSB)
    pub version: u16,

    /// Total number of layers (groups and leaves)
    pub layer_count: usize,

    /// Number of group layers
    pub group_count: usize,
}

impl Metadata {
    /// Create new metadata with canvas dimensions.
    pub fn with_canvas(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}
