//! Layer-node types: geometry, pixel buffers, and the converter tree.

use serde::{Deserialize, Serialize};

/// An absolute pixel rectangle in document space.
///
/// Offsets are absolute within the source document; margins emitted in the
/// layout are computed later as deltas against the parent's absolute offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge, absolute document coordinates
    pub x: i32,

    /// Top edge, absolute document coordinates
    pub y: i32,

    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Smallest rectangle covering both `self` and `other`.
    ///
    /// An empty rectangle contributes nothing to the union.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = (self.x + self.width as i32).max(other.x + other.width as i32);
        let bottom = (self.y + self.height as i32).max(other.y + other.height as i32);
        Rect::new(x, y, (right - x) as u32, (bottom - y) as u32)
    }
}

/// A rasterized RGBA pixel buffer for one leaf layer.
///
/// Pixel data is never serialized; a JSON dump of the layer tree carries
/// only the dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pixmap {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// RGBA8 pixel data, row-major, `width * height * 4` bytes
    #[serde(skip_serializing, default)]
    pub rgba: Vec<u8>,
}

impl Pixmap {
    /// Create a pixmap from raw RGBA8 data.
    ///
    /// Returns `None` if the buffer length does not match the dimensions.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        if rgba.len() != (width as usize) * (height as usize) * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            rgba,
        })
    }

    /// Create a pixmap filled with a single RGBA color.
    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Option<Self> {
        let pixels = (width as usize) * (height as usize);
        Self::from_rgba(width, height, color.repeat(pixels))
    }

    /// Buffer size in bytes.
    pub fn len(&self) -> usize {
        self.rgba.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.rgba.is_empty()
    }
}

/// Drawable layer kind, classified once at tree-build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Rasterized pixel layer
    Raster,

    /// Vector shape layer
    Vector,

    /// Embedded (smart) object layer
    Embedded,

    /// Text layer
    Text,

    /// A kind this tool does not handle; kept in the tree so the skip is
    /// observable, never emitted to the layout
    Unsupported,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Raster => write!(f, "raster"),
            LayerKind::Vector => write!(f, "vector"),
            LayerKind::Embedded => write!(f, "embedded"),
            LayerKind::Text => write!(f, "text"),
            LayerKind::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// Node payload: either a container with children or a drawable leaf.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeContent {
    /// A container (PSD group)
    Group {
        /// Ordered child nodes
        children: Vec<LayerNode>,
    },

    /// A drawable leaf layer
    Leaf {
        /// Drawable kind
        kind: LayerKind,
        /// Rasterized pixels; `None` when rasterization yielded nothing
        pixels: Option<Pixmap>,
    },
}

/// One node of the converter tree built from the source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerNode {
    /// Display name from the source layer
    pub name: String,

    /// Nesting depth (root children are depth 0); diagnostics only
    pub depth: u32,

    /// Absolute bounds within the document
    pub rect: Rect,

    /// Group or leaf payload
    pub content: NodeContent,
}

impl LayerNode {
    /// Create a group node.
    pub fn group(
        name: impl Into<String>,
        depth: u32,
        rect: Rect,
        children: Vec<LayerNode>,
    ) -> Self {
        Self {
            name: name.into(),
            depth,
            rect,
            content: NodeContent::Group { children },
        }
    }

    /// Create a leaf node.
    pub fn leaf(
        name: impl Into<String>,
        depth: u32,
        rect: Rect,
        kind: LayerKind,
        pixels: Option<Pixmap>,
    ) -> Self {
        Self {
            name: name.into(),
            depth,
            rect,
            content: NodeContent::Leaf { kind, pixels },
        }
    }

    /// Whether this node is a container.
    pub fn is_group(&self) -> bool {
        matches!(self.content, NodeContent::Group { .. })
    }

    /// Child nodes for a group, empty slice for a leaf.
    pub fn children(&self) -> &[LayerNode] {
        match &self.content {
            NodeContent::Group { children } => children,
            NodeContent::Leaf { .. } => &[],
        }
    }

    /// Drawable kind for a leaf, `None` for a group.
    pub fn kind(&self) -> Option<LayerKind> {
        match &self.content {
            NodeContent::Leaf { kind, .. } => Some(*kind),
            NodeContent::Group { .. } => None,
        }
    }

    /// Rasterized pixels for a leaf, `None` for a group or an empty leaf.
    pub fn pixels(&self) -> Option<&Pixmap> {
        match &self.content {
            NodeContent::Leaf { pixels, .. } => pixels.as_ref(),
            NodeContent::Group { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_union() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.union(&b), Rect::new(0, 0, 15, 15));

        let empty = Rect::default();
        assert_eq!(a.union(&empty), a);
        assert_eq!(empty.union(&b), b);
    }

    #[test]
    fn test_rect_union_negative_offsets() {
        let a = Rect::new(-5, -5, 10, 10);
        let b = Rect::new(0, 0, 10, 10);
        assert_eq!(a.union(&b), Rect::new(-5, -5, 15, 15));
    }

    #[test]
    fn test_pixmap_from_rgba() {
        assert!(Pixmap::from_rgba(2, 2, vec![0; 16]).is_some());
        assert!(Pixmap::from_rgba(2, 2, vec![0; 15]).is_none());
        assert!(Pixmap::from_rgba(0, 2, vec![]).is_none());
    }

    #[test]
    fn test_pixmap_solid() {
        let p = Pixmap::solid(2, 1, [1, 2, 3, 4]).unwrap();
        assert_eq!(p.rgba, vec![1, 2, 3, 4, 1, 2, 3, 4]);
    }

    #[test]
    fn test_node_accessors() {
        let leaf = LayerNode::leaf("a", 1, Rect::new(0, 0, 1, 1), LayerKind::Raster, None);
        assert!(!leaf.is_group());
        assert_eq!(leaf.kind(), Some(LayerKind::Raster));
        assert!(leaf.children().is_empty());

        let group = LayerNode::group("g", 0, Rect::default(), vec![leaf]);
        assert!(group.is_group());
        assert_eq!(group.kind(), None);
        assert_eq!(group.children().len(), 1);
    }

    #[test]
    fn test_pixels_not_serialized() {
        let leaf = LayerNode::leaf(
            "a",
            0,
            Rect::new(0, 0, 1, 1),
            LayerKind::Raster,
            Pixmap::solid(1, 1, [255, 0, 0, 255]),
        );
        let json = serde_json::to_string(&leaf).unwrap();
        assert!(json.contains("\"width\":1"));
        assert!(!json.contains("rgba"));
    }
}
