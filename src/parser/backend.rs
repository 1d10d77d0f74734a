//! PSD backend abstraction layer.
//!
//! Provides a trait-based interface for layer-tree access, isolating
//! the concrete decoder (the `psd` crate) from the tree walker and the
//! layout renderer.

use std::collections::HashMap;

use crate::detect;
use crate::error::{Error, Result};
use crate::model::{Pixmap, Rect};

/// Source layer kind as reported by the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// Container layer (PSD group)
    Group,
    /// Rasterized pixel layer
    Raster,
    /// Vector shape layer
    Vector,
    /// Embedded (smart) object layer
    Embedded,
    /// Text layer
    Text,
    /// Anything else; the label is carried for diagnostics
    Other(String),
}

/// An owned snapshot of one decoder layer.
///
/// Built once per run by the backend; the walker consumes it without
/// touching the decoder again.
#[derive(Debug, Clone)]
pub struct SourceLayer {
    /// Display name from the source document
    pub name: String,

    /// Layer kind
    pub kind: SourceKind,

    /// Absolute bounds in document space
    pub rect: Rect,

    /// Rasterized pixels; `None` when rasterization yields nothing.
    /// Always `None` for groups.
    pub pixels: Option<Pixmap>,

    /// Ordered children; non-empty only for groups
    pub children: Vec<SourceLayer>,
}

impl SourceLayer {
    /// Create a group source layer. The rect is the union of child rects.
    pub fn group(name: impl Into<String>, children: Vec<SourceLayer>) -> Self {
        let rect = children
            .iter()
            .fold(Rect::default(), |acc, c| acc.union(&c.rect));
        Self {
            name: name.into(),
            kind: SourceKind::Group,
            rect,
            pixels: None,
            children,
        }
    }

    /// Create a drawable source layer.
    pub fn drawable(
        name: impl Into<String>,
        kind: SourceKind,
        rect: Rect,
        pixels: Option<Pixmap>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            rect,
            pixels,
            children: Vec::new(),
        }
    }

    /// Whether this is a container layer.
    pub fn is_group(&self) -> bool {
        self.kind == SourceKind::Group
    }
}

/// Abstract interface for layered-document access.
///
/// Implementations provide canvas dimensions and the source layer tree —
/// without exposing any concrete decoder types.
pub trait LayerBackend {
    /// Canvas width in pixels.
    fn canvas_width(&self) -> u32;

    /// Canvas height in pixels.
    fn canvas_height(&self) -> u32;

    /// Format version word (1 = PSD, 2 = PSB), 0 if unknown.
    fn version(&self) -> u16;

    /// Build the source layer tree, top-level layers in document order.
    fn source_tree(&self) -> Result<Vec<SourceLayer>>;
}

// ---------------------------------------------------------------------------
// PsdBackend — concrete implementation backed by the `psd` crate
// ---------------------------------------------------------------------------

use psd::Psd;

/// Concrete [`LayerBackend`] backed by [`psd::Psd`].
///
/// The `psd` crate exposes a flat layer list plus a group table keyed by id;
/// the tree is reconstructed here from the parent-id links. It does not
/// distinguish drawable subtypes (shape, text, smart object), so every
/// non-group layer is classified as [`SourceKind::Raster`].
pub struct PsdBackend {
    psd: Psd,
    version: u16,
}

impl PsdBackend {
    /// Load from a file path.
    pub fn load_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::load_bytes(&data)
    }

    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        // Reject non-PSD input up front; the decoder's own error for this
        // case is less direct.
        let format = detect::detect_format_from_bytes(data)?;
        let psd = Psd::from_bytes(data).map_err(|e| Error::Decode(e.to_string()))?;
        Ok(Self {
            psd,
            version: format.version,
        })
    }

    /// Load from a reader.
    pub fn load_reader<R: std::io::Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::load_bytes(&data)
    }

    /// Direct access to the underlying [`psd::Psd`].
    ///
    /// Escape hatch for decoder features not covered by [`LayerBackend`].
    pub fn raw_psd(&self) -> &Psd {
        &self.psd
    }

    /// Clip a layer rect to the canvas and crop its canvas-sized RGBA
    /// buffer down to the clipped bounds.
    fn rasterize(&self, rect: Rect, canvas_rgba: &[u8]) -> (Rect, Option<Pixmap>) {
        let canvas = Rect::new(0, 0, self.canvas_width(), self.canvas_height());
        let clipped = intersect(rect, canvas);
        if clipped.is_empty() {
            return (clipped, None);
        }

        let expected = (canvas.width as usize) * (canvas.height as usize) * 4;
        if canvas_rgba.len() != expected {
            log::warn!(
                "layer buffer has {} bytes, expected {}; treating as empty",
                canvas_rgba.len(),
                expected
            );
            return (clipped, None);
        }

        let stride = (canvas.width as usize) * 4;
        let mut out = Vec::with_capacity((clipped.width as usize) * (clipped.height as usize) * 4);
        for row in 0..clipped.height as usize {
            let src_y = clipped.y as usize + row;
            let start = src_y * stride + (clipped.x as usize) * 4;
            let end = start + (clipped.width as usize) * 4;
            out.extend_from_slice(&canvas_rgba[start..end]);
        }

        (clipped, Pixmap::from_rgba(clipped.width, clipped.height, out))
    }

    /// Reconstruct the nesting for one parent id: subgroups first (by id),
    /// then leaf layers in file order.
    fn build_children(
        &self,
        parent: Option<u32>,
        subgroups: &HashMap<Option<u32>, Vec<u32>>,
        leaves: &HashMap<Option<u32>, Vec<usize>>,
    ) -> Vec<SourceLayer> {
        let mut children = Vec::new();

        if let Some(ids) = subgroups.get(&parent) {
            for id in ids {
                let Some(group) = self.psd.groups().get(id) else {
                    continue;
                };
                let nested = self.build_children(Some(*id), subgroups, leaves);
                children.push(SourceLayer::group(group.name(), nested));
            }
        }

        if let Some(indices) = leaves.get(&parent) {
            for &idx in indices {
                let layer = &self.psd.layers()[idx];
                let rect = layer_rect(
                    layer.layer_left(),
                    layer.layer_top(),
                    layer.layer_right(),
                    layer.layer_bottom(),
                );
                let (clipped, pixels) = self.rasterize(rect, &layer.rgba());
                children.push(SourceLayer::drawable(
                    layer.name(),
                    SourceKind::Raster,
                    clipped,
                    pixels,
                ));
            }
        }

        children
    }
}

impl LayerBackend for PsdBackend {
    fn canvas_width(&self) -> u32 {
        self.psd.width()
    }

    fn canvas_height(&self) -> u32 {
        self.psd.height()
    }

    fn version(&self) -> u16 {
        self.version
    }

    fn source_tree(&self) -> Result<Vec<SourceLayer>> {
        // Index subgroup ids by parent, sorted for a deterministic walk.
        let mut subgroups: HashMap<Option<u32>, Vec<u32>> = HashMap::new();
        for (id, group) in self.psd.groups() {
            subgroups.entry(group.parent_id()).or_default().push(*id);
        }
        for ids in subgroups.values_mut() {
            ids.sort_unstable();
        }

        // Index leaf layers by parent, preserving file order.
        let mut leaves: HashMap<Option<u32>, Vec<usize>> = HashMap::new();
        for (idx, layer) in self.psd.layers().iter().enumerate() {
            leaves.entry(layer.parent_id()).or_default().push(idx);
        }

        Ok(self.build_children(None, &subgroups, &leaves))
    }
}

/// Layer bounds from edge coordinates, tolerating degenerate edges.
fn layer_rect(left: i32, top: i32, right: i32, bottom: i32) -> Rect {
    let width = (right - left).max(0) as u32;
    let height = (bottom - top).max(0) as u32;
    Rect::new(left, top, width, height)
}

/// Intersection of two rects; empty rect when they do not overlap.
fn intersect(a: Rect, b: Rect) -> Rect {
    let x = a.x.max(b.x);
    let y = a.y.max(b.y);
    let right = (a.x + a.width as i32).min(b.x + b.width as i32);
    let bottom = (a.y + a.height as i32).min(b.y + b.height as i32);
    if right <= x || bottom <= y {
        return Rect::new(x, y, 0, 0);
    }
    Rect::new(x, y, (right - x) as u32, (bottom - y) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_rect() {
        assert_eq!(layer_rect(10, 20, 30, 50), Rect::new(10, 20, 20, 30));
        // Degenerate edges collapse to zero size
        assert_eq!(layer_rect(30, 20, 10, 50), Rect::new(30, 20, 0, 30));
    }

    #[test]
    fn test_intersect() {
        let canvas = Rect::new(0, 0, 100, 100);
        assert_eq!(
            intersect(Rect::new(-10, -10, 30, 30), canvas),
            Rect::new(0, 0, 20, 20)
        );
        assert!(intersect(Rect::new(200, 200, 10, 10), canvas).is_empty());
        assert_eq!(
            intersect(Rect::new(10, 10, 20, 20), canvas),
            Rect::new(10, 10, 20, 20)
        );
    }

    #[test]
    fn test_source_group_rect_is_union() {
        let a = SourceLayer::drawable("a", SourceKind::Raster, Rect::new(10, 20, 5, 5), None);
        let b = SourceLayer::drawable("b", SourceKind::Raster, Rect::new(0, 0, 5, 5), None);
        let g = SourceLayer::group("g", vec![a, b]);
        assert_eq!(g.rect, Rect::new(0, 0, 15, 25));
        assert!(g.is_group());
    }

    #[test]
    fn test_load_bytes_rejects_non_psd() {
        let result = PsdBackend::load_bytes(b"definitely not a psd");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }
}
