//! The layer tree walker: classifies decoder layers into the converter tree.

use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::model::{LayerDocument, LayerKind, LayerNode, Metadata};

use super::backend::{LayerBackend, PsdBackend, SourceKind, SourceLayer};
use super::options::ParseOptions;

/// Parser that turns a layered source document into a [`LayerDocument`].
///
/// Traversal is total: unsupported layer kinds become explicit
/// [`LayerKind::Unsupported`] leaves (logged, later skipped by the layout
/// renderer) and never fail the walk.
pub struct PsdParser {
    backend: Box<dyn LayerBackend>,
    options: ParseOptions,
    source: Option<String>,
}

impl PsdParser {
    /// Open a PSD file with default options.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PSD file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let source = path
            .as_ref()
            .file_name()
            .map(|n| n.to_string_lossy().to_string());
        let backend = PsdBackend::load_file(path)?;
        Ok(Self {
            backend: Box::new(backend),
            options,
            source,
        })
    }

    /// Parse a PSD from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a PSD from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let backend = PsdBackend::load_bytes(data)?;
        Ok(Self {
            backend: Box::new(backend),
            options,
            source: None,
        })
    }

    /// Parse a PSD from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a PSD from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Self> {
        let backend = PsdBackend::load_reader(reader)?;
        Ok(Self {
            backend: Box::new(backend),
            options,
            source: None,
        })
    }

    /// Build a parser over any [`LayerBackend`].
    pub fn from_backend(backend: Box<dyn LayerBackend>, options: ParseOptions) -> Self {
        Self {
            backend,
            options,
            source: None,
        }
    }

    /// Walk the source tree and build the converter document.
    pub fn parse(&self) -> Result<LayerDocument> {
        let sources = self.backend.source_tree()?;
        let root = self.walk(sources, 0);

        let mut metadata = Metadata::with_canvas(
            self.backend.canvas_width(),
            self.backend.canvas_height(),
        );
        metadata.version = self.backend.version();
        metadata.source = self.source.clone();

        let mut doc = LayerDocument::with_nodes(metadata, root);
        doc.metadata.layer_count = doc.node_count();
        doc.metadata.group_count = doc.group_count();
        Ok(doc)
    }

    fn walk(&self, sources: Vec<SourceLayer>, depth: u32) -> Vec<LayerNode> {
        let mut nodes = Vec::with_capacity(sources.len());
        for source in sources {
            match source.kind {
                SourceKind::Group => {
                    if self.options.flatten_groups {
                        // Splice descendants into this level, discarding the
                        // group wrapper and its geometry.
                        nodes.extend(self.walk(source.children, depth));
                    } else {
                        let children = self.walk(source.children, depth + 1);
                        nodes.push(LayerNode::group(source.name, depth, source.rect, children));
                    }
                }
                SourceKind::Raster => nodes.push(self.leaf(source, depth, LayerKind::Raster)),
                SourceKind::Vector => nodes.push(self.leaf(source, depth, LayerKind::Vector)),
                SourceKind::Embedded => nodes.push(self.leaf(source, depth, LayerKind::Embedded)),
                SourceKind::Text => nodes.push(self.leaf(source, depth, LayerKind::Text)),
                SourceKind::Other(ref label) => {
                    log::warn!("Ignore at this moment: {} ({})", source.name, label);
                    nodes.push(LayerNode::leaf(
                        source.name,
                        depth,
                        source.rect,
                        LayerKind::Unsupported,
                        None,
                    ));
                }
            }
        }
        nodes
    }

    fn leaf(&self, source: SourceLayer, depth: u32, kind: LayerKind) -> LayerNode {
        LayerNode::leaf(source.name, depth, source.rect, kind, source.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NodeContent, Rect};

    /// In-memory backend used to exercise the walker without a real PSD.
    struct FakeBackend {
        tree: Vec<SourceLayer>,
    }

    impl LayerBackend for FakeBackend {
        fn canvas_width(&self) -> u32 {
            100
        }

        fn canvas_height(&self) -> u32 {
            100
        }

        fn version(&self) -> u16 {
            1
        }

        fn source_tree(&self) -> Result<Vec<SourceLayer>> {
            Ok(self.tree.clone())
        }
    }

    fn sample_tree() -> Vec<SourceLayer> {
        vec![
            SourceLayer::group(
                "Header",
                vec![
                    SourceLayer::drawable(
                        "Logo",
                        SourceKind::Raster,
                        Rect::new(10, 20, 30, 30),
                        None,
                    ),
                    SourceLayer::drawable(
                        "Title",
                        SourceKind::Text,
                        Rect::new(15, 25, 40, 10),
                        None,
                    ),
                ],
            ),
            SourceLayer::drawable(
                "Adjustment",
                SourceKind::Other("adjustment".into()),
                Rect::new(0, 0, 100, 100),
                None,
            ),
        ]
    }

    #[test]
    fn test_walk_nested() {
        let parser = PsdParser::from_backend(
            Box::new(FakeBackend { tree: sample_tree() }),
            ParseOptions::default(),
        );
        let doc = parser.parse().unwrap();

        assert_eq!(doc.root.len(), 2);
        assert!(doc.root[0].is_group());
        assert_eq!(doc.root[0].depth, 0);
        assert_eq!(doc.root[0].children().len(), 2);
        assert_eq!(doc.root[0].children()[0].depth, 1);
        assert_eq!(doc.root[0].children()[1].kind(), Some(LayerKind::Text));
        assert_eq!(doc.metadata.layer_count, 4);
        assert_eq!(doc.metadata.group_count, 1);
    }

    #[test]
    fn test_walk_flattened() {
        let parser = PsdParser::from_backend(
            Box::new(FakeBackend { tree: sample_tree() }),
            ParseOptions::new().flattened(),
        );
        let doc = parser.parse().unwrap();

        // The group wrapper is gone; its children sit at the top level.
        assert_eq!(doc.root.len(), 3);
        assert!(doc.root.iter().all(|n| !n.is_group()));
        assert_eq!(doc.root[0].name, "Logo");
        assert_eq!(doc.root[0].depth, 0);
        // Absolute offsets survive flattening.
        assert_eq!(doc.root[0].rect, Rect::new(10, 20, 30, 30));
    }

    #[test]
    fn test_unsupported_kind_is_kept_and_marked() {
        let parser = PsdParser::from_backend(
            Box::new(FakeBackend { tree: sample_tree() }),
            ParseOptions::default(),
        );
        let doc = parser.parse().unwrap();

        let unsupported = &doc.root[1];
        assert_eq!(unsupported.kind(), Some(LayerKind::Unsupported));
        assert!(unsupported.pixels().is_none());
    }

    #[test]
    fn test_walk_never_fails_structurally() {
        let tree = vec![SourceLayer::group("Empty", Vec::new())];
        let parser = PsdParser::from_backend(
            Box::new(FakeBackend { tree }),
            ParseOptions::default(),
        );
        let doc = parser.parse().unwrap();
        assert_eq!(doc.root.len(), 1);
        assert!(doc.root[0].children().is_empty());
    }

    #[test]
    fn test_metadata_from_backend() {
        let parser = PsdParser::from_backend(
            Box::new(FakeBackend { tree: Vec::new() }),
            ParseOptions::default(),
        );
        let doc = parser.parse().unwrap();
        assert_eq!(doc.metadata.width, 100);
        assert_eq!(doc.metadata.height, 100);
        assert_eq!(doc.metadata.version, 1);
        assert!(matches!(
            doc.root.first().map(|n| &n.content),
            None | Some(NodeContent::Group { .. })
        ));
    }
}
