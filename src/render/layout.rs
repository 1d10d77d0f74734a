//! Layout emission: walks the converter tree and builds the markup tree,
//! exporting leaf assets along the way.

use crate::error::Result;
use crate::export::AssetExporter;
use crate::model::{LayerDocument, LayerKind, LayerNode, NodeContent};

use super::attrs::{
    set_height, set_id, set_image_source, set_margin_left, set_margin_top, set_namespaces,
    set_width, Dimension,
};
use super::options::RenderOptions;
use super::stats::{RenderResult, RenderStats};
use super::xml::{to_xml_string, MarkupElement};

/// Render a document to layout XML, exporting assets into the configured
/// drawable directory.
///
/// The asset directory is cleaned (honoring the retained-file allow-list)
/// once, before traversal begins.
pub fn render_layout(doc: &LayerDocument, options: &RenderOptions) -> Result<RenderResult> {
    let exporter = AssetExporter::new(&options.asset_dir);
    exporter.clean(&options.retained_files)?;
    let renderer = LayoutRenderer::new(options.clone());
    renderer.render(doc, &exporter)
}

/// Layout renderer.
///
/// Coordinate rule: layer offsets are absolute within the document; each
/// element's margins are the delta between its own absolute offset and its
/// parent's. The origin passed to a node's children is always that node's
/// absolute offset, at every depth.
pub struct LayoutRenderer {
    options: RenderOptions,
    stats: RenderStats,
    assets: Vec<String>,
}

impl LayoutRenderer {
    /// Create a new layout renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
            assets: Vec::new(),
        }
    }

    /// Render the document, writing assets through `exporter`.
    pub fn render(mut self, doc: &LayerDocument, exporter: &AssetExporter) -> Result<RenderResult> {
        let root = self.build_tree(doc, exporter)?;
        let xml = to_xml_string(&root);
        Ok(RenderResult::new(xml, self.assets, self.stats))
    }

    /// Build the markup tree without serializing it.
    pub fn build_tree(
        &mut self,
        doc: &LayerDocument,
        exporter: &AssetExporter,
    ) -> Result<MarkupElement> {
        // The root container is always emitted, children or not.
        let mut content = MarkupElement::new("FrameLayout");
        for node in &doc.root {
            self.emit_node(node, (0, 0), &mut content, exporter)?;
        }

        match self.options.data_binding.clone() {
            Some(binding) => {
                let mut layout = MarkupElement::new("layout");
                set_namespaces(&mut layout);
                layout.add_child(data_section(&binding));

                set_id(&mut content, "root");
                set_width(&mut content, Dimension::MatchParent);
                set_height(&mut content, Dimension::MatchParent);
                layout.add_child(content);
                Ok(layout)
            }
            None => {
                set_namespaces(&mut content);
                set_id(&mut content, "root");
                set_width(&mut content, Dimension::MatchParent);
                set_height(&mut content, Dimension::MatchParent);
                Ok(content)
            }
        }
    }

    fn emit_node(
        &mut self,
        node: &LayerNode,
        origin: (i32, i32),
        parent: &mut MarkupElement,
        exporter: &AssetExporter,
    ) -> Result<()> {
        match &node.content {
            NodeContent::Group { children } => self.emit_group(node, children, origin, parent, exporter),
            NodeContent::Leaf { kind, .. } => self.emit_leaf(node, *kind, origin, parent, exporter),
        }
    }

    fn emit_group(
        &mut self,
        node: &LayerNode,
        children: &[LayerNode],
        origin: (i32, i32),
        parent: &mut MarkupElement,
        exporter: &AssetExporter,
    ) -> Result<()> {
        let mut elem = MarkupElement::new("FrameLayout");

        // Children measure against this group's own absolute offset.
        let child_origin = (node.rect.x, node.rect.y);
        for child in children {
            self.emit_node(child, child_origin, &mut elem, exporter)?;
        }

        // A container with no surviving children is dropped, not emitted
        // empty.
        if !elem.has_children() {
            log::debug!("dropping empty group: {}", node.name);
            self.stats.add_dropped_group();
            return Ok(());
        }

        set_id(&mut elem, &element_id(&node.name));
        set_width(&mut elem, Dimension::Dp(node.rect.width));
        set_height(&mut elem, Dimension::Dp(node.rect.height));
        set_margin_left(&mut elem, node.rect.x - origin.0);
        set_margin_top(&mut elem, node.rect.y - origin.1);

        parent.add_child(elem);
        self.stats.add_group();
        Ok(())
    }

    fn emit_leaf(
        &mut self,
        node: &LayerNode,
        kind: LayerKind,
        origin: (i32, i32),
        parent: &mut MarkupElement,
        exporter: &AssetExporter,
    ) -> Result<()> {
        if kind == LayerKind::Unsupported {
            log::warn!("skipping unsupported layer: {}", node.name);
            self.stats.add_unsupported_skip();
            return Ok(());
        }

        let Some(asset) = exporter.export(node)? else {
            self.stats.add_empty_skip();
            return Ok(());
        };

        let mut elem = MarkupElement::new("ImageView");
        set_id(&mut elem, &asset);
        set_width(&mut elem, Dimension::Dp(node.rect.width));
        set_height(&mut elem, Dimension::Dp(node.rect.height));
        set_margin_left(&mut elem, node.rect.x - origin.0);
        set_margin_top(&mut elem, node.rect.y - origin.1);
        set_image_source(&mut elem, &asset);

        parent.add_child(elem);
        self.stats.add_leaf();
        self.stats.add_asset();
        self.assets.push(asset);
        Ok(())
    }
}

/// Identifier for a container element, derived from the layer name.
fn element_id(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Build the `<data>` section: imports first, then the variable.
fn data_section(binding: &super::options::DataBinding) -> MarkupElement {
    let mut data = MarkupElement::new("data");
    for import in binding.imports.iter().take(2) {
        let mut elem = MarkupElement::new("import");
        elem.set_attr("type", import.clone());
        data.add_child(elem);
    }
    let mut variable = MarkupElement::new("variable");
    variable.set_attr("name", binding.variable_name.clone());
    variable.set_attr("type", binding.variable_type.clone());
    data.add_child(variable);
    data
}
