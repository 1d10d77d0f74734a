//! # unpsd
//!
//! PSD layer extraction and Android layout generation library for Rust.
//!
//! This library reads layered Photoshop documents, exports each drawable
//! layer as a PNG asset and emits an Android `FrameLayout`/`ImageView`
//! layout XML mirroring the layer tree.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unpsd::{parse_file, render};
//!
//! fn main() -> unpsd::Result<()> {
//!     // Parse a PSD file
//!     let doc = parse_file("design.psd")?;
//!
//!     // Generate the layout XML, exporting assets as a side effect
//!     let options = render::RenderOptions::default();
//!     let result = render::render_layout(&doc, &options)?;
//!     println!("{}", result.xml);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Layer tree extraction**: groups, raster layers, absolute geometry
//! - **Asset export**: per-layer PNG files with sanitized, collision-free names
//! - **Layout emission**: nested `FrameLayout` containers with margin deltas
//! - **Data binding**: optional `<layout>` wrapper with a `<data>` section
//! - **JSON dumps**: structural inspection of the extracted tree

pub mod convert;
pub mod detect;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_psd, PsdFormat};
pub use error::{Error, Result};
pub use export::{sanitize_name, AssetExporter};
pub use model::{LayerDocument, LayerKind, LayerNode, Metadata, NodeContent, Pixmap, Rect};
pub use parser::{LayerBackend, ParseOptions, PsdParser, SourceKind, SourceLayer};
pub use render::{
    DataBinding, JsonFormat, MarkupElement, RenderOptions, RenderResult, RenderStats,
};

use std::io::Read;
use std::path::Path;

/// Parse a PSD file and return the extracted layer tree.
///
/// # Arguments
///
/// * `path` - Path to the PSD file
///
/// # Returns
///
/// A `Result` containing the parsed `LayerDocument` or an error.
///
/// # Example
///
/// ```no_run
/// use unpsd::parse_file;
///
/// let doc = parse_file("design.psd").unwrap();
/// println!("Layers: {}", doc.node_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<LayerDocument> {
    let parser = PsdParser::open(path)?;
    parser.parse()
}

/// Parse a PSD file with custom options.
///
/// # Example
///
/// ```no_run
/// use unpsd::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().flattened();
/// let doc = parse_file_with_options("design.psd", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<LayerDocument> {
    let parser = PsdParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a PSD from bytes.
///
/// # Example
///
/// ```no_run
/// use unpsd::parse_bytes;
///
/// let data = std::fs::read("design.psd").unwrap();
/// let doc = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<LayerDocument> {
    let parser = PsdParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a PSD from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<LayerDocument> {
    let parser = PsdParser::from_bytes_with_options(data, options)?;
    parser.parse()
}

/// Parse a PSD from a reader.
///
/// # Example
///
/// ```no_run
/// use unpsd::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("design.psd").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<LayerDocument> {
    let parser = PsdParser::from_reader(reader)?;
    parser.parse()
}

/// Parse a PSD from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(
    reader: R,
    options: ParseOptions,
) -> Result<LayerDocument> {
    let parser = PsdParser::from_reader_with_options(reader, options)?;
    parser.parse()
}

/// Generate layout XML from a PSD file using default options.
///
/// Assets are written into the default drawable directory; the returned
/// result carries the XML, exported asset names and emission statistics.
///
/// # Example
///
/// ```no_run
/// use unpsd::generate_layout;
///
/// let result = generate_layout("design.psd").unwrap();
/// std::fs::write("activity_main.xml", &result.xml).unwrap();
/// ```
pub fn generate_layout<P: AsRef<Path>>(path: P) -> Result<RenderResult> {
    let doc = parse_file(path)?;
    render::render_layout(&doc, &RenderOptions::default())
}

/// Generate layout XML from a PSD file with custom options.
///
/// # Example
///
/// ```no_run
/// use unpsd::{generate_layout_with_options, RenderOptions, DataBinding};
///
/// let options = RenderOptions::new()
///     .with_asset_dir("app/src/main/res/drawable")
///     .with_data_binding(DataBinding::sample());
/// let result = generate_layout_with_options("design.psd", &options).unwrap();
/// ```
pub fn generate_layout_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<RenderResult> {
    let doc = parse_file(path)?;
    render::render_layout(&doc, options)
}

/// Convert a PSD to JSON.
///
/// # Example
///
/// ```no_run
/// use unpsd::{to_json, JsonFormat};
///
/// let json = to_json("design.psd", JsonFormat::Pretty).unwrap();
/// std::fs::write("layers.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Builder for parsing and converting PSD documents.
///
/// # Example
///
/// ```no_run
/// use unpsd::Unpsd;
///
/// let result = Unpsd::new()
///     .with_asset_dir("./drawable")
///     .parse("design.psd")?
///     .to_layout_xml()?;
/// # Ok::<(), unpsd::Error>(())
/// ```
pub struct Unpsd {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Unpsd {
    /// Create a new Unpsd builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Discard group wrappers and splice their children to the top level.
    pub fn flattened(mut self) -> Self {
        self.parse_options = self.parse_options.flattened();
        self
    }

    /// Set the drawable output directory.
    pub fn with_asset_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.render_options = self.render_options.with_asset_dir(dir);
        self
    }

    /// Add a file name the asset directory clean-up must not delete.
    pub fn with_retained_file(mut self, name: impl Into<String>) -> Self {
        self.render_options = self.render_options.retain_file(name);
        self
    }

    /// Wrap the layout in a data-binding `<layout>` element.
    pub fn with_data_binding(mut self, binding: DataBinding) -> Self {
        self.render_options = self.render_options.with_data_binding(binding);
        self
    }

    /// Parse a PSD file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UnpsdResult> {
        let parser = PsdParser::open_with_options(path, self.parse_options)?;
        let document = parser.parse()?;
        Ok(UnpsdResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a PSD from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UnpsdResult> {
        let parser = PsdParser::from_bytes_with_options(data, self.parse_options)?;
        let document = parser.parse()?;
        Ok(UnpsdResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Unpsd {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a PSD document.
pub struct UnpsdResult {
    /// The parsed layer tree
    pub document: LayerDocument,
    /// Render options to use
    render_options: RenderOptions,
}

impl UnpsdResult {
    /// Render to layout XML, exporting assets into the configured directory.
    pub fn to_layout(&self) -> Result<RenderResult> {
        render::render_layout(&self.document, &self.render_options)
    }

    /// Render to layout XML and return only the serialized document.
    pub fn to_layout_xml(&self) -> Result<String> {
        Ok(self.to_layout()?.xml)
    }

    /// Convert the layer tree to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &LayerDocument {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpsd_builder() {
        let unpsd = Unpsd::new()
            .flattened()
            .with_asset_dir("./drawable")
            .with_retained_file("keep.xml");

        assert!(unpsd.parse_options.flatten_groups);
        assert_eq!(
            unpsd.render_options.asset_dir,
            std::path::PathBuf::from("./drawable")
        );
        assert!(unpsd
            .render_options
            .retained_files
            .iter()
            .any(|f| f == "keep.xml"));
    }

    #[test]
    fn test_unpsd_builder_default() {
        let builder = Unpsd::default();
        assert!(!builder.parse_options.flatten_groups);
        assert!(builder.render_options.data_binding.is_none());
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_parse_bytes_empty_data() {
        // Empty data should return an error
        let data: [u8; 0] = [];
        let result = parse_bytes(&data);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_bytes_too_short() {
        // Data shorter than the PSD magic should fail
        let data = b"8BPS";
        let result = parse_bytes(data);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_bytes_unknown_magic() {
        // Random bytes that don't match the PSD format
        let data = [0xFF, 0xFE, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let result = parse_bytes(&data);
        assert!(result.is_err());
    }

    #[test]
    fn test_detect_format_empty_data() {
        let data: [u8; 0] = [];
        let result = detect_format_from_bytes(&data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_format_unknown_magic() {
        let data = b"<!DOCTYPE html><html></html>";
        let result = detect_format_from_bytes(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_valid_psd() {
        let data = b"8BPS\x00\x01rest-of-header";
        let format = detect_format_from_bytes(data).unwrap();
        assert_eq!(format.version, 1);
        assert!(!format.is_large_document());
    }

    #[test]
    fn test_detect_valid_psb() {
        let data = b"8BPS\x00\x02rest-of-header";
        let format = detect_format_from_bytes(data).unwrap();
        assert_eq!(format.version, 2);
        assert!(format.is_large_document());
    }

    #[test]
    fn test_is_psd_bytes() {
        assert!(detect::is_psd_bytes(b"8BPS\x00\x01data"));
        assert!(!detect::is_psd_bytes(b"Not a PSD file"));
        assert!(!detect::is_psd_bytes(b""));
    }

    // ==================== Builder Pattern Tests ====================

    #[test]
    fn test_unpsd_builder_parse_invalid_bytes() {
        // Builder with invalid bytes should fail gracefully
        let result = Unpsd::new().parse_bytes(b"not a psd");
        assert!(result.is_err());
    }

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert_eq!(
            options.asset_dir,
            std::path::PathBuf::from("app/src/main/res/drawable")
        );
        assert!(options
            .retained_files
            .iter()
            .any(|f| f == "ic_launcher_background.xml"));
    }

    #[test]
    fn test_json_format_variants() {
        // Both JSON format variants should exist
        let _pretty = JsonFormat::Pretty;
        let _compact = JsonFormat::Compact;
    }
}
