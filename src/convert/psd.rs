//! PSD document converter implementation.

use crate::error::Result;
use crate::parser::PsdParser;
use crate::render::render_layout;
use std::path::Path;

use super::{ConvertOptions, ConvertResult, DocumentConverter};

/// PSD document converter.
///
/// Parses a layered Photoshop document, exports its drawable assets and
/// produces an Android layout XML document.
#[derive(Debug, Clone, Default)]
pub struct PsdConverter {
    _private: (),
}

impl PsdConverter {
    /// Create a new PSD converter.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn convert_document(
        &self,
        doc: crate::model::LayerDocument,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let metadata = doc.metadata.clone();
        let rendered = render_layout(&doc, &options.render)?;

        Ok(ConvertResult::new(rendered.xml, metadata)
            .with_assets(rendered.assets)
            .with_stats(rendered.stats)
            .with_mime_type("application/xml"))
    }
}

impl DocumentConverter for PsdConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["psd", "psb"]
    }

    fn name(&self) -> &str {
        "psd"
    }

    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let parser = PsdParser::open_with_options(path, options.parse.clone())?;
        let doc = parser.parse()?;
        self.convert_document(doc, options)
    }

    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        let parser = PsdParser::from_bytes_with_options(bytes, options.parse.clone())?;
        let doc = parser.parse()?;
        self.convert_document(doc, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_psd_converter_extensions() {
        let converter = PsdConverter::new();
        assert_eq!(converter.supported_extensions(), &["psd", "psb"]);
        assert!(converter.supports_extension("psd"));
        assert!(converter.supports_extension("PSD"));
        assert!(!converter.supports_extension("xcf"));
    }

    #[test]
    fn test_psd_converter_name() {
        let converter = PsdConverter::new();
        assert_eq!(converter.name(), "psd");
    }
}
