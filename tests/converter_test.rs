//! Integration tests for the converter module.

use std::path::Path;
use std::sync::Arc;
use unpsd::convert::{
    ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter, PsdConverter,
};
use unpsd::error::Result;

/// Mock converter for testing.
struct MockConverter {
    extensions: Vec<&'static str>,
    name: &'static str,
}

impl MockConverter {
    fn new(extensions: Vec<&'static str>, name: &'static str) -> Self {
        Self { extensions, name }
    }
}

impl DocumentConverter for MockConverter {
    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn name(&self) -> &str {
        self.name
    }

    fn convert(&self, _path: &Path, _options: &ConvertOptions) -> Result<ConvertResult> {
        Ok(ConvertResult::new(
            format!("Converted by {}", self.name),
            Default::default(),
        ))
    }

    fn convert_bytes(&self, _bytes: &[u8], _options: &ConvertOptions) -> Result<ConvertResult> {
        Ok(ConvertResult::new(
            format!("Converted bytes by {}", self.name),
            Default::default(),
        ))
    }
}

#[test]
fn test_converter_registry_new() {
    let registry = ConverterRegistry::new();

    // Empty registry should support nothing
    assert!(!registry.supports("psd"));
    assert!(!registry.supports("xcf"));
}

#[test]
fn test_converter_registry_with_defaults() {
    let registry = ConverterRegistry::with_defaults();

    // Should have PSD support
    assert!(registry.supports("psd"));
    assert!(registry.supports("PSD")); // Case insensitive
    assert!(registry.supports("psb"));
    assert!(!registry.supports("xcf"));
}

#[test]
fn test_converter_registry_register() {
    let mut registry = ConverterRegistry::new();
    let converter = Arc::new(MockConverter::new(vec!["ora", "kra"], "paint"));

    registry.register(converter);

    assert!(registry.supports("ora"));
    assert!(registry.supports("kra"));
    assert!(registry.supports("ORA")); // Case insensitive
}

#[test]
fn test_converter_registry_get_by_extension() {
    let registry = ConverterRegistry::with_defaults();

    let converter = registry.get_by_extension("psd");
    assert!(converter.is_some());
    assert_eq!(converter.unwrap().name(), "psd");

    let converter = registry.get_by_extension("xcf");
    assert!(converter.is_none());
}

#[test]
fn test_converter_registry_get_by_name() {
    let registry = ConverterRegistry::with_defaults();

    let converter = registry.get_by_name("psd");
    assert!(converter.is_some());

    let converter = registry.get_by_name("PSD"); // Case insensitive
    assert!(converter.is_some());

    let converter = registry.get_by_name("unknown");
    assert!(converter.is_none());
}

#[test]
fn test_converter_registry_multiple_converters() {
    let mut registry = ConverterRegistry::new();

    registry.register(Arc::new(PsdConverter::new()));
    registry.register(Arc::new(MockConverter::new(vec!["ora"], "openraster")));
    registry.register(Arc::new(MockConverter::new(vec!["kra"], "krita")));

    assert!(registry.supports("psd"));
    assert!(registry.supports("psb"));
    assert!(registry.supports("ora"));
    assert!(registry.supports("kra"));

    // Check we get the right converter
    let converter = registry.get_by_name("krita");
    assert!(converter.is_some());
    assert!(converter.unwrap().supports_extension("kra"));
}

#[test]
fn test_supported_extensions() {
    let registry = ConverterRegistry::with_defaults();
    let extensions = registry.supported_extensions();

    assert!(extensions.contains(&"psd"));
    assert!(extensions.contains(&"psb"));
}

#[test]
fn test_psd_converter_extensions() {
    let converter = PsdConverter::new();

    assert_eq!(converter.supported_extensions(), &["psd", "psb"]);
    assert!(converter.supports_extension("psd"));
    assert!(converter.supports_extension("PSD"));
    assert!(!converter.supports_extension("ora"));
}

#[test]
fn test_psd_converter_name() {
    let converter = PsdConverter::new();
    assert_eq!(converter.name(), "psd");
}

#[test]
fn test_convert_result_methods() {
    let result = ConvertResult::new("<FrameLayout />".to_string(), Default::default());

    assert_eq!(result.layout_xml, "<FrameLayout />");
    assert_eq!(result.content_len(), 15);
    assert!(result.assets.is_empty());
    assert_eq!(result.mime_type, "application/xml");
}

#[test]
fn test_convert_result_with_stats() {
    use unpsd::render::RenderStats;

    let stats = RenderStats {
        groups_emitted: 2,
        leaves_emitted: 5,
        ..Default::default()
    };

    let result =
        ConvertResult::new("content".to_string(), Default::default()).with_stats(stats);

    assert_eq!(result.stats.groups_emitted, 2);
    assert_eq!(result.stats.elements_emitted(), 7);
}

#[test]
fn test_convert_result_with_assets() {
    let result = ConvertResult::new("x".to_string(), Default::default())
        .with_assets(vec!["logo".into(), "hero".into()]);

    assert_eq!(result.assets, vec!["logo".to_string(), "hero".to_string()]);
}

#[test]
fn test_mock_converter() {
    let converter = MockConverter::new(vec!["mock"], "mock-converter");

    assert_eq!(converter.name(), "mock-converter");
    assert!(converter.supports_extension("mock"));

    let result = converter
        .convert(Path::new("test.mock"), &ConvertOptions::default())
        .unwrap();
    assert!(result.layout_xml.contains("mock-converter"));
}

#[test]
fn test_registry_convert_no_extension_error() {
    let registry = ConverterRegistry::with_defaults();

    // Path without extension
    let result = registry.convert(Path::new("noextension"), &ConvertOptions::default());
    assert!(result.is_err());
}

#[test]
fn test_registry_convert_unsupported_extension_error() {
    let registry = ConverterRegistry::with_defaults();

    // Unsupported extension
    let result = registry.convert(Path::new("test.xyz"), &ConvertOptions::default());
    assert!(result.is_err());
}

#[test]
fn test_registry_convert_bytes_unsupported() {
    let registry = ConverterRegistry::with_defaults();

    let result = registry.convert_bytes(b"test", "xyz", &ConvertOptions::default());
    assert!(result.is_err());
}

#[test]
fn test_registry_convert_bytes_invalid_psd() {
    let registry = ConverterRegistry::with_defaults();

    // Dispatches to the PSD converter, which rejects the bytes
    let result = registry.convert_bytes(b"not a psd", "psd", &ConvertOptions::default());
    assert!(result.is_err());
}
