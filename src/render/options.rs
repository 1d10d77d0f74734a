//! Rendering options and configuration.

use std::path::PathBuf;

/// Options for rendering a layer document to layout XML.
///
/// All output locations are explicit configuration; nothing is read from
/// globals or the environment.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Directory receiving exported PNG assets
    pub asset_dir: PathBuf,

    /// File names preserved when the asset directory is cleaned
    pub retained_files: Vec<String>,

    /// Wrap the layout in a data-binding `<layout>` element
    pub data_binding: Option<DataBinding>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the asset directory.
    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    /// Replace the retained-filename allow-list.
    pub fn with_retained_files(mut self, files: Vec<String>) -> Self {
        self.retained_files = files;
        self
    }

    /// Add one file name to the retained allow-list.
    pub fn retain_file(mut self, file: impl Into<String>) -> Self {
        self.retained_files.push(file.into());
        self
    }

    /// Enable data-binding wrapping.
    pub fn with_data_binding(mut self, binding: DataBinding) -> Self {
        self.data_binding = Some(binding);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("app/src/main/res/drawable"),
            retained_files: vec!["ic_launcher_background.xml".to_string()],
            data_binding: None,
        }
    }
}

/// Data-binding declaration for the `<data>` section: one variable and up
/// to two type imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataBinding {
    /// Variable name (e.g., "binding")
    pub variable_name: String,

    /// Fully qualified variable type
    pub variable_type: String,

    /// Fully qualified imported types; at most two are emitted
    pub imports: Vec<String>,
}

impl DataBinding {
    /// Create a data-binding declaration.
    pub fn new(variable_name: impl Into<String>, variable_type: impl Into<String>) -> Self {
        Self {
            variable_name: variable_name.into(),
            variable_type: variable_type.into(),
            imports: Vec::new(),
        }
    }

    /// Add an imported type.
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    /// The declaration matching the generated stub files.
    pub fn sample() -> Self {
        Self::new("binding", "com.sample.myapplication.binding.SampleBinding")
            .with_import("com.sample.myapplication.enums.Test")
            .with_import("androidx.databinding.ObservableField")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.asset_dir, PathBuf::from("app/src/main/res/drawable"));
        assert_eq!(
            options.retained_files,
            vec!["ic_launcher_background.xml".to_string()]
        );
        assert!(options.data_binding.is_none());
    }

    #[test]
    fn test_options_builder() {
        let options = RenderOptions::new()
            .with_asset_dir("out/drawable")
            .retain_file("keep.xml")
            .with_data_binding(DataBinding::sample());

        assert_eq!(options.asset_dir, PathBuf::from("out/drawable"));
        assert!(options
            .retained_files
            .contains(&"keep.xml".to_string()));
        assert!(options.data_binding.is_some());
    }

    #[test]
    fn test_data_binding_sample() {
        let binding = DataBinding::sample();
        assert_eq!(binding.variable_name, "binding");
        assert_eq!(binding.imports.len(), 2);
    }
}
