//! Parsing options and configuration.

/// Options for walking the source layer tree.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Splice group children directly into the parent's child list,
    /// discarding the group wrapper and its geometry.
    ///
    /// Default is `false`: groups become nested containers, which keeps the
    /// group's own sizing and makes the coordinate math directly observable
    /// in the output.
    pub flatten_groups: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable group flattening.
    pub fn with_flatten_groups(mut self, flatten: bool) -> Self {
        self.flatten_groups = flatten;
        self
    }

    /// Enable group flattening.
    pub fn flattened(mut self) -> Self {
        self.flatten_groups = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert!(!options.flatten_groups);
    }

    #[test]
    fn test_options_builder() {
        let options = ParseOptions::new().flattened();
        assert!(options.flatten_groups);

        let options = ParseOptions::new().with_flatten_groups(false);
        assert!(!options.flatten_groups);
    }
}
