//! Render result and emission statistics.

use serde::{Deserialize, Serialize};

/// Counters collected while emitting the layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Container elements emitted
    pub groups_emitted: usize,

    /// Image elements emitted
    pub leaves_emitted: usize,

    /// PNG assets written to the drawable directory
    pub assets_written: usize,

    /// Groups dropped because no child element survived
    pub groups_dropped: usize,

    /// Leaves skipped because rasterization yielded nothing
    pub empty_skipped: usize,

    /// Leaves skipped because their kind is unsupported
    pub unsupported_skipped: usize,
}

impl RenderStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_group(&mut self) {
        self.groups_emitted += 1;
    }

    pub fn add_leaf(&mut self) {
        self.leaves_emitted += 1;
    }

    pub fn add_asset(&mut self) {
        self.assets_written += 1;
    }

    pub fn add_dropped_group(&mut self) {
        self.groups_dropped += 1;
    }

    pub fn add_empty_skip(&mut self) {
        self.empty_skipped += 1;
    }

    pub fn add_unsupported_skip(&mut self) {
        self.unsupported_skipped += 1;
    }

    /// Total elements emitted, excluding the root container.
    pub fn elements_emitted(&self) -> usize {
        self.groups_emitted + self.leaves_emitted
    }
}

/// Result of rendering a layer document to layout XML.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Serialized layout XML
    pub xml: String,

    /// Asset names written this run, in export order, without extension
    pub assets: Vec<String>,

    /// Emission statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(xml: String, assets: Vec<String>, stats: RenderStats) -> Self {
        Self { xml, assets, stats }
    }

    /// Layout XML length in bytes.
    pub fn xml_len(&self) -> usize {
        self.xml.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_counters() {
        let mut stats = RenderStats::new();
        stats.add_group();
        stats.add_leaf();
        stats.add_leaf();
        stats.add_asset();
        stats.add_dropped_group();

        assert_eq!(stats.groups_emitted, 1);
        assert_eq!(stats.leaves_emitted, 2);
        assert_eq!(stats.elements_emitted(), 3);
        assert_eq!(stats.groups_dropped, 1);
    }
}
