//! Image asset export: name sanitization, collision resolution, PNG writing,
//! and drawable-directory cleanup.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::LayerNode;

/// Characters never allowed in an asset file name.
const PROHIBITED_CHARACTERS: &str = r"[%#()]";

/// Prefix applied when a sanitized name does not start with a letter.
const NAME_PREFIX: &str = "image_";

/// Exports leaf layers as PNG assets into a drawable directory.
///
/// At most one file is created per [`export`](AssetExporter::export) call,
/// and an existing distinct asset is never overwritten: name collisions are
/// resolved against the directory contents at call time.
pub struct AssetExporter {
    dir: PathBuf,
}

impl AssetExporter {
    /// Create an exporter writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Destination directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Delete previously exported files, keeping the retained allow-list.
    ///
    /// Creates the directory if it does not exist. Runs once, eagerly,
    /// before traversal; not transactional.
    pub fn clean(&self, retain: &[String]) -> Result<()> {
        if !self.dir.is_dir() {
            fs::create_dir_all(&self.dir)?;
            return Ok(());
        }

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if retain.iter().any(|r| r == &name) {
                continue;
            }
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Export one leaf layer as a PNG asset.
    ///
    /// Returns the chosen asset name without extension, or `None` when there
    /// is nothing to export: the node is a container, or rasterization
    /// yielded no pixels (logged).
    pub fn export(&self, node: &LayerNode) -> Result<Option<String>> {
        // Defensive guard: containers carry no pixels of their own.
        if node.is_group() {
            return Ok(None);
        }

        let base = sanitize_name(&node.name);
        let name = self.resolve_collision(&base);

        let Some(pixmap) = node.pixels() else {
            log::warn!("{} is empty.", name);
            return Ok(None);
        };

        let image = image::RgbaImage::from_raw(pixmap.width, pixmap.height, pixmap.rgba.clone())
            .ok_or_else(|| {
                Error::AssetExport(format!(
                    "pixel buffer does not match {}x{} for {}",
                    pixmap.width, pixmap.height, name
                ))
            })?;

        let path = self.asset_path(&name);
        image.save_with_format(&path, image::ImageFormat::Png)?;
        log::debug!("exported {}", path.display());
        Ok(Some(name))
    }

    /// Find a free name by appending a numeric suffix until no file of that
    /// name exists. Bounded by the directory contents at call time.
    fn resolve_collision(&self, base: &str) -> String {
        let mut name = base.to_string();
        let mut suffix: u32 = 0;
        while self.asset_path(&name).is_file() {
            let tail = format!("_{}", suffix);
            if let Some(stripped) = name.strip_suffix(&tail) {
                name = stripped.to_string();
            }
            suffix += 1;
            name = format!("{}_{}", name, suffix);
        }
        name
    }

    fn asset_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.png", name))
    }
}

/// Derive an asset name from a layer's display name.
///
/// Lowercased, spaces replaced with underscores, prohibited characters
/// stripped; prefixed with `image_` when the result does not start with a
/// lowercase letter.
pub fn sanitize_name(name: &str) -> String {
    let lowered = name.to_lowercase().replace(' ', "_");
    let re = Regex::new(PROHIBITED_CHARACTERS).unwrap();
    let stripped = re.replace_all(&lowered, "").to_string();

    if stripped.chars().next().is_some_and(|c| c.is_ascii_lowercase()) {
        stripped
    } else {
        format!("{}{}", NAME_PREFIX, stripped)
    }
}
