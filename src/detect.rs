//! PSD format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// PSD format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PsdFormat {
    /// Format version word: 1 for PSD, 2 for PSB (large document format)
    pub version: u16,
}

impl PsdFormat {
    /// Whether this is the large document (PSB) variant.
    pub fn is_large_document(&self) -> bool {
        self.version == 2
    }
}

impl std::fmt::Display for PsdFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.version {
            2 => write!(f, "PSB"),
            _ => write!(f, "PSD"),
        }
    }
}

/// PSD magic bytes: 8BPS
const PSD_MAGIC: &[u8] = b"8BPS";
const PSD_MAGIC_LEN: usize = 4;
const VERSION_LEN: usize = 2; // big-endian u16 following the signature

/// Detect PSD format from a file path.
///
/// # Arguments
/// * `path` - Path to the PSD file
///
/// # Returns
/// * `Ok(PsdFormat)` if the file carries a valid PSD header
/// * `Err(Error::UnknownFormat)` if the file is not a PSD
///
/// # Example
/// ```no_run
/// use unpsd::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("design.psd").unwrap();
/// println!("Format: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<PsdFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(PSD_MAGIC_LEN + VERSION_LEN);
    BufReader::new(file)
        .take((PSD_MAGIC_LEN + VERSION_LEN) as u64)
        .read_to_end(&mut header)?;
    // A short read falls through to the length check below, so truncated
    // files classify the same as truncated byte slices.
    detect_format_from_bytes(&header)
}

/// Detect PSD format from bytes.
///
/// # Arguments
/// * `data` - Byte slice containing at least the first 6 bytes of the file
///
/// # Returns
/// * `Ok(PsdFormat)` if the data starts with a valid PSD header
/// * `Err(Error::UnknownFormat)` if the data is not a PSD
pub fn detect_format_from_bytes(data: &[u8]) -> Result<PsdFormat> {
    if data.len() < PSD_MAGIC_LEN + VERSION_LEN {
        return Err(Error::UnknownFormat);
    }

    // Check for PSD magic bytes
    if !data.starts_with(PSD_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    // The version word follows the signature, big-endian
    let version = u16::from_be_bytes([data[PSD_MAGIC_LEN], data[PSD_MAGIC_LEN + 1]]);
    if version != 1 && version != 2 {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(PsdFormat { version })
}

/// Check if a file is a valid PSD.
///
/// # Arguments
/// * `path` - Path to the file
///
/// # Returns
/// * `true` if the file is a valid PSD
/// * `false` otherwise
pub fn is_psd<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes represent a valid PSD.
///
/// # Arguments
/// * `data` - Byte slice to check
///
/// # Returns
/// * `true` if the data is a valid PSD header
/// * `false` otherwise
pub fn is_psd_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
