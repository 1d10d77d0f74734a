//! Error types for the unpsd library.

use std::io;
use thiserror::Error;

/// Result type alias for unpsd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during PSD conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PSD.
    #[error("Unknown file format: not a valid PSD")]
    UnknownFormat,

    /// The PSD version word is not one this tool understands.
    #[error("Unsupported PSD version: {0}")]
    UnsupportedVersion(u16),

    /// Error decoding the PSD structure.
    #[error("PSD decoding error: {0}")]
    Decode(String),

    /// Error encoding an exported image asset.
    #[error("Image encoding error: {0}")]
    ImageEncode(String),

    /// Error exporting an asset to the drawable directory.
    #[error("Asset export error: {0}")]
    AssetExport(String),

    /// Error during layout or JSON rendering.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::ImageEncode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(err.to_string(), "Unknown file format: not a valid PSD");

        let err = Error::UnsupportedVersion(3);
        assert_eq!(err.to_string(), "Unsupported PSD version: 3");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
