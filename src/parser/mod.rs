//! PSD parsing: decoder backend abstraction and the layer tree walker.

mod backend;
mod options;
mod psd_parser;

pub use backend::{LayerBackend, PsdBackend, SourceKind, SourceLayer};
pub use options::ParseOptions;
pub use psd_parser::PsdParser;
