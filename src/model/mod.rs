//! Document model types for PSD layer-tree representation.
//!
//! This module defines the intermediate representation (IR) that bridges
//! PSD decoding and layout rendering. The model owns all of its data; once
//! built there are no references back into the decoder.

mod document;
mod node;

pub use document::{LayerDocument, Metadata};
pub use node::{LayerKind, LayerNode, NodeContent, Pixmap, Rect};
