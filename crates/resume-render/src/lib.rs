//! Resume presentation rendering.
//!
//! This crate maps a document snapshot to a presentation tree and writes
//! that tree as plain text:
//!
//! - **tree**: the presentation structure consumed by display and export
//! - **render**: the pure document-to-tree mapping
//! - **text**: deterministic plain-text layout of a tree

mod render;
mod text;
mod tree;

pub use render::render;
pub use text::{plain_text, write_plain_text};
pub use tree::{EntryBlock, HeaderBlock, PresentationTree, SectionBlock};
