//! JSON load/save for resume documents.
//!
//! The on-disk form is the plain camelCase key-value representation of the
//! document; a load of a saved file reproduces the document exactly.

use std::fs;
use std::path::Path;

use crate::document::ResumeDocument;
use crate::error::Result;

/// Read a document from a JSON file.
pub fn load_document(path: &Path) -> Result<ResumeDocument> {
    let raw = fs::read_to_string(path)?;
    let doc = serde_json::from_str(&raw)?;
    Ok(doc)
}

/// Write a document to a JSON file, pretty-printed.
pub fn save_document(path: &Path, doc: &ResumeDocument) -> Result<()> {
    let json = serde_json::to_string_pretty(doc)?;
    fs::write(path, json)?;
    Ok(())
}

/// Serialize a document to a pretty JSON string.
pub fn document_to_json(doc: &ResumeDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}
