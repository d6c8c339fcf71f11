//! Opening and saving documents
//!
//! Failure mapping follows the generation contract: anything that prevents
//! reading a template surfaces as `TemplateUnreadable`, anything that
//! prevents producing the output file surfaces as `OutputWriteError`.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::document::model::Document;
use crate::error::{DocfillError, Result};

/// Open a document file into the in-memory model
pub fn open_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| DocfillError::TemplateUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| DocfillError::TemplateUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Save a document to `path`.
///
/// Writes to a temporary file in the destination directory first and
/// persists it with an atomic rename, so a failed save never leaves a
/// partial document behind.
pub fn save_document(document: &Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let parent = path.parent().ok_or_else(|| DocfillError::OutputWriteError {
        path: path.to_path_buf(),
        reason: "destination has no parent directory".to_string(),
    })?;

    let content =
        serde_json::to_string_pretty(document).map_err(|e| DocfillError::OutputWriteError {
            path: path.to_path_buf(),
            reason: format!("failed to serialize: {}", e),
        })?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| DocfillError::OutputWriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| DocfillError::OutputWriteError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    tmp.persist(path).map_err(|e| DocfillError::OutputWriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(())
}
