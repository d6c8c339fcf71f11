//! Test utilities for docfill
//!
//! Shared across the workspace: workspace-local temporary directories and
//! canned document fixtures in the document-store format.

use tempfile::TempDir;

pub mod fixtures;

pub use fixtures::{
    client_attributes_json, contract_template_json, write_attributes, write_template,
};

/// Temporary directory under `.tmp/` at the crate root.
///
/// Generation tests create media roots, template files and output trees;
/// keeping them all below one gitignored `.tmp/` makes stray leftovers easy
/// to spot and wipe. The directory is removed when the returned `TempDir`
/// drops.
///
/// # Panics
///
/// Panics when the current directory is unavailable or `.tmp/` cannot be
/// created.
///
/// # Examples
///
/// ```rust
/// use docfill_testkit::temp_dir_in_workspace;
///
/// let media_root = temp_dir_in_workspace();
/// std::fs::create_dir(media_root.path().join("generated")).unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let crate_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = crate_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// Fallible variant for callers that prefer a Result over panics
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let crate_root = std::env::current_dir()?;
    let tmp_base = crate_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}
