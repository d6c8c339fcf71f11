//! Generated-content area helpers
//!
//! Output files live under the configured media root: templates are read
//! from `templates/`, generated documents land in `generated/` under fresh
//! unique names so concurrent generation runs can never collide.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;
use walkdir::WalkDir;

use crate::config::consts::DOCUMENT_EXT;
use crate::error::{DocfillError, Result};

/// Create the output root (and parents) if absent
pub fn ensure_output_root(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| DocfillError::OutputWriteError {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Fresh output path that cannot collide with any earlier generation.
///
/// The filename is a random v4 id in hex; the extension follows the
/// template's.
pub fn unique_output_path(out_dir: &Path, template_path: &Path) -> PathBuf {
    let ext = template_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or(DOCUMENT_EXT);
    out_dir.join(format!("{}.{}", Uuid::new_v4().simple(), ext))
}

/// List template document files under `dir`, sorted by path.
///
/// A missing directory is an empty template store, not an error.
pub fn list_templates(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }

    let mut templates: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry.path().extension().and_then(|ext| ext.to_str()) == Some(DOCUMENT_EXT)
        })
        .map(|entry| entry.into_path())
        .collect();
    templates.sort();
    templates
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_output_root_creates_nested_dirs() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("media").join("generated");

        ensure_output_root(&dir).unwrap();
        assert!(dir.is_dir());

        // Idempotent
        ensure_output_root(&dir).unwrap();
    }

    #[test]
    fn test_unique_output_paths_differ() {
        let out_dir = Path::new("media/generated");
        let template = Path::new("media/templates/contract.json");

        let first = unique_output_path(out_dir, template);
        let second = unique_output_path(out_dir, template);

        assert_ne!(first, second);
        assert!(first.starts_with(out_dir));
        assert_eq!(first.extension().unwrap(), "json");
    }

    #[test]
    fn test_unique_output_path_falls_back_to_default_ext() {
        let path = unique_output_path(Path::new("out"), Path::new("template-without-ext"));
        assert_eq!(path.extension().unwrap(), DOCUMENT_EXT);
    }

    #[test]
    fn test_list_templates_missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        assert!(list_templates(&temp.path().join("absent")).is_empty());
    }

    #[test]
    fn test_list_templates_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.json"), "{}").unwrap();
        fs::write(temp.path().join("a.json"), "{}").unwrap();
        fs::write(temp.path().join("notes.txt"), "skip me").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub").join("c.json"), "{}").unwrap();

        let templates = list_templates(temp.path());
        let names: Vec<_> = templates
            .iter()
            .map(|p| p.strip_prefix(temp.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.json"),
                PathBuf::from("b.json"),
                PathBuf::from("sub/c.json"),
            ]
        );
    }
}
