//! Document generation - scan a template, substitute, persist the result
//!
//! One call is one synchronous generation run: open the template into a
//! fresh in-memory copy, discover its tokens, build the replacement table,
//! rewrite every region, and save to a unique path under the output root.
//! The template file itself is never modified. Nothing is written before
//! the final save, so a failed run leaves no partial output behind.

use std::path::{Path, PathBuf};

use crate::config::consts::DEFAULT_PLACEHOLDER;
use crate::config::Config;
use crate::document::store;
use crate::error::Result;
use crate::media;
use crate::template::engine::{rewrite_document, AttributeMap, ReplacementTable};
use crate::template::scan::scan_document;

/// Fills template documents with per-client attribute values
#[derive(Debug, Clone)]
pub struct Generator {
    out_dir: PathBuf,
    default_placeholder: String,
}

impl Generator {
    /// Generator writing into `out_dir`, with the standard `—` placeholder
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            default_placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    /// Generator configured from docfill.toml settings
    pub fn from_config(config: &Config) -> Self {
        Self {
            out_dir: config.generated_dir(),
            default_placeholder: config.generate.default_placeholder.clone(),
        }
    }

    /// Override the value substituted for tokens with no attribute
    pub fn with_placeholder(mut self, value: impl Into<String>) -> Self {
        self.default_placeholder = value.into();
        self
    }

    /// Generate a filled document from `template_path` and return the path
    /// of the new file.
    ///
    /// # Errors
    ///
    /// - `TemplateUnreadable` when the template cannot be opened or parsed
    /// - `OutputWriteError` when the output root or file cannot be written
    ///
    /// Tokens without a matching attribute are not an error; they resolve
    /// to the default placeholder.
    pub fn generate(&self, template_path: &Path, attributes: &AttributeMap) -> Result<PathBuf> {
        let mut document = store::open_document(template_path)?;

        let tokens = scan_document(&document);
        tracing::debug!(
            template = %template_path.display(),
            token_count = tokens.len(),
            "scanned template"
        );

        let table = ReplacementTable::build(&tokens, attributes, &self.default_placeholder);
        rewrite_document(&mut document, &table);

        media::ensure_output_root(&self.out_dir)?;
        let out_path = media::unique_output_path(&self.out_dir, template_path);
        store::save_document(&document, &out_path)?;

        tracing::info!(output = %out_path.display(), "generated document");
        Ok(out_path)
    }
}

/// Convenience wrapper for a one-off generation run
pub fn generate(
    template_path: &Path,
    attributes: &AttributeMap,
    out_dir: impl Into<PathBuf>,
) -> Result<PathBuf> {
    Generator::new(out_dir).generate(template_path, attributes)
}
