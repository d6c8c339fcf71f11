pub mod generate;
pub mod scan;
pub mod templates;

use std::fs;
use std::path::Path;

use anyhow::{bail, Context as _, Result};
use docfill_core::template::AttributeMap;

/// Load a client attribute file: one JSON object, string keys
pub fn load_attributes(path: &Path) -> Result<AttributeMap> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read attribute file '{}'", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("invalid JSON in attribute file '{}'", path.display()))?;

    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => bail!(
            "attribute file '{}' must contain a JSON object",
            path.display()
        ),
    }
}
