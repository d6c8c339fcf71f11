//! Substitution engine
//!
//! Builds the per-run replacement table (literal token text → resolved
//! value) and rewrites every scanned region with it. Resolution is lenient:
//! a token whose normalized key has no attribute falls back to the default
//! placeholder, so partial client data never blocks generation.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::document::model::{Document, Paragraph, Table};
use crate::template::normalize::normalize_key;

/// One client's attribute mapping, as loaded from its JSON object.
/// Insertion order is preserved, which makes last-write-wins deterministic
/// when two distinct keys normalize to the same lookup key.
pub type AttributeMap = serde_json::Map<String, Value>;

/// Per-run mapping from literal token text to its resolved value.
///
/// Built once from the scanned token set before any rewriting starts, so
/// every discovered token has exactly one entry.
#[derive(Debug, Clone)]
pub struct ReplacementTable {
    entries: BTreeMap<String, String>,
}

impl ReplacementTable {
    /// Resolve every scanned token against the attribute mapping.
    ///
    /// Attribute keys are normalized first; when two keys collide after
    /// normalization the later one in mapping order wins. Tokens without a
    /// match resolve to `default_value`.
    pub fn build(
        tokens: &BTreeSet<String>,
        attributes: &AttributeMap,
        default_value: &str,
    ) -> Self {
        let mut lookup: BTreeMap<String, String> = BTreeMap::new();
        for (key, value) in attributes {
            lookup.insert(normalize_key(key), coerce_value(value));
        }

        let mut entries = BTreeMap::new();
        for token in tokens {
            // Braces are single-byte, so slicing them off is UTF-8 safe
            let inner = &token[1..token.len() - 1];
            let value = lookup
                .get(&normalize_key(inner))
                .cloned()
                .unwrap_or_else(|| default_value.to_string());
            entries.insert(token.clone(), value);
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolved value for a literal token, if the token was scanned
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(token, value)| (token.as_str(), value.as_str()))
    }

    /// Replace every occurrence of every literal token in `text`.
    ///
    /// Tokens are matched by exact literal text, never by normalized form.
    /// They are brace-wrapped and non-nested, so no entry's text can overlap
    /// another's and application order cannot change the result.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (token, value) in &self.entries {
            if result.contains(token.as_str()) {
                result = result.replace(token.as_str(), value);
            }
        }
        result
    }
}

/// Attribute values come from JSON; strings are used verbatim, everything
/// else is rendered in its JSON text form.
fn coerce_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Rewrite every text region of the document with the replacement table.
///
/// Each paragraph's rendered text is rewritten as a whole; paragraphs whose
/// text is unaffected are left untouched, runs and all.
pub fn rewrite_document(document: &mut Document, table: &ReplacementTable) {
    rewrite_paragraphs(&mut document.body.paragraphs, table);
    rewrite_tables(&mut document.body.tables, table);

    for section in &mut document.sections {
        rewrite_paragraphs(&mut section.header.paragraphs, table);
        rewrite_tables(&mut section.header.tables, table);
        rewrite_paragraphs(&mut section.footer.paragraphs, table);
        rewrite_tables(&mut section.footer.tables, table);
    }
}

fn rewrite_paragraphs(paragraphs: &mut [Paragraph], table: &ReplacementTable) {
    for paragraph in paragraphs {
        let text = paragraph.text();
        if text.is_empty() {
            continue;
        }
        let rewritten = table.apply(&text);
        if rewritten != text {
            paragraph.set_text(rewritten);
        }
    }
}

fn rewrite_tables(tables: &mut [Table], table: &ReplacementTable) {
    for t in tables {
        for row in &mut t.rows {
            for cell in &mut row.cells {
                rewrite_paragraphs(&mut cell.paragraphs, table);
                rewrite_tables(&mut cell.tables, table);
            }
        }
    }
}
