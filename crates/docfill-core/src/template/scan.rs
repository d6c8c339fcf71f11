//! Token scanner
//!
//! Walks every text-bearing region of a document and collects the distinct
//! `{...}` tokens it contains. The scanner reads each paragraph's rendered
//! text as a whole, so a token whose braces sit in different style runs is
//! still found. Read-only; rewriting happens in the engine.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::model::{Document, Paragraph, Table};

/// One pair of braces around one-plus characters, none of which is a brace.
/// Nested or stray braces and `{}` never match and stay literal text.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^{}]+\}").expect("token pattern"));

/// Collect all distinct literal tokens from a document.
///
/// Covers body paragraphs, body tables (cell by cell, nested tables
/// included), and every section's header and footer.
pub fn scan_document(document: &Document) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();

    collect_from_paragraphs(&document.body.paragraphs, &mut tokens);
    collect_from_tables(&document.body.tables, &mut tokens);

    for section in &document.sections {
        for region in [&section.header, &section.footer] {
            collect_from_paragraphs(&region.paragraphs, &mut tokens);
            collect_from_tables(&region.tables, &mut tokens);
        }
    }

    tokens
}

/// Tokens present in a single piece of rendered text
pub fn scan_text(text: &str) -> impl Iterator<Item = &str> {
    TOKEN_RE.find_iter(text).map(|m| m.as_str())
}

fn collect_from_paragraphs(paragraphs: &[Paragraph], tokens: &mut BTreeSet<String>) {
    for paragraph in paragraphs {
        let text = paragraph.text();
        for token in scan_text(&text) {
            tokens.insert(token.to_string());
        }
    }
}

fn collect_from_tables(tables: &[Table], tokens: &mut BTreeSet<String>) {
    for table in tables {
        for row in &table.rows {
            for cell in &row.cells {
                collect_from_paragraphs(&cell.paragraphs, tokens);
                collect_from_tables(&cell.tables, tokens);
            }
        }
    }
}
