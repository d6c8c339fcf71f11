//! Key normalization
//!
//! Tokens and attribute keys meet in one normalized key space: all
//! whitespace removed, everything lowercased. `{ FIO }` in a document and
//! `"fio"` in an attribute mapping land on the same key.

/// Normalize a token's inner content or an attribute key for lookup.
///
/// Removes every whitespace character (not just at the ends) and lowercases
/// the rest. Unicode-aware, so Cyrillic keys fold correctly. Idempotent.
pub fn normalize_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
