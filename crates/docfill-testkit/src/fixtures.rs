//! Canned document fixtures
//!
//! The fixtures are raw JSON in the document-store format, so this crate
//! stays independent of docfill-core and both core and CLI tests can share
//! them.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

/// A realistic contract template exercising every scanned region:
/// body paragraphs (including a token whose braces are split across runs),
/// a table with case/whitespace token variants, a nested table, and a
/// section header and footer. One paragraph carries a stray brace that must
/// survive generation verbatim.
pub fn contract_template_json() -> String {
    let document = json!({
        "body": {
            "paragraphs": [
                { "runs": [ { "text": "SERVICE AGREEMENT No {NUMBER} of {DATE}" } ] },
                { "runs": [
                    { "text": "Customer: {", "style": "bold" },
                    { "text": "FIO" },
                    { "text": "}" }
                ] },
                { "runs": [ { "text": "Address: { ADDRESS }" } ] },
                { "runs": [ { "text": "Stray brace { stays literal" } ] },
                { "runs": [] }
            ],
            "tables": [
                {
                    "rows": [
                        {
                            "cells": [
                                {
                                    "paragraphs": [ { "runs": [ { "text": "{FIO}" } ] } ],
                                    "tables": []
                                },
                                {
                                    "paragraphs": [ { "runs": [ { "text": "{ fio }" } ] } ],
                                    "tables": [
                                        {
                                            "rows": [
                                                {
                                                    "cells": [
                                                        {
                                                            "paragraphs": [
                                                                { "runs": [ { "text": "{INN}" } ] }
                                                            ],
                                                            "tables": []
                                                        }
                                                    ]
                                                }
                                            ]
                                        }
                                    ]
                                }
                            ]
                        }
                    ]
                }
            ]
        },
        "sections": [
            {
                "header": {
                    "paragraphs": [ { "runs": [ { "text": "{COMPANY}" } ] } ],
                    "tables": []
                },
                "footer": {
                    "paragraphs": [ { "runs": [ { "text": "page {PAGE}" } ] } ],
                    "tables": []
                }
            }
        ]
    });
    serde_json::to_string_pretty(&document).unwrap()
}

/// Attribute mapping matching most (not all) of the contract template's
/// tokens; `{INN}` and `{PAGE}` are deliberately absent.
pub fn client_attributes_json() -> String {
    let attributes = json!({
        "number": "42-A",
        "date": "2026-08-07",
        "fio": "Ivanov I.I.",
        "address": "Moscow, Tverskaya 1",
        "company": "Horns and Hooves LLC"
    });
    serde_json::to_string_pretty(&attributes).unwrap()
}

/// Write the contract template into `dir` and return its path
pub fn write_template(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contract_template_json()).expect("Failed to write template fixture");
    path
}

/// Write the client attribute file into `dir` and return its path
pub fn write_attributes(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, client_attributes_json()).expect("Failed to write attributes fixture");
    path
}
