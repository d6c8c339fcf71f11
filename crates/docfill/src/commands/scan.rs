//! Scan command - preview the placeholder tokens a template contains

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use docfill_core::document::store::open_document;
use docfill_core::template::scan_document;

use crate::output;

pub fn run(template: PathBuf, json: bool, verbose: bool) -> Result<()> {
    let document = open_document(&template)?;
    let tokens = scan_document(&document);

    if json {
        let list: Vec<&str> = tokens.iter().map(String::as_str).collect();
        output::print_json(&serde_json::to_string_pretty(&list)?)?;
        return Ok(());
    }

    if verbose {
        println!(
            "{} Scanning '{}' for placeholder tokens",
            "→".cyan(),
            template.display()
        );
    }

    if tokens.is_empty() {
        println!("{} No tokens found", "!".yellow());
        return Ok(());
    }

    for token in &tokens {
        output::print_text(token)?;
    }
    println!("\n{} {} token(s)", "✓".green().bold(), tokens.len());

    Ok(())
}
