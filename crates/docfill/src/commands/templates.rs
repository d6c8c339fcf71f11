//! Templates command - list template documents under the media root

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use docfill_core::media::list_templates;

use crate::context::Context;
use crate::output;

pub fn run(config_path: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(config_path, verbose)?;
    let templates_dir = ctx.config.templates_dir();
    let templates = list_templates(&templates_dir);

    if json {
        let list: Vec<String> = templates
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        output::print_json(&serde_json::to_string_pretty(&list)?)?;
        return Ok(());
    }

    if ctx.verbose {
        println!(
            "{} Looking for templates in '{}'",
            "→".cyan(),
            templates_dir.display()
        );
    }

    if templates.is_empty() {
        println!("{} No templates found", "!".yellow());
        return Ok(());
    }

    for template in &templates {
        output::print_text(&template.display().to_string())?;
    }
    println!("\n{} {} template(s)", "✓".green().bold(), templates.len());

    Ok(())
}
