//! Generate command - fill a template with a client's attributes

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use docfill_core::template::Generator;

use crate::commands::load_attributes;
use crate::context::Context;
use crate::output;

pub fn run(
    config_path: Option<PathBuf>,
    template: PathBuf,
    attributes_path: PathBuf,
    out_dir: Option<PathBuf>,
    placeholder: Option<String>,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(config_path, verbose)?;
    let attributes = load_attributes(&attributes_path)?;

    let mut generator = match out_dir {
        Some(dir) => Generator::new(dir),
        None => Generator::from_config(&ctx.config),
    };
    if let Some(value) = placeholder {
        generator = generator.with_placeholder(value);
    }

    if ctx.verbose {
        println!(
            "{} Filling '{}' with {} attribute(s)",
            "→".cyan(),
            template.display(),
            attributes.len()
        );
    }

    let out_path = generator.generate(&template, &attributes)?;

    output::print_generated(&out_path)?;
    Ok(())
}
