//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docfill")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to docfill.toml (default: ./docfill.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a filled document from a template and a client attribute file
    Generate {
        /// Template document
        template: PathBuf,

        /// JSON file with the client's attribute mapping
        attributes: PathBuf,

        /// Write into this directory instead of the configured one
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Value substituted for tokens with no matching attribute
        #[arg(long)]
        placeholder: Option<String>,
    },

    /// List the placeholder tokens found in a template
    Scan {
        /// Template document
        template: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List template documents under the media root
    Templates {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
