mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("docfill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            template,
            attributes,
            out_dir,
            placeholder,
        } => commands::generate::run(
            cli.config,
            template,
            attributes,
            out_dir,
            placeholder,
            cli.verbose,
        ),
        Commands::Scan { template, json } => commands::scan::run(template, json, cli.verbose),
        Commands::Templates { json } => commands::templates::run(cli.config, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
