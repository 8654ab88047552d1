//! Tagdex CLI Binary
//!
//! Command-line interface for the tagdex file index.

use clap::Parser;
use std::process;
use tagdex::logging::init_logging;
use tagdex::tooling::cli::{resolve_config, Cli, CliContext};

fn main() {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    // Create CLI context
    let context = match CliContext::from_config(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error opening index: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
