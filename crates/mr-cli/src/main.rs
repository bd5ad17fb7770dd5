//! Marker region replacement CLI
//!
//! Rewrites the contents of `//!mr {name` ... `//!mr }name` regions in files.

mod cli;
mod commands;
mod error;
mod logging;
mod syntax;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;
    tracing::debug!("Verbose mode enabled");

    let syntax = syntax::resolve(cli.prefix.as_deref(), cli.config.as_deref())?;

    match cli.command {
        Commands::Replace { file, set, write } => {
            commands::run_replace(&file, &set, &syntax, write)
        }
        Commands::Show { file, marker } => commands::run_show(&file, &marker, &syntax),
    }
}
