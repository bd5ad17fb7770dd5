//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Replace the contents of marker regions in text files
#[derive(Parser, Debug)]
#[command(name = "mr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Prefix that starts every marker line (overrides --config)
    #[arg(long, global = true, env = "MR_PREFIX")]
    pub prefix: Option<String>,

    /// Config file (.toml, .json, .yaml) holding the marker syntax
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Replace marker contents and print the result
    ///
    /// Examples:
    ///   mr replace src/lib.rs --set version='pub const V: u32 = 2;'
    ///   mr replace README.md --set usage=@usage.txt --write
    Replace {
        /// File containing the markers
        file: PathBuf,

        /// Marker assignment; a value starting with '@' is read from that file
        #[arg(
            short,
            long,
            value_name = "NAME=VALUE",
            required = true,
            value_parser = parse_assignment
        )]
        set: Vec<Assignment>,

        /// Write the result back to the file instead of printing it
        #[arg(short, long)]
        write: bool,
    },

    /// Print the current contents of a marker
    Show {
        /// File containing the marker
        file: PathBuf,

        /// Marker name
        marker: String,
    },
}

/// Where replacement content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Inline(String),
    File(PathBuf),
}

/// A `NAME=VALUE` pair from `--set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub marker: String,
    pub content: ContentSource,
}

fn parse_assignment(raw: &str) -> std::result::Result<Assignment, String> {
    let (marker, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    if marker.is_empty() {
        return Err("marker name must not be empty".into());
    }

    let content = match value.strip_prefix('@') {
        Some(path) => ContentSource::File(PathBuf::from(path)),
        None => ContentSource::Inline(value.to_string()),
    };
    Ok(Assignment {
        marker: marker.to_string(),
        content,
    })
}
