//! normen - extract and verify standard citations from the command line
//!
//! All output is JSON on stdout; logs go to stderr (`RUST_LOG=debug`).

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use normen_core::{Category, NormEngine};

#[derive(Debug, Parser)]
#[command(name = "normen", version, about)]
struct Cli {
    /// Additional registry file to load after the standard locations
    #[arg(long, global = true)]
    registry: Option<PathBuf>,

    /// Project root searched for .normen/registry.toml
    #[arg(long, global = true)]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract and verify citations from a file (stdin if omitted)
    Extract { file: Option<PathBuf> },
    /// Verify a single identifier
    Lookup { identifier: String },
    /// Search the registry by identifier, title or category
    Search { query: String },
    /// List the standards of a category (e.g. `tga`, `Hochbau`)
    Category { name: Category },
    /// Registry statistics
    Stats,
    /// Check whether a cited edition is the latest one
    Actuality { identifier: String, year: String },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = NormEngine::with_project_root(cli.project.as_deref());
    if let Some(path) = &cli.registry {
        engine.load_standards(path)?;
    }

    match cli.command {
        Command::Extract { file } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            print_json(&engine.process(&text))
        }
        Command::Lookup { identifier } => print_json(&engine.lookup_standard(&identifier)),
        Command::Search { query } => print_json(&engine.search_standards(&query)),
        Command::Category { name } => print_json(&engine.standards_by_category(name)),
        Command::Stats => print_json(&engine.registry_statistics()),
        Command::Actuality { identifier, year } => {
            print_json(&engine.check_actuality(&identifier, &year))
        }
    }
}
