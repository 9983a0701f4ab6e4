//! Command-line interface for fauxgen
//!
//! # Usage Examples
//!
//! ## Schemas
//! ```bash
//! # Ten records as JSON on stdout
//! fauxgen generate --schema people.yaml
//!
//! # Reproducible CSV export
//! fauxgen generate --schema people.yaml --format csv --output people.csv --seed 42
//!
//! # BSON needs an output file
//! fauxgen generate --schema people.yaml --format bson --output people.bson
//! ```
//!
//! ## Single fields
//! ```bash
//! fauxgen field person.email --count 3
//! fauxgen field hashtags --arg quantity=2 --seed alien
//! fauxgen field bsn --with netherlands_provider --locale nl
//! ```
//!
//! ## Environment
//! - `FAUXGEN_SEED`: default seed for `generate` and `field`
//! - `FAUXGEN_LOCALE`: default locale for `field` and `providers`
//! - `FAUXGEN_ITERATIONS`: default record count for `generate`
//! - `RUST_LOG`: log filter, e.g. `RUST_LOG=faux_schema=debug`

use clap::{Parser, Subcommand};
use fauxgen::cli::{self, FieldArgs, GenerateArgs, ProvidersArgs};
use std::io;

#[derive(Parser)]
#[command(name = "fauxgen")]
#[command(about = "Generate localized fake data from declarative schemas")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate records from a YAML schema template
    Generate(GenerateArgs),

    /// Print values of a single field
    Field(FieldArgs),

    /// List providers and their operations
    Providers(ProvidersArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            cli::generate(&args, io::stdout().lock())?;
        }
        Commands::Field(args) => cli::field(&args, io::stdout().lock())?,
        Commands::Providers(args) => cli::providers(&args, io::stdout().lock())?,
    }
    Ok(())
}
