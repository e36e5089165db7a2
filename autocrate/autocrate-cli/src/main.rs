//! AutoCrate command line.
//!
//! # Commands
//!
//! - `autocrate derive <REQUEST.json>` - derive a crate and write its CAD expressions
//! - `autocrate template` - print a starting request (or configuration) as JSON
//!
//! Logging goes to stderr; raise it with `-v` / `-vv` or `RUST_LOG`.

mod derive;
mod template;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Parametric shipping crate generator
#[derive(Parser)]
#[command(name = "autocrate")]
#[command(about = "Derive shipping crate geometry and export CAD expressions", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive a crate from a JSON request
    Derive {
        /// Request file (product, material and flags)
        #[arg(name = "REQUEST")]
        request: PathBuf,

        /// Derivation configuration file; defaults are used when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the expression file here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the derived geometry as JSON instead of expressions
        #[arg(long)]
        json: bool,

        /// Floorboard instance slots in the CAD template
        #[arg(long, default_value_t = 20)]
        slots: usize,
    },

    /// Print a default request as JSON
    Template {
        /// Print the default derivation configuration instead
        #[arg(long)]
        config: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Derive {
            request,
            config,
            output,
            json,
            slots,
        } => derive::run(&derive::DeriveArgs {
            request,
            config,
            output,
            json,
            slots,
        }),
        Commands::Template { config } => template::run(config),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
