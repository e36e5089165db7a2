//! `autocrate derive`

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use autocrate_engine::{DerivationConfig, derive_geometry};
use autocrate_expressions::{ExportOptions, build_expression_table, write_expressions};
use autocrate_types::DerivationRequest;
use tracing::info;

pub struct DeriveArgs {
    pub request: PathBuf,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub json: bool,
    pub slots: usize,
}

pub fn run(args: &DeriveArgs) -> Result<()> {
    let request: DerivationRequest = read_json(&args.request)?;
    let config = match &args.config {
        Some(path) => read_json(path)?,
        None => DerivationConfig::default(),
    };

    let geometry = derive_geometry(&request, &config)
        .with_context(|| format!("cannot derive a crate from {}", args.request.display()))?;

    for warning in &geometry.warnings {
        eprintln!("warning: {warning}");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&geometry)?);
        return Ok(());
    }

    let options = ExportOptions::default().with_floorboard_slots(args.slots);
    let table = build_expression_table(&request, &geometry, &options);
    if table.dropped_floorboards > 0 {
        eprintln!(
            "warning: {} floorboard(s) do not fit in {} slots and were left out",
            table.dropped_floorboards, args.slots
        );
    }

    match &args.output {
        Some(path) => {
            write_expressions(&table, path)?;
            info!(path = %path.display(), "Expression file written");
            println!("Wrote {} expressions to {}", table.len(), path.display());
        }
        None => print!("{}", table.render()),
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("cannot parse {}", path.display()))
}
