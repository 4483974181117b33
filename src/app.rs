// src/app.rs
use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::Args;
use crate::config::Config;
use crate::{csv_source, filter, merge, output, sort, xml_source};

/// Run the whole pipeline: decode both sources, merge positionally, filter,
/// sort, render. Recoverable problems (skipped source records, an
/// unparsable date criterion) are warned to stderr and the run continues;
/// everything else aborts with context.
pub fn run() -> Result<()> {
    let config = Config::from_args(Args::parse());
    run_with_config(&config)
}

pub fn run_with_config(config: &Config) -> Result<()> {
    let csv = csv_source::decode_file(&config.csv_path)
        .with_context(|| format!("failed to read CSV file {}", config.csv_path.display()))?;
    warn_skipped(&csv.skipped);

    let xml = xml_source::decode_file(&config.xml_path)
        .with_context(|| format!("failed to read XML file {}", config.xml_path.display()))?;
    warn_skipped(&xml.skipped);

    let cars = merge::merge(csv.records, xml.records);

    let (mut cars, filter_warning) = filter::apply_filters(cars, &config.filters);
    if let Some(w) = filter_warning {
        eprintln!("[warn] {w}");
    }

    sort::apply_sort(&mut cars, config.sort)?;

    output::emit(&cars, config).context("failed to emit output")?;
    Ok(())
}

fn warn_skipped(skipped: &[crate::error::DecodeError]) {
    for e in skipped {
        eprintln!("[warn] skipped record: {e}");
    }
}
