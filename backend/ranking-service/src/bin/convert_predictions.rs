use anyhow::{Context, Result};
use clap::Parser;
use ranking_service::services::converter;
use ranking_service::utils;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::info;

/// Offline converter: nested prediction JSON -> flat record CSV.
///
/// Entries without a language or prediction block are dropped; missing
/// age/gender labels are written as 0.
#[derive(Debug, Parser)]
#[command(name = "convert-predictions", version)]
struct Args {
    /// Prediction document keyed by item id
    #[arg(long, default_value = "data/distribution.json")]
    input: PathBuf,

    /// Destination CSV, overwritten if present
    #[arg(long, default_value = "data/distribution.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    utils::init_tracing("info");
    let args = Args::parse();

    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let conversion = converter::convert_reader(BufReader::new(file))
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    converter::write_csv_file(&conversion.records, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        rows = conversion.report.converted,
        skipped = conversion.report.total - conversion.report.converted,
        "CSV file created"
    );

    Ok(())
}
