use demographics_core::constants::CSV_HEADERS;
use demographics_core::FlatRecord;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::info;

use super::Result;

/// Write flat records as CSV. The header row is always written.
pub fn write_csv<W: Write>(records: &[FlatRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write flat records to `path`, creating parent directories as needed.
pub fn write_csv_file(records: &[FlatRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    write_csv(records, file)?;

    info!(
        path = %path.display(),
        rows = records.len(),
        "Flat record CSV written"
    );

    Ok(())
}
