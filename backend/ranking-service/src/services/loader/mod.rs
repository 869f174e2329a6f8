/// Record Loader
///
/// Reads the flat record CSV into an in-memory `RecordSet`. `load` never
/// fails: a missing or corrupt file yields an empty set and a warning.
use demographics_core::FlatRecord;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Immutable, shareable set of flat records in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<FlatRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<FlatRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[FlatRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First `n` records in file order.
    pub fn head(&self, n: usize) -> &[FlatRecord] {
        &self.records[..n.min(self.records.len())]
    }
}

impl From<Vec<FlatRecord>> for RecordSet {
    fn from(records: Vec<FlatRecord>) -> Self {
        Self::new(records)
    }
}

/// Load records from `path`, returning an empty set on any failure.
pub fn load(path: &Path) -> RecordSet {
    match try_load(path) {
        Ok(records) => records,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load dataset, using empty record set");
            RecordSet::default()
        }
    }
}

pub fn try_load(path: &Path) -> Result<RecordSet, csv::Error> {
    let reader = csv::Reader::from_path(path)?;
    let records = read_records(reader)?;

    info!(path = %path.display(), records = records.len(), "Dataset loaded");
    Ok(records)
}

pub fn try_load_reader<R: Read>(reader: R) -> Result<RecordSet, csv::Error> {
    read_records(csv::Reader::from_reader(reader))
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<RecordSet, csv::Error> {
    let records = reader
        .deserialize::<FlatRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RecordSet::new(records))
}
