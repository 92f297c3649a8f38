use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::info;

use super::error::IoError;
use crate::domain::{BenchmarkRecord, BenchmarkTable};

/// Load the benchmark table from a CSV file
///
/// Expects a header row with at least `name`, `test` and `m_nps` columns;
/// extra columns are ignored. Any parse failure propagates, nothing is
/// skipped or recovered.
pub fn load_table(path: impl AsRef<Path>) -> Result<BenchmarkTable, IoError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IoError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let table = read_table(file)?;
    info!(path = %path.display(), rows = table.len(), "loaded benchmark table");
    Ok(table)
}

/// Read benchmark records from any CSV source
pub fn read_table<R: Read>(reader: R) -> Result<BenchmarkTable, IoError> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.deserialize::<BenchmarkRecord>() {
        records.push(result?);
    }
    Ok(BenchmarkTable::new(records))
}
