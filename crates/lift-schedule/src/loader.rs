//! CSV request-batch loader.
//!
//! # CSV format
//!
//! One row per request, with a header row:
//!
//! ```csv
//! source,destination
//! 1,4
//! 2,4
//! 5,2
//! ```
//!
//! Every row is run through the request validator of the supplied
//! [`BuildingConfig`]; the first invalid row aborts the load with its line
//! number.  A file with more than `max_requests` rows is rejected as a whole
//! rather than silently truncated.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{BuildingConfig, LiftError, RequestBatch};

use crate::ScheduleError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct BatchRecord {
    source:      i64,
    destination: i64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a validated [`RequestBatch`] from a CSV file.
pub fn load_batch_csv(path: &Path, config: &BuildingConfig) -> Result<RequestBatch, ScheduleError> {
    let file = std::fs::File::open(path)
        .map_err(ScheduleError::Io)?;
    load_batch_reader(file, config)
}

/// Like [`load_batch_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading from stdin.
pub fn load_batch_reader<R: Read>(
    reader: R,
    config: &BuildingConfig,
) -> Result<RequestBatch, ScheduleError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut batch = RequestBatch::new();

    for (i, result) in csv_reader.deserialize::<BatchRecord>().enumerate() {
        // Line 1 is the header.
        let line = i as u64 + 2;
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;

        let invalid = |source: LiftError| ScheduleError::InvalidRequest { line, source };
        let source      = config.validate_floor(row.source).map_err(invalid)?;
        let destination = config.validate_floor(row.destination).map_err(invalid)?;
        let request     = config.request(source, destination).map_err(invalid)?;
        batch.push_checked(request, config).map_err(invalid)?;
    }

    tracing::debug!(requests = batch.len(), "loaded request batch");
    Ok(batch)
}
