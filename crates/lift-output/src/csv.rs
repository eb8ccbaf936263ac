//! CSV trace backend.
//!
//! Creates `trace.csv` in the configured output directory, one record per
//! [`TraceRow`].  `to_floor` is empty for rows that are not moves.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{OutputResult, TraceRow};

/// File name written inside the output directory.
pub const TRACE_FILE: &str = "trace.csv";

/// Writes the trace to a CSV file.
pub struct CsvWriter {
    trace:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `trace.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path = dir.join(TRACE_FILE);
        let mut trace = Writer::from_path(&path)?;
        trace.write_record(["seq", "phase", "kind", "floor", "to_floor", "count", "passengers"])?;
        tracing::debug!(path = %path.display(), "trace csv opened");

        Ok(Self { trace, finished: false })
    }
}

impl TraceWriter for CsvWriter {
    fn write_row(&mut self, row: &TraceRow) -> OutputResult<()> {
        self.trace.write_record(&[
            row.seq.to_string(),
            row.phase.as_str().to_owned(),
            row.kind.as_str().to_owned(),
            row.floor.to_string(),
            row.to_floor.map(|f| f.to_string()).unwrap_or_default(),
            row.count.to_string(),
            row.passengers.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trace.flush()?;
        Ok(())
    }
}
