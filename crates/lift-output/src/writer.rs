//! The `TraceWriter` trait implemented by all trace backends.

use crate::{OutputResult, TraceRow};

/// Trait implemented by the text and CSV writers.
///
/// Errors are stored by [`TraceOutputObserver`][crate::TraceOutputObserver]
/// and retrieved with its `take_error`.
pub trait TraceWriter {
    /// Write one row.
    fn write_row(&mut self, row: &TraceRow) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
