//! `lift-output` — trace writers for the lift simulation.
//!
//! | Backend | Type                       | Output                        |
//! |---------|----------------------------|-------------------------------|
//! | Text    | [`TextWriter<W: Write>`]   | human-readable lines to `W`   |
//! | CSV     | [`CsvWriter`]              | `trace.csv` in a directory    |
//!
//! Both implement [`TraceWriter`] and are driven by
//! [`TraceOutputObserver`], which implements `lift_sim::SimObserver`.  Two
//! observers run side by side as a tuple `(a, b)`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{TextWriter, TraceOutputObserver};
//!
//! let mut obs = TraceOutputObserver::new(TextWriter::new(std::io::stdout()));
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use csv::{CsvWriter, TRACE_FILE};
pub use error::{OutputError, OutputResult};
pub use observer::TraceOutputObserver;
pub use row::{RowKind, TraceRow};
pub use text::TextWriter;
pub use writer::TraceWriter;
