//! Human-readable trace backend.
//!
//! ```text
//! === Elevator Simulation Starts ===
//! Elevator starts at floor 1
//!
//! --- Processing Up Requests ---
//!  1 | Passengers getting on:  1 [Passengers: 1]
//!  1 >> 2
//!  2 | Passengers getting on:  1 [Passengers: 2]
//!  2 >> 3
//!  3 >> 4
//!  4 | Passengers getting off: 2 [Passengers: 0]
//! ...
//! === Elevator is now idle at Floor 1 ===
//! ```

use std::io::Write;

use lift_sim::Phase;

use crate::writer::TraceWriter;
use crate::{OutputResult, RowKind, TraceRow};

/// Renders rows as text lines to any [`Write`] sink.
pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the sink (e.g. a `Vec<u8>` in tests).
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn heading(phase: Phase) -> Option<&'static str> {
    match phase {
        Phase::Ascending         => Some("--- Processing Up Requests ---"),
        Phase::Descending        => Some("--- Processing Down Requests ---"),
        Phase::ReturningToGround => Some("--- Returning to Floor 1 ---"),
        Phase::Idle              => None,
    }
}

impl<W: Write> TraceWriter for TextWriter<W> {
    fn write_row(&mut self, row: &TraceRow) -> OutputResult<()> {
        let out = &mut self.out;
        match row.kind {
            RowKind::Start => {
                writeln!(out, "=== Elevator Simulation Starts ===")?;
                writeln!(out, "Elevator starts at floor {}", row.floor)?;
            }
            RowKind::Phase => {
                if let Some(text) = heading(row.phase) {
                    writeln!(out, "\n{text}")?;
                }
            }
            RowKind::Move => {
                let to = row.to_floor.unwrap_or(row.floor);
                let arrow = if to > row.floor { ">>" } else { "<<" };
                writeln!(out, "{:>2} {arrow} {to}", row.floor)?;
            }
            RowKind::Board => writeln!(
                out,
                "{:>2} | Passengers getting on:  {} [Passengers: {}]",
                row.floor, row.count, row.passengers
            )?,
            RowKind::Alight => writeln!(
                out,
                "{:>2} | Passengers getting off: {} [Passengers: {}]",
                row.floor, row.count, row.passengers
            )?,
            RowKind::Idle => {
                writeln!(out, "\n=== Elevator is now idle at Floor {} ===", row.floor)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
