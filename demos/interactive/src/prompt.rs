//! Interactive request entry.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use lift_core::{BuildingConfig, Floor, LiftError, RequestBatch};

/// Read requests from `input` until the user declines to add another, the
/// batch is full, or the input ends.
///
/// Invalid floors are re-prompted; they never abort collection.  A request
/// cut short by end of input is discarded.
pub fn collect_batch<R: BufRead, W: Write>(
    input:  &mut R,
    out:    &mut W,
    config: &BuildingConfig,
) -> Result<RequestBatch> {
    writeln!(out, "=== Welcome to the Elevator System ===")?;
    writeln!(
        out,
        "Maximum floors: {}, Maximum requests: {}\n",
        config.max_floor, config.max_requests
    )?;

    let mut batch = RequestBatch::new();
    loop {
        let Some(source) = ask_source(input, out, config)? else { break };
        let Some(destination) = ask_destination(input, out, config, source)? else { break };

        let request = config.request(source, destination)?;
        batch.push_checked(request, config)?;
        tracing::debug!(%request, "request accepted");

        if batch.is_full(config) {
            writeln!(out, "Maximum number of requests reached.")?;
            break;
        }

        write!(out, "Enter another request? (y/n): ")?;
        out.flush()?;
        match read_line(input)? {
            Some(answer) if !answer.trim_start().starts_with(['n', 'N']) => {}
            _ => break,
        }
    }
    Ok(batch)
}

fn ask_source<R: BufRead, W: Write>(
    input:  &mut R,
    out:    &mut W,
    config: &BuildingConfig,
) -> Result<Option<Floor>> {
    loop {
        write!(out, "Enter starting floor (from): ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else { return Ok(None) };
        match config.parse_floor(&line) {
            Ok(floor) => return Ok(Some(floor)),
            Err(e) => writeln!(out, "{}", invalid_input(&e, config))?,
        }
    }
}

fn ask_destination<R: BufRead, W: Write>(
    input:  &mut R,
    out:    &mut W,
    config: &BuildingConfig,
    source: Floor,
) -> Result<Option<Floor>> {
    loop {
        write!(out, "Enter destination floor (to): ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else { return Ok(None) };
        let checked = config
            .parse_floor(&line)
            .and_then(|dest| config.request(source, dest));
        match checked {
            Ok(request) => return Ok(Some(request.destination)),
            Err(e) => writeln!(out, "{}", invalid_input(&e, config))?,
        }
    }
}

fn invalid_input(err: &LiftError, config: &BuildingConfig) -> String {
    tracing::debug!(error = %err, "rejected input");
    match err {
        LiftError::SameFloor(_) => {
            "Invalid input. Starting and destination floors cannot be the same.".to_owned()
        }
        _ => format!("Invalid input. Please enter a number between 1 and {}.", config.max_floor),
    }
}

/// `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
