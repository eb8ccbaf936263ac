//! lift — interactive single-car elevator simulation.
//!
//! Collects a batch of floor requests (typed at the prompt, loaded from a
//! CSV file, or drawn at random), hands it to a simulation thread, and
//! prints the floor-by-floor trace.  Logs go to stderr.
//!
//! ```text
//! lift                                   # prompt for up to 3 requests
//! lift --requests batch.csv --policy sparse-stop
//! lift --random 3 --seed 7 --csv-out output/
//! lift --config building.toml -v
//! ```

mod config;
mod logging;
mod prompt;


use std::io;
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;

use lift_core::{BatchRng, BuildingConfig, RequestBatch};
use lift_output::{CsvWriter, TextWriter, TraceOutputObserver};
use lift_schedule::{TraversalPolicy, load_batch_csv};
use lift_sim::{RunSummary, batch_channel};

use config::AppConfig;

const DEFAULT_SEED: u64 = 42;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "lift")]
#[command(about = "Single-car elevator simulation")]
struct Args {
    /// TOML file overriding building bounds and policy.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Traversal policy: full-sweep or sparse-stop.
    #[arg(long)]
    policy: Option<TraversalPolicy>,

    /// Load the batch from a `source,destination` CSV file instead of
    /// prompting.
    #[arg(long, conflicts_with = "random")]
    requests: Option<PathBuf>,

    /// Draw this many random requests instead of prompting.
    #[arg(long)]
    random: Option<usize>,

    /// Seed for `--random`.
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Also write `trace.csv` into this directory.
    #[arg(long)]
    csv_out: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

// ── Batch sources ─────────────────────────────────────────────────────────────

fn read_batch(args: &Args, config: &BuildingConfig) -> Result<RequestBatch> {
    if let Some(path) = &args.requests {
        let batch = load_batch_csv(path, config)
            .with_context(|| format!("loading requests from {}", path.display()))?;
        tracing::info!(requests = batch.len(), path = %path.display(), "batch loaded");
        return Ok(batch);
    }

    if let Some(count) = args.random {
        if count > config.max_requests {
            bail!("--random {count} exceeds the batch limit of {}", config.max_requests);
        }
        let seed = args.seed.unwrap_or(DEFAULT_SEED);
        let batch = BatchRng::new(seed).batch(config, count);
        tracing::info!(requests = count, seed, "random batch drawn");
        return Ok(batch);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt::collect_batch(&mut stdin.lock(), &mut stdout.lock(), config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logger(args.verbose);

    // 1. Configuration.
    let app = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    let building = app.building;
    let policy = args.policy.or(app.policy).unwrap_or_default();
    tracing::debug!(?building, %policy, "configuration resolved");

    // 2. Output backends.  Opened up front so a bad directory fails before
    //    any prompting.
    let csv_obs = match &args.csv_out {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            Some(TraceOutputObserver::new(CsvWriter::new(dir)?))
        }
        None => None,
    };
    let text_obs = TraceOutputObserver::new(TextWriter::new(io::stdout()));

    // 3. Simulation thread, blocked until the batch is published.
    let (publisher, receiver) = batch_channel();
    let sim_config = building.clone();
    let worker = thread::spawn(move || -> Result<RunSummary> {
        let mut obs = (text_obs, csv_obs);
        let summary = receiver.run_when_ready(sim_config, policy, &mut obs)?;
        if let Some(e) = obs.0.take_error() {
            return Err(e).context("writing trace to stdout");
        }
        if let Some(e) = obs.1.as_mut().and_then(TraceOutputObserver::take_error) {
            return Err(e).context("writing trace.csv");
        }
        Ok(summary)
    });

    // 4. Collect and hand over the batch.
    let batch = read_batch(&args, &building)?;
    publisher.publish(batch)?;

    let summary = worker
        .join()
        .map_err(|_| anyhow!("simulation thread panicked"))??;

    if summary.stats.dropped > 0 {
        tracing::info!(
            dropped = summary.stats.dropped,
            "some passengers could not board a full car"
        );
    }
    if let Some(dir) = &args.csv_out {
        tracing::info!(path = %dir.join(lift_output::TRACE_FILE).display(), "trace written");
    }

    Ok(())
}
