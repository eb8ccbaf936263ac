//! `tracing` subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
///
/// `lift` prefixes the binary's target and every library target
/// (`lift_sim`, `lift_schedule`, ...).
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose { "lift=debug,warn" } else { "lift=info,warn" }
}

/// Install a compact stderr logger.  `RUST_LOG` overrides the filter.
pub fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
