//! Tracing subscriber initialisation.
//!
//! Only the CLI crate calls [`init_logging`]; `rolekeeper-core` and
//! `rolekeeper-adapters` only *emit* spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | WARN         |
//! | `-v`     | INFO         |
//! | `-vv`    | DEBUG        |
//! | `-vvv`   | TRACE        |
//! | `--quiet`| ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set. With `--output-format json`
//! log lines are written as JSON objects.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{GlobalArgs, OutputFormat};

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
/// Returns an error if the subscriber could not be registered (e.g. it was
/// already set by a previous call in the same process; harmless in tests if
/// you use `std::sync::Once`).
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    // RUST_LOG wins; otherwise every workspace crate gets the same level.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(level)));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if args.output_format == OutputFormat::Json {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(false)
            .with_writer(std::io::stderr);
        registry.with(json_layer).try_init()
    } else {
        let use_ansi = !args.no_color && std::io::stderr().is_terminal();
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(use_ansi)
            .with_writer(std::io::stderr);
        registry.with(fmt_layer).try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn filter_directives(level: &str) -> String {
    format!("rolekeeper={level},rolekeeper_core={level},rolekeeper_adapters={level}")
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
