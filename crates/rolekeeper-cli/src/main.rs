//! # Rolekeeper CLI
//!
//! Command-line driver for the role lifecycle service.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + file + env, then flag overrides).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the command handler. Role commands get a service wired to
//!    the JSON store; queued notifications are drained before exit.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Role not found          |
//! |  4   | Configuration error     |
//! |  5   | Name already taken      |
//! |  6   | System role is read-only |

use std::process::ExitCode;

use clap::Parser;
use rolekeeper_core::application::RoleLifecycleService;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
    runtime::RoleRuntime,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod runtime;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here; clap knows their exit code.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    // `init` may point --config at a file it is about to create.
    let require_file = !matches!(cli.command, Commands::Init(_));
    let config = match AppConfig::load(cli.global.config.as_ref(), require_file) {
        Ok(cfg) => cfg.apply_overrides(&cli.global),
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            };
            return report_error(err, cli.global.verbose > 0, None);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    let verbose = cli.global.verbose > 0;
    let config_file = cli.global.config.clone();
    match run(cli.command, config, config_file.as_deref(), &output) {
        Ok(()) => {
            info!("Rolekeeper completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => report_error(e, verbose, Some(&output)),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(
    command: Commands,
    config: AppConfig,
    config_file: Option<&std::path::Path>,
    output: &OutputManager,
) -> CliResult<()> {
    match command {
        Commands::Init(cmd) => commands::init::execute(cmd, config_file, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, config, config_file, output),

        Commands::Create(args) => with_service(&config, |svc| {
            commands::create::execute(args, svc, output)
        }),
        Commands::Update(args) => with_service(&config, |svc| {
            commands::update::execute(args, svc, output)
        }),
        Commands::Delete(args) => with_service(&config, |svc| {
            commands::delete::execute(args, svc, output)
        }),
        Commands::Get(args) => with_service(&config, |svc| commands::get::execute(args, svc, output)),
        Commands::Find(args) => with_service(&config, |svc| commands::find::execute(args, svc, output)),
        Commands::Exists(args) => with_service(&config, |svc| {
            commands::exists::execute(args, svc, output)
        }),
        Commands::List(args) => with_service(&config, |svc| commands::list::execute(args, svc, output)),
        Commands::Count => with_service(&config, |svc| commands::count::execute(svc, output)),
    }
}

/// Run a role command against a freshly wired service, then flush
/// notifications whether or not the command succeeded.
fn with_service<F>(config: &AppConfig, command: F) -> CliResult<()>
where
    F: FnOnce(&RoleLifecycleService) -> CliResult<()>,
{
    let roles = RoleRuntime::start(config)?;
    let result = command(roles.service());

    let report = roles.shutdown();
    debug!(
        delivered = report.delivered,
        failed = report.failed,
        dropped = report.dropped,
        "Notifications flushed"
    );
    result
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// `output` is `None` for errors raised before the output manager exists.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes.
fn report_error(err: CliError, verbose: bool, output: Option<&OutputManager>) -> ExitCode {
    err.log();

    // Written to stderr so the message appears even when stdout is redirected.
    let msg = match output {
        Some(out) if out.is_json() => format!("{}\n", err.to_json()),
        Some(out) if !out.supports_color() => err.format_plain(verbose),
        _ if std::io::IsTerminal::is_terminal(&std::io::stderr()) => err.format_colored(verbose),
        _ => err.format_plain(verbose),
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
