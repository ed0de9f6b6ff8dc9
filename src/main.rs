//! Pycheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pycheck::cli::Cli;
use pycheck::preflight::Preflight;
use pycheck::ui::{Output, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pycheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pycheck=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    // Fix up the console code page before anything is printed, clap's
    // help and log lines included
    pycheck::console::configure_utf8();

    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pycheck starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let output = Output::new(output_mode);
    let preflight = Preflight::new(cli.toolchain(), project_root, cli.dry_run);

    match preflight.run(&output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            output.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
