//! mvn-shared CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use mvn_shared::cli::{Cli, CommandDispatcher};
use mvn_shared::ui::{OutputMode, TerminalUI};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool, no_color: bool) {
    let filter = if debug {
        EnvFilter::new("mvn_shared=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mvn_shared=info"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(!no_color)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.no_color);

    tracing::debug!("mvn-shared starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);
    let mut ui = TerminalUI::new(output_mode, cli.no_color);

    let dispatcher = CommandDispatcher::new(cli.session());
    let result = dispatcher.dispatch(&cli.command, &mut ui);
    ExitCode::from(result.exit_code as u8)
}
