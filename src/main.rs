//! Binary entry point for show-h5.

use clap::Parser;
use show_h5::cli::output::{OutputFormat, report_error};
use show_h5::cli::{Cli, execute};
use show_h5::relay;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);
    let format = OutputFormat::parse(&cli.format);

    let result = execute(&cli).and_then(|outcome| {
        relay(
            &outcome,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        )
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            report_error(
                &e,
                format,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            );
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();
}
