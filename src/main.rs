use clap::Parser;
use px_logscan::{Cli, run_normal_mode};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Debug logging goes to stderr so stdout keeps the report format.
fn init_tracing(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run_normal_mode(&cli)
}
