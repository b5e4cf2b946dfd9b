//! Scan execution for the command line.

use crate::catalog::Catalog;
use crate::cli::Cli;
use crate::error::Result;
use crate::reporter::{Reporter, terminal::TerminalReporter};
use crate::scanner::{LogScanner, ScanSession, open_log};
use std::error::Error;
use std::ffi::OsStr;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{debug, info};

/// Opens the log, prints the progress banners and runs the scan.
///
/// Nothing is printed when the log cannot be opened.
pub fn run_scan(cli: &Cli, catalog: &Catalog) -> Result<ScanSession> {
    let reader = open_log(&cli.file)?;

    println!("Starting {} scan", cli.stack.banner_label());
    let session =
        LogScanner::new(catalog).scan_reader(reader, cli.stack, &cli.file.display().to_string())?;
    println!("Processed {} lines", session.lines_processed());

    Ok(session)
}

/// Run a scan and print its report.
pub fn run_normal_mode(cli: &Cli) -> ExitCode {
    println!("{}", command_line(std::env::args_os()));
    info!(file = %cli.file.display(), scope = %cli.stack, "Starting scan");

    let catalog = Catalog::builtin();
    match run_scan(cli, catalog) {
        Ok(session) => {
            let reporter = TerminalReporter::new().with_color(use_color(cli));
            println!("{}", reporter.report(&session, catalog));
            debug!(matches = session.total_matches(), "Report printed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

/// Joins the invoked arguments for the echo line. Non-UTF-8 arguments are
/// rendered lossily.
fn command_line<I>(args: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<OsStr>,
{
    args.into_iter()
        .map(|a| a.as_ref().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

fn use_color(cli: &Cli) -> bool {
    !cli.no_color && std::io::stdout().is_terminal()
}
