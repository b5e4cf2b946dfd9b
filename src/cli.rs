use crate::scanner::Scope;
use clap::Parser;
use std::path::PathBuf;

/// Log file scanned when none is given.
pub const DEFAULT_LOG_FILE: &str = "p.log";

#[derive(Parser, Debug)]
#[command(
    name = "px-logscan",
    version,
    about = "Portworx journal log scanner",
    long_about = "px-logscan matches a Portworx journal log against known issue signatures and prints the runbook for each issue found.",
    after_help = "It looks for a file named \"p.log\" in the current dir if no argument is given and runs full scan"
)]
pub struct Cli {
    /// Log file to scan
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub file: PathBuf,

    /// Component stack to scan for
    #[arg(short, long, value_enum, default_value_t = Scope::All)]
    pub stack: Scope,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
