pub mod catalog;
pub mod cli;
pub mod error;
pub mod reporter;
pub mod run;
pub mod scanner;

pub use catalog::{Catalog, Signature, SignatureSet, Subsystem};
pub use cli::Cli;
pub use error::{Result, ScanError};
pub use reporter::{Reporter, terminal::TerminalReporter};
pub use run::{run_normal_mode, run_scan};
pub use scanner::{LogScanner, MatchRecord, ScanSession, ScannerConfig, Scope};
