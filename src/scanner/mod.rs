//! Line scanner.
//!
//! Reads a log line by line and evaluates each line against the subsystems
//! selected by a [`Scope`]. A single-subsystem scope runs on the calling
//! thread. A full scan fans each line out to a bounded worker pool and joins
//! every subsystem's evaluation before the next line is read, so each
//! subsystem's matches stay in file order.

mod scope;
mod session;

pub use scope::Scope;
pub use session::{MatchRecord, ScanSession};

use crate::catalog::{Catalog, Subsystem};
use crate::error::{Result, ScanError};
use session::SessionRecorder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{Level, debug, trace};

/// Worker threads used for a full scan unless configured otherwise.
pub const DEFAULT_WORKERS: usize = 5;

/// Scanner settings.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    workers: usize,
}

impl ScannerConfig {
    pub fn new() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
        }
    }

    /// Size of the worker pool used for full scans. Clamped to at least one.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Opens a log file for buffered line reading.
pub fn open_log(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| ScanError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub struct LogScanner<'c> {
    catalog: &'c Catalog,
    config: ScannerConfig,
}

impl<'c> LogScanner<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_config(catalog, ScannerConfig::new())
    }

    pub fn with_config(catalog: &'c Catalog, config: ScannerConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Opens `path` and scans it.
    pub fn scan_path(&self, path: &Path, scope: Scope) -> Result<ScanSession> {
        let reader = open_log(path)?;
        self.scan_reader(reader, scope, &path.display().to_string())
    }

    /// Scans every line of `reader`. `label` names the input in errors and
    /// in the resulting session.
    pub fn scan_reader<R: BufRead>(
        &self,
        mut reader: R,
        scope: Scope,
        label: &str,
    ) -> Result<ScanSession> {
        let subsystems = scope.subsystems();
        let pool = if scope.is_all() {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.workers)
                .thread_name(|i| format!("px-logscan-worker-{i}"))
                .build()?;
            Some(pool)
        } else {
            None
        };

        debug!(
            source = label,
            scope = %scope,
            workers = pool.as_ref().map_or(1, |p| p.current_num_threads()),
            "Starting scan"
        );

        let recorder = SessionRecorder::new();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| ScanError::Io {
                    path: label.to_string(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_number += 1;

            let text = String::from_utf8_lossy(&buf);
            let line = text.trim_end_matches(['\n', '\r']);

            match &pool {
                Some(pool) => {
                    // The scope returns only after every spawned evaluation has finished.
                    pool.scope(|s| {
                        for &subsystem in subsystems {
                            let recorder = &recorder;
                            s.spawn(move |_| {
                                self.evaluate(subsystem, line, line_number, recorder)
                            });
                        }
                    });
                }
                None => {
                    for &subsystem in subsystems {
                        self.evaluate(subsystem, line, line_number, &recorder);
                    }
                }
            }
        }

        let session = recorder.finish(scope, label, line_number);
        debug!(
            source = label,
            lines = session.lines_processed(),
            matches = session.total_matches(),
            "Scan finished"
        );
        Ok(session)
    }

    fn evaluate(
        &self,
        subsystem: Subsystem,
        line: &str,
        line_number: usize,
        recorder: &SessionRecorder,
    ) {
        let Some(matcher) = self.catalog.get(subsystem) else {
            return;
        };
        if matcher.matches(line) {
            if tracing::enabled!(Level::TRACE) {
                for signature in matcher.matched_signatures(line) {
                    trace!(
                        subsystem = %subsystem,
                        line = line_number,
                        signature = signature.id,
                        name = signature.name,
                        "Signature matched"
                    );
                }
            }
            recorder.record(
                subsystem,
                MatchRecord {
                    line_number,
                    text: line.trim_end().to_string(),
                },
            );
        }
    }
}
