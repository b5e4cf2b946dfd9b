use crate::catalog::Subsystem;
use crate::scanner::Scope;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// A log line that matched a subsystem's signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// 1-based position of the line in the input.
    pub line_number: usize,
    /// Line text with trailing whitespace removed.
    pub text: String,
}

/// Result of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSession {
    scope: Scope,
    source: String,
    lines_processed: usize,
    matches: [Vec<MatchRecord>; 5],
    total: usize,
}

impl ScanSession {
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Label of the scanned input, usually its path.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn lines_processed(&self) -> usize {
        self.lines_processed
    }

    /// Matches recorded for `subsystem`, in file order.
    pub fn matches(&self, subsystem: Subsystem) -> &[MatchRecord] {
        &self.matches[subsystem.index()]
    }

    pub fn total_matches(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Subsystems with at least one match, in report order.
    pub fn matched_subsystems(&self) -> impl Iterator<Item = (Subsystem, &[MatchRecord])> {
        Subsystem::ALL
            .into_iter()
            .map(move |s| (s, self.matches(s)))
            .filter(|(_, records)| !records.is_empty())
    }
}

/// Shared accumulator written to by scan workers.
///
/// Each subsystem's sequence has its own lock; the total is bumped while that
/// lock is held so it never drifts from the sum of the sequence lengths.
#[derive(Debug)]
pub(crate) struct SessionRecorder {
    matches: [Mutex<Vec<MatchRecord>>; 5],
    total: AtomicUsize,
}

impl SessionRecorder {
    pub(crate) fn new() -> Self {
        Self {
            matches: std::array::from_fn(|_| Mutex::new(Vec::new())),
            total: AtomicUsize::new(0),
        }
    }

    pub(crate) fn record(&self, subsystem: Subsystem, record: MatchRecord) {
        let mut sequence = self.matches[subsystem.index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        sequence.push(record);
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn finish(self, scope: Scope, source: &str, lines_processed: usize) -> ScanSession {
        let matches = self
            .matches
            .map(|m| m.into_inner().unwrap_or_else(PoisonError::into_inner));
        ScanSession {
            scope,
            source: source.to_string(),
            lines_processed,
            matches,
            total: self.total.into_inner(),
        }
    }
}
