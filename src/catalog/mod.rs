//! Signature catalog.
//!
//! Each subsystem's signatures are OR-ed into a single compiled matcher and
//! paired with one runbook link. The built-in catalog is compiled once per
//! process and only read afterwards, so it can be shared freely between
//! worker threads.

pub mod builtin;
pub mod types;

pub use types::{Signature, SignatureSet, Subsystem};

use crate::error::{Result, ScanError};
use regex::{Regex, RegexSet};
use std::sync::LazyLock;
use tracing::debug;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_entries(builtin::all_sets()).expect("built-in signatures must compile")
});

/// Compiled matcher and runbook for one subsystem.
#[derive(Debug)]
pub struct SubsystemMatcher {
    subsystem: Subsystem,
    remediation: &'static str,
    signatures: Vec<Signature>,
    // None when the set has no signatures; an empty alternation would match every line.
    matcher: Option<Regex>,
    // Same patterns, one slot per signature, for naming what matched.
    per_signature: RegexSet,
}

impl SubsystemMatcher {
    fn compile(set: SignatureSet) -> Result<Self> {
        let matcher = if set.signatures.is_empty() {
            None
        } else {
            let combined = set
                .signatures
                .iter()
                .map(|s| format!("(?:{})", s.pattern))
                .collect::<Vec<_>>()
                .join("|");
            let regex = Regex::new(&combined).map_err(|source| ScanError::Catalog {
                subsystem: set.subsystem,
                source,
            })?;
            Some(regex)
        };
        let per_signature =
            RegexSet::new(set.signatures.iter().map(|s| s.pattern)).map_err(|source| {
                ScanError::Catalog {
                    subsystem: set.subsystem,
                    source,
                }
            })?;

        Ok(Self {
            subsystem: set.subsystem,
            remediation: set.remediation,
            signatures: set.signatures,
            matcher,
            per_signature,
        })
    }

    pub fn subsystem(&self) -> Subsystem {
        self.subsystem
    }

    /// Unanchored, case-sensitive search of `line` against every signature.
    pub fn matches(&self, line: &str) -> bool {
        self.matcher.as_ref().is_some_and(|re| re.is_match(line))
    }

    pub fn remediation_link(&self) -> &'static str {
        self.remediation
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Signatures whose own pattern matches `line`, in catalog order.
    pub fn matched_signatures<'a>(&'a self, line: &str) -> impl Iterator<Item = &'a Signature> {
        self.per_signature
            .matches(line)
            .into_iter()
            .map(move |i| &self.signatures[i])
    }
}

/// Immutable table of subsystem matchers.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<SubsystemMatcher>,
}

impl Catalog {
    /// The process-wide catalog of built-in signatures.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Compiles signature sets into a catalog.
    ///
    /// A later set for an already present subsystem replaces the earlier one.
    /// Fails with [`ScanError::Catalog`] naming the subsystem whose patterns
    /// do not compile.
    pub fn from_entries(sets: Vec<SignatureSet>) -> Result<Self> {
        let mut entries: Vec<SubsystemMatcher> = Vec::with_capacity(sets.len());
        for set in sets {
            let compiled = SubsystemMatcher::compile(set)?;
            debug!(
                subsystem = %compiled.subsystem,
                signatures = compiled.signatures.len(),
                "Compiled subsystem matcher"
            );
            entries.retain(|e| e.subsystem != compiled.subsystem);
            entries.push(compiled);
        }
        entries.sort_by_key(|e| e.subsystem);
        Ok(Self { entries })
    }

    pub fn get(&self, subsystem: Subsystem) -> Option<&SubsystemMatcher> {
        self.entries.iter().find(|e| e.subsystem == subsystem)
    }

    /// Whether `line` matches any signature of `subsystem`.
    pub fn matches(&self, subsystem: Subsystem, line: &str) -> bool {
        self.get(subsystem).is_some_and(|m| m.matches(line))
    }

    pub fn remediation_link(&self, subsystem: Subsystem) -> Option<&'static str> {
        self.get(subsystem).map(|m| m.remediation_link())
    }

    /// Subsystems present in this catalog, in report order.
    pub fn subsystems(&self) -> impl Iterator<Item = Subsystem> + '_ {
        self.entries.iter().map(|e| e.subsystem)
    }
}
