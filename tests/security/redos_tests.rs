//! ReDoS (Regular Expression Denial of Service) tests.
//!
//! Several signatures contain `(.*)` and `\S*` runs. These tests feed very long
//! near-miss lines through the catalog and the scanner to make sure matching
//! stays linear in the line length.

use px_logscan::{Catalog, LogScanner, Scope, Subsystem};
use std::io::Cursor;
use std::time::{Duration, Instant};

/// Generous bound so slow CI machines do not flake; backtracking blowups
/// would take orders of magnitude longer.
const MAX_ACCEPTABLE_TIME: Duration = Duration::from_millis(500);

fn assert_fast(subsystem: Subsystem, line: &str) {
    let catalog = Catalog::builtin();
    // Compile outside the timed section.
    let _ = catalog.matches(subsystem, "");

    let start = Instant::now();
    let _ = catalog.matches(subsystem, line);
    let elapsed = start.elapsed();

    assert!(
        elapsed < MAX_ACCEPTABLE_TIME,
        "ReDoS detected in {}: took {:?}, expected < {:?}",
        subsystem,
        elapsed,
        MAX_ACCEPTABLE_TIME
    );
}

#[test]
fn test_redos_peer_url_without_member() {
    // Pattern: etcdserver: failed to reach the peerURL(.*) of member \S*
    let line = format!(
        "etcdserver: failed to reach the peerURL{}",
        " of membe".repeat(20000)
    );
    assert_fast(Subsystem::Kvdb, &line);
}

#[test]
fn test_redos_free_extents_long_tokens() {
    // Pattern: Insufficient free extents \(\S*\) in volume group \S*: \S* required
    let line = format!(
        "Insufficient free extents ({}) in volume group {}: {}",
        "9".repeat(50000),
        "v".repeat(50000),
        "1".repeat(50000)
    );
    assert_fast(Subsystem::Dmthin, &line);
}

#[test]
fn test_redos_patch_fs_nested_wildcards() {
    // Pattern: Failed to (find|parse|extract|execute) (patch|remote.*) fs(.*) kernel(.*)
    let line = format!("Failed to parse remote{}", " fs remote".repeat(20000));
    assert_fast(Subsystem::Install, &line);
}

#[test]
fn test_redos_insmod_many_spaces() {
    // Pattern: insmod: WARNING: could not insert module \S* \S*. Check dmesg ...
    let line = format!(
        "insmod: WARNING: could not insert module {}",
        "a b. ".repeat(20000)
    );
    assert_fast(Subsystem::Install, &line);
}

#[test]
fn test_redos_full_scan_of_long_lines() {
    let mut content = String::new();
    for _ in 0..20 {
        content.push_str(&"Couldn't find device with uuid".repeat(2000));
        content.push('\n');
        content.push_str(&"x".repeat(100_000));
        content.push('\n');
    }

    let start = Instant::now();
    let session = LogScanner::new(Catalog::builtin())
        .scan_reader(Cursor::new(content), Scope::All, "long.log")
        .unwrap();
    let elapsed = start.elapsed();

    assert_eq!(session.lines_processed(), 40);
    assert_eq!(session.matches(Subsystem::Dmthin).len(), 20);
    assert!(
        elapsed < Duration::from_secs(5),
        "full scan of long lines took {:?}",
        elapsed
    );
}
