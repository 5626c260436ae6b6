//! Integration tests for logger behavior.

use tech_tree::logger::{level, set_level, set_level_from_str, should_log, Level};
use std::sync::{Mutex, MutexGuard};
use tech_tree::{debug, error, info, warn};

/// The level is process-global; tests that change it run one at a time
static LEVEL_LOCK: Mutex<()> = Mutex::new(());

fn lock_level() -> MutexGuard<'static, ()> {
    LEVEL_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[test]
fn level_parse_accepts_valid() {
    let _guard = lock_level();
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("WARN"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    let _guard = lock_level();
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn level_filters_messages() {
    let _guard = lock_level();
    set_level(Level::Warn);
    assert_eq!(level(), Level::Warn);
    assert!(should_log(Level::Error));
    assert!(should_log(Level::Warn));
    assert!(!should_log(Level::Info));
    assert!(!should_log(Level::Debug));
}

#[test]
fn logs_do_not_panic() {
    let _guard = lock_level();
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_writes_prefixed_lines() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("techtree.log");
    let _guard = lock_level();

    assert!(tech_tree::logger::init_file_logging(&path));
    set_level(Level::Warn);
    warn!("layout returned {} positions", 3);

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[WARN] layout returned 3 positions"));
}
