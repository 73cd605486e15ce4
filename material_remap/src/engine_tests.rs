//! Unit tests for the Engine logger slot
//!
//! The logger is process-wide and other unit tests log concurrently, so every
//! test here is #[serial] and only looks at entries from its own source.

use crate::matremap::Engine;
use crate::matremap::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(TestLogger { entries: Arc::clone(&entries) });
    entries
}

fn from_source(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
    entries.lock().unwrap().iter().filter(|e| e.source == source).cloned().collect()
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_set_logger_receives_entries() {
    let entries = install_capture();

    Engine::log(LogSeverity::Info, "test::engine::basic", "hello".to_string());
    Engine::log(LogSeverity::Warn, "test::engine::basic", "careful".to_string());

    let captured = from_source(&entries, "test::engine::basic");
    Engine::reset_logger();

    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].message, "hello");
    assert!(captured[0].file.is_none());
    assert_eq!(captured[1].severity, LogSeverity::Warn);
}

#[test]
#[serial]
fn test_log_detailed_carries_location() {
    let entries = install_capture();

    Engine::log_detailed(LogSeverity::Error, "test::engine::detailed", "boom".to_string(), "src/x.rs", 42);

    let captured = from_source(&entries, "test::engine::detailed");
    Engine::reset_logger();

    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].file, Some("src/x.rs"));
    assert_eq!(captured[0].line, Some(42));
}

#[test]
#[serial]
fn test_err_macro_logs_and_builds_error() {
    let entries = install_capture();

    let error = crate::matremap_err!("test::engine::macro", InvalidSelection, "slot {} missing", 3);

    let captured = from_source(&entries, "test::engine::macro");
    Engine::reset_logger();

    assert!(matches!(error, crate::matremap::Error::InvalidSelection(ref msg) if msg == "slot 3 missing"));
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    assert!(captured[0].line.is_some());
}

#[test]
#[serial]
fn test_reset_logger_detaches_custom_logger() {
    let entries = install_capture();
    Engine::reset_logger();

    Engine::log(LogSeverity::Debug, "test::engine::reset", "dropped".to_string());

    assert!(from_source(&entries, "test::engine::reset").is_empty());
}
