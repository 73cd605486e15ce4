//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_invalid_node_display() {
    let err = Error::InvalidNode("root not found".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid node"));
    assert!(display.contains("root not found"));
}

#[test]
fn test_invalid_selection_display() {
    let err = Error::InvalidSelection("expected 3 entries, got 2".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid selection"));
    assert!(display.contains("expected 3 entries"));
}

#[test]
fn test_invalid_asset_display() {
    let err = Error::InvalidAsset("duplicate path".to_string());
    assert_eq!(format!("{}", err), "Invalid asset: duplicate path");
}

#[test]
fn test_malformed_mapping_display() {
    let err = Error::MalformedMapping("bad magic".to_string());
    assert_eq!(format!("{}", err), "Malformed mapping: bad magic");
}

#[test]
fn test_unsupported_version_display() {
    let err = Error::UnsupportedVersion(7);
    assert_eq!(format!("{}", err), "Unsupported mapping format version 7");
}

#[test]
fn test_io_error_display() {
    let err = Error::IoError("permission denied".to_string());
    let display = format!("{}", err);
    assert!(display.starts_with("I/O error"));
    assert!(display.contains("permission denied"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::UnsupportedVersion(2);
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug = format!("{:?}", Error::InvalidNode("n".to_string()));
    assert!(debug.contains("InvalidNode"));

    let debug = format!("{:?}", Error::UnsupportedVersion(3));
    assert!(debug.contains("UnsupportedVersion"));
}

#[test]
fn test_error_clone() {
    let err1 = Error::MalformedMapping("truncated".to_string());
    let err2 = err1.clone();
    assert_eq!(format!("{}", err1), format!("{}", err2));
}

// ============================================================================
// RESULT TYPE TESTS
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<u32> {
        Err(Error::IoError("disk full".to_string()))
    }

    fn outer() -> Result<u32> {
        inner()?;
        Ok(42)
    }

    let result = outer();
    assert!(matches!(result, Err(Error::IoError(_))));
}
