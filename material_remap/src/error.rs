//! Error types for the material remap engine
//!
//! This module defines the error types used throughout the crate,
//! including scene preconditions, asset registration and mapping persistence.
//!
//! Lookup misses (a material missing from the object or from the project)
//! are not errors: they are reported as warnings and the operation continues.

use std::fmt;

/// Result type for material remap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Material remap errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Unknown node key, or an invalid link between nodes
    InvalidNode(String),

    /// Selection does not match the object's materials or the project index
    InvalidSelection(String),

    /// Asset database rejected a registration (duplicate path, empty identity, ...)
    InvalidAsset(String),

    /// Persisted mapping bytes could not be decoded
    MalformedMapping(String),

    /// Persisted mapping uses a format version this build cannot read
    UnsupportedVersion(u32),

    /// File open/read/write failure while saving or loading a mapping
    IoError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidNode(msg) => write!(f, "Invalid node: {}", msg),
            Error::InvalidSelection(msg) => write!(f, "Invalid selection: {}", msg),
            Error::InvalidAsset(msg) => write!(f, "Invalid asset: {}", msg),
            Error::MalformedMapping(msg) => write!(f, "Malformed mapping: {}", msg),
            Error::UnsupportedVersion(version) => {
                write!(f, "Unsupported mapping format version {}", version)
            }
            Error::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
