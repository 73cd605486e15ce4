//! Remap diagnostics logging
//!
//! Every component reports through one process-wide [`Logger`] held by
//! [`Engine`](crate::matremap::Engine). Lookup misses during load or apply
//! arrive at WARN; failures arrive at ERROR carrying the file:line of the
//! `matremap_err!` / `matremap_bail!` call that raised them. Hosts install
//! their own logger to route these into an editor console.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Destination for remap log entries
///
/// # Example
///
/// ```no_run
/// use material_remap::matremap::log::{Logger, LogEntry, LogSeverity};
///
/// struct WarningsOnly;
///
/// impl Logger for WarningsOnly {
///     fn log(&self, entry: &LogEntry) {
///         if entry.severity >= LogSeverity::Warn {
///             // Show in the host console...
///         }
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    fn log(&self, entry: &LogEntry);
}

/// One log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,
    pub timestamp: SystemTime,
    /// Emitting component, `"matremap::<Component>"`
    pub source: String,
    pub message: String,
    /// Call site, set for entries raised through the error macros
    pub file: Option<&'static str>,
    pub line: Option<u32>,
}

/// Log severity, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-slot walk output (`RemapConfig::trace_slots`)
    Trace,
    Debug,
    /// Session summaries, files saved and loaded
    Info,
    /// Materials missing from the object or the project
    Warn,
    /// Failed operations
    Error,
}

impl LogSeverity {
    fn label(self) -> ColoredString {
        match self {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        }
    }
}

/// Render an entry as one console line.
///
/// `[timestamp] [SEVERITY] [source] message`, followed by ` (file:line)`
/// when the entry carries a call site.
pub fn format_entry(entry: &LogEntry) -> String {
    let datetime: DateTime<Local> = entry.timestamp.into();
    let mut line = format!(
        "[{}] [{}] [{}] {}",
        datetime.format("%Y-%m-%d %H:%M:%S%.3f"),
        entry.severity.label(),
        entry.source.bright_blue(),
        entry.message
    );
    if let (Some(file), Some(line_number)) = (entry.file, entry.line) {
        line.push_str(&format!(" ({}:{})", file, line_number));
    }
    line
}

/// Console logger installed until a host replaces it.
///
/// WARN and ERROR lines go to stderr, everything else to stdout.
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let line = format_entry(entry);
        if entry.severity >= LogSeverity::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

// ===== LOGGING MACROS =====

/// Shared body of the severity macros
#[doc(hidden)]
#[macro_export]
macro_rules! matremap_log {
    ($severity:ident, $source:expr, $($arg:tt)*) => {
        $crate::matremap::Engine::log(
            $crate::matremap::log::LogSeverity::$severity,
            $source,
            format!($($arg)*)
        )
    };
}

#[macro_export]
macro_rules! matremap_trace {
    ($source:expr, $($arg:tt)*) => { $crate::matremap_log!(Trace, $source, $($arg)*) };
}

#[macro_export]
macro_rules! matremap_debug {
    ($source:expr, $($arg:tt)*) => { $crate::matremap_log!(Debug, $source, $($arg)*) };
}

/// Log an INFO message
///
/// ```ignore
/// matremap_info!("matremap::Session", "Object has {} materials", count);
/// ```
#[macro_export]
macro_rules! matremap_info {
    ($source:expr, $($arg:tt)*) => { $crate::matremap_log!(Info, $source, $($arg)*) };
}

/// Log a WARN message (recoverable lookup misses)
#[macro_export]
macro_rules! matremap_warn {
    ($source:expr, $($arg:tt)*) => { $crate::matremap_log!(Warn, $source, $($arg)*) };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! matremap_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::matremap::Engine::log_detailed(
            $crate::matremap::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log an ERROR message and build the matching `Error` variant
///
/// # Example
///
/// ```ignore
/// let node = graph.node(key)
///     .ok_or_else(|| matremap_err!("matremap::SceneGraph", InvalidNode,
///         "Node {:?} not found", key))?;
/// ```
#[macro_export]
macro_rules! matremap_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::matremap_error!($source, "{}", message);
        $crate::matremap::Error::$variant(message)
    }};
}

/// Log an ERROR message and return early with the matching `Error` variant
#[macro_export]
macro_rules! matremap_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::matremap_err!($source, $variant, $($arg)*))
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
