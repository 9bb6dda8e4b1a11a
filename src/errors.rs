/*!
 * Error types for the subsync engine.
 *
 * This module contains custom error types for different parts of the engine,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when fetching script text from a source
#[derive(Error, Debug)]
pub enum SourceError {
    /// Error when retrieving the raw script text fails
    #[error("Script fetch failed: {0}")]
    FetchFailed(String),

    /// Error when a source takes too long to deliver the script
    #[error("Script fetch timed out after {0}ms")]
    Timeout(u64),
}

/// Errors that can occur during script parsing
///
/// The parser is total: malformed lines are dropped and the worst case is an
/// empty document, so no variants exist today. The enum is kept so consumers
/// can match on a stable type if parse diagnostics are ever surfaced.
#[derive(Error, Debug)]
pub enum ScriptError {}

/// Main engine error type that wraps all other errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Error from a script source
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Error from script parsing
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    /// A load finished after a newer load had already been requested
    #[error("Stale script load discarded")]
    StaleLoad,

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error in the engine configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for EngineError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for EngineError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
