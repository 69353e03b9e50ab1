//! Error handling for the packsmith library.
//! Defines custom error types and results used throughout the build pipeline.

use std::io;
use thiserror::Error;

/// Custom error types for packsmith operations.
///
/// Every failure is fatal to the current build invocation; nothing is
/// caught or retried inside the core.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents missing context required to resolve an output path,
    /// or an invalid pack configuration
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents illegal scope nesting (e.g. opening a file while one
    /// is already open)
    #[error("Illegal state: {0}.")]
    StateError(String),

    /// Represents content handed to a handler that cannot serialize it
    #[error("Write error: {0}.")]
    WriteError(String),

    /// Represents errors serializing structured content to JSON
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents exhaustion of generated-file name candidates
    #[error("Could not allocate a free generated file name for '{stem}' after {attempts} attempts.")]
    NameCollisionExhausted { stem: String, attempts: u32 },
}

/// Convenience type alias for Results with packsmith's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
