//! Error types for the word list generator.
//!
//! - [`LoadError`] - Reading and parsing the input CSV
//! - [`EmitError`] - Writing generated source files
//! - [`GenerateError`] - Top-level pipeline errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Loading Errors
// =============================================================================

/// Errors while loading the word list.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid CSV format (quoting, UTF-8 in a record, ...).
    #[error("Invalid CSV format: {0}")]
    Csv(#[from] csv::Error),

    /// Input has no header line.
    #[error("CSV file is empty, expected a header line")]
    MissingHeader,

    /// A data record has the wrong number of fields.
    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },
}

// =============================================================================
// Emission Errors
// =============================================================================

/// Errors while writing generated files.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Could not create or write an output file.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Generate Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the error type returned by [`crate::transform::pipeline::run`].
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Loading error.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Emission error.
    #[error("Emit error: {0}")]
    Emit(#[from] EmitError),

    /// Output directory is missing or not a directory.
    #[error("Output directory does not exist: {}", .0.display())]
    OutputDir(PathBuf),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for emission operations.
pub type EmitResult<T> = Result<T, EmitError>;

/// Result type for pipeline operations.
pub type GenerateResult<T> = Result<T, GenerateError>;
