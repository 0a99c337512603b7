//! # Wordlist Codegen - word list CSV to Rust constants
//!
//! Reads a profanity word list and writes three Rust source files exposing
//! the words as grouped `pub const` arrays, for a runtime filter crate to
//! compile in.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│   Grouper   │────▶│   Emitter    │
//! │  (9 fields) │     │  (auto-enc) │     │ (x3 kinds)  │     │ severity.rs  │
//! └─────────────┘     └─────────────┘     └─────────────┘     │ category.rs  │
//!                                                             │ word.rs      │
//!                                                             └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wordlist_codegen::{run, GenerateOptions};
//!
//! let report = run(&GenerateOptions::new("words.csv", "src/word_lists")).unwrap();
//! println!("Total lengths: {:?}", report.lengths);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`logs`] - Leveled progress logs
//! - [`models`] - Domain models (Row, GroupKind, Groups)
//! - [`parser`] - CSV loading with encoding detection
//! - [`transform`] - Grouping, identifier sanitizing and the pipeline
//! - [`emit`] - Rust source emission

// Core modules
pub mod error;
pub mod logs;
pub mod models;

// Loading
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod emit;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    EmitError,
    EmitResult,
    GenerateError,
    GenerateResult,
    LoadError,
    LoadResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{GroupKind, Groups, Row, ROW_ARITY};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{
    decode_content,
    detect_encoding,
    load_word_list,
    parse_bytes,
    parse_word_list,
    WordList,
};

// =============================================================================
// Re-exports - Grouping
// =============================================================================

pub use transform::{
    find_conflicts,
    group_by_category,
    group_by_severity,
    group_by_word,
    project_text,
    sanitize_identifier,
    IdentifierConflict,
};

// =============================================================================
// Re-exports - Emitter
// =============================================================================

pub use emit::{
    output_path,
    quote_literal,
    render_group_file,
    render_to_string,
    write_group_file,
    EmittedFile,
    LengthSet,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    build_groups,
    generate,
    merge_lengths,
    run,
    GenerateOptions,
    GenerateReport,
};
