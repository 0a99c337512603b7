//! Transformation module.
//!
//! - Grouper: rows to severity, category and word groups
//! - Identifier: group labels to constant names
//! - Pipeline: the end-to-end run

pub mod grouper;
pub mod identifier;
pub mod pipeline;

pub use grouper::{group_by_category, group_by_severity, group_by_word, project_text};
pub use identifier::{find_conflicts, sanitize_identifier, IdentifierConflict};
pub use pipeline::*;
