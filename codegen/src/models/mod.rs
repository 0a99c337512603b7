//! Domain models for the word list generator.
//!
//! - [`Row`] - One entry of the word list
//! - [`GroupKind`] - Which attribute a set of groups is keyed by
//! - [`Groups`] - Insertion-ordered named buckets

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of columns every data record must have.
pub const ROW_ARITY: usize = 9;

// =============================================================================
// Row
// =============================================================================

/// A single word list entry, deserialized positionally from a CSV record.
///
/// Blank strings mean "absent" for the optional columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// The literal word or phrase.
    pub text: String,
    pub canonical_form_1: String,
    pub canonical_form_2: String,
    pub canonical_form_3: String,
    pub category_1: String,
    pub category_2: String,
    pub category_3: String,
    /// Severity label; blank rows are left out of the severity output.
    pub severity_rating: String,
    /// Free-text description, carried but never grouped on.
    pub severity_description: String,
}

impl Row {
    /// Canonical forms in column order, blanks included.
    pub fn canonical_forms(&self) -> [&str; 3] {
        [
            &self.canonical_form_1,
            &self.canonical_form_2,
            &self.canonical_form_3,
        ]
    }

    /// Category labels in column order, blanks included.
    pub fn categories(&self) -> [&str; 3] {
        [&self.category_1, &self.category_2, &self.category_3]
    }
}

// =============================================================================
// Grouping
// =============================================================================

/// The three ways rows are fanned out into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Severity,
    Category,
    Word,
}

impl GroupKind {
    /// All kinds, in the order files are generated.
    pub const ALL: [GroupKind; 3] = [GroupKind::Severity, GroupKind::Category, GroupKind::Word];

    /// Lower-case name, used for the file stem and the header comment.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::Severity => "severity",
            GroupKind::Category => "category",
            GroupKind::Word => "word",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named groups keyed by raw label, iterated in first-seen order.
///
/// Output determinism depends on this order, so this must stay an
/// insertion-ordered map.
pub type Groups<T> = IndexMap<String, Vec<T>>;
