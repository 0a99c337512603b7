//! Turn free-text group labels into Rust constant names.
//!
//! ```text
//! "Strong Insult/Slur-Term"  →  STRONG_INSULT_SLURTERM
//! ```

use indexmap::IndexMap;

/// Convert a label to an upper-case, underscore-joined constant identifier.
///
/// Steps, in order: upper-case, delete every `-` (neighbouring segments
/// fuse), turn spaces and `/` into underscores, then collapse runs of
/// underscores and strip them from both ends.
///
/// Labels made only of spaces and separators yield an empty string.
/// Distinct labels may map to the same identifier; callers decide what to do
/// about that.
pub fn sanitize_identifier(label: &str) -> String {
    let folded: String = label
        .to_uppercase()
        .chars()
        .filter(|c| *c != '-')
        .map(|c| if matches!(c, ' ' | '/') { '_' } else { c })
        .collect();

    folded
        .split('_')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Labels whose identifiers collide with another label's, or are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierConflict {
    /// The shared (possibly empty) identifier
    pub identifier: String,
    /// Raw labels producing it, in first-seen order
    pub labels: Vec<String>,
}

/// Find identifiers that several labels sanitize to, plus empty identifiers.
///
/// Nothing is rejected here; the result is only used for warnings.
pub fn find_conflicts<'a, I>(labels: I) -> Vec<IdentifierConflict>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut by_identifier: IndexMap<String, Vec<String>> = IndexMap::new();
    for label in labels {
        by_identifier
            .entry(sanitize_identifier(label))
            .or_default()
            .push(label.to_string());
    }

    by_identifier
        .into_iter()
        .filter(|(identifier, labels)| identifier.is_empty() || labels.len() > 1)
        .map(|(identifier, labels)| IdentifierConflict { identifier, labels })
        .collect()
}
