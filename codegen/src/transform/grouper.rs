//! Fan word list rows out into named groups.
//!
//! Three independent groupings are built from the same rows:
//!
//! ```text
//! Rows (text | forms | categories | severity)      Groups
//! ┌──────────────────────────────────────┐      ┌─────────────────────────────┐
//! │ foo | Bar | slur, insult | severe    │      │ severity "severe": foo, bar │
//! │ baz |     | slur         | mild      │  →   │ category "slur": foo,bar,baz│
//! └──────────────────────────────────────┘      │ word "Bar": [foo row]       │
//!                                               └─────────────────────────────┘
//! ```
//!
//! - By severity and by category, a group holds the row's `text` followed by
//!   its lower-cased canonical forms. A canonical form is only added when the
//!   group does not already contain that exact string; `text` is always added.
//! - By word, a group is keyed by the raw canonical form and holds the whole
//!   row, with no deduplication.
//!
//! Every grouping drops the group keyed by `""` before returning.

use crate::models::{Groups, Row};

/// Group `text` and canonical forms by severity label.
///
/// Rows with a blank severity end up in no group.
pub fn group_by_severity(rows: &[Row]) -> Groups<String> {
    let mut groups = Groups::new();

    for row in rows {
        let group = groups.entry(row.severity_rating.clone()).or_default();
        add_terms(group, row);
    }

    discard_unassigned(groups)
}

/// Group `text` and canonical forms by category label.
///
/// A row lands in up to three groups, once per category column. Repeating
/// the same label in two columns adds the row to that group twice.
pub fn group_by_category(rows: &[Row]) -> Groups<String> {
    let mut groups = Groups::new();

    for row in rows {
        for category in row.categories() {
            if category.is_empty() {
                continue;
            }
            let group = groups.entry(category.to_string()).or_default();
            add_terms(group, row);
        }
    }

    discard_unassigned(groups)
}

/// Group whole rows by raw canonical form.
///
/// Blank canonical forms accumulate under `""` and are dropped with it.
pub fn group_by_word(rows: &[Row]) -> Groups<&Row> {
    let mut groups: Groups<&Row> = Groups::new();

    for row in rows {
        for word in row.canonical_forms() {
            groups.entry(word.to_string()).or_default().push(row);
        }
    }

    discard_unassigned(groups)
}

/// Reduce word groups to the `text` of each member row.
pub fn project_text(groups: &Groups<&Row>) -> Groups<String> {
    groups
        .iter()
        .map(|(word, rows)| {
            let texts = rows.iter().map(|row| row.text.clone()).collect();
            (word.clone(), texts)
        })
        .collect()
}

/// Append `text`, then each new lower-cased canonical form.
fn add_terms(group: &mut Vec<String>, row: &Row) {
    group.push(row.text.clone());

    for word in row.canonical_forms() {
        if word.is_empty() {
            continue;
        }
        let word = word.to_lowercase();
        if !group.contains(&word) {
            group.push(word);
        }
    }
}

/// Remove the `""` group, keeping the order of the rest.
fn discard_unassigned<T>(mut groups: Groups<T>) -> Groups<T> {
    groups.shift_remove("");
    groups
}
