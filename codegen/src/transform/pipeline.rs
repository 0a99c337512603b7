//! High-level pipeline: load, group three ways, emit three files.
//!
//! # Example
//!
//! ```rust,ignore
//! use wordlist_codegen::{run, GenerateOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = GenerateOptions::new("profanity_en.csv", "src/word_lists");
//!     let report = run(&options)?;
//!     println!("Total lengths: {:?}", report.lengths);
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::emit::{write_group_file, EmittedFile, LengthSet};
use crate::error::{GenerateError, GenerateResult};
use crate::logs::{log_info, log_info_indent, log_success, log_warning, log_warning_indent};
use crate::models::{GroupKind, Groups, Row};
use crate::parser::{load_word_list, WordList};
use crate::transform::grouper::{group_by_category, group_by_severity, group_by_word, project_text};
use crate::transform::identifier::find_conflicts;

/// Default extension of generated files
pub const DEFAULT_EXTENSION: &str = "rs";

/// Options for a generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Word list CSV
    pub input: PathBuf,
    /// Existing directory receiving the generated files
    pub output_dir: PathBuf,
    /// Extension of generated files
    pub extension: String,
}

impl GenerateOptions {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Result of a complete run
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// Number of data rows loaded
    pub row_count: usize,
    /// Detected input encoding
    pub encoding: String,
    /// One entry per generated file, in generation order
    pub files: Vec<EmittedFile>,
    /// Array lengths seen across all files
    pub lengths: LengthSet,
}

/// Run the whole pipeline.
///
/// Any load or write failure aborts the run; files already written are left
/// in place.
pub fn run(options: &GenerateOptions) -> GenerateResult<GenerateReport> {
    if !options.output_dir.is_dir() {
        return Err(GenerateError::OutputDir(options.output_dir.clone()));
    }

    log_info(format!("📖 Reading word list: {}", options.input.display()));
    let word_list = load_word_list(&options.input)?;
    log_success(format!("Detected encoding: {}", word_list.encoding));
    log_success(format!("Read {} rows", word_list.rows.len()));

    generate(&word_list, &options.output_dir, &options.extension)
}

/// Group already-loaded rows and write the three files into `output_dir`.
pub fn generate(
    word_list: &WordList,
    output_dir: &Path,
    extension: &str,
) -> GenerateResult<GenerateReport> {
    let rows = &word_list.rows;
    let mut files = Vec::with_capacity(GroupKind::ALL.len());

    for kind in GroupKind::ALL {
        log_info(format!("📦 Grouping by {}...", kind));
        let groups = build_groups(kind, rows);
        log_success(format!("{} groups", groups.len()));

        let skipped = rows.iter().filter(|row| !has_key(kind, row)).count();
        if skipped > 0 {
            log_info_indent(format!("{} rows without a {} left out", skipped, kind), 1);
        }
        warn_conflicts(kind, &groups);

        let emitted = write_group_file(output_dir, kind, extension, &groups)?;
        log_success(format!(
            "Wrote {} declarations to {}",
            emitted.declarations,
            emitted.path.display()
        ));
        files.push(emitted);
    }

    let lengths = merge_lengths(&files);

    Ok(GenerateReport {
        row_count: rows.len(),
        encoding: word_list.encoding.clone(),
        files,
        lengths,
    })
}

/// Build the string groups emitted for `kind`.
pub fn build_groups(kind: GroupKind, rows: &[Row]) -> Groups<String> {
    match kind {
        GroupKind::Severity => group_by_severity(rows),
        GroupKind::Category => group_by_category(rows),
        GroupKind::Word => project_text(&group_by_word(rows)),
    }
}

/// Union of the array lengths of every emitted file.
pub fn merge_lengths(files: &[EmittedFile]) -> LengthSet {
    files
        .iter()
        .flat_map(|file| file.lengths.iter().copied())
        .collect()
}

fn has_key(kind: GroupKind, row: &Row) -> bool {
    match kind {
        GroupKind::Severity => !row.severity_rating.is_empty(),
        GroupKind::Category => row.categories().iter().any(|c| !c.is_empty()),
        GroupKind::Word => row.canonical_forms().iter().any(|w| !w.is_empty()),
    }
}

fn warn_conflicts(kind: GroupKind, groups: &Groups<String>) {
    for conflict in find_conflicts(groups.keys().map(String::as_str)) {
        if conflict.identifier.is_empty() {
            log_warning(format!(
                "{} labels {:?} produce an empty identifier",
                kind, conflict.labels
            ));
        } else {
            log_warning(format!(
                "{} identifier {} is declared {} times",
                kind,
                conflict.identifier,
                conflict.labels.len()
            ));
            log_warning_indent(format!("labels: {:?}", conflict.labels), 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_word_list;

    const HEADER: &str = "text,canonical_form_1,canonical_form_2,canonical_form_3,category_1,category_2,category_3,severity_rating,severity_description";

    #[test]
    fn test_default_options() {
        let opts = GenerateOptions::new("words.csv", "out");
        assert_eq!(opts.input, PathBuf::from("words.csv"));
        assert_eq!(opts.output_dir, PathBuf::from("out"));
        assert_eq!(opts.extension, "rs");
    }

    #[test]
    fn test_build_groups_word_projects_text() {
        let list = parse_word_list(&format!("{}\nfoo,Bar,,,slur,,,severe,\n", HEADER)).unwrap();
        let groups = build_groups(GroupKind::Word, &list.rows);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups["Bar"], vec!["foo"]);
    }

    #[test]
    fn test_has_key() {
        let row = Row {
            text: "foo".into(),
            category_3: "slur".into(),
            ..Row::default()
        };
        assert!(!has_key(GroupKind::Severity, &row));
        assert!(has_key(GroupKind::Category, &row));
        assert!(!has_key(GroupKind::Word, &row));
    }

    #[test]
    fn test_generate_still_writes_when_rows_lack_keys() {
        let csv = format!("{}\nfoo,,,,,,,,\nbar,Baz,,,,,,mild,\n", HEADER);
        let list = parse_word_list(&csv).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let report = generate(&list, dir.path(), "rs").unwrap();
        let declarations: Vec<usize> = report.files.iter().map(|f| f.declarations).collect();

        // severity MILD, no categories, word BAZ
        assert_eq!(declarations, vec![1, 0, 1]);
    }

    #[test]
    fn test_generate_reports_merged_lengths() {
        let csv = format!(
            "{}\nfoo,Bar,,,slur,,,severe,\nbaz,,,,slur,insult,,severe,\n",
            HEADER
        );
        let list = parse_word_list(&csv).unwrap();
        let dir = tempfile::tempdir().unwrap();

        let report = generate(&list, dir.path(), "rs").unwrap();

        assert_eq!(report.row_count, 2);
        assert_eq!(report.files.len(), 3);
        // severity SEVERE: foo, bar, baz; category SLUR: foo, bar, baz; INSULT: baz; word BAR: foo
        assert_eq!(report.lengths.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let options = GenerateOptions::new(dir.path().join("words.csv"), dir.path().join("out"));

        assert!(matches!(run(&options), Err(GenerateError::OutputDir(_))));
    }
}
