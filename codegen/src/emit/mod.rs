//! Serialize groups as Rust constant arrays.
//!
//! Each grouping becomes one file, `<kind>.<ext>`:
//!
//! ```text
//! //! severity list generated by wordlist-codegen
//! pub const SEVERE: [&str; 2] = [
//!     "foo",
//!     "bar",
//! ];
//! ```
//!
//! Every render returns the set of array lengths it wrote. The caller merges
//! these and reports them once at the end of a run.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{EmitError, EmitResult};
use crate::models::{GroupKind, Groups};
use crate::transform::identifier::sanitize_identifier;

/// Name written in the header comment of every generated file
pub const GENERATOR_NAME: &str = "wordlist-codegen";

/// Distinct array lengths, kept sorted
pub type LengthSet = BTreeSet<usize>;

/// Outcome of writing one generated file
#[derive(Debug, Clone)]
pub struct EmittedFile {
    pub kind: GroupKind,
    pub path: PathBuf,
    /// Number of `pub const` declarations written
    pub declarations: usize,
    pub lengths: LengthSet,
}

/// Render one grouping into `out`, in the map's iteration order.
pub fn render_group_file<W: Write>(
    out: &mut W,
    kind: GroupKind,
    groups: &Groups<String>,
) -> io::Result<LengthSet> {
    let mut lengths = LengthSet::new();

    writeln!(out, "//! {} list generated by {}", kind, GENERATOR_NAME)?;
    for (name, words) in groups {
        lengths.insert(words.len());
        writeln!(
            out,
            "pub const {}: [&str; {}] = [",
            sanitize_identifier(name),
            words.len()
        )?;
        for word in words {
            writeln!(out, "    {},", quote_literal(word))?;
        }
        writeln!(out, "];")?;
    }

    Ok(lengths)
}

/// Render a grouping to a string.
pub fn render_to_string(kind: GroupKind, groups: &Groups<String>) -> (String, LengthSet) {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let lengths = render_group_file(&mut buf, kind, groups).unwrap_or_default();
    (String::from_utf8_lossy(&buf).into_owned(), lengths)
}

/// Path of the file generated for `kind` inside `dir`.
pub fn output_path(dir: &Path, kind: GroupKind, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", kind, extension))
}

/// Create `<dir>/<kind>.<extension>` and render the grouping into it.
///
/// Existing files are overwritten. A failure leaves whatever was written so
/// far in place.
pub fn write_group_file(
    dir: &Path,
    kind: GroupKind,
    extension: &str,
    groups: &Groups<String>,
) -> EmitResult<EmittedFile> {
    let path = output_path(dir, kind, extension);
    let io_err = |source| EmitError::Io {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    let lengths = render_group_file(&mut out, kind, groups).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    Ok(EmittedFile {
        kind,
        declarations: groups.len(),
        lengths,
        path,
    })
}

/// Quote `s` as a Rust string literal.
///
/// `\`, `"` and control characters (a bare `\r` is rejected by rustc) are
/// escaped; everything else is copied verbatim.
pub fn quote_literal(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        if matches!(c, '\\' | '"') || c.is_control() {
            quoted.extend(c.escape_debug());
        } else {
            quoted.push(c);
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(entries: &[(&str, &[&str])]) -> Groups<String> {
        entries
            .iter()
            .map(|(name, words)| {
                (
                    name.to_string(),
                    words.iter().map(|w| w.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_render_layout() {
        let groups = groups(&[("severe", &["foo", "bar"][..]), ("Mild Stuff", &["baz"][..])]);
        let (text, lengths) = render_to_string(GroupKind::Severity, &groups);

        let expected = "\
//! severity list generated by wordlist-codegen
pub const SEVERE: [&str; 2] = [
    \"foo\",
    \"bar\",
];
pub const MILD_STUFF: [&str; 1] = [
    \"baz\",
];
";
        assert_eq!(text, expected);
        assert_eq!(lengths.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_render_empty_grouping() {
        let (text, lengths) = render_to_string(GroupKind::Word, &Groups::new());

        assert_eq!(text, "//! word list generated by wordlist-codegen\n");
        assert!(lengths.is_empty());
    }

    #[test]
    fn test_duplicate_identifiers_are_written_as_is() {
        let groups = groups(&[("Slur-Term", &["a"][..]), ("slurterm", &["b"][..])]);
        let (text, _) = render_to_string(GroupKind::Category, &groups);

        assert_eq!(text.matches("pub const SLURTERM: [&str; 1]").count(), 2);
    }

    #[test]
    fn test_quote_literal() {
        assert_eq!(quote_literal("foo"), "\"foo\"");
        assert_eq!(quote_literal("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote_literal("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote_literal("café"), "\"café\"");
    }

    #[test]
    fn test_quote_literal_escapes_control_characters() {
        assert_eq!(quote_literal("a\rb"), "\"a\\rb\"");
        assert_eq!(quote_literal("a\nb\tc"), "\"a\\nb\\tc\"");
        assert_eq!(quote_literal("a\u{7}b"), "\"a\\u{7}b\"");
    }

    #[test]
    fn test_render_carriage_return_stays_on_one_line() {
        let groups = groups(&[("mild", &["a\rb"][..])]);
        let (text, _) = render_to_string(GroupKind::Severity, &groups);

        assert!(!text.contains('\r'));
        assert!(text.contains("    \"a\\rb\",\n"));
    }

    #[test]
    fn test_write_group_file() {
        let dir = tempfile::tempdir().unwrap();
        let groups = groups(&[("slur", &["foo", "bar"][..])]);

        let emitted = write_group_file(dir.path(), GroupKind::Category, "rs", &groups).unwrap();

        assert_eq!(emitted.path, dir.path().join("category.rs"));
        assert_eq!(emitted.declarations, 1);
        assert!(emitted.lengths.contains(&2));

        let written = std::fs::read_to_string(&emitted.path).unwrap();
        assert_eq!(written, render_to_string(GroupKind::Category, &groups).0);
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = write_group_file(&missing, GroupKind::Word, "rs", &Groups::new()).unwrap_err();
        assert!(err.to_string().contains("word.rs"));
    }
}
