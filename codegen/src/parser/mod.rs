//! Word list loader with encoding auto-detection.
//!
//! Reads the CSV header (kept, never interpreted) and turns every following
//! record into a [`Row`]. Records must have exactly [`ROW_ARITY`] fields.

use csv::{ReaderBuilder, StringRecord};
use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::models::{Row, ROW_ARITY};

/// Loaded word list with metadata
#[derive(Debug, Clone)]
pub struct WordList {
    /// Column headers, informational only
    pub headers: Vec<String>,
    /// Data rows in file order
    pub rows: Vec<Row>,
    /// Detected encoding
    pub encoding: String,
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        // WHATWG maps the latin1 labels onto windows-1252
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        // UTF-8 and anything unrecognised: lossy UTF-8
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Load a word list file, detecting its encoding.
///
/// # Example
/// ```ignore
/// let list = load_word_list("profanity_en.csv")?;
/// println!("{} rows ({})", list.rows.len(), list.encoding);
/// ```
pub fn load_word_list<P: AsRef<Path>>(path: P) -> LoadResult<WordList> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes(&bytes)
}

/// Parse raw word list bytes.
///
/// Valid UTF-8 is taken as is; only other input goes through detection.
pub fn parse_bytes(bytes: &[u8]) -> LoadResult<WordList> {
    if let Ok(content) = std::str::from_utf8(bytes) {
        return parse_with_encoding(content, "utf-8".to_string());
    }

    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    parse_with_encoding(&content, encoding)
}

/// Parse an already-decoded word list.
///
/// # Example
/// ```ignore
/// use wordlist_codegen::parse_word_list;
///
/// let csv = "text,c1,c2,c3,k1,k2,k3,rating,description\nfoo,Bar,,,slur,,,severe,\n";
/// let list = parse_word_list(csv).unwrap();
///
/// assert_eq!(list.rows[0].text, "foo");
/// assert_eq!(list.rows[0].severity_rating, "severe");
/// ```
pub fn parse_word_list(content: &str) -> LoadResult<WordList> {
    parse_with_encoding(content, "utf-8".to_string())
}

fn parse_with_encoding(content: &str, encoding: String) -> LoadResult<WordList> {
    // Arity is checked per record below, so the reader itself stays flexible
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let header_record = reader.headers()?.clone();
    if header_record.is_empty() {
        return Err(LoadError::MissingHeader);
    }
    let headers = header_record.iter().map(String::from).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record_to_row(&record)?);
    }

    Ok(WordList {
        headers,
        rows,
        encoding,
    })
}

fn record_to_row(record: &StringRecord) -> LoadResult<Row> {
    if record.len() != ROW_ARITY {
        return Err(LoadError::FieldCount {
            line: record.position().map(|p| p.line()).unwrap_or(0),
            expected: ROW_ARITY,
            found: record.len(),
        });
    }

    // No headers: fields map onto Row positionally
    Ok(record.deserialize(None)?)
}
