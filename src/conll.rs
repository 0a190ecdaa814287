//! INCEpTION-style CoNLL annotation file reader.
//!
//! This module parses BIO-tagged token files into sentences. The format is
//! line oriented:
//!
//! - One token per line, whitespace-delimited columns. Column 1 is the token
//!   surface form and the **last** column is the BIO label (`O`, `B-PERSON`,
//!   `I-LOC_CITY`, ...). Any columns in between are ignored.
//! - A blank (or whitespace-only) line terminates the current sentence.
//! - Lines with fewer than two columns are dropped without error. Annotation
//!   exports routinely contain stray artifacts and we tolerate them.
//!
//! Parsing never fails on content, only on file access.

use std::fs;
use std::path::Path;

use crate::error::NerstatError;

/// The label used for tokens outside any entity span.
pub const OUTSIDE: &str = "O";

/// A single annotated token: surface form plus BIO label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The token surface form.
    pub text: String,
    /// The BIO label, never empty.
    pub label: String,
}

/// An ordered, non-empty run of tokens between sentence separators.
pub type Sentence = Vec<Token>;

/// Reads a CoNLL annotation file into a list of sentences.
///
/// # Errors
/// Returns an error only if the file cannot be read. Malformed content lines
/// are skipped, not reported.
pub fn read_conll_file(path: &Path) -> Result<Vec<Sentence>, NerstatError> {
    let content = fs::read_to_string(path).map_err(|source| NerstatError::ConllRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(from_conll_str(&content))
}

/// Parses CoNLL content from a string.
///
/// Useful for testing and fuzzing without file I/O. Content parsing is
/// infallible: a completely empty input yields an empty list.
pub fn from_conll_str(content: &str) -> Vec<Sentence> {
    let mut sentences: Vec<Sentence> = Vec::new();
    let mut current: Sentence = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                sentences.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(token) = parse_token_line(line) {
            current.push(token);
        }
    }

    // A trailing sentence without a final blank line still counts.
    if !current.is_empty() {
        sentences.push(current);
    }

    sentences
}

/// Parses one content line into a token, or `None` for lines with fewer
/// than two columns.
fn parse_token_line(line: &str) -> Option<Token> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 2 {
        return None;
    }

    Some(Token {
        text: fields[0].to_string(),
        // The NER tag is the last column; middle columns are unused.
        label: fields[fields.len() - 1].to_string(),
    })
}

/// Strips a leading `B-` or `I-` from a BIO label, yielding the entity type.
///
/// Labels without a BIO prefix (including `O`) are returned unchanged.
pub fn entity_type(label: &str) -> &str {
    label
        .strip_prefix("B-")
        .or_else(|| label.strip_prefix("I-"))
        .unwrap_or(label)
}
