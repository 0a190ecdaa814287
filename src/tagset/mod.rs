//! Canonical tagset loading, grouping, and corpus reconciliation.
//!
//! The tagset definition file is comma-delimited with one tag per row:
//!
//! ```text
//! Named Entity tags,Named Entity annotation
//! ACT,
//! AGE,
//! FAC_AIRPORT,
//! PRO_LANGUAGE,
//! ```
//!
//! Only the first field of each row is used. A first line containing the
//! substring `Named Entity` is treated as a header and skipped; this is a
//! heuristic, not schema validation.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::NerstatError;

/// Group name for tags that carry no underscore-delimited prefix.
pub const BASE_GROUP: &str = "BASE";

/// Marker substring identifying the optional tagset header line.
const HEADER_MARKER: &str = "Named Entity";

/// Loads the tagset from a definition file.
///
/// Returns a sorted, deduplicated list of tag strings.
///
/// # Errors
/// Returns an error only if the file cannot be read.
pub fn load_tagset(path: &Path) -> Result<Vec<String>, NerstatError> {
    let content = fs::read_to_string(path).map_err(|source| NerstatError::TagsetRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(from_tagset_str(&content))
}

/// Parses tagset content from a string.
///
/// Useful for testing and fuzzing without file I/O.
pub fn from_tagset_str(content: &str) -> Vec<String> {
    let mut tags: BTreeSet<String> = BTreeSet::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line_num == 0 && line.contains(HEADER_MARKER) {
            continue;
        }

        // First comma-delimited field; rows often end with a trailing comma.
        let first = line.split(',').next().unwrap_or("").trim();
        if !first.is_empty() {
            tags.insert(first.to_string());
        }
    }

    tags.into_iter().collect()
}

/// Groups tags by the prefix before the first underscore.
///
/// `FAC_AIRPORT` lands in group `FAC`; a tag without an underscore lands in
/// the [`BASE_GROUP`] sentinel group. Tags are sorted within each group.
pub fn group_by_prefix(tags: &[String]) -> BTreeMap<String, Vec<String>> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for tag in tags {
        let prefix = match tag.split_once('_') {
            Some((prefix, _)) => prefix,
            None => BASE_GROUP,
        };
        groups.entry(prefix.to_string()).or_default().push(tag.clone());
    }

    for members in groups.values_mut() {
        members.sort();
    }

    groups
}

/// The set differences between a canonical tagset and the entity types
/// observed in a corpus.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ReconciliationResult {
    /// Tags defined in the tagset but never seen in the corpus.
    pub unused_in_corpus: Vec<String>,
    /// Types seen in the corpus but not defined in the tagset.
    pub unknown_in_tagset: Vec<String>,
}

/// Compares the tagset against the observed entity types.
///
/// Both output lists are sorted. A tag present on both sides appears in
/// neither list.
pub fn reconcile(tagset: &[String], observed_types: &BTreeSet<String>) -> ReconciliationResult {
    let tagset_set: BTreeSet<&str> = tagset.iter().map(String::as_str).collect();
    let observed: BTreeSet<&str> = observed_types.iter().map(String::as_str).collect();

    ReconciliationResult {
        unused_in_corpus: tagset_set
            .difference(&observed)
            .map(|t| t.to_string())
            .collect(),
        unknown_in_tagset: observed
            .difference(&tagset_set)
            .map(|t| t.to_string())
            .collect(),
    }
}

impl fmt::Display for ReconciliationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tagset reconciliation:")?;
        writeln!(f, "  Unused in corpus   : {}", self.unused_in_corpus.len())?;
        for tag in &self.unused_in_corpus {
            writeln!(f, "    - {}", tag)?;
        }
        writeln!(f, "  Unknown vs. tagset : {}", self.unknown_in_tagset.len())?;
        for tag in &self.unknown_in_tagset {
            writeln!(f, "    - {}", tag)?;
        }
        Ok(())
    }
}
