//! Results-directory writers for survey and reconciliation output.
//!
//! These are the on-disk consumers of the core data structures: a JSON
//! snapshot of the statistics, CSV frequency tables, the raw sentence-length
//! list, and plain-text tag lists from reconciliation.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::corpus::{sorted_counts, CorpusStats};
use crate::error::NerstatError;

/// File name for the statistics JSON snapshot.
pub const STATS_JSON: &str = "stats.json";
/// File name for the full-BIO-label frequency table.
pub const LABEL_COUNTS_CSV: &str = "label_counts.csv";
/// File name for the entity-type frequency table.
pub const TYPE_COUNTS_CSV: &str = "type_counts.csv";
/// File name for the raw sentence-length list.
pub const SENTENCE_LENGTHS_CSV: &str = "sentence_lengths.csv";
/// File name for tags defined in the tagset but never observed.
pub const UNUSED_TAGS_FILE: &str = "unused_tags_in_corpus.txt";
/// File name for types observed but missing from the tagset.
pub const UNKNOWN_TYPES_FILE: &str = "unknown_types_in_tagset.txt";

/// Creates a directory (and any missing parents) if it does not exist.
pub fn ensure_dir(path: &Path) -> Result<(), NerstatError> {
    fs::create_dir_all(path).map_err(NerstatError::Io)
}

/// Writes the statistics snapshot as pretty-printed JSON.
pub fn write_stats_json(path: &Path, stats: &CorpusStats) -> Result<(), NerstatError> {
    let file = File::create(path).map_err(NerstatError::Io)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, stats).map_err(|source| {
        NerstatError::StatsJsonWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.write_all(b"\n").map_err(NerstatError::Io)?;
    writer.flush().map_err(NerstatError::Io)?;

    Ok(())
}

/// Writes a frequency table as CSV, sorted by count descending.
///
/// `column_name` becomes the header of the first column (`label` or
/// `entity_type`), followed by a `count` column.
pub fn write_counts_csv(
    path: &Path,
    counts: &BTreeMap<String, u64>,
    column_name: &str,
) -> Result<(), NerstatError> {
    let file = File::create(path).map_err(NerstatError::Io)?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    let map_err = |source| NerstatError::CountsCsvWrite {
        path: path.to_path_buf(),
        source,
    };

    writer.write_record([column_name, "count"]).map_err(map_err)?;
    for entry in sorted_counts(counts) {
        writer
            .write_record([entry.label.clone(), entry.count.to_string()])
            .map_err(map_err)?;
    }

    writer
        .into_inner()
        .map_err(|e| NerstatError::Io(e.into_error()))?
        .flush()
        .map_err(NerstatError::Io)?;

    Ok(())
}

/// Writes the raw sentence-length list as a single-column CSV.
pub fn write_lengths_csv(path: &Path, lengths: &[usize]) -> Result<(), NerstatError> {
    let file = File::create(path).map_err(NerstatError::Io)?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));

    let map_err = |source| NerstatError::CountsCsvWrite {
        path: path.to_path_buf(),
        source,
    };

    writer.write_record(["sentence_length"]).map_err(map_err)?;
    for length in lengths {
        writer.write_record([length.to_string()]).map_err(map_err)?;
    }

    writer
        .into_inner()
        .map_err(|e| NerstatError::Io(e.into_error()))?
        .flush()
        .map_err(NerstatError::Io)?;

    Ok(())
}

/// Writes a tag list as plain text, one tag per line.
pub fn write_tag_list(path: &Path, tags: &[String]) -> Result<(), NerstatError> {
    let file = File::create(path).map_err(NerstatError::Io)?;
    let mut writer = BufWriter::new(file);

    for tag in tags {
        writeln!(writer, "{}", tag)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn stats_json_round_trips() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join(STATS_JSON);

        let stats = CorpusStats {
            total_document_folders: 2,
            annotated_documents: 1,
            total_sentences: 2,
            average_sentence_length: 1.5,
            ..Default::default()
        };

        write_stats_json(&path, &stats).expect("write stats json");
        let content = fs::read_to_string(&path).expect("read stats json");
        let parsed: serde_json::Value = serde_json::from_str(&content).expect("parse json");

        assert_eq!(parsed["total_document_folders"], 2);
        assert_eq!(parsed["annotated_documents"], 1);
        assert_eq!(parsed["average_sentence_length"], 1.5);
    }

    #[test]
    fn counts_csv_is_sorted_by_count_descending() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join(TYPE_COUNTS_CSV);

        let mut counts = BTreeMap::new();
        counts.insert("PERSON".to_string(), 2u64);
        counts.insert("LOC".to_string(), 7);
        counts.insert("ORG".to_string(), 2);

        write_counts_csv(&path, &counts, "entity_type").expect("write counts csv");
        let content = fs::read_to_string(&path).expect("read counts csv");
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "entity_type,count");
        assert_eq!(lines[1], "LOC,7");
        assert_eq!(lines[2], "ORG,2");
        assert_eq!(lines[3], "PERSON,2");
    }

    #[test]
    fn lengths_csv_preserves_order() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join(SENTENCE_LENGTHS_CSV);

        write_lengths_csv(&path, &[2, 1, 5]).expect("write lengths csv");
        let content = fs::read_to_string(&path).expect("read lengths csv");

        assert_eq!(content, "sentence_length\n2\n1\n5\n");
    }

    #[test]
    fn tag_list_is_one_tag_per_line() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join(UNUSED_TAGS_FILE);

        write_tag_list(&path, &["GPE".to_string(), "ORG".to_string()]).expect("write tag list");
        let content = fs::read_to_string(&path).expect("read tag list");

        assert_eq!(content, "GPE\nORG\n");
    }

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let nested = temp.path().join("results").join("deep");

        ensure_dir(&nested).expect("ensure dir");
        assert!(nested.is_dir());
        // Idempotent on an existing directory.
        ensure_dir(&nested).expect("ensure dir again");
    }
}
