//! Corpus enumeration and statistics aggregation.
//!
//! A corpus is a root directory with one subdirectory per document. Each
//! document folder may contain `admin.conll` (the finalized annotation,
//! the only file used for statistics) and/or `INITIAL_CAS.conll` (the
//! pre-annotation placeholder). Documents are processed in lexicographic
//! name order so that every run over the same tree produces byte-identical
//! output.

mod report;

pub use report::{CorpusStats, LabelCount, SurveyReport};

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::conll::{self, read_conll_file};
use crate::error::NerstatError;
use crate::tagset::ReconciliationResult;

/// File name of the finalized annotation inside a document folder.
pub const ADMIN_FILE: &str = "admin.conll";

/// File name of the pre-annotation placeholder inside a document folder.
pub const INITIAL_CAS_FILE: &str = "INITIAL_CAS.conll";

/// Annotation state of a document folder, decided by file presence alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentStatus {
    /// The folder holds an admin annotation file.
    Annotated,
    /// No admin file, but the pre-annotation file is present.
    Unannotated,
    /// Neither recognized file is present.
    Absent,
}

/// One document folder under the corpus root.
#[derive(Clone, Debug)]
pub struct DocumentEntry {
    /// Folder name, used as the document identifier.
    pub name: String,
    /// Absolute or root-relative path to the folder.
    pub path: PathBuf,
    /// Annotation state, computed once at scan time.
    pub status: DocumentStatus,
}

/// The full result bundle of a corpus survey.
#[derive(Clone, Debug, Default)]
pub struct CorpusSurvey {
    /// Corpus-level statistics snapshot.
    pub stats: CorpusStats,
    /// Occurrences per full BIO label (`B-PERSON`, `I-PERSON`, ...).
    pub label_counts: BTreeMap<String, u64>,
    /// Occurrences per entity type (BIO prefix stripped).
    pub type_counts: BTreeMap<String, u64>,
    /// Token count of every sentence, in processing order. Exposed for
    /// histogram consumers.
    pub sentence_lengths: Vec<usize>,
}

impl CorpusSurvey {
    /// The set of entity types observed in the corpus.
    pub fn observed_types(&self) -> BTreeSet<String> {
        self.type_counts.keys().cloned().collect()
    }
}

/// Options for building a [`SurveyReport`].
#[derive(Clone, Debug)]
pub struct ReportOptions {
    /// Number of top entity types to show in the histogram.
    pub top_types: usize,
    /// Width of histogram bars (in characters).
    pub bar_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_types: 20,
            bar_width: 20,
        }
    }
}

/// Lists the document folders under the corpus root.
///
/// Only immediate subdirectories are considered, sorted lexicographically
/// by name. Each entry's status is classified once, here.
///
/// # Errors
/// Fails if the root itself cannot be listed.
pub fn scan_documents(root: &Path) -> Result<Vec<DocumentEntry>, NerstatError> {
    let mut documents = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| NerstatError::CorpusList {
            path: root.to_path_buf(),
            source: source.into(),
        })?;

        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path().to_path_buf();
        let status = classify_document(&path);

        documents.push(DocumentEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            status,
        });
    }

    Ok(documents)
}

/// Classifies a document folder by probing for its recognized files.
fn classify_document(dir: &Path) -> DocumentStatus {
    if dir.join(ADMIN_FILE).is_file() {
        DocumentStatus::Annotated
    } else if dir.join(INITIAL_CAS_FILE).is_file() {
        DocumentStatus::Unannotated
    } else {
        DocumentStatus::Absent
    }
}

/// Surveys the corpus under `root`.
///
/// Every annotated document's admin file is parsed and folded into the
/// corpus-wide counters. Unannotated and absent documents are counted but
/// contribute nothing to the statistics.
///
/// # Errors
/// Fails if the root cannot be listed or an admin file that was present at
/// scan time cannot be read.
pub fn survey_corpus(root: &Path) -> Result<CorpusSurvey, NerstatError> {
    let documents = scan_documents(root)?;

    let mut annotated_documents = 0u64;
    let mut unannotated_documents = 0u64;
    let mut total_sentences = 0u64;
    let mut sentences_with_entity = 0u64;
    let mut total_tokens = 0u64;

    let mut label_counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut type_counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut sentence_lengths: Vec<usize> = Vec::new();

    for document in &documents {
        match document.status {
            DocumentStatus::Annotated => annotated_documents += 1,
            DocumentStatus::Unannotated => {
                unannotated_documents += 1;
                continue;
            }
            DocumentStatus::Absent => continue,
        }

        let sentences = read_conll_file(&document.path.join(ADMIN_FILE))?;
        total_sentences += sentences.len() as u64;

        for sentence in &sentences {
            sentence_lengths.push(sentence.len());
            let mut has_entity = false;

            for token in sentence {
                total_tokens += 1;
                if token.label != conll::OUTSIDE {
                    has_entity = true;
                    *label_counts.entry(token.label.clone()).or_insert(0) += 1;
                    *type_counts
                        .entry(conll::entity_type(&token.label).to_string())
                        .or_insert(0) += 1;
                }
            }

            if has_entity {
                sentences_with_entity += 1;
            }
        }
    }

    let entity_sentence_ratio = if total_sentences > 0 {
        sentences_with_entity as f64 / total_sentences as f64
    } else {
        0.0
    };
    let average_sentence_length = if sentence_lengths.is_empty() {
        0.0
    } else {
        sentence_lengths.iter().sum::<usize>() as f64 / sentence_lengths.len() as f64
    };

    let stats = CorpusStats {
        total_document_folders: documents.len() as u64,
        annotated_documents,
        unannotated_documents,
        total_sentences,
        sentences_with_entity,
        entity_sentence_ratio,
        total_tokens,
        num_entity_labels_bio: label_counts.len() as u64,
        num_entity_types: type_counts.len() as u64,
        average_sentence_length,
    };

    Ok(CorpusSurvey {
        stats,
        label_counts,
        type_counts,
        sentence_lengths,
    })
}

/// Flattens a frequency table into entries sorted by count descending,
/// name ascending.
pub fn sorted_counts(counts: &BTreeMap<String, u64>) -> Vec<LabelCount> {
    let mut entries: Vec<LabelCount> = counts
        .iter()
        .map(|(label, count)| LabelCount {
            label: label.clone(),
            count: *count,
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    entries
}

/// Builds a printable report from a survey.
pub fn survey_report(
    survey: &CorpusSurvey,
    opts: &ReportOptions,
    reconciliation: Option<ReconciliationResult>,
) -> SurveyReport {
    let sorted = sorted_counts(&survey.type_counts);
    let total_distinct_types = sorted.len();

    let (top_entries, rest): (Vec<_>, Vec<_>) = sorted
        .into_iter()
        .enumerate()
        .partition(|(i, _)| *i < opts.top_types);

    let top_types: Vec<LabelCount> = top_entries.into_iter().map(|(_, entry)| entry).collect();
    let other_count: u64 = rest.into_iter().map(|(_, entry)| entry.count).sum();

    SurveyReport {
        stats: survey.stats.clone(),
        top_n: opts.top_types,
        total_distinct_types,
        top_types,
        other_count,
        reconciliation,
        bar_width: opts.bar_width,
    }
}
