//! Survey report types and terminal formatting.
//!
//! The survey report is the printable/serializable face of a corpus survey:
//! rendered as text via Display or as JSON via serde.

use serde::Serialize;
use std::fmt;

use crate::tagset::ReconciliationResult;

/// An immutable snapshot of corpus-level statistics.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CorpusStats {
    /// Number of document folders under the corpus root.
    pub total_document_folders: u64,
    /// Documents with an admin annotation file.
    pub annotated_documents: u64,
    /// Documents with only the pre-annotation file.
    pub unannotated_documents: u64,
    /// Sentences across all annotated documents.
    pub total_sentences: u64,
    /// Sentences containing at least one non-`O` label.
    pub sentences_with_entity: u64,
    /// `sentences_with_entity / total_sentences`, `0.0` on an empty corpus.
    pub entity_sentence_ratio: f64,
    /// Tokens across all annotated documents.
    pub total_tokens: u64,
    /// Distinct full BIO labels observed (table cardinality, not occurrences).
    pub num_entity_labels_bio: u64,
    /// Distinct entity types observed after BIO-prefix stripping.
    pub num_entity_types: u64,
    /// Mean sentence length in tokens, `0.0` when there are no sentences.
    pub average_sentence_length: f64,
}

/// A single label or entity type with its occurrence count.
#[derive(Clone, Debug, Serialize)]
pub struct LabelCount {
    /// The label or entity type name.
    pub label: String,
    /// Number of occurrences.
    pub count: u64,
}

/// The full survey report: stats, the entity-type histogram, and an
/// optional tagset reconciliation.
#[derive(Clone, Debug, Serialize)]
pub struct SurveyReport {
    /// Corpus-level statistics snapshot.
    pub stats: CorpusStats,
    /// How many top entity types the histogram shows.
    pub top_n: usize,
    /// Total distinct entity types in the corpus.
    pub total_distinct_types: usize,
    /// Top entity-type entries (sorted by count descending).
    pub top_types: Vec<LabelCount>,
    /// Sum of occurrence counts for types not in the top N.
    pub other_count: u64,
    /// Tagset reconciliation, present only when a tagset was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconciliation: Option<ReconciliationResult>,
    /// Display-only option for histogram rendering width.
    #[serde(skip)]
    pub(crate) bar_width: usize,
}

impl fmt::Display for SurveyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "╭───────────────────────────────────────────────────────────╮"
        )?;
        writeln!(
            f,
            "│                 📊  Corpus Survey Report                  │"
        )?;
        writeln!(
            f,
            "╰───────────────────────────────────────────────────────────╯"
        )?;
        writeln!(f)?;

        self.fmt_documents(f)?;
        writeln!(f)?;
        self.fmt_sentences(f)?;
        writeln!(f)?;
        self.fmt_types(f)?;

        if let Some(reconciliation) = &self.reconciliation {
            writeln!(f)?;
            fmt_reconciliation(f, reconciliation)?;
        }

        Ok(())
    }
}

impl SurveyReport {
    fn fmt_documents(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.stats;
        let unclassified = s
            .total_document_folders
            .saturating_sub(s.annotated_documents + s.unannotated_documents);

        writeln!(
            f,
            "┌─ Documents ───────────────────────────────────────────────┐"
        )?;
        writeln!(
            f,
            "│   Folders:       {:>8}                                 │",
            format_number(s.total_document_folders)
        )?;
        writeln!(
            f,
            "│   Annotated:     {:>8}  ({})                       │",
            format_number(s.annotated_documents),
            fmt_percent(s.annotated_documents, s.total_document_folders)
        )?;
        writeln!(
            f,
            "│   Unannotated:   {:>8}                                 │",
            format_number(s.unannotated_documents)
        )?;
        if unclassified > 0 {
            writeln!(
                f,
                "│   Unclassified:  {:>8}                                 │",
                format_number(unclassified)
            )?;
        }
        writeln!(
            f,
            "└───────────────────────────────────────────────────────────┘"
        )?;
        Ok(())
    }

    fn fmt_sentences(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.stats;

        writeln!(
            f,
            "┌─ Sentences & Tokens ──────────────────────────────────────┐"
        )?;
        writeln!(
            f,
            "│   Sentences:     {:>8}                                 │",
            format_number(s.total_sentences)
        )?;
        writeln!(
            f,
            "│   With entity:   {:>8}  (ratio {:.3})                  │",
            format_number(s.sentences_with_entity),
            s.entity_sentence_ratio
        )?;
        writeln!(
            f,
            "│   Tokens:        {:>8}                                 │",
            format_number(s.total_tokens)
        )?;
        writeln!(
            f,
            "│   Avg length:    {:>8.2} tokens                          │",
            s.average_sentence_length
        )?;
        writeln!(
            f,
            "│   BIO labels:    {:>8}                                 │",
            format_number(s.num_entity_labels_bio)
        )?;
        writeln!(
            f,
            "│   Entity types:  {:>8}                                 │",
            format_number(s.num_entity_types)
        )?;
        writeln!(
            f,
            "└───────────────────────────────────────────────────────────┘"
        )?;
        Ok(())
    }

    fn fmt_types(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = if self.total_distinct_types > self.top_n {
            format!("Entity Types (top {} of {})", self.top_n, self.total_distinct_types)
        } else {
            format!("Entity Types ({})", self.total_distinct_types)
        };

        writeln!(
            f,
            "┌─ {} {}┐",
            header,
            "─".repeat(57usize.saturating_sub(header.len()))
        )?;

        if self.top_types.is_empty() {
            writeln!(
                f,
                "│   No entity annotations found.                            │"
            )?;
        } else {
            let total: u64 = self.top_types.iter().map(|e| e.count).sum::<u64>() + self.other_count;
            let max_count = self.top_types.iter().map(|e| e.count).max().unwrap_or(1);

            for entry in &self.top_types {
                writeln!(
                    f,
                    "│   {:<16} {:>7} {:>5.1}%  {}│",
                    truncate_label(&entry.label, 16),
                    format_number(entry.count),
                    percent_of(entry.count, total),
                    pad_bar(
                        &render_bar(entry.count, max_count, self.bar_width),
                        self.bar_width
                    )
                )?;
            }

            if self.other_count > 0 {
                writeln!(
                    f,
                    "│   {:<16} {:>7} {:>5.1}%  {}│",
                    "(other)",
                    format_number(self.other_count),
                    percent_of(self.other_count, total),
                    pad_bar(
                        &render_bar(self.other_count, max_count, self.bar_width),
                        self.bar_width
                    )
                )?;
            }
        }

        writeln!(
            f,
            "└───────────────────────────────────────────────────────────┘"
        )?;
        Ok(())
    }
}

fn fmt_reconciliation(f: &mut fmt::Formatter<'_>, rec: &ReconciliationResult) -> fmt::Result {
    writeln!(
        f,
        "┌─ Tagset Reconciliation ───────────────────────────────────┐"
    )?;
    writeln!(
        f,
        "│   Unused in corpus:   {:>6}                              │",
        format_number(rec.unused_in_corpus.len() as u64)
    )?;
    for tag in &rec.unused_in_corpus {
        writeln!(f, "│     - {:<51} │", truncate_label(tag, 51))?;
    }
    writeln!(
        f,
        "│   Unknown vs tagset:  {:>6}                              │",
        format_number(rec.unknown_in_tagset.len() as u64)
    )?;
    for tag in &rec.unknown_in_tagset {
        writeln!(f, "│     - {:<51} │", truncate_label(tag, 51))?;
    }
    writeln!(
        f,
        "└───────────────────────────────────────────────────────────┘"
    )?;
    Ok(())
}

/// Format a number with thousands separators.
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a percentage, handling zero denominators.
fn fmt_percent(numerator: u64, denominator: u64) -> String {
    if denominator == 0 {
        "n/a".to_string()
    } else {
        format!("{:.1}%", (numerator as f64 / denominator as f64) * 100.0)
    }
}

fn percent_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64) * 100.0
    }
}

/// Render a horizontal bar using Unicode block characters.
fn render_bar(count: u64, max_count: u64, width: usize) -> String {
    if max_count == 0 || width == 0 {
        return String::new();
    }

    let filled = ((count as u128 * width as u128) / max_count as u128) as usize;
    let filled = filled.min(width);
    "█".repeat(filled) + &"░".repeat(width - filled)
}

/// Pad a bar string to ensure consistent column alignment.
fn pad_bar(bar: &str, width: usize) -> String {
    let visual_len = bar.chars().count();
    let padding = (width + 2).saturating_sub(visual_len);
    format!("{}{}", bar, " ".repeat(padding))
}

/// Truncate a label to fit in the display column.
fn truncate_label(label: &str, max_len: usize) -> String {
    if label.len() <= max_len {
        label.to_string()
    } else {
        format!("{}…", &label[..max_len - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_fmt_percent() {
        assert_eq!(fmt_percent(0, 0), "n/a");
        assert_eq!(fmt_percent(1, 2), "50.0%");
        assert_eq!(fmt_percent(1, 3), "33.3%");
    }

    #[test]
    fn test_render_bar() {
        assert_eq!(render_bar(5, 10, 10), "█████░░░░░");
        assert_eq!(render_bar(10, 10, 10), "██████████");
        assert_eq!(render_bar(0, 10, 10), "░░░░░░░░░░");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 10), "short");
        assert_eq!(truncate_label("verylonglabel", 10), "verylongl…");
    }
}
