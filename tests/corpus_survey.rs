//! End-to-end library tests: survey a corpus on disk, build the report,
//! reconcile against a tagset.

use std::fs;
use std::path::Path;

use nerstat::corpus::{self, ReportOptions};
use nerstat::tagset;

fn write_doc(root: &Path, name: &str, files: &[(&str, &str)]) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).expect("create document dir");
    for (file, content) in files {
        fs::write(dir.join(file), content).expect("write document file");
    }
}

#[test]
fn survey_over_mixed_corpus() {
    let temp = tempfile::tempdir().expect("create temp dir");

    // Annotated document with a malformed line and an extra middle column.
    write_doc(
        temp.path(),
        "doc-01",
        &[(
            "admin.conll",
            "Ali NNP B-PERSON\nYilmaz NNP I-PERSON\nstray\ngeldi _ O\n\n\
             Ankara B-LOC_CITY\nve O\nIstanbul B-LOC_CITY\n",
        )],
    );
    // Annotated but entity-free.
    write_doc(temp.path(), "doc-02", &[("admin.conll", "sadece O\nkelime O\n")]);
    // Pre-annotation only.
    write_doc(temp.path(), "doc-03", &[("INITIAL_CAS.conll", "x O\n")]);
    // Neither recognized file.
    write_doc(temp.path(), "doc-04", &[("notes.txt", "n/a")]);

    let survey = corpus::survey_corpus(temp.path()).expect("survey corpus");
    let stats = &survey.stats;

    assert_eq!(stats.total_document_folders, 4);
    assert_eq!(stats.annotated_documents, 2);
    assert_eq!(stats.unannotated_documents, 1);
    assert_eq!(stats.total_sentences, 3);
    assert_eq!(stats.sentences_with_entity, 2);
    // "stray" has a single column and must not count as a token.
    assert_eq!(stats.total_tokens, 8);
    assert_eq!(stats.num_entity_labels_bio, 3); // B-PERSON, I-PERSON, B-LOC_CITY
    assert_eq!(stats.num_entity_types, 2); // PERSON, LOC_CITY

    assert!(stats.entity_sentence_ratio >= 0.0 && stats.entity_sentence_ratio <= 1.0);
    assert!(stats.num_entity_labels_bio >= stats.num_entity_types);

    assert_eq!(survey.label_counts["B-LOC_CITY"], 2);
    assert_eq!(survey.type_counts["PERSON"], 2);
    assert_eq!(survey.type_counts["LOC_CITY"], 2);
    assert_eq!(survey.sentence_lengths, vec![3, 3, 2]);
}

#[test]
fn survey_report_and_reconciliation_pipeline() {
    let temp = tempfile::tempdir().expect("create temp dir");
    write_doc(
        temp.path(),
        "doc-a",
        &[("admin.conll", "Ali B-PERSON\n\nAnkara B-LOC_CITY\n\nGPE B-GPE\n")],
    );

    let tagset_path = temp.path().join("tagset.csv");
    fs::write(
        &tagset_path,
        "Named Entity tags,Named Entity annotation\nPERSON,\nLOC_CITY,\nORG,\n",
    )
    .expect("write tagset");

    let survey = corpus::survey_corpus(temp.path()).expect("survey corpus");
    let tags = tagset::load_tagset(&tagset_path).expect("load tagset");
    let reconciliation = tagset::reconcile(&tags, &survey.observed_types());

    assert_eq!(reconciliation.unused_in_corpus, vec!["ORG".to_string()]);
    assert_eq!(reconciliation.unknown_in_tagset, vec!["GPE".to_string()]);

    let report = corpus::survey_report(
        &survey,
        &ReportOptions::default(),
        Some(reconciliation),
    );

    let rendered = format!("{}", report);
    assert!(rendered.contains("Tagset Reconciliation"));
    assert!(rendered.contains("GPE"));

    let json = serde_json::to_string_pretty(&report).expect("serialize report");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("parse report json");
    assert_eq!(parsed["reconciliation"]["unused_in_corpus"][0], "ORG");
    assert_eq!(parsed["stats"]["num_entity_types"], 3);
}

#[test]
fn empty_root_produces_all_zero_report() {
    let temp = tempfile::tempdir().expect("create temp dir");

    let survey = corpus::survey_corpus(temp.path()).expect("survey corpus");
    let report = corpus::survey_report(&survey, &ReportOptions::default(), None);

    assert_eq!(report.stats.total_sentences, 0);
    assert_eq!(report.stats.entity_sentence_ratio, 0.0);
    assert_eq!(report.stats.average_sentence_length, 0.0);
    assert!(report.top_types.is_empty());

    // Rendering an empty report must not panic or divide by zero.
    let rendered = format!("{}", report);
    assert!(rendered.contains("No entity annotations found"));
}
