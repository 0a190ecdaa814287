use std::path::PathBuf;
use thiserror::Error;

/// The main error type for nerstat operations.
#[derive(Debug, Error)]
pub enum NerstatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to list corpus root {path}: {source}")]
    CorpusList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read annotation file {path}: {source}")]
    ConllRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read tagset file {path}: {source}")]
    TagsetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write stats JSON to {path}: {source}")]
    StatsJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write counts CSV to {path}: {source}")]
    CountsCsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to serialize report to JSON: {0}")]
    ReportJson(#[from] serde_json::Error),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}
