//! Nerstat: corpus statistics and tagset auditing for BIO-annotated NER
//! corpora.
//!
//! Nerstat walks a corpus of per-document annotation folders, parses the
//! finalized CoNLL files, and produces corpus-level statistics plus a
//! reconciliation of observed entity types against a canonical tagset.
//!
//! # Modules
//!
//! - [`conll`]: BIO-tagged annotation file parsing
//! - [`corpus`]: document enumeration and statistics aggregation
//! - [`tagset`]: canonical tagset loading, grouping, and reconciliation
//! - [`export`]: results-directory writers (JSON, CSV, tag lists)
//! - [`error`]: error types for nerstat operations

pub mod conll;
pub mod corpus;
pub mod error;
pub mod export;
pub mod tagset;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

pub use error::NerstatError;

use corpus::CorpusSurvey;
use tagset::ReconciliationResult;

/// The nerstat CLI application.
#[derive(Parser)]
#[command(name = "nerstat")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Survey a corpus and print the statistics report.
    Stats(StatsArgs),
    /// Survey a corpus and write result files to a directory.
    Export(ExportArgs),
    /// Load a tagset definition and print its prefix groups.
    Tagset(TagsetArgs),
}

/// Arguments for the stats subcommand.
#[derive(clap::Args)]
struct StatsArgs {
    /// Corpus root containing one folder per document.
    root: PathBuf,

    /// Tagset definition file to reconcile against.
    #[arg(long)]
    tagset: Option<PathBuf>,

    /// Number of top entity types to show in the histogram.
    #[arg(long, default_value_t = 20)]
    top: usize,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the export subcommand.
#[derive(clap::Args)]
struct ExportArgs {
    /// Corpus root containing one folder per document.
    root: PathBuf,

    /// Directory where result files are written.
    #[arg(long, default_value = "results")]
    results_dir: PathBuf,

    /// Tagset definition file to reconcile against.
    #[arg(long)]
    tagset: Option<PathBuf>,
}

/// Arguments for the tagset subcommand.
#[derive(clap::Args)]
struct TagsetArgs {
    /// Tagset definition file.
    path: PathBuf,

    /// Output format for the groups ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the nerstat CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), NerstatError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Stats(args)) => run_stats(args),
        Some(Commands::Export(args)) => run_export(args),
        Some(Commands::Tagset(args)) => run_tagset(args),
        None => {
            println!("nerstat {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Corpus statistics and tagset auditing for BIO-annotated NER corpora.");
            println!();
            println!("Run 'nerstat --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the stats subcommand.
fn run_stats(args: StatsArgs) -> Result<(), NerstatError> {
    let survey = corpus::survey_corpus(&args.root)?;
    let reconciliation = reconcile_if_present(args.tagset.as_deref(), &survey)?;

    let opts = corpus::ReportOptions {
        top_types: args.top,
        ..Default::default()
    };
    let report = corpus::survey_report(&survey, &opts, reconciliation);

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "text" => print!("{}", report),
        other => return Err(NerstatError::UnsupportedFormat(other.to_string())),
    }

    Ok(())
}

/// Execute the export subcommand.
fn run_export(args: ExportArgs) -> Result<(), NerstatError> {
    let survey = corpus::survey_corpus(&args.root)?;

    export::ensure_dir(&args.results_dir)?;

    let stats_path = args.results_dir.join(export::STATS_JSON);
    let label_path = args.results_dir.join(export::LABEL_COUNTS_CSV);
    let type_path = args.results_dir.join(export::TYPE_COUNTS_CSV);
    let lengths_path = args.results_dir.join(export::SENTENCE_LENGTHS_CSV);

    export::write_stats_json(&stats_path, &survey.stats)?;
    export::write_counts_csv(&label_path, &survey.label_counts, "label")?;
    export::write_counts_csv(&type_path, &survey.type_counts, "entity_type")?;
    export::write_lengths_csv(&lengths_path, &survey.sentence_lengths)?;

    println!("Wrote {}", stats_path.display());
    println!("Wrote {}", label_path.display());
    println!("Wrote {}", type_path.display());
    println!("Wrote {}", lengths_path.display());

    if let Some(reconciliation) = reconcile_if_present(args.tagset.as_deref(), &survey)? {
        let unused_path = args.results_dir.join(export::UNUSED_TAGS_FILE);
        let unknown_path = args.results_dir.join(export::UNKNOWN_TYPES_FILE);

        export::write_tag_list(&unused_path, &reconciliation.unused_in_corpus)?;
        export::write_tag_list(&unknown_path, &reconciliation.unknown_in_tagset)?;

        println!("Wrote {}", unused_path.display());
        println!("Wrote {}", unknown_path.display());
        print!("{}", reconciliation);
    }

    let stats = &survey.stats;
    println!();
    println!(
        "Surveyed {} document folder(s): {} annotated, {} unannotated.",
        stats.total_document_folders, stats.annotated_documents, stats.unannotated_documents
    );
    println!(
        "{} sentence(s), {} token(s), {} entity type(s).",
        stats.total_sentences, stats.total_tokens, stats.num_entity_types
    );

    Ok(())
}

/// Execute the tagset subcommand.
fn run_tagset(args: TagsetArgs) -> Result<(), NerstatError> {
    let tags = tagset::load_tagset(&args.path)?;
    let groups = tagset::group_by_prefix(&tags);

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&groups)?),
        "text" => {
            println!("{} tag(s) in {} group(s)", tags.len(), groups.len());
            for (prefix, members) in &groups {
                println!();
                println!("{} ({})", prefix, members.len());
                for tag in members {
                    println!("  - {}", tag);
                }
            }
        }
        other => return Err(NerstatError::UnsupportedFormat(other.to_string())),
    }

    Ok(())
}

/// Load and reconcile the tagset when one was requested.
///
/// A `--tagset` path that does not exist is a warning, not an error; the
/// reconciliation is simply skipped.
fn reconcile_if_present(
    tagset_path: Option<&Path>,
    survey: &CorpusSurvey,
) -> Result<Option<ReconciliationResult>, NerstatError> {
    let Some(path) = tagset_path else {
        return Ok(None);
    };

    if !path.exists() {
        eprintln!(
            "warning: tagset file {} not found, skipping reconciliation",
            path.display()
        );
        return Ok(None);
    }

    let tags = tagset::load_tagset(path)?;
    Ok(Some(tagset::reconcile(&tags, &survey.observed_types())))
}
