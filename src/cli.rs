use clap::{Args, Parser, Subcommand, ValueEnum};
use owo_colors::{OwoColorize, Style};
use std::path::PathBuf;

use crate::core::formatter::TrainingFormat;
use crate::core::model::AcquisitionStatus;
use crate::core::validation::Category;
use crate::infra::config::TaggerKind;

/// Shared application context for global flags
#[derive(Clone, Debug)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
    pub dry_run: bool,  // global --dry-run
}

impl AppContext {
    /// Apply `style` unless --no-color was given.
    pub fn paint(&self, text: impl std::fmt::Display, style: Style) -> String {
        if self.no_color {
            text.to_string()
        } else {
            text.style(style).to_string()
        }
    }
}

#[derive(Parser)]
#[command(name = "cantor")]
#[command(
    about = "Build, annotate and evaluate a tier-weighted training corpus of Georg Cantor's writings"
)]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress progress bars and non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Show what would be done without writing anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Configuration file (default: first of cantor.toml, .cantor.toml, cantor.yaml, cantor.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog database, overriding the configured db_path
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Source catalog management
    Db(DbArgs),

    /// Turn acquired sources into segments
    Process(ProcessArgs),

    /// Classify segments along the five dimensions
    Annotate(AnnotateArgs),

    /// Build weighted training data
    Training(TrainingArgs),

    /// Seed, segment, tag, generate and build in one run
    Pipeline(PipelineArgs),

    /// Validation bank and response scoring
    Eval(EvalArgs),

    /// Initialize a cantor.toml config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct DbArgs {
    #[command(subcommand)]
    pub command: DbCommand,
}

#[derive(Subcommand)]
pub enum DbCommand {
    /// Create the schema and seed the source catalog
    Init {
        /// Add missing seed sources even when the catalog is not empty
        #[arg(long)]
        force: bool,
    },

    /// Source counts by tier and acquisition status
    Status {
        #[arg(long)]
        json: bool,
    },

    /// List cataloged sources
    List {
        /// Only sources of this tier (1-8)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
        tier: Option<u8>,

        /// Only sources with this acquisition status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,

        #[arg(long)]
        json: bool,
    },

    /// Change a source's acquisition status or attach its local file
    Mark {
        /// Source id
        id: i64,

        /// New status (ignored when --file is given, which implies acquired)
        #[arg(value_enum, required_unless_present = "file")]
        status: Option<StatusArg>,

        /// Local file holding the source text
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

/// Command-line spelling of an acquisition status.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Pending,
    Available,
    Acquired,
    Processed,
    Excluded,
}

impl From<StatusArg> for AcquisitionStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pending => AcquisitionStatus::Pending,
            StatusArg::Available => AcquisitionStatus::Available,
            StatusArg::Acquired => AcquisitionStatus::Acquired,
            StatusArg::Processed => AcquisitionStatus::Processed,
            StatusArg::Excluded => AcquisitionStatus::Excluded,
        }
    }
}

#[derive(Args)]
pub struct ProcessArgs {
    #[command(subcommand)]
    pub command: ProcessCommand,
}

#[derive(Subcommand)]
pub enum ProcessCommand {
    /// Extract, segment and store a source file (or every supported file in a directory)
    Segment {
        /// File or directory to process
        path: PathBuf,

        /// Catalog id of the source the text belongs to
        #[arg(long)]
        source_id: i64,

        /// Format hint: letter, collection, paper, article, book or biography (default: the source's format)
        #[arg(long)]
        format_hint: Option<String>,

        /// Language code recorded on the segments (default: the source's language)
        #[arg(long)]
        language: Option<String>,

        /// Add to a source that already has segments, continuing its orderings
        #[arg(long)]
        append: bool,
    },

    /// List parallel-text candidates, or link one explicit pair
    Link {
        /// Link ORIGINAL and TRANSLATION instead of listing candidates
        #[arg(long, num_args = 2, value_names = ["ORIGINAL", "TRANSLATION"])]
        apply: Option<Vec<i64>>,
    },

    /// Record a discrepancy between an original and its translation
    Flag {
        original: i64,
        translation: i64,

        /// What the translation gets wrong
        #[arg(long)]
        note: String,
    },
}

#[derive(Args)]
pub struct AnnotateArgs {
    #[command(subcommand)]
    pub command: AnnotateCommand,
}

#[derive(Subcommand)]
pub enum AnnotateCommand {
    /// Tag every segment that has no annotation yet
    Tag {
        /// Tagger to use (default: tagger.kind from config)
        #[arg(long, value_enum)]
        tagger: Option<TaggerKind>,
    },

    /// Show the lowest-confidence automatic annotations
    Review {
        #[arg(long, default_value = "20")]
        limit: usize,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct TrainingArgs {
    #[command(subcommand)]
    pub command: TrainingCommand,
}

#[derive(Subcommand)]
pub enum TrainingCommand {
    /// Sample, split and write JSONL training files
    Build(BuildArgs),

    /// Write the hand-written dialogues, raw and formatted
    Synthetic(GenerateArgs),

    /// Write the misconception/correction pairs, raw and formatted
    Negative(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output format (default: training.format from config)
    #[arg(long, value_enum)]
    pub format: Option<TrainingFormat>,

    /// Output directory (default: <data_dir>/training)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PipelineArgs {
    /// Output format (default: training.format from config)
    #[arg(long, value_enum)]
    pub format: Option<TrainingFormat>,

    /// Output directory (default: <data_dir>/training)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Output format (default: training.format from config)
    #[arg(long, value_enum)]
    pub format: Option<TrainingFormat>,

    /// Tier-1 replication factor
    #[arg(long)]
    pub oversample: Option<f64>,

    /// Validation fraction per tier
    #[arg(long)]
    pub val_ratio: Option<f64>,

    /// Shuffle seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cap on copies for tiers 2-6
    #[arg(long)]
    pub max_copies: Option<u32>,

    /// Output directory (default: <data_dir>/training)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct EvalArgs {
    #[command(subcommand)]
    pub command: EvalCommand,
}

#[derive(Subcommand)]
pub enum EvalCommand {
    /// List validation questions
    Questions {
        #[arg(long, value_enum)]
        category: Option<Category>,
    },

    /// Write the validation bank as validation_set.jsonl
    ExportQuestions {
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Score model responses against the validation bank
    Run {
        /// JSONL file of {"question_id", "response"} lines
        #[arg(long)]
        responses: PathBuf,

        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Consistency of repeated answers to one question
    Consistency {
        /// JSONL file of {"response"} lines
        #[arg(long)]
        responses: PathBuf,
    },
}

#[derive(Parser)]
pub struct InitArgs {
    /// Directory to initialize config in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Output directory; if omitted and --stdout not set, prints error
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Print completion script to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}
