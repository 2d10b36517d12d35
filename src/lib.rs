//! **cantor** - corpus pipeline for a Georg Cantor language model
//!
//! Catalogs sources by trust tier, segments them into letters, sections and
//! chapters, annotates segments along five fixed dimensions, samples a
//! tier-weighted training set and scores model answers against a validation bank.

/// Command-line interface with clap integration
pub mod cli;

/// Subcommand handlers
pub mod cli_ext {
    /// Catalog creation, seeding and listing
    pub mod db_cmd;

    /// Segmentation and parallel-text linking
    pub mod process_cmd;

    /// Batch tagging and the review queue
    pub mod annotate_cmd;

    /// Training data export and generated dialogues
    pub mod training_cmd;

    /// Every stage in order, from seeding to training files
    pub mod pipeline_cmd;

    /// Validation bank and scoring
    pub mod eval_cmd;
}

/// Shell completion generation
pub mod completion;

/// Domain error type
pub mod error;
pub use error::{CorpusError, Result};

/// Corpus pipeline - pure logic over in-memory records
pub mod core {
    /// Dimension, subtag and math-topic vocabularies with tagger keywords
    pub mod vocabulary;
    pub use vocabulary::Dimension;

    /// Sources, segments, tiers and their closed enumerations
    pub mod model;
    pub use model::{AcquisitionStatus, Segment, SegmentType, Source, SourceFormat, Tier};

    /// Letter, paper and chapter splitting
    pub mod segment;
    pub use segment::{Segmenter, Splitter, segment};

    /// Annotations and the accumulating validator
    pub mod schema;
    pub use schema::{AnnotationRow, SegmentAnnotation, confidence_from_tier, validate};

    /// Rule-based and assisted taggers plus the batch driver
    pub mod tagger;
    pub use tagger::{AssistedTagger, ClassificationClient, RuleBasedTagger, Tagger, tag_all_segments};

    /// Original/translation pairing and discrepancy flags
    pub mod parallel;

    /// Tier-weighted replication and stratified splitting
    pub mod sampler;
    pub use sampler::{Split, TrainingPoolEntry, WeightedSampler, WeightedSegment, split_train_val};

    /// Chat and instruction record formats
    pub mod formatter;
    pub use formatter::{Formatter, TrainingFormat, TrainingRecord, export_training_data};

    /// Misconception/correction pairs
    pub mod contrastive;
    pub use contrastive::{ContrastiveExample, all_contrastive};

    /// Hand-written dialogues in the persona's voice
    pub mod synthetic;
    pub use synthetic::{SyntheticExample, all_synthetic};

    /// Validation question bank
    pub mod validation;

    /// Response scoring and reports
    pub mod evaluate;
    pub use evaluate::{EvaluationReport, run_evaluation};
}

/// Infrastructure - configuration, storage, files and the classification service
pub mod infra {
    /// Configuration from cantor.toml and CANTOR__ environment overrides
    pub mod config;
    pub use config::{Config, init as config_init, load_config};

    /// SQLite catalog behind the CatalogStore trait
    pub mod store;
    pub use store::{CatalogStore, SqliteStore};

    /// Seed catalog of known sources
    pub mod seed;

    /// File reading (memory-mapped above 1 MiB) and text extraction
    pub mod io;
    pub use io::{TextExtractor, extract_text, read_file_smart};

    /// Gitignore-aware discovery of source files
    pub mod walk;
    pub use walk::SourceWalker;

    /// OpenAI-compatible classification client
    pub mod classifier;
    pub use classifier::OpenAiClassifier;
}

pub use cli::{AppContext, Cli, Commands};
pub use infra::{CatalogStore, Config, SqliteStore, load_config};
