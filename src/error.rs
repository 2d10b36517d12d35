//! Domain error type shared by the library modules.
//!
//! Command handlers wrap these in `anyhow` with context; library code returns
//! them directly so callers can match on the failure kind.

use std::path::PathBuf;

pub type Result<T, E = CorpusError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError
{
    #[error("unsupported file format '{extension}' for {}", path.display())]
    UnsupportedFormat
    {
        path: PathBuf,
        extension: String,
    },

    #[error("unknown training format '{0}' (expected llama, chatml, openai or alpaca)")]
    UnknownTrainingFormat(String),

    #[error("unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("tier must be between 1 and 8, got {0}")]
    UnknownTier(i64),

    #[error("unknown acquisition status: {0}")]
    UnknownStatus(String),

    #[error("unknown source format: {0}")]
    UnknownSourceFormat(String),

    #[error("unknown segment type: {0}")]
    UnknownSegmentType(String),

    #[error("source {0} not found")]
    SourceNotFound(i64),

    #[error("segment {0} not found")]
    SegmentNotFound(i64),

    #[error("cannot link segments {a} and {b}: {reason}")]
    InvalidLink
    {
        a: i64,
        b: i64,
        reason: String,
    },

    #[error("invalid sampler settings: {0}")]
    InvalidSampler(String),

    #[error("classification failed: {0}")]
    Classification(String),

    #[error("storage error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
