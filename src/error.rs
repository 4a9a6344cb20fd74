// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainRankError {
    #[error("{table} table row {row} is missing required column `{column}`")]
    MissingColumn {
        table: &'static str,
        row: usize,
        column: String,
    },

    #[error("index table row {row}: `{value}` is not a non-negative integer index")]
    InvalidIndexValue { row: usize, value: String },

    #[error("index table assigns index {index} more than once")]
    DuplicateIndex { index: usize },

    #[error("index table lists item `{item}` more than once")]
    DuplicateItem { item: String },

    #[error("index table is not dense: expected indices 0..{expected}, found index {found}")]
    IndexNotDense { expected: usize, found: usize },

    #[error("index table row {row}: column `{column}` would be overwritten by the rank table")]
    ReservedColumn { row: usize, column: String },

    #[error("sequence table row {row}: item `{item}` has no entry in the index table")]
    UnknownItem { row: usize, item: String },

    #[error("index {index} is out of range for a graph of {n} items")]
    IndexOutOfRange { index: usize, n: usize },

    #[error("dimension mismatch for {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("source index {source_index} has zero outdegree")]
    ZeroOutdegree { source_index: usize },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ChainRankError {
    /// True when the error stems from malformed input tables rather than the environment.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn { .. }
                | Self::InvalidIndexValue { .. }
                | Self::DuplicateIndex { .. }
                | Self::DuplicateItem { .. }
                | Self::IndexNotDense { .. }
                | Self::ReservedColumn { .. }
                | Self::UnknownItem { .. }
                | Self::IndexOutOfRange { .. }
                | Self::DimensionMismatch { .. }
                | Self::Json(_)
                | Self::TomlDe(_)
                | Self::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ChainRankError>;

// Allow `?` on std::io::Error by converting to ChainRankError::Io with unknown path.
impl From<std::io::Error> for ChainRankError {
    fn from(source: std::io::Error) -> Self {
        ChainRankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
