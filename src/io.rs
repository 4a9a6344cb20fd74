// src/io.rs
//! JSON handoff with the upstream ETL layer.
//!
//! Input tables are JSON arrays of flat objects; the rank table is written
//! back in the same shape.

use std::fs;
use std::path::Path;

use crate::error::{ChainRankError, Result};
use crate::graph::RankRecord;
use crate::table::Record;

/// Reads a JSON array of records.
///
/// # Errors
/// Returns error if the file cannot be read or is not an array of objects.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path).map_err(|source| io_error(source, path))?;
    let records: Vec<Record> = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), records = records.len(), "read records");
    Ok(records)
}

/// Serializes the rank table as a pretty JSON array.
///
/// # Errors
/// Returns error if serialization fails.
pub fn rank_table_json(ranks: &[RankRecord], item_column: &str) -> Result<String> {
    let rows: Vec<Record> = ranks.iter().map(|r| r.to_record(item_column)).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Writes the rank table to `path`.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn write_rank_table(path: &Path, ranks: &[RankRecord], item_column: &str) -> Result<()> {
    let json = rank_table_json(ranks, item_column)?;
    fs::write(path, json).map_err(|source| io_error(source, path))?;
    tracing::debug!(path = %path.display(), rows = ranks.len(), "wrote rank table");
    Ok(())
}

fn io_error(source: std::io::Error, path: &Path) -> ChainRankError {
    ChainRankError::Io { source, path: path.to_path_buf() }
}
