// src/table/mod.rs
//! Tabular inputs handed over by the upstream collaborator.
//!
//! Both tables arrive as flat JSON-like records. Item identifiers may be
//! strings or integers upstream; they are normalised to one string key so
//! the two tables join regardless of how each column was typed. The
//! original cell is kept for output. Group identifiers are not joined
//! against anything and keep their type: `1` and `"1"` are different groups.

pub mod index;
pub mod sequence;

pub use index::{IndexEntry, IndexTable};
pub use sequence::{GroupKey, SequenceRow, SequenceTable};

use serde_json::Value;

/// One row of an input table.
pub type Record = serde_json::Map<String, Value>;

/// Columns the rank table computes itself; index-table attributes may not reuse them.
pub const RANK_COLUMNS: [&str; 3] = ["index", "mass", "rank"];

/// Normalises a cell into the string key used for joins. `null` is missing.
#[must_use]
pub fn cell_key(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_key(n)),
        other => Some(other.to_string()),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn number_key(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        // Integral floats (e.g. `7.0` from a float-typed column) key like `7`.
        Some(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}
