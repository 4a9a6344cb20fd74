// src/table/sequence.rs
use serde_json::Value;

use super::{cell_key, Record};
use crate::config::ColumnConfig;
use crate::error::{ChainRankError, Result};

/// Group identifier. Text and non-text cells never compare equal, so `"1"`
/// and `1` stay separate groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Text(String),
    /// Numbers and other scalars, keyed like item identifiers.
    Scalar(String),
}

impl GroupKey {
    fn from_cell(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            other => cell_key(other).map(Self::Scalar),
        }
    }
}

impl From<&str> for GroupKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for GroupKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One item occurrence inside a group (e.g. one product line of an order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRow {
    pub group: GroupKey,
    pub item: String,
}

/// Ordered occurrences. Row order within a group defines transition order;
/// rows of different groups may interleave.
#[derive(Debug, Clone, Default)]
pub struct SequenceTable {
    rows: Vec<SequenceRow>,
}

impl SequenceTable {
    #[must_use]
    pub fn new(rows: Vec<SequenceRow>) -> Self {
        Self { rows }
    }

    /// Convenience constructor from `(group, item)` pairs.
    #[must_use]
    pub fn from_pairs<G: Into<GroupKey>, I: Into<String>>(
        pairs: impl IntoIterator<Item = (G, I)>,
    ) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(group, item)| SequenceRow { group: group.into(), item: item.into() })
                .collect(),
        )
    }

    /// Parses upstream records, keeping their order.
    ///
    /// # Errors
    /// Returns error if any record lacks the group or item column (or holds `null`).
    pub fn from_records(records: &[Record], columns: &ColumnConfig) -> Result<Self> {
        let rows = records
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let group = required(record, row, &columns.group, GroupKey::from_cell)?;
                let item = required(record, row, &columns.item, cell_key)?;
                Ok(SequenceRow { group, item })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }

    #[must_use]
    pub fn rows(&self) -> &[SequenceRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn required<T>(
    record: &Record,
    row: usize,
    column: &str,
    key: impl Fn(&Value) -> Option<T>,
) -> Result<T> {
    record.get(column).and_then(key).ok_or_else(|| ChainRankError::MissingColumn {
        table: "sequence",
        row,
        column: column.to_string(),
    })
}
