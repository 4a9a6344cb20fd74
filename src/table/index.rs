// src/table/index.rs
//! The item index table: a bijection between item identifiers and dense
//! integer positions `0..n-1`.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use super::{cell_key, Record, RANK_COLUMNS};
use crate::config::ColumnConfig;
use crate::error::{ChainRankError, Result};

/// One item with its dense index and any extra columns it was supplied with.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    /// Normalised join key.
    pub item: String,
    /// The item cell as supplied, written back to the rank table.
    pub raw_item: Value,
    pub index: usize,
    pub attributes: BTreeMap<String, Value>,
}

/// Validated index table. Entries are stored by position, so `entries[i].index == i`.
#[derive(Debug, Clone, Default)]
pub struct IndexTable {
    entries: Vec<IndexEntry>,
    lookup: HashMap<String, usize>,
}

impl IndexTable {
    /// Builds the table from `(item, index)` pairs with no extra columns.
    ///
    /// # Errors
    /// Same preconditions as [`IndexTable::from_entries`].
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, usize)>) -> Result<Self> {
        Self::from_entries(pairs.into_iter().map(|(item, index)| {
            let item = item.into();
            IndexEntry {
                raw_item: Value::String(item.clone()),
                item,
                index,
                attributes: BTreeMap::new(),
            }
        }))
    }

    /// Parses upstream records; every column besides the item and index
    /// columns is kept as an attribute and joined back onto the rank table.
    ///
    /// # Errors
    /// Returns error if a record lacks a required column, carries a
    /// non-integer index, has an extra column named like a computed rank
    /// column, or the resulting table is not dense and bijective.
    pub fn from_records(records: &[Record], columns: &ColumnConfig) -> Result<Self> {
        let mut entries = Vec::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            let raw_item = record
                .get(&columns.item)
                .filter(|v| !v.is_null())
                .ok_or_else(|| missing(row, &columns.item))?;
            let item = cell_key(raw_item).ok_or_else(|| missing(row, &columns.item))?;
            let raw_index = record
                .get(&columns.index)
                .filter(|v| !v.is_null())
                .ok_or_else(|| missing(row, &columns.index))?;
            let index = parse_index(raw_index).ok_or_else(|| ChainRankError::InvalidIndexValue {
                row,
                value: raw_index.to_string(),
            })?;
            let attributes: BTreeMap<String, Value> = record
                .iter()
                .filter(|(k, _)| **k != columns.item && **k != columns.index)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            if let Some(column) = attributes.keys().find(|k| RANK_COLUMNS.contains(&k.as_str())) {
                return Err(ChainRankError::ReservedColumn { row, column: column.clone() });
            }
            entries.push(IndexEntry { item, raw_item: raw_item.clone(), index, attributes });
        }
        Self::from_entries(entries)
    }

    /// Validates and orders entries by index.
    ///
    /// # Errors
    /// Returns error on duplicate indices, duplicate items, or gaps in `0..n-1`.
    pub fn from_entries(entries: impl IntoIterator<Item = IndexEntry>) -> Result<Self> {
        let entries: Vec<IndexEntry> = entries.into_iter().collect();
        let n = entries.len();
        let mut slots: Vec<Option<IndexEntry>> = vec![None; n];
        let mut lookup = HashMap::with_capacity(n);

        for entry in entries {
            if entry.index >= n {
                return Err(ChainRankError::IndexNotDense { expected: n, found: entry.index });
            }
            if slots[entry.index].is_some() {
                return Err(ChainRankError::DuplicateIndex { index: entry.index });
            }
            if lookup.insert(entry.item.clone(), entry.index).is_some() {
                return Err(ChainRankError::DuplicateItem { item: entry.item });
            }
            let slot = entry.index;
            slots[slot] = Some(entry);
        }

        // n entries, n distinct indices all below n: every slot is filled.
        let entries = slots.into_iter().flatten().collect();
        Ok(Self { entries, lookup })
    }

    /// Resolves an item identifier to its dense index.
    #[must_use]
    pub fn lookup(&self, item: &str) -> Option<usize> {
        self.lookup.get(item).copied()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&IndexEntry> {
        self.entries.get(index)
    }

    /// Graph dimension: max index + 1, or 0 for an empty table.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }
}

fn missing(row: usize, column: &str) -> ChainRankError {
    ChainRankError::MissingColumn { table: "index", row, column: column.to_string() }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_index(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                return usize::try_from(u).ok();
            }
            let f = n.as_f64()?;
            (f >= 0.0 && f.fract() == 0.0 && f < 9.0e15).then(|| f as usize)
        }
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
