// src/graph/rank.rs
//! Turns the propagated state into a ranked item table.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{ChainRankError, Result};
use crate::table::{IndexTable, Record};

/// One row of the rank table.
#[derive(Debug, Clone, PartialEq)]
pub struct RankRecord {
    pub index: usize,
    pub mass: f64,
    /// 1-based position.
    pub rank: usize,
    pub item: String,
    /// Item cell as it appeared in the index table.
    pub item_value: Value,
    /// Extra index-table columns, joined back on `index`.
    pub attributes: BTreeMap<String, Value>,
}

impl RankRecord {
    /// Flattens the record into a table row, naming the item column `item_column`.
    #[must_use]
    pub fn to_record(&self, item_column: &str) -> Record {
        let mut record: Record = self
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        record.insert("index".to_string(), Value::from(self.index));
        record.insert("mass".to_string(), Value::from(self.mass));
        record.insert("rank".to_string(), Value::from(self.rank));
        record.insert(item_column.to_string(), self.item_value.clone());
        record
    }
}

/// Ranks every item by descending mass.
///
/// The sort is stable, so equal masses keep ascending index order.
///
/// # Errors
/// Returns [`ChainRankError::DimensionMismatch`] if `state` and the index table disagree in size.
pub fn emit_ranks(state: &[f64], index: &IndexTable) -> Result<Vec<RankRecord>> {
    if state.len() != index.dimension() {
        return Err(ChainRankError::DimensionMismatch {
            what: "state vector vs index table",
            expected: index.dimension(),
            found: state.len(),
        });
    }

    let mut order: Vec<usize> = (0..state.len()).collect();
    order.sort_by(|&a, &b| state[b].total_cmp(&state[a]));

    order
        .into_iter()
        .enumerate()
        .map(|(pos, i)| {
            let entry = index
                .get(i)
                .ok_or(ChainRankError::IndexOutOfRange { index: i, n: index.dimension() })?;
            Ok(RankRecord {
                index: i,
                mass: state[i],
                rank: pos + 1,
                item: entry.item.clone(),
                item_value: entry.raw_item.clone(),
                attributes: entry.attributes.clone(),
            })
        })
        .collect()
}
