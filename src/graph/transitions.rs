// src/graph/transitions.rs
//! Edge preparation: turns ordered sequences into weighted item transitions.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{ChainRankError, Result};
use crate::table::{GroupKey, IndexTable, SequenceRow, SequenceTable};

/// What to do with a transition whose *source* item is absent from the index table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSourcePolicy {
    /// Fail with [`ChainRankError::UnknownItem`].
    #[default]
    Error,
    /// Drop the row and keep going.
    Skip,
}

/// A single observed transition. Repeated transitions stay separate edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    /// Transitions observed leaving `source`, repeats included.
    pub outdegree: usize,
    pub weight: f64,
}

/// Edges in the order their source rows appeared in the sequence table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EdgeTable {
    edges: Vec<Edge>,
}

impl EdgeTable {
    #[must_use]
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Distinct source indices, ascending.
    #[must_use]
    pub fn sources(&self) -> Vec<usize> {
        self.edges
            .iter()
            .map(|e| e.source)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Total weight leaving `source`; 1.0 for any source present, 0.0 otherwise.
    #[must_use]
    pub fn outgoing_weight(&self, source: usize) -> f64 {
        self.edges
            .iter()
            .filter(|e| e.source == source)
            .map(|e| e.weight)
            .sum()
    }
}

/// Builds the weighted edge table.
///
/// Each row is paired with the next row of the same group. Rows whose next
/// item is missing (last in group) or not in the index table are sequence
/// endpoints and are dropped. Surviving rows get weight `1 / outdegree(source)`.
///
/// # Errors
/// Returns [`ChainRankError::UnknownItem`] when a surviving row's source item
/// has no index and `policy` is [`UnknownSourcePolicy::Error`].
pub fn prepare_transitions(
    sequences: &SequenceTable,
    index: &IndexTable,
    policy: UnknownSourcePolicy,
) -> Result<EdgeTable> {
    let rows = sequences.rows();
    let next = next_in_group(rows);

    let mut resolved: Vec<(usize, usize)> = Vec::with_capacity(rows.len());
    let mut endpoints = 0usize;
    let mut skipped = 0usize;

    for (row, (current, next_item)) in rows.iter().zip(&next).enumerate() {
        let Some(target) = next_item.and_then(|item| index.lookup(item)) else {
            endpoints += 1;
            continue;
        };
        let Some(source) = index.lookup(&current.item) else {
            match policy {
                UnknownSourcePolicy::Error => {
                    return Err(ChainRankError::UnknownItem { row, item: current.item.clone() });
                }
                UnknownSourcePolicy::Skip => {
                    tracing::warn!(row, item = %current.item, "skipping transition from unindexed item");
                    skipped += 1;
                    continue;
                }
            }
        };
        resolved.push((source, target));
    }

    let mut outdegree = vec![0usize; index.dimension()];
    for &(source, _) in &resolved {
        outdegree[source] += 1;
    }

    let edges = resolved
        .into_iter()
        .map(|(source, target)| {
            let degree = outdegree[source];
            Ok(Edge { source, target, outdegree: degree, weight: edge_weight(source, degree)? })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        rows = rows.len(),
        edges = edges.len(),
        endpoints,
        skipped,
        "prepared transitions"
    );

    Ok(EdgeTable { edges })
}

/// For every row, the item of the following row in the same group.
fn next_in_group(rows: &[SequenceRow]) -> Vec<Option<&str>> {
    let mut next = vec![None; rows.len()];
    let mut last_seen: HashMap<&GroupKey, usize> = HashMap::new();

    for (pos, row) in rows.iter().enumerate() {
        if let Some(prev) = last_seen.insert(&row.group, pos) {
            next[prev] = Some(row.item.as_str());
        }
    }

    next
}

#[allow(clippy::cast_precision_loss)]
fn edge_weight(source: usize, outdegree: usize) -> Result<f64> {
    if outdegree == 0 {
        return Err(ChainRankError::ZeroOutdegree { source_index: source });
    }
    Ok(1.0 / outdegree as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_in_group_follows_interleaved_groups() {
        let table = SequenceTable::from_pairs([("o1", "a"), ("o2", "x"), ("o1", "b"), ("o2", "y")]);
        let next = next_in_group(table.rows());
        assert_eq!(next, vec![Some("b"), Some("y"), None, None]);
    }

    #[test]
    fn test_zero_outdegree_is_an_error() {
        assert!(matches!(edge_weight(4, 0), Err(ChainRankError::ZeroOutdegree { source_index: 4 })));
        assert!((edge_weight(4, 4).unwrap_or(0.0) - 0.25).abs() < 1e-12);
    }
}
