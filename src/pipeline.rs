// src/pipeline.rs
//! Runs the ranking stages strictly forward: edges, matrix, seed, propagation, ranks.

use crate::config::Config;
use crate::error::Result;
use crate::graph::{
    build_matrix, emit_ranks, initial_state, prepare_transitions, propagate, CsrMatrix, EdgeTable,
    Propagation, RankRecord,
};
use crate::table::{IndexTable, SequenceTable};

/// Every intermediate product of one ranking run.
#[derive(Debug, Clone)]
pub struct RankRun {
    pub edges: EdgeTable,
    pub matrix: CsrMatrix,
    pub initial: Vec<f64>,
    pub propagation: Propagation,
    pub ranks: Vec<RankRecord>,
}

impl RankRun {
    /// Number of items (graph dimension).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.matrix.dimension()
    }

    /// Items that seeded mass (observed as a transition source).
    #[must_use]
    pub fn seeded(&self) -> usize {
        self.initial.iter().filter(|&&v| v > 0.0).count()
    }
}

/// Computes the rank table for a sequence table against an index table.
///
/// # Errors
/// Propagates any precondition failure from the individual stages.
pub fn run(sequences: &SequenceTable, index: &IndexTable, config: &Config) -> Result<RankRun> {
    let span = tracing::info_span!("rank_run", rows = sequences.len(), items = index.dimension());
    let _guard = span.enter();

    let edges = prepare_transitions(sequences, index, config.propagation.unknown_source)?;
    let (matrix, n) = build_matrix(&edges, index)?;
    let initial = initial_state(&edges, n)?;
    let propagation = propagate(
        &matrix,
        &initial,
        config.propagation.steps,
        config.propagation.mode,
    )?;
    let ranks = emit_ranks(&propagation.state, index)?;

    tracing::info!(edges = edges.len(), nnz = matrix.nnz(), "ranking complete");

    Ok(RankRun { edges, matrix, initial, propagation, ranks })
}
