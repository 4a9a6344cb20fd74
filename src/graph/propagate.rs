// src/graph/propagate.rs
//! Fixed-step mass propagation over the transition graph.
//!
//! This is a ranking heuristic, not a convergent Markov solver: there is no
//! damping, no convergence check, and dangling rows simply leak mass.

use serde::{Deserialize, Serialize};

use super::sparse::CsrMatrix;
use crate::error::{ChainRankError, Result};

/// Recurrence applied at every step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PropagationMode {
    /// `x = Mᵀ x0` at every step. Every step after the first repeats the
    /// same product, which keeps results identical to earlier rankings.
    #[default]
    Literal,
    /// `x = Mᵀ x` at every step, compounding through the chain.
    Iterative,
}

/// Final state plus one total-variation distance per step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Propagation {
    pub state: Vec<f64>,
    pub trace: Vec<f64>,
}

/// Half the L1 distance between two equally sized vectors.
///
/// # Errors
/// Returns [`ChainRankError::DimensionMismatch`] on differing lengths.
pub fn total_variation(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(ChainRankError::DimensionMismatch {
            what: "total variation operands",
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(0.5 * a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum::<f64>())
}

/// Runs `steps` propagation steps from `x0`.
///
/// Before each step the distance between the current vector and `x0` is
/// recorded, so `trace[0]` is always 0. With `steps == 0` the trace is empty
/// and `x0` is returned unchanged.
///
/// # Errors
/// Returns [`ChainRankError::DimensionMismatch`] if `x0` does not match the matrix.
pub fn propagate(
    matrix: &CsrMatrix,
    x0: &[f64],
    steps: usize,
    mode: PropagationMode,
) -> Result<Propagation> {
    if x0.len() != matrix.dimension() {
        return Err(ChainRankError::DimensionMismatch {
            what: "initial state vector",
            expected: matrix.dimension(),
            found: x0.len(),
        });
    }

    let transposed = matrix.transpose();
    let mut x = x0.to_vec();
    let mut trace = Vec::with_capacity(steps);
    // Literal steps all produce the same vector.
    let literal = match mode {
        PropagationMode::Literal if steps > 0 => Some(transposed.mul_vec(x0)?),
        _ => None,
    };

    for step in 0..steps {
        let distance = total_variation(&x, x0)?;
        trace.push(distance);
        x = match &literal {
            Some(fixed) => fixed.clone(),
            None => transposed.mul_vec(&x)?,
        };
        tracing::trace!(step, distance, "propagation step");
    }

    tracing::debug!(steps, ?mode, mass = x.iter().sum::<f64>(), "propagation finished");
    Ok(Propagation { state: x, trace })
}
