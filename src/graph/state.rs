// src/graph/state.rs
use super::transitions::EdgeTable;
use crate::error::{ChainRankError, Result};

/// Seeds `1/n` on every item observed as a transition source, 0 elsewhere.
///
/// The seed is scaled by the full item count, not by the number of sources,
/// so its total mass is `|sources| / n` rather than 1.
///
/// # Errors
/// Returns [`ChainRankError::IndexOutOfRange`] if a source index is `>= n`.
#[allow(clippy::cast_precision_loss)]
pub fn initial_state(edges: &EdgeTable, n: usize) -> Result<Vec<f64>> {
    let mut x0 = vec![0.0; n];
    let sources = edges.sources();
    for &source in &sources {
        let slot = x0
            .get_mut(source)
            .ok_or(ChainRankError::IndexOutOfRange { index: source, n })?;
        *slot = 1.0 / n as f64;
    }

    tracing::debug!(n, seeded = sources.len(), "constructed initial state");
    Ok(x0)
}
