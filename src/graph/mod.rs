// src/graph/mod.rs
//! Transition graph construction and mass propagation.

pub mod propagate;
pub mod rank;
pub mod sparse;
pub mod state;
pub mod transitions;

pub use propagate::{propagate, total_variation, Propagation, PropagationMode};
pub use rank::{emit_ranks, RankRecord};
pub use sparse::{build_matrix, CooBuilder, CsrMatrix};
pub use state::initial_state;
pub use transitions::{prepare_transitions, Edge, EdgeTable, UnknownSourcePolicy};
