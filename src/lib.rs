//! Item ranking from ordered co-occurrence sequences.
//!
//! Sequences become weighted item-to-item transitions, the transitions a
//! sparse matrix, and a seeded state vector is pushed through that matrix
//! for a fixed number of steps. Items are then ranked by the mass they hold.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod io;
pub mod pipeline;
pub mod reporting;
pub mod table;

pub use error::{ChainRankError, Result};
