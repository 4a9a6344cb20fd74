// tests/unit_propagate.rs
//! Tests for seeding and fixed-step propagation.

use chainrank_core::error::ChainRankError;
use chainrank_core::graph::{
    build_matrix, initial_state, propagate, total_variation, CsrMatrix, Edge, EdgeTable,
    PropagationMode,
};
use chainrank_core::table::IndexTable;

const EPS: f64 = 1e-12;
const THIRD: f64 = 1.0 / 3.0;

fn edge(source: usize, target: usize, weight: f64) -> Edge {
    Edge { source, target, outdegree: 1, weight }
}

/// A -> B -> C with unit weights.
fn chain() -> (EdgeTable, CsrMatrix) {
    let index = IndexTable::from_pairs([("A", 0), ("B", 1), ("C", 2)]).unwrap();
    let edges = EdgeTable::from_edges(vec![edge(0, 1, 1.0), edge(1, 2, 1.0)]);
    let (matrix, _) = build_matrix(&edges, &index).unwrap();
    (edges, matrix)
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < EPS, "position {i}: {a} != {e}");
    }
}

#[test]
fn test_initial_state_seeds_sources_with_one_over_n() {
    let (edges, _) = chain();
    let x0 = initial_state(&edges, 3).unwrap();
    assert_close(&x0, &[THIRD, THIRD, 0.0]);
    assert_eq!(x0.iter().filter(|&&v| v > 0.0).count(), edges.sources().len());
}

#[test]
fn test_initial_state_scales_by_item_count_not_sources() {
    let edges = EdgeTable::from_edges(vec![edge(2, 0, 1.0)]);
    let x0 = initial_state(&edges, 4).unwrap();
    assert_close(&x0, &[0.0, 0.0, 0.25, 0.0]);
    assert!((x0.iter().sum::<f64>() - 0.25).abs() < EPS);
}

#[test]
fn test_initial_state_without_edges_is_all_zero() {
    let x0 = initial_state(&EdgeTable::default(), 3).unwrap();
    assert_close(&x0, &[0.0, 0.0, 0.0]);
    assert!(initial_state(&EdgeTable::default(), 0).unwrap().is_empty());
}

#[test]
fn test_initial_state_rejects_source_beyond_n() {
    let edges = EdgeTable::from_edges(vec![edge(5, 0, 1.0)]);
    let result = initial_state(&edges, 3);
    assert!(matches!(result, Err(ChainRankError::IndexOutOfRange { index: 5, n: 3 })));
}

#[test]
fn test_total_variation() {
    let d = total_variation(&[0.5, 0.5, 0.0], &[0.0, 0.5, 0.5]).unwrap();
    assert!((d - 0.5).abs() < EPS);
    assert!(total_variation(&[1.0], &[1.0, 0.0]).is_err());
}

#[test]
fn test_zero_steps_returns_seed_unchanged() {
    let (edges, matrix) = chain();
    let x0 = initial_state(&edges, 3).unwrap();
    let result = propagate(&matrix, &x0, 0, PropagationMode::Literal).unwrap();
    assert!(result.trace.is_empty());
    assert_eq!(result.state, x0);
}

#[test]
fn test_literal_mode_single_product_and_flat_trace() {
    let (edges, matrix) = chain();
    let x0 = initial_state(&edges, 3).unwrap();
    let result = propagate(&matrix, &x0, 3, PropagationMode::Literal).unwrap();

    assert_close(&result.state, &[0.0, THIRD, THIRD]);
    assert_eq!(result.trace.len(), 3);
    assert!(result.trace[0].abs() < EPS);
    assert!((result.trace[1] - THIRD).abs() < EPS);
    assert!((result.trace[1] - result.trace[2]).abs() < EPS);
}

#[test]
fn test_literal_mode_ignores_extra_steps() {
    let (edges, matrix) = chain();
    let x0 = initial_state(&edges, 3).unwrap();
    let one = propagate(&matrix, &x0, 1, PropagationMode::Literal).unwrap();
    let many = propagate(&matrix, &x0, 25, PropagationMode::Literal).unwrap();
    assert_eq!(one.state, many.state);
    assert_eq!(many.trace.len(), 25);
    assert!(many.trace[1..].iter().all(|d| (d - THIRD).abs() < EPS));
}

#[test]
fn test_iterative_mode_compounds() {
    let (edges, matrix) = chain();
    let x0 = initial_state(&edges, 3).unwrap();
    let result = propagate(&matrix, &x0, 3, PropagationMode::Iterative).unwrap();

    // x1 = [0, 1/3, 1/3], x2 = [0, 0, 1/3], x3 = 0: mass leaks out of dangling C.
    assert_close(&result.state, &[0.0, 0.0, 0.0]);
    assert_close(&result.trace, &[0.0, THIRD, 0.5]);
}

#[test]
fn test_dimension_mismatch_is_fatal() {
    let (_, matrix) = chain();
    let result = propagate(&matrix, &[1.0, 0.0], 2, PropagationMode::Literal);
    assert!(matches!(
        result,
        Err(ChainRankError::DimensionMismatch { expected: 3, found: 2, .. })
    ));
}

#[test]
fn test_empty_graph_propagates_to_empty_state() {
    let matrix = CsrMatrix::zeros(0);
    let result = propagate(&matrix, &[], 2, PropagationMode::Iterative).unwrap();
    assert!(result.state.is_empty());
    assert_close(&result.trace, &[0.0, 0.0]);
}
