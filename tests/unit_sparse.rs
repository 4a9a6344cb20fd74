// tests/unit_sparse.rs
//! Tests for sparse transition matrix construction.

use chainrank_core::error::ChainRankError;
use chainrank_core::graph::{build_matrix, Edge, EdgeTable};
use chainrank_core::table::IndexTable;
use std::collections::HashSet;

const EPS: f64 = 1e-12;

fn edge(source: usize, target: usize, weight: f64) -> Edge {
    Edge { source, target, outdegree: 1, weight }
}

fn index_of(n: usize) -> IndexTable {
    IndexTable::from_pairs((0..n).map(|i| (format!("item-{i}"), i))).unwrap()
}

#[test]
fn test_dimension_comes_from_index_table() {
    let edges = EdgeTable::from_edges(vec![edge(0, 1, 1.0)]);
    let (matrix, n) = build_matrix(&edges, &index_of(5)).unwrap();
    assert_eq!(n, 5);
    assert_eq!(matrix.dimension(), 5);
    assert_eq!(matrix.dangling_rows(), vec![1, 2, 3, 4]);
}

#[test]
fn test_nnz_matches_distinct_pairs_and_duplicates_sum() {
    let raw = vec![
        edge(0, 1, 0.25),
        edge(0, 2, 0.25),
        edge(0, 1, 0.25),
        edge(0, 1, 0.25),
        edge(2, 0, 1.0),
    ];
    let distinct: HashSet<(usize, usize)> = raw.iter().map(|e| (e.source, e.target)).collect();
    let (matrix, _) = build_matrix(&EdgeTable::from_edges(raw), &index_of(3)).unwrap();

    assert_eq!(matrix.nnz(), distinct.len());
    assert!((matrix.get(0, 1) - 0.75).abs() < EPS);
    assert!((matrix.get(0, 2) - 0.25).abs() < EPS);
    assert!((matrix.get(2, 0) - 1.0).abs() < EPS);
    assert!(matrix.get(1, 0).abs() < EPS);
    assert!((matrix.row_sum(0) - 1.0).abs() < EPS);
}

#[test]
fn test_edge_outside_index_is_rejected() {
    let edges = EdgeTable::from_edges(vec![edge(0, 3, 1.0)]);
    let result = build_matrix(&edges, &index_of(3));
    assert!(matches!(result, Err(ChainRankError::IndexOutOfRange { index: 3, n: 3 })));
}

#[test]
fn test_transpose_mul_moves_mass_along_edges() {
    let edges = EdgeTable::from_edges(vec![edge(0, 1, 1.0), edge(1, 2, 1.0)]);
    let (matrix, _) = build_matrix(&edges, &index_of(3)).unwrap();

    let y = matrix.transpose_mul(&[1.0, 2.0, 4.0]).unwrap();
    assert_eq!(y.len(), 3);
    assert!(y[0].abs() < EPS);
    assert!((y[1] - 1.0).abs() < EPS);
    assert!((y[2] - 2.0).abs() < EPS);
}

#[test]
fn test_mul_vec_rejects_wrong_length() {
    let (matrix, _) = build_matrix(&EdgeTable::default(), &index_of(2)).unwrap();
    let result = matrix.mul_vec(&[1.0]);
    assert!(matches!(
        result,
        Err(ChainRankError::DimensionMismatch { expected: 2, found: 1, .. })
    ));
}

#[test]
fn test_empty_edge_table_gives_all_zero_matrix() {
    let (matrix, n) = build_matrix(&EdgeTable::default(), &index_of(4)).unwrap();
    assert_eq!(n, 4);
    assert_eq!(matrix.nnz(), 0);
    assert_eq!(matrix.dangling_rows().len(), 4);
}
