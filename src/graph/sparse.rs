// src/graph/sparse.rs
//! Compressed sparse row storage for the transition graph.
//!
//! Construction goes through a coordinate list ([`CooBuilder`]); converting
//! to CSR sums duplicate coordinates in insertion order rather than
//! overwriting them. Memory is `O(n + nnz)`.

use rayon::prelude::*;

use super::transitions::EdgeTable;
use crate::error::{ChainRankError, Result};
use crate::table::IndexTable;

/// Coordinate-list accumulator for a square `n x n` matrix.
#[derive(Debug, Clone, Default)]
pub struct CooBuilder {
    n: usize,
    rows: Vec<usize>,
    cols: Vec<usize>,
    values: Vec<f64>,
}

impl CooBuilder {
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self::with_capacity(n, 0)
    }

    #[must_use]
    pub fn with_capacity(n: usize, nnz: usize) -> Self {
        Self {
            n,
            rows: Vec::with_capacity(nnz),
            cols: Vec::with_capacity(nnz),
            values: Vec::with_capacity(nnz),
        }
    }

    /// Records `value` at `(row, col)`.
    ///
    /// # Errors
    /// Returns [`ChainRankError::IndexOutOfRange`] if either coordinate is `>= n`.
    pub fn push(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        for index in [row, col] {
            if index >= self.n {
                return Err(ChainRankError::IndexOutOfRange { index, n: self.n });
            }
        }
        self.rows.push(row);
        self.cols.push(col);
        self.values.push(value);
        Ok(())
    }

    /// Converts to CSR, summing duplicate coordinates.
    #[must_use]
    pub fn into_csr(self) -> CsrMatrix {
        let mut order: Vec<usize> = (0..self.values.len()).collect();
        // Stable: duplicates keep insertion order, so their sum is reproducible.
        order.sort_by_key(|&k| (self.rows[k], self.cols[k]));

        let mut row_ptr = vec![0usize; self.n + 1];
        let mut col_idx: Vec<usize> = Vec::with_capacity(order.len());
        let mut values: Vec<f64> = Vec::with_capacity(order.len());
        let mut last: Option<(usize, usize)> = None;

        for k in order {
            let coord = (self.rows[k], self.cols[k]);
            if last == Some(coord) {
                if let Some(v) = values.last_mut() {
                    *v += self.values[k];
                }
                continue;
            }
            row_ptr[coord.0 + 1] += 1;
            col_idx.push(coord.1);
            values.push(self.values[k]);
            last = Some(coord);
        }

        for i in 0..self.n {
            row_ptr[i + 1] += row_ptr[i];
        }

        CsrMatrix { n: self.n, row_ptr, col_idx, values }
    }
}

/// Square sparse matrix; column indices within a row are ascending and unique.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    n: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
    values: Vec<f64>,
}

impl CsrMatrix {
    /// All-zero `n x n` matrix.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        CooBuilder::new(n).into_csr()
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Structurally nonzero coordinates.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// `(col, value)` pairs of row `i`; empty for out-of-range rows.
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = if i < self.n { self.row_ptr[i]..self.row_ptr[i + 1] } else { 0..0 };
        self.col_idx[range.clone()].iter().copied().zip(self.values[range].iter().copied())
    }

    /// Entry at `(i, j)`; 0.0 when not stored.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        if i >= self.n {
            return 0.0;
        }
        let (start, end) = (self.row_ptr[i], self.row_ptr[i + 1]);
        self.col_idx[start..end]
            .binary_search(&j)
            .map_or(0.0, |pos| self.values[start + pos])
    }

    #[must_use]
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).map(|(_, v)| v).sum()
    }

    /// Rows with no outgoing entries.
    #[must_use]
    pub fn dangling_rows(&self) -> Vec<usize> {
        (0..self.n).filter(|&i| self.row_ptr[i] == self.row_ptr[i + 1]).collect()
    }

    /// Transposed copy. Entries of each new row stay ordered by column.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut row_ptr = vec![0usize; self.n + 1];
        for &c in &self.col_idx {
            row_ptr[c + 1] += 1;
        }
        for i in 0..self.n {
            row_ptr[i + 1] += row_ptr[i];
        }

        let mut cursor = row_ptr.clone();
        let mut col_idx = vec![0usize; self.nnz()];
        let mut values = vec![0.0f64; self.nnz()];
        for r in 0..self.n {
            for (c, v) in self.row(r) {
                let slot = cursor[c];
                col_idx[slot] = r;
                values[slot] = v;
                cursor[c] += 1;
            }
        }

        Self { n: self.n, row_ptr, col_idx, values }
    }

    /// Computes `self * x`, one row per rayon task.
    ///
    /// # Errors
    /// Returns [`ChainRankError::DimensionMismatch`] if `x.len() != n`.
    pub fn mul_vec(&self, x: &[f64]) -> Result<Vec<f64>> {
        if x.len() != self.n {
            return Err(ChainRankError::DimensionMismatch {
                what: "matrix-vector product",
                expected: self.n,
                found: x.len(),
            });
        }
        Ok((0..self.n)
            .into_par_iter()
            .map(|r| self.row(r).map(|(c, v)| v * x[c]).sum::<f64>())
            .collect())
    }

    /// Computes `selfᵀ * x`.
    ///
    /// # Errors
    /// Returns [`ChainRankError::DimensionMismatch`] if `x.len() != n`.
    pub fn transpose_mul(&self, x: &[f64]) -> Result<Vec<f64>> {
        self.transpose().mul_vec(x)
    }
}

/// Builds the `n x n` transition matrix, `n` taken from the full index table.
///
/// # Errors
/// Returns [`ChainRankError::IndexOutOfRange`] if an edge references an index `>= n`.
pub fn build_matrix(edges: &EdgeTable, index: &IndexTable) -> Result<(CsrMatrix, usize)> {
    let n = index.dimension();
    let mut coo = CooBuilder::with_capacity(n, edges.len());
    for edge in edges.edges() {
        coo.push(edge.source, edge.target, edge.weight)?;
    }
    let matrix = coo.into_csr();

    tracing::debug!(
        n,
        nnz = matrix.nnz(),
        dangling = matrix.dangling_rows().len(),
        "built transition matrix"
    );

    Ok((matrix, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_sum_instead_of_overwrite() {
        let mut coo = CooBuilder::new(3);
        for (r, c, v) in [(2, 0, 1.0), (0, 1, 0.25), (0, 1, 0.5), (0, 0, 2.0)] {
            assert!(coo.push(r, c, v).is_ok());
        }
        let m = coo.into_csr();
        assert_eq!(m.nnz(), 3);
        assert!((m.get(0, 1) - 0.75).abs() < 1e-12);
        assert_eq!(m.row(0).map(|(c, _)| c).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(m.dangling_rows(), vec![1]);
    }

    #[test]
    fn test_push_rejects_out_of_range() {
        let mut coo = CooBuilder::new(2);
        assert!(matches!(
            coo.push(0, 2, 1.0),
            Err(ChainRankError::IndexOutOfRange { index: 2, n: 2 })
        ));
    }

    #[test]
    fn test_transpose_swaps_coordinates() {
        let mut coo = CooBuilder::new(3);
        for (r, c, v) in [(0, 2, 1.0), (1, 2, 3.0), (2, 0, 5.0)] {
            assert!(coo.push(r, c, v).is_ok());
        }
        let t = coo.into_csr().transpose();
        assert!((t.get(2, 0) - 1.0).abs() < 1e-12);
        assert!((t.get(2, 1) - 3.0).abs() < 1e-12);
        assert!((t.get(0, 2) - 5.0).abs() < 1e-12);
        assert_eq!(t.nnz(), 3);
    }

    #[test]
    fn test_zero_dimension() {
        let m = CsrMatrix::zeros(0);
        assert_eq!(m.nnz(), 0);
        assert_eq!(m.mul_vec(&[]).map(|v| v.len()).ok(), Some(0));
    }
}
