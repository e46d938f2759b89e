//! Dense row-major `f64` matrix.
//!
//! Scenario inputs — distances (port × terminal) and service times
//! (resource × train class) — are small dense tables, so a flat `Vec<f64>`
//! with explicit row/column arithmetic beats any sparse or generic linear
//! algebra dependency.  Dimensions are validated once at construction;
//! accessors use debug-mode bounds checks on top of the slice's own.

use crate::{CoreError, CoreResult};

/// A `rows × cols` matrix of `f64` in row-major order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from row-major `data`.
    ///
    /// Fails with [`CoreError::Dimension`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> CoreResult<Self> {
        if data.len() != rows * cols {
            return Err(CoreError::Dimension {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// A `rows × cols` matrix with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at (`row`, `col`).
    ///
    /// # Panics
    /// Panics on out-of-range indices (debug assert plus slice bounds check).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    /// One full row as a slice.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        debug_assert!(row < self.rows);
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate one column top to bottom.
    pub fn iter_col(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        debug_assert!(col < self.cols);
        (0..self.rows).map(move |r| self.data[r * self.cols + col])
    }

    /// Iterate all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }
}
