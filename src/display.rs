/*
 * SPDX-FileCopyrightText: 2025 The linalg developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Boxed tabular rendering of a matrix.
//!
//! This is a pure presentation layer over shape queries and element access.

use crate::matrix::Matrix;
use itertools::Itertools;
use std::fmt;

/// Renders the matrix as a table: each column is right-aligned to the
/// widest rendered element of that column, columns are separated by a
/// two-space gap, and every row is delimited by a leading and a trailing
/// `|`. The empty matrix renders as `Matrix is empty!`.
///
/// ```
/// use linalg::{Matrix, MatrixError};
///
/// let m: Matrix<i32> = Matrix::from_rows([[1, 22], [333, 4]])?;
/// assert_eq!(m.to_string(), "|  1  22|\n|333   4|");
/// # Ok::<(), MatrixError>(())
/// ```
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Matrix is empty!");
        }
        let cells: Vec<String> = self.iter().map(|value| value.to_string()).collect();
        let mut widths = vec![0; self.columns()];
        for (index, cell) in cells.iter().enumerate() {
            let column = index % self.columns();
            widths[column] = widths[column].max(cell.len());
        }
        let table = cells
            .chunks(self.columns())
            .map(|row| {
                let line = row
                    .iter()
                    .zip(&widths)
                    .map(|(cell, &width)| format!("{cell:>width$}"))
                    .join("  ");
                format!("|{line}|")
            })
            .join("\n");
        f.write_str(&table)
    }
}
