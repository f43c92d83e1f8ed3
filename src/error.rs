/*
 * SPDX-FileCopyrightText: 2025 The linalg developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use thiserror::Error;

/// Errors returned by the fallible [`Matrix`](crate::Matrix) operations.
///
/// All of these signal caller-level misuse; none is recoverable by
/// retrying. The failing operation leaves the receiving matrix either fully
/// built or in its pre-call state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// An operand was empty, or a requested shape had exactly one zero
    /// dimension.
    #[error("empty matrix or degenerate shape {rows}x{columns}")]
    Empty { rows: usize, columns: usize },

    /// The operand shapes are incompatible for the requested operation.
    #[error("incompatible shapes: {left_rows}x{left_columns} vs {right_rows}x{right_columns}")]
    Size {
        left_rows: usize,
        left_columns: usize,
        right_rows: usize,
        right_columns: usize,
    },

    /// Checked element access outside the live region.
    #[error("index ({row}, {column}) out of range for a {rows}x{columns} matrix")]
    Range {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// Allocating a buffer for the given number of elements failed. The
    /// underlying cause is never reported.
    #[error("allocation of a buffer for {elements} elements failed")]
    Alloc { elements: usize },
}
