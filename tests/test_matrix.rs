/*
 * SPDX-FileCopyrightText: 2025 The linalg developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Tests for construction, shape and capacity management, element access,
//! and assignment semantics.

use anyhow::Result;
use linalg::{Matrix, MatrixError};

// ── Construction ──

#[test]
fn test_with_shape_defaults() -> Result<()> {
    let m: Matrix<i32> = Matrix::with_shape(3, 4)?;
    assert_eq!(m.rows(), 3);
    assert_eq!(m.columns(), 4);
    assert_eq!(m.len(), 12);
    assert_eq!(m.capacity(), 12);
    assert!(m.iter().all(|&x| x == 0));
    Ok(())
}

#[test]
fn test_with_shape_zero_by_zero_is_empty() -> Result<()> {
    let m: Matrix<i32> = Matrix::with_shape(0, 0)?;
    assert!(m.is_empty());
    assert_eq!(m.len(), 0);
    assert_eq!(m.capacity(), 0);
    Ok(())
}

#[test]
fn test_degenerate_shapes_rejected() {
    assert_eq!(
        Matrix::<i32>::with_shape(0, 3).unwrap_err(),
        MatrixError::Empty { rows: 0, columns: 3 }
    );
    assert_eq!(
        Matrix::<i32>::with_shape(3, 0).unwrap_err(),
        MatrixError::Empty { rows: 3, columns: 0 }
    );
    assert_eq!(
        Matrix::<f64>::filled(0, 2, 1.0).unwrap_err(),
        MatrixError::Empty { rows: 0, columns: 2 }
    );
}

#[test]
fn test_filled_converts_the_fill_value() -> Result<()> {
    let m: Matrix<i64> = Matrix::filled(2, 2, 7u8)?;
    assert_eq!(m.as_slice(), &[7i64, 7, 7, 7]);
    assert_eq!(m.capacity(), 4);
    Ok(())
}

#[test]
fn test_from_column() -> Result<()> {
    let m: Matrix<i32> = Matrix::from_column([1, 2, 3])?;
    assert_eq!(m.rows(), 3);
    assert_eq!(m.columns(), 1);
    assert_eq!(m[(2, 0)], 3);

    let empty: Matrix<i32> = Matrix::from_column(Vec::<i32>::new())?;
    assert!(empty.is_empty());
    Ok(())
}

#[test]
fn test_from_rows_pads_short_rows() -> Result<()> {
    let m: Matrix<i32> = Matrix::from_rows([vec![1, 2], vec![3]])?;
    assert_eq!(m.rows(), 2);
    assert_eq!(m.columns(), 2);
    assert_eq!(m[0], [1, 2]);
    assert_eq!(m[1], [3, 0]);
    Ok(())
}

#[test]
fn test_from_rows_edge_shapes() -> Result<()> {
    let empty: Matrix<i32> = Matrix::from_rows(Vec::<Vec<i32>>::new())?;
    assert!(empty.is_empty());

    // A nonempty sequence of empty rows would be an N x 0 shape.
    assert_eq!(
        Matrix::<i32>::from_rows([Vec::<i32>::new(), vec![]]).unwrap_err(),
        MatrixError::Empty { rows: 2, columns: 0 }
    );
    Ok(())
}

#[test]
fn test_from_rows_converts_elements() -> Result<()> {
    let m: Matrix<i32> = Matrix::from_rows([['a', 'b']])?;
    assert_eq!(m[0], [97, 98]);
    Ok(())
}

// ── Conversion, clone, assignment ──

#[test]
fn test_convert_between_element_types() -> Result<()> {
    let m: Matrix<u8> = Matrix::from_rows([[1, 2], [3, 4]])?;
    let converted: Matrix<i32> = m.convert()?;
    assert_eq!(converted.as_slice(), &[1i32, 2, 3, 4]);
    assert_eq!(converted.capacity(), 4);
    Ok(())
}

#[test]
fn test_clone_is_deep_and_drops_slack_capacity() -> Result<()> {
    let mut m: Matrix<i32> = Matrix::from_rows([[1, 2], [3, 4]])?;
    m.reserve(32)?;
    let mut clone = m.clone();
    assert_eq!(clone, m);
    assert_eq!(clone.capacity(), clone.len());
    clone[(0, 0)] = 99;
    assert_eq!(m[(0, 0)], 1);
    Ok(())
}

#[test]
fn test_clone_from_reuses_capacity() -> Result<()> {
    let source: Matrix<i32> = Matrix::from_rows([[1, 2], [3, 4]])?;
    let mut target: Matrix<i32> = Matrix::with_shape(4, 4)?;
    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.capacity(), 16);
    Ok(())
}

#[test]
fn test_assign_from_rebuilds_when_capacity_is_too_small() -> Result<()> {
    let source: Matrix<u8> = Matrix::from_rows([[5, 6], [7, 8]])?;
    let mut target: Matrix<i64> = Matrix::with_shape(1, 1)?;
    target.assign_from(&source)?;
    assert_eq!(target.rows(), 2);
    assert_eq!(target.columns(), 2);
    assert_eq!(target.as_slice(), &[5i64, 6, 7, 8]);
    assert_eq!(target.capacity(), 4);
    Ok(())
}

#[test]
fn test_move_leaves_source_empty() -> Result<()> {
    let mut m: Matrix<i32> = Matrix::from_rows([[1, 2], [3, 4]])?;
    let moved = m.take();
    assert!(m.is_empty());
    assert_eq!(m.capacity(), 0);
    assert_eq!(moved.rows(), 2);
    assert_eq!(moved[(1, 1)], 4);
    Ok(())
}

#[test]
fn test_swap_exchanges_everything() -> Result<()> {
    let mut a: Matrix<i32> = Matrix::from_rows([[1, 2, 3]])?;
    let mut b: Matrix<i32> = Matrix::from_column([9, 8])?;
    a.swap(&mut b);
    assert_eq!(a.rows(), 2);
    assert_eq!(a.columns(), 1);
    assert_eq!(b.rows(), 1);
    assert_eq!(b[0], [1, 2, 3]);
    Ok(())
}

// ── Shape and capacity ──

#[test]
fn test_reshape_round_trip() -> Result<()> {
    let mut m: Matrix<i32> = Matrix::from_rows([[1, 2, 3], [4, 5, 6]])?;
    let original = m.clone();
    m.reshape(3, 2)?;
    assert_eq!(m[(0, 1)], 2);
    assert_eq!(m[(2, 1)], 6);
    m.reshape(2, 3)?;
    assert_eq!(m, original);
    Ok(())
}

#[test]
fn test_reshape_rejects_bad_shapes() -> Result<()> {
    let mut m: Matrix<i32> = Matrix::with_shape(2, 3)?;
    assert_eq!(
        m.reshape(2, 2).unwrap_err(),
        MatrixError::Size {
            left_rows: 2,
            left_columns: 3,
            right_rows: 2,
            right_columns: 2,
        }
    );
    assert_eq!(
        m.reshape(0, 6).unwrap_err(),
        MatrixError::Empty { rows: 0, columns: 6 }
    );
    // Shape is untouched after the failures.
    assert_eq!(m.rows(), 2);
    assert_eq!(m.columns(), 3);
    Ok(())
}

#[test]
fn test_reserve_and_shrink() -> Result<()> {
    let mut m: Matrix<i32> = Matrix::from_rows([[1, 2], [3, 4]])?;
    m.reserve(10)?;
    assert!(m.capacity() >= 10);
    assert_eq!(m.rows(), 2);
    assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
    // Within capacity: no-op.
    m.reserve(3)?;
    assert!(m.capacity() >= 10);
    m.shrink_to_fit()?;
    assert_eq!(m.capacity(), 4);
    assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
    Ok(())
}

#[test]
fn test_clear_keeps_the_allocation() -> Result<()> {
    let mut m: Matrix<i32> = Matrix::with_shape(2, 3)?;
    m.clear();
    assert!(m.is_empty());
    assert_eq!(m.rows(), 0);
    assert_eq!(m.columns(), 0);
    assert_eq!(m.capacity(), 6);
    Ok(())
}

// ── Element access ──

#[test]
fn test_index_and_index_mut() -> Result<()> {
    let mut m: Matrix<i32> = Matrix::from_rows([[1, 2, 3], [4, 5, 6]])?;
    assert_eq!(m[(1, 2)], 6);
    m[(1, 2)] = 60;
    assert_eq!(m[(1, 2)], 60);
    assert_eq!(m[1], [4, 5, 60]);
    m[1][0] = 40;
    assert_eq!(m[(1, 0)], 40);
    Ok(())
}

#[test]
fn test_checked_access_bounds() -> Result<()> {
    let mut m: Matrix<i32> = Matrix::from_rows([[1, 2, 3], [4, 5, 6]])?;
    assert_eq!(*m.at(1, 2)?, 6);
    *m.at_mut(0, 0)? = 10;
    assert_eq!(m[(0, 0)], 10);

    // One past the last column is out of range for every row, even though
    // the flat offset of (0, 3) lands inside the live region.
    assert_eq!(
        m.at(0, 3).unwrap_err(),
        MatrixError::Range { row: 0, column: 3, rows: 2, columns: 3 }
    );
    assert_eq!(
        m.at(2, 0).unwrap_err(),
        MatrixError::Range { row: 2, column: 0, rows: 2, columns: 3 }
    );
    Ok(())
}

#[test]
fn test_unchecked_access() -> Result<()> {
    let m: Matrix<i32> = Matrix::from_rows([[1, 2], [3, 4]])?;
    // SAFETY: indices are in range.
    assert_eq!(unsafe { *m.get_unchecked(1, 0) }, 3);
    Ok(())
}

#[test]
fn test_iteration_is_row_major() -> Result<()> {
    let m: Matrix<i32> = Matrix::from_rows([[1, 2], [3, 4]])?;
    let values: Vec<i32> = m.iter().copied().collect();
    assert_eq!(values, [1, 2, 3, 4]);
    let mut sum = 0;
    for &value in &m {
        sum += value;
    }
    assert_eq!(sum, 10);
    Ok(())
}

// ── Rendering ──

#[test]
fn test_display_aligns_columns() -> Result<()> {
    let m: Matrix<i32> = Matrix::from_rows([[1, 22], [333, 4]])?;
    assert_eq!(m.to_string(), "|  1  22|\n|333   4|");
    Ok(())
}

#[test]
fn test_display_single_column_and_empty() -> Result<()> {
    let m: Matrix<i32> = Matrix::from_column([1, 22])?;
    assert_eq!(m.to_string(), "| 1|\n|22|");
    let empty: Matrix<i32> = Matrix::new();
    assert_eq!(empty.to_string(), "Matrix is empty!");
    Ok(())
}
