/*
 * SPDX-FileCopyrightText: 2025 The linalg developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::element::CastInto;
use crate::error::MatrixError;
use crate::storage::RawBuf;
use std::alloc::Layout;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A dense matrix stored as a single row-major buffer.
///
/// The logical shape (`rows` × `columns`) is distinct from the allocated
/// capacity: [`reserve`](Matrix::reserve) can leave slack slots after the
/// live region, and [`clear`](Matrix::clear) keeps the allocation for
/// reuse. A matrix is either fully empty (0×0) or has both dimensions
/// positive; constructors reject shapes with exactly one zero dimension.
///
/// Cloning deep-copies the live region only, so a clone's capacity equals
/// its element count. Moving is a plain Rust move; [`take`](Matrix::take)
/// moves the contents out of a place, leaving the empty matrix behind.
///
/// # Examples
///
/// ```
/// use linalg::{Matrix, MatrixError};
///
/// let mut m: Matrix<i32> = Matrix::from_rows([[1, 2], [3, 4]])?;
/// assert_eq!(m.rows(), 2);
/// assert_eq!(m[(1, 0)], 3);
/// m.reshape(1, 4)?;
/// assert_eq!(m[0], [1, 2, 3, 4]);
/// # Ok::<(), MatrixError>(())
/// ```
pub struct Matrix<T> {
    buf: RawBuf<T>,
    rows: usize,
    columns: usize,
}

impl<T> Matrix<T> {
    /// Creates the empty matrix. No allocation takes place.
    pub fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            rows: 0,
            columns: 0,
        }
    }

    /// Rejects shapes with exactly one zero dimension.
    fn check_shape(rows: usize, columns: usize) -> Result<(), MatrixError> {
        if (rows == 0) != (columns == 0) {
            return Err(MatrixError::Empty { rows, columns });
        }
        Ok(())
    }

    /// Validated element count of a shape. Saturates on overflow so that
    /// the allocation below fails cleanly.
    fn checked_total(rows: usize, columns: usize) -> Result<usize, MatrixError> {
        Self::check_shape(rows, columns)?;
        Ok(rows.saturating_mul(columns))
    }

    /// Creates a `rows` × `columns` matrix of default-valued elements.
    ///
    /// `(0, 0)` yields the empty matrix; a shape with exactly one zero
    /// dimension is rejected with [`MatrixError::Empty`].
    pub fn with_shape(rows: usize, columns: usize) -> Result<Self, MatrixError>
    where
        T: Default,
    {
        let total = Self::checked_total(rows, columns)?;
        let mut buf = RawBuf::with_capacity(total)?;
        for _ in 0..total {
            // SAFETY: exactly `total` slots were allocated.
            unsafe { buf.push_unchecked(T::default()) };
        }
        Ok(Self { buf, rows, columns })
    }

    /// Creates a `rows` × `columns` matrix with every element converted
    /// from `value`.
    pub fn filled<U>(rows: usize, columns: usize, value: U) -> Result<Self, MatrixError>
    where
        U: Clone + CastInto<T>,
    {
        let total = Self::checked_total(rows, columns)?;
        let mut buf = RawBuf::with_capacity(total)?;
        for _ in 0..total {
            // SAFETY: exactly `total` slots were allocated.
            unsafe { buf.push_unchecked(value.clone().cast()) };
        }
        Ok(Self { buf, rows, columns })
    }

    /// Creates a single-column matrix from a sequence of values.
    ///
    /// An empty sequence yields the empty matrix, not an error: both
    /// dimensions reach zero together.
    pub fn from_column<I, U>(values: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = U>,
        U: CastInto<T>,
    {
        let values: Vec<U> = values.into_iter().collect();
        if values.is_empty() {
            return Ok(Self::new());
        }
        let rows = values.len();
        let mut buf = RawBuf::with_capacity(rows)?;
        for value in values {
            // SAFETY: exactly `rows` slots were allocated.
            unsafe { buf.push_unchecked(value.cast()) };
        }
        Ok(Self {
            buf,
            rows,
            columns: 1,
        })
    }

    /// Creates a matrix from a sequence of rows.
    ///
    /// The number of columns is the maximum row length; shorter rows are
    /// padded on the right with default-valued elements. An empty outer
    /// sequence yields the empty matrix, but a nonempty sequence of
    /// all-empty rows is a degenerate shape and is rejected.
    pub fn from_rows<I, R, U>(rows: I) -> Result<Self, MatrixError>
    where
        T: Default,
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = U>,
        U: CastInto<T>,
    {
        let staged: Vec<Vec<U>> = rows.into_iter().map(|row| row.into_iter().collect()).collect();
        if staged.is_empty() {
            return Ok(Self::new());
        }
        let height = staged.len();
        let width = staged.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Err(MatrixError::Empty {
                rows: height,
                columns: 0,
            });
        }
        let mut buf = RawBuf::with_capacity(height.saturating_mul(width))?;
        for row in staged {
            let mut filled = 0;
            for value in row {
                // SAFETY: `height * width` slots were allocated and each row
                // contributes exactly `width` pushes.
                unsafe { buf.push_unchecked(value.cast()) };
                filled += 1;
            }
            for _ in filled..width {
                unsafe { buf.push_unchecked(T::default()) };
            }
        }
        Ok(Self {
            buf,
            rows: height,
            columns: width,
        })
    }

    /// Deep copy with per-element conversion into another element type.
    ///
    /// The capacity of the result equals its element count; slack capacity
    /// is not carried over. An empty source yields an empty, allocation-free
    /// result.
    pub fn convert<V>(&self) -> Result<Matrix<V>, MatrixError>
    where
        T: Clone + CastInto<V>,
    {
        let mut buf = RawBuf::with_capacity(self.len())?;
        for value in self.as_slice() {
            // SAFETY: exactly `len` slots were allocated.
            unsafe { buf.push_unchecked(value.clone().cast()) };
        }
        Ok(Matrix {
            buf,
            rows: self.rows,
            columns: self.columns,
        })
    }

    /// Fallible deep copy. Unlike [`Clone::clone`], allocation failure is
    /// reported as [`MatrixError::Alloc`] instead of aborting.
    pub fn try_clone(&self) -> Result<Self, MatrixError>
    where
        T: Clone,
    {
        self.convert()
    }

    /// Moves the contents out, leaving the empty matrix behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Number of rows.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline(always)]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of live elements, `rows() * columns()`.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Number of allocated element slots; always at least [`len`](Matrix::len).
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Whether the matrix is 0×0.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Reinterprets the live buffer under a new shape with the same total
    /// element count. No element is moved or rebuilt.
    pub fn reshape(&mut self, rows: usize, columns: usize) -> Result<(), MatrixError> {
        Self::check_shape(rows, columns)?;
        if rows.saturating_mul(columns) != self.len() {
            return Err(MatrixError::Size {
                left_rows: self.rows,
                left_columns: self.columns,
                right_rows: rows,
                right_columns: columns,
            });
        }
        self.rows = rows;
        self.columns = columns;
        Ok(())
    }

    /// Grows the allocation to hold at least `capacity` elements, keeping
    /// shape and element values. No-op if the capacity already suffices.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), MatrixError> {
        self.buf.reserve(capacity)
    }

    /// Reduces the capacity to exactly `rows() * columns()`.
    pub fn shrink_to_fit(&mut self) -> Result<(), MatrixError> {
        self.buf.shrink_to_fit()
    }

    /// Destroys all live elements (in reverse construction order) and sets
    /// the shape to 0×0. The allocation is kept for reuse.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.rows = 0;
        self.columns = 0;
    }

    /// Exchanges the entire state of two matrices in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Checked access to the element at `(row, column)`.
    ///
    /// Both indices are validated against their own axis, so `at(row,
    /// columns())` is out of range for every `row`, even though the flat
    /// offset may fall inside the live region.
    pub fn at(&self, row: usize, column: usize) -> Result<&T, MatrixError> {
        self.check_index(row, column)?;
        // SAFETY: both indices were just validated.
        Ok(unsafe { self.buf.get_unchecked(row * self.columns + column) })
    }

    /// Checked mutable access to the element at `(row, column)`.
    pub fn at_mut(&mut self, row: usize, column: usize) -> Result<&mut T, MatrixError> {
        self.check_index(row, column)?;
        // SAFETY: both indices were just validated.
        Ok(unsafe { self.buf.get_unchecked_mut(row * self.columns + column) })
    }

    fn check_index(&self, row: usize, column: usize) -> Result<(), MatrixError> {
        if row >= self.rows || column >= self.columns {
            return Err(MatrixError::Range {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// Reference to the element at `(row, column)` with no validation at
    /// all.
    ///
    /// # Safety
    /// `row < rows()` and `column < columns()` must hold; anything else is
    /// undefined behavior.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, row: usize, column: usize) -> &T {
        unsafe { self.buf.get_unchecked(row * self.columns + column) }
    }

    /// Mutable reference to the element at `(row, column)` with no
    /// validation at all.
    ///
    /// # Safety
    /// `row < rows()` and `column < columns()` must hold; anything else is
    /// undefined behavior.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, column: usize) -> &mut T {
        unsafe { self.buf.get_unchecked_mut(row * self.columns + column) }
    }

    /// The live elements in row-major order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// The live elements in row-major order, mutably.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Iterates over the live elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Converting assignment: replaces the contents with a converted copy
    /// of `source`, reusing the current allocation when it is large enough.
    ///
    /// When the allocation is reused, elements are overwritten in place;
    /// surplus live elements are destroyed in reverse order and missing
    /// ones are built in place. Otherwise the matrix is rebuilt via
    /// [`convert`](Matrix::convert).
    pub fn assign_from<U>(&mut self, source: &Matrix<U>) -> Result<(), MatrixError>
    where
        U: Clone + CastInto<T>,
    {
        let needed = source.len();
        if self.buf.capacity() < needed {
            *self = source.convert()?;
            return Ok(());
        }
        // The shape is zeroed while the buffer is reworked, so a panicking
        // element clone cannot leave a shape that points at dead slots.
        self.rows = 0;
        self.columns = 0;
        let overlap = self.buf.len().min(needed);
        for (dst, src) in self.buf.as_mut_slice()[..overlap]
            .iter_mut()
            .zip(source.as_slice())
        {
            *dst = src.clone().cast();
        }
        self.buf.truncate(needed);
        for src in &source.as_slice()[overlap..] {
            // SAFETY: `needed` is within the retained capacity.
            unsafe { self.buf.push_unchecked(src.clone().cast()) };
        }
        self.rows = source.rows;
        self.columns = source.columns;
        Ok(())
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(matrix) => matrix,
            // As for the std containers, allocation failure in the
            // infallible `Clone` is fatal.
            Err(_) => alloc_failure::<T>(self.len()),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.assign_from(source).is_err() {
            alloc_failure::<T>(source.len());
        }
    }
}

fn alloc_failure<T>(elements: usize) -> ! {
    match Layout::array::<T>(elements) {
        Ok(layout) => std::alloc::handle_alloc_error(layout),
        Err(_) => panic!("capacity overflow"),
    }
}

/// Unchecked-style element access: the flat offset `row * columns() +
/// column` is resolved against the live region with no per-axis
/// validation. For validated access use [`at`](Matrix::at).
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self.as_slice()[row * self.columns + column]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        let columns = self.columns;
        &mut self.as_mut_slice()[row * columns + column]
    }
}

/// Retrieves a row as a slice.
impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    fn index(&self, row: usize) -> &[T] {
        let start = row * self.columns;
        &self.as_slice()[start..start + self.columns]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, row: usize) -> &mut [T] {
        let start = row * self.columns;
        let end = start + self.columns;
        &mut self.as_mut_slice()[start..end]
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("capacity", &self.capacity())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<T, U> PartialEq<Matrix<U>> for Matrix<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U>) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Matrix<T> {}
