/*
 * SPDX-FileCopyrightText: 2025 The linalg developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Arithmetic on matrices.
//!
//! Every operation exists in two forms: a fallible `try_*` method that
//! reports shape violations as [`MatrixError`], and operator sugar on
//! references (`&a + &b`, `&a * 2`, `a += &b`, …) that panics on the same
//! violations.
//!
//! The two operands may store different element types. Compound assignment
//! converts each right-hand element into the left operand's element type;
//! the new-container forms first copy the left operand converted to the
//! result type selected by [`Promote`], then delegate to the compound
//! operation.

use crate::element::{CastInto, Promote};
use crate::error::MatrixError;
use crate::matrix::Matrix;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

impl<T> Matrix<T> {
    /// `Empty` if either operand is empty, then `Size` unless the shapes
    /// match exactly.
    fn check_elementwise<U>(&self, rhs: &Matrix<U>) -> Result<(), MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::Empty {
                rows: self.rows(),
                columns: self.columns(),
            });
        }
        if rhs.is_empty() {
            return Err(MatrixError::Empty {
                rows: rhs.rows(),
                columns: rhs.columns(),
            });
        }
        if self.rows() != rhs.rows() || self.columns() != rhs.columns() {
            return Err(MatrixError::Size {
                left_rows: self.rows(),
                left_columns: self.columns(),
                right_rows: rhs.rows(),
                right_columns: rhs.columns(),
            });
        }
        Ok(())
    }

    /// Elementwise addition in place. Each right-hand element is converted
    /// to `T` before being added.
    pub fn try_add_assign<U>(&mut self, rhs: &Matrix<U>) -> Result<(), MatrixError>
    where
        T: AddAssign,
        U: Clone + CastInto<T>,
    {
        self.check_elementwise(rhs)?;
        for (dst, src) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *dst += src.clone().cast();
        }
        Ok(())
    }

    /// Elementwise subtraction in place. Each right-hand element is
    /// converted to `T` before being subtracted.
    pub fn try_sub_assign<U>(&mut self, rhs: &Matrix<U>) -> Result<(), MatrixError>
    where
        T: SubAssign,
        U: Clone + CastInto<T>,
    {
        self.check_elementwise(rhs)?;
        for (dst, src) in self.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *dst -= src.clone().cast();
        }
        Ok(())
    }

    /// Matrix product in place: `self = self * rhs`.
    ///
    /// Fails with [`MatrixError::Empty`] if either operand is empty and
    /// with [`MatrixError::Size`] unless `self.columns() == rhs.rows()`.
    /// The product is accumulated into a fresh `rows() × rhs.columns()`
    /// matrix, which then replaces `self`; on failure `self` is untouched.
    pub fn try_mul_assign<U>(&mut self, rhs: &Matrix<U>) -> Result<(), MatrixError>
    where
        T: Default + Clone + Mul<Output = T> + AddAssign,
        U: Clone + CastInto<T>,
    {
        if self.is_empty() {
            return Err(MatrixError::Empty {
                rows: self.rows(),
                columns: self.columns(),
            });
        }
        if rhs.is_empty() {
            return Err(MatrixError::Empty {
                rows: rhs.rows(),
                columns: rhs.columns(),
            });
        }
        if self.columns() != rhs.rows() {
            return Err(MatrixError::Size {
                left_rows: self.rows(),
                left_columns: self.columns(),
                right_rows: rhs.rows(),
                right_columns: rhs.columns(),
            });
        }
        let mut product = Matrix::<T>::with_shape(self.rows(), rhs.columns())?;
        for i in 0..self.rows() {
            for j in 0..rhs.columns() {
                let mut cell = T::default();
                for k in 0..self.columns() {
                    cell += self[(i, k)].clone() * rhs[(k, j)].clone().cast();
                }
                product[(i, j)] = cell;
            }
        }
        *self = product;
        Ok(())
    }

    /// Multiplies every element in place by `factor`, converted to `T`.
    pub fn try_scale<S>(&mut self, factor: S) -> Result<(), MatrixError>
    where
        T: MulAssign + Clone,
        S: CastInto<T>,
    {
        if self.is_empty() {
            return Err(MatrixError::Empty {
                rows: self.rows(),
                columns: self.columns(),
            });
        }
        let factor: T = factor.cast();
        for value in self.as_mut_slice() {
            *value *= factor.clone();
        }
        Ok(())
    }

    /// Returns `self + rhs` with the element type promoted to
    /// [`Promote::Sum`]. Neither operand is modified.
    pub fn try_add<U>(&self, rhs: &Matrix<U>) -> Result<Matrix<<T as Promote<U>>::Sum>, MatrixError>
    where
        T: Promote<U> + Clone + CastInto<<T as Promote<U>>::Sum>,
        U: Clone + CastInto<<T as Promote<U>>::Sum>,
        <T as Promote<U>>::Sum: AddAssign,
    {
        let mut sum: Matrix<<T as Promote<U>>::Sum> = self.convert()?;
        sum.try_add_assign(rhs)?;
        Ok(sum)
    }

    /// Returns `self - rhs` with the element type promoted to
    /// [`Promote::Difference`]. Neither operand is modified.
    pub fn try_sub<U>(
        &self,
        rhs: &Matrix<U>,
    ) -> Result<Matrix<<T as Promote<U>>::Difference>, MatrixError>
    where
        T: Promote<U> + Clone + CastInto<<T as Promote<U>>::Difference>,
        U: Clone + CastInto<<T as Promote<U>>::Difference>,
        <T as Promote<U>>::Difference: SubAssign,
    {
        let mut difference: Matrix<<T as Promote<U>>::Difference> = self.convert()?;
        difference.try_sub_assign(rhs)?;
        Ok(difference)
    }

    /// Returns the matrix product `self * rhs` with the element type
    /// promoted to [`Promote::Product`]. Neither operand is modified.
    pub fn try_mul<U>(
        &self,
        rhs: &Matrix<U>,
    ) -> Result<Matrix<<T as Promote<U>>::Product>, MatrixError>
    where
        T: Promote<U> + Clone + CastInto<<T as Promote<U>>::Product>,
        U: Clone + CastInto<<T as Promote<U>>::Product>,
        <T as Promote<U>>::Product: Default + Clone + Mul<Output = <T as Promote<U>>::Product> + AddAssign,
    {
        let mut product: Matrix<<T as Promote<U>>::Product> = self.convert()?;
        product.try_mul_assign(rhs)?;
        Ok(product)
    }

    /// Returns `self * factor` with the element type promoted to
    /// [`Promote::Product`]. `self` is not modified.
    pub fn try_scaled<S>(&self, factor: S) -> Result<Matrix<<T as Promote<S>>::Product>, MatrixError>
    where
        T: Promote<S> + Clone + CastInto<<T as Promote<S>>::Product>,
        S: CastInto<<T as Promote<S>>::Product>,
        <T as Promote<S>>::Product: MulAssign + Clone,
    {
        let mut scaled: Matrix<<T as Promote<S>>::Product> = self.convert()?;
        scaled.try_scale(factor)?;
        Ok(scaled)
    }
}

fn expect_op<O>(result: Result<O, MatrixError>) -> O {
    match result {
        Ok(value) => value,
        Err(e) => panic!("matrix operation failed: {e}"),
    }
}

impl<'a, 'b, T, U> Add<&'b Matrix<U>> for &'a Matrix<T>
where
    T: Promote<U> + Clone + CastInto<<T as Promote<U>>::Sum>,
    U: Clone + CastInto<<T as Promote<U>>::Sum>,
    <T as Promote<U>>::Sum: AddAssign,
{
    type Output = Matrix<<T as Promote<U>>::Sum>;

    /// See [`Matrix::try_add`].
    ///
    /// # Panics
    /// Panics if an operand is empty or the shapes differ.
    fn add(self, rhs: &'b Matrix<U>) -> Self::Output {
        expect_op(self.try_add(rhs))
    }
}

impl<'a, 'b, T, U> Sub<&'b Matrix<U>> for &'a Matrix<T>
where
    T: Promote<U> + Clone + CastInto<<T as Promote<U>>::Difference>,
    U: Clone + CastInto<<T as Promote<U>>::Difference>,
    <T as Promote<U>>::Difference: SubAssign,
{
    type Output = Matrix<<T as Promote<U>>::Difference>;

    /// See [`Matrix::try_sub`].
    ///
    /// # Panics
    /// Panics if an operand is empty or the shapes differ.
    fn sub(self, rhs: &'b Matrix<U>) -> Self::Output {
        expect_op(self.try_sub(rhs))
    }
}

impl<'a, 'b, T, U> Mul<&'b Matrix<U>> for &'a Matrix<T>
where
    T: Promote<U> + Clone + CastInto<<T as Promote<U>>::Product>,
    U: Clone + CastInto<<T as Promote<U>>::Product>,
    <T as Promote<U>>::Product: Default + Clone + Mul<Output = <T as Promote<U>>::Product> + AddAssign,
{
    type Output = Matrix<<T as Promote<U>>::Product>;

    /// See [`Matrix::try_mul`].
    ///
    /// # Panics
    /// Panics if an operand is empty or the inner dimensions differ.
    fn mul(self, rhs: &'b Matrix<U>) -> Self::Output {
        expect_op(self.try_mul(rhs))
    }
}

impl<'a, T, U> AddAssign<&'a Matrix<U>> for Matrix<T>
where
    T: AddAssign,
    U: Clone + CastInto<T>,
{
    /// See [`Matrix::try_add_assign`].
    ///
    /// # Panics
    /// Panics if an operand is empty or the shapes differ.
    fn add_assign(&mut self, rhs: &'a Matrix<U>) {
        expect_op(self.try_add_assign(rhs));
    }
}

impl<'a, T, U> SubAssign<&'a Matrix<U>> for Matrix<T>
where
    T: SubAssign,
    U: Clone + CastInto<T>,
{
    /// See [`Matrix::try_sub_assign`].
    ///
    /// # Panics
    /// Panics if an operand is empty or the shapes differ.
    fn sub_assign(&mut self, rhs: &'a Matrix<U>) {
        expect_op(self.try_sub_assign(rhs));
    }
}

impl<'a, T, U> MulAssign<&'a Matrix<U>> for Matrix<T>
where
    T: Default + Clone + Mul<Output = T> + AddAssign,
    U: Clone + CastInto<T>,
{
    /// See [`Matrix::try_mul_assign`].
    ///
    /// # Panics
    /// Panics if an operand is empty or the inner dimensions differ.
    fn mul_assign(&mut self, rhs: &'a Matrix<U>) {
        expect_op(self.try_mul_assign(rhs));
    }
}

// Scalar operands are supported per primitive type; a blanket impl would
// overlap the matrix-by-matrix operator impls above.
macro_rules! impl_scalar_ops {
    ($($ty:ty,)*) => {$(
impl<T> MulAssign<$ty> for Matrix<T>
where
    T: MulAssign + Clone,
    $ty: CastInto<T>,
{
    /// See [`Matrix::try_scale`].
    ///
    /// # Panics
    /// Panics if the matrix is empty.
    fn mul_assign(&mut self, factor: $ty) {
        expect_op(self.try_scale(factor));
    }
}

impl<'a, T> Mul<$ty> for &'a Matrix<T>
where
    T: Promote<$ty> + Clone + CastInto<<T as Promote<$ty>>::Product>,
    $ty: CastInto<<T as Promote<$ty>>::Product>,
    <T as Promote<$ty>>::Product: MulAssign + Clone,
{
    type Output = Matrix<<T as Promote<$ty>>::Product>;

    /// See [`Matrix::try_scaled`].
    ///
    /// # Panics
    /// Panics if the matrix is empty.
    fn mul(self, factor: $ty) -> Self::Output {
        expect_op(self.try_scaled(factor))
    }
}

impl<'a, T> Mul<&'a Matrix<T>> for $ty
where
    T: Promote<$ty> + Clone + CastInto<<T as Promote<$ty>>::Product>,
    $ty: CastInto<<T as Promote<$ty>>::Product>,
    <T as Promote<$ty>>::Product: MulAssign + Clone,
{
    type Output = Matrix<<T as Promote<$ty>>::Product>;

    /// See [`Matrix::try_scaled`].
    ///
    /// # Panics
    /// Panics if the matrix is empty.
    fn mul(self, matrix: &'a Matrix<T>) -> Self::Output {
        expect_op(matrix.try_scaled(self))
    }
}
    )*};
}

impl_scalar_ops!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64,);
