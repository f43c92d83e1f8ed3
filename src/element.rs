/*
 * SPDX-FileCopyrightText: 2025 The linalg developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Conversion and promotion contracts between element types.
//!
//! Two matrices participating in one arithmetic operation may store
//! different element types. [`CastFrom`]/[`CastInto`] define the per-element
//! conversion applied in that case, and [`Promote`] selects the element type
//! of each operator's result.

/// `CastInto : CastFrom = Into : From`. It's easier to use to specify bounds
/// on generic variables.
pub trait CastInto<W>: Sized {
    /// Call `W::cast_from(self)`
    fn cast(self) -> W;
}

/// Per-element conversion between participating element types.
///
/// For the primitive numeric types this is equivalent to calling `as`
/// between the two types. A custom element type implements `CastFrom` for
/// every other element type it is meant to be combined with.
pub trait CastFrom<W>: Sized {
    /// Convert `value` into a `Self`.
    fn cast_from(value: W) -> Self;
}

/// Reflexivity
impl<T> CastFrom<T> for T {
    #[inline(always)]
    fn cast_from(value: T) -> Self {
        value
    }
}

/// CastFrom implies CastInto
impl<T, U> CastInto<U> for T
where
    U: CastFrom<T>,
{
    #[inline(always)]
    fn cast(self) -> U {
        U::cast_from(self)
    }
}

macro_rules! impl_casts {
    ($base_type:ty, $($ty:ty,)*) => {$(
impl CastFrom<$base_type> for $ty {
    #[inline(always)]
    fn cast_from(value: $base_type) -> Self {
        value as $ty
    }
}
impl CastFrom<$ty> for $base_type {
    #[inline(always)]
    fn cast_from(value: $ty) -> $base_type {
        value as $base_type
    }
}
    )*
    impl_casts!($($ty,)*);
};
    () => {};
}

impl_casts!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64,);

// `char` converts into the integer types but not back, as in a plain `as`
// cast.
macro_rules! impl_char_casts {
    ($($ty:ty,)*) => {$(
impl CastFrom<char> for $ty {
    #[inline(always)]
    fn cast_from(value: char) -> Self {
        value as $ty
    }
}
    )*};
}

impl_char_casts!(i8, u8, i16, u16, i32, u32, i64, u64,);

/// Element type selected for the result of each binary operator applied to a
/// pair of (possibly different) element types.
///
/// The three associated types are deliberately independent: the element type
/// produced by a subtraction over a given pair does not have to match the
/// one produced by an addition over the same pair. For the primitive
/// implementations below they all coincide with the wider of the two
/// operands.
pub trait Promote<Rhs = Self> {
    /// Result element type of `Self + Rhs`.
    type Sum;
    /// Result element type of `Self - Rhs`.
    type Difference;
    /// Result element type of `Self * Rhs`.
    type Product;
}

/// Reflexivity
impl<T> Promote<T> for T {
    type Sum = T;
    type Difference = T;
    type Product = T;
}

macro_rules! impl_promotions {
    ($base_type:ty, $($ty:ty,)*) => {$(
impl Promote<$ty> for $base_type {
    type Sum = $ty;
    type Difference = $ty;
    type Product = $ty;
}
impl Promote<$base_type> for $ty {
    type Sum = $ty;
    type Difference = $ty;
    type Product = $ty;
}
    )*
    impl_promotions!($($ty,)*);
};
    () => {};
}

// The operand later in the ladder wins the promotion.
impl_promotions!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64,);

// `char` always promotes to the numeric operand.
macro_rules! impl_char_promotions {
    ($($ty:ty,)*) => {$(
impl Promote<char> for $ty {
    type Sum = $ty;
    type Difference = $ty;
    type Product = $ty;
}
impl Promote<$ty> for char {
    type Sum = $ty;
    type Difference = $ty;
    type Product = $ty;
}
    )*};
}

impl_char_promotions!(i8, u8, i16, u16, i32, u32, i64, u64,);
