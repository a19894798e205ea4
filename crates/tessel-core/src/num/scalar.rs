// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Scalar Algebras
//!
//! `ValueAlgebra` implementations for the primitive number types.
//!
//! - `FloatAlgebra<T>` covers any `num_traits::Float` (in practice `f32` and
//!   `f64`) with plain IEEE arithmetic.
//! - `IntegerAlgebra<T>` covers every primitive integer width. Addition and
//!   scaling both saturate at the type's bounds; scaling by an `f64` rounds
//!   half away from zero (`NaN` maps to zero). `weighted_sum` is evaluated
//!   in `f64` and rounded once, so a convex combination of samples never
//!   leaves the range of those samples.
//!
//! Note: scaling and weighted sums pass through `f64` and therefore lose
//! precision for magnitudes above 2^53 (`i64`, `u64`, `i128`, `u128`).
//! Bounds are still respected, but the last few bits may differ from exact
//! arithmetic.

use crate::num::algebra::ValueAlgebra;
use num_traits::Float;
use std::marker::PhantomData;

/// Algebra over a primitive floating point type.
///
/// # Examples
///
/// ```rust
/// # use tessel_core::num::{FloatAlgebra, ValueAlgebra};
///
/// let alg = FloatAlgebra::<f32>::new();
/// let mut v = alg.construct();
/// alg.scale_by_double(4.0, &1.5, &mut v);
/// assert_eq!(v, 6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatAlgebra<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> FloatAlgebra<T> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for FloatAlgebra<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ValueAlgebra for FloatAlgebra<T>
where
    T: Float + Send + Sync,
{
    type Value = T;

    #[inline(always)]
    fn construct(&self) -> T {
        T::zero()
    }

    #[inline(always)]
    fn zero(&self, a: &mut T) {
        *a = T::zero();
    }

    #[inline(always)]
    fn assign(&self, from: &T, to: &mut T) {
        *to = *from;
    }

    #[inline(always)]
    fn add(&self, a: &T, b: &T, c: &mut T) {
        *c = *a + *b;
    }

    #[inline(always)]
    fn scale_by_double(&self, factor: f64, a: &T, b: &mut T) {
        let factor = T::from(factor).unwrap_or_else(T::nan);
        *b = *a * factor;
    }
}

/// Algebra over a primitive integer type of any width.
///
/// # Examples
///
/// ```rust
/// # use tessel_core::num::{IntegerAlgebra, ValueAlgebra};
///
/// let alg = IntegerAlgebra::<u8>::new();
/// let mut v = alg.construct();
///
/// alg.add(&250, &10, &mut v);
/// assert_eq!(v, u8::MAX); // saturates
///
/// alg.scale_by_double(2.5, &100, &mut v);
/// assert_eq!(v, 250);
/// alg.scale_by_double(3.0, &100, &mut v);
/// assert_eq!(v, u8::MAX); // saturates
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerAlgebra<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> IntegerAlgebra<T> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for IntegerAlgebra<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_integer_algebra_for {
    ($t:ty) => {
        impl ValueAlgebra for IntegerAlgebra<$t> {
            type Value = $t;

            #[inline(always)]
            fn construct(&self) -> $t {
                0
            }

            #[inline(always)]
            fn zero(&self, a: &mut $t) {
                *a = 0;
            }

            #[inline(always)]
            fn assign(&self, from: &$t, to: &mut $t) {
                *to = *from;
            }

            #[inline(always)]
            fn add(&self, a: &$t, b: &$t, c: &mut $t) {
                *c = a.saturating_add(*b);
            }

            #[inline(always)]
            fn scale_by_double(&self, factor: f64, a: &$t, b: &mut $t) {
                // Float-to-int `as` saturates and sends NaN to zero.
                *b = ((*a as f64) * factor).round() as $t;
            }

            #[inline]
            fn weighted_sum(
                &self,
                weights: &[f64],
                values: &[$t],
                _scratch: &mut [$t; 2],
                out: &mut $t,
            ) {
                debug_assert_eq!(weights.len(), values.len());
                let total: f64 = weights
                    .iter()
                    .zip(values)
                    .map(|(&w, &v)| w * v as f64)
                    .sum();
                *out = total.round() as $t;
            }
        }
    };
}

impl_integer_algebra_for!(i8);
impl_integer_algebra_for!(u8);
impl_integer_algebra_for!(i16);
impl_integer_algebra_for!(u16);
impl_integer_algebra_for!(i32);
impl_integer_algebra_for!(u32);
impl_integer_algebra_for!(i64);
impl_integer_algebra_for!(u64);
impl_integer_algebra_for!(i128);
impl_integer_algebra_for!(u128);
impl_integer_algebra_for!(isize);
impl_integer_algebra_for!(usize);
