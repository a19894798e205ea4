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

use crate::num::algebra::ValueAlgebra;
use num_complex::Complex;
use num_traits::Float;
use std::marker::PhantomData;

/// Algebra over `num_complex::Complex<T>`.
///
/// Addition is component-wise and scaling multiplies both the real and the
/// imaginary part by the same real factor, which is all resampling needs.
///
/// # Examples
///
/// ```rust
/// # use tessel_core::num::{ComplexAlgebra, ValueAlgebra};
/// # use num_complex::Complex;
///
/// let alg = ComplexAlgebra::<f64>::new();
/// let mut out = alg.construct();
/// alg.add(&Complex::new(1.0, 2.0), &Complex::new(0.5, -1.0), &mut out);
/// assert_eq!(out, Complex::new(1.5, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComplexAlgebra<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> ComplexAlgebra<T> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for ComplexAlgebra<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ValueAlgebra for ComplexAlgebra<T>
where
    T: Float + Send + Sync,
{
    type Value = Complex<T>;

    #[inline(always)]
    fn construct(&self) -> Complex<T> {
        Complex::new(T::zero(), T::zero())
    }

    #[inline(always)]
    fn zero(&self, a: &mut Complex<T>) {
        a.re = T::zero();
        a.im = T::zero();
    }

    #[inline(always)]
    fn assign(&self, from: &Complex<T>, to: &mut Complex<T>) {
        *to = *from;
    }

    #[inline(always)]
    fn add(&self, a: &Complex<T>, b: &Complex<T>, c: &mut Complex<T>) {
        *c = *a + *b;
    }

    #[inline(always)]
    fn scale_by_double(&self, factor: f64, a: &Complex<T>, b: &mut Complex<T>) {
        let factor = T::from(factor).unwrap_or_else(T::nan);
        *b = a.scale(factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_is_zero() {
        let alg = ComplexAlgebra::<f32>::new();
        assert_eq!(alg.construct(), Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_zero_resets_both_parts() {
        let alg = ComplexAlgebra::<f64>::new();
        let mut v = Complex::new(3.0, -4.0);
        alg.zero(&mut v);
        assert_eq!(v, Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_scale_by_double() {
        let alg = ComplexAlgebra::<f64>::new();
        let mut out = alg.construct();
        alg.scale_by_double(-2.0, &Complex::new(1.5, 0.25), &mut out);
        assert_eq!(out, Complex::new(-3.0, -0.5));
    }

    #[test]
    fn test_assign_copies() {
        let alg = ComplexAlgebra::<f64>::new();
        let src = Complex::new(9.0, 8.0);
        let mut out = alg.construct();
        alg.assign(&src, &mut out);
        assert_eq!(out, src);
    }
}
