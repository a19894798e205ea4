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

//! # Hypercomplex Values
//!
//! A fixed-size array of real components interpreted as a hypercomplex
//! number: `Hypercomplex<T, 4>` is a quaternion `a + bi + cj + dk` and
//! `Hypercomplex<T, 8>` an octonion. Component 0 is always the real part.
//!
//! Resampling only ever adds values and scales them by a real factor, and both
//! of those operations act component-wise on every Cayley–Dickson algebra.
//! The algebra here therefore stays agnostic of the multiplication table.

use crate::num::algebra::ValueAlgebra;
use num_traits::Float;
use std::marker::PhantomData;

/// A hypercomplex number with `N` real components.
///
/// # Examples
///
/// ```rust
/// # use tessel_core::num::Quaternion;
///
/// let q = Quaternion::new([1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(q.real(), 1.0);
/// assert_eq!(q.component(3), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hypercomplex<T, const N: usize> {
    components: [T; N],
}

/// A quaternion `a + bi + cj + dk`.
pub type Quaternion<T> = Hypercomplex<T, 4>;

/// An octonion with one real and seven imaginary components.
pub type Octonion<T> = Hypercomplex<T, 8>;

impl<T, const N: usize> Hypercomplex<T, N>
where
    T: Float,
{
    /// Creates a value from its components, real part first.
    #[inline]
    pub const fn new(components: [T; N]) -> Self {
        Self { components }
    }

    /// Creates the additive identity.
    #[inline]
    pub fn zero() -> Self {
        Self {
            components: [T::zero(); N],
        }
    }

    /// Returns the real part (component 0).
    #[inline]
    pub fn real(&self) -> T {
        self.components[0]
    }

    /// Returns the component at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn component(&self, index: usize) -> T {
        assert!(
            index < N,
            "called `Hypercomplex::component` with index out of bounds: the len is {} but the index is {}",
            N,
            index
        );
        self.components[index]
    }

    /// Overwrites the component at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn set_component(&mut self, index: usize, value: T) {
        assert!(
            index < N,
            "called `Hypercomplex::set_component` with index out of bounds: the len is {} but the index is {}",
            N,
            index
        );
        self.components[index] = value;
    }

    /// Returns all components, real part first.
    #[inline]
    pub fn components(&self) -> &[T; N] {
        &self.components
    }
}

impl<T, const N: usize> Default for Hypercomplex<T, N>
where
    T: Float,
{
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

/// Component-wise algebra over `Hypercomplex<T, N>`.
///
/// # Examples
///
/// ```rust
/// # use tessel_core::num::{HypercomplexAlgebra, Octonion, ValueAlgebra};
///
/// let alg = HypercomplexAlgebra::<f64, 8>::new();
/// let o = Octonion::new([1.0; 8]);
/// let mut out = alg.construct();
/// alg.scale_by_double(0.5, &o, &mut out);
/// assert_eq!(out.components(), &[0.5; 8]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HypercomplexAlgebra<T, const N: usize> {
    _marker: PhantomData<fn() -> T>,
}

impl<T, const N: usize> HypercomplexAlgebra<T, N> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T, const N: usize> Default for HypercomplexAlgebra<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> ValueAlgebra for HypercomplexAlgebra<T, N>
where
    T: Float + Send + Sync,
{
    type Value = Hypercomplex<T, N>;

    #[inline(always)]
    fn construct(&self) -> Self::Value {
        Hypercomplex::zero()
    }

    #[inline(always)]
    fn zero(&self, a: &mut Self::Value) {
        a.components = [T::zero(); N];
    }

    #[inline(always)]
    fn assign(&self, from: &Self::Value, to: &mut Self::Value) {
        to.components = from.components;
    }

    #[inline(always)]
    fn add(&self, a: &Self::Value, b: &Self::Value, c: &mut Self::Value) {
        for ((out, x), y) in c
            .components
            .iter_mut()
            .zip(a.components.iter())
            .zip(b.components.iter())
        {
            *out = *x + *y;
        }
    }

    #[inline(always)]
    fn scale_by_double(&self, factor: f64, a: &Self::Value, b: &mut Self::Value) {
        let factor = T::from(factor).unwrap_or_else(T::nan);
        for (out, x) in b.components.iter_mut().zip(a.components.iter()) {
            *out = *x * factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quaternion_accessors() {
        let mut q = Quaternion::new([1.0f64, -2.0, 3.5, 0.0]);
        assert_eq!(q.real(), 1.0);
        assert_eq!(q.component(2), 3.5);

        q.set_component(3, 9.0);
        assert_eq!(q.components(), &[1.0, -2.0, 3.5, 9.0]);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_component_out_of_bounds_panics() {
        let q = Quaternion::<f32>::zero();
        let _ = q.component(4);
    }

    #[test]
    fn test_quaternion_add() {
        let alg = HypercomplexAlgebra::<f64, 4>::new();
        let a = Quaternion::new([1.0, 2.0, 3.0, 4.0]);
        let b = Quaternion::new([0.5, 0.5, -3.0, 1.0]);
        let mut c = alg.construct();
        alg.add(&a, &b, &mut c);
        assert_eq!(c.components(), &[1.5, 2.5, 0.0, 5.0]);
    }

    #[test]
    fn test_octonion_zero_and_assign() {
        let alg = HypercomplexAlgebra::<f32, 8>::new();
        let src = Octonion::new([2.0; 8]);
        let mut dst = alg.construct();

        alg.assign(&src, &mut dst);
        assert_eq!(dst, src);

        alg.zero(&mut dst);
        assert_eq!(dst, Octonion::zero());
    }

    #[test]
    fn test_default_is_zero() {
        let q: Quaternion<f64> = Default::default();
        assert_eq!(q, Quaternion::zero());
    }
}
