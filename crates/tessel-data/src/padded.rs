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

//! # Padded Views
//!
//! `PaddedDataSource` wraps a source and answers reads at any lattice point,
//! including negative coordinates and coordinates past the last sample.
//! Reads inside the inner extents are forwarded unchanged; reads outside are
//! answered by the configured `Padding`:
//!
//! - `Padding::Constant(v)`: every outside point reads as `v` (zero padding
//!   uses the algebra's freshly constructed value).
//! - `Padding::Edge`: every outside point reads as the nearest sample, i.e.
//!   each coordinate is clamped into `[0, extent - 1]`.
//!
//! The view reports the *inner* extents, so algorithms map coordinates onto
//! the original grid and only their neighbourhood reads spill into the pad.
//! Cubic interpolation, which reads one sample before and two after each
//! floor coordinate, requires such a view.

use crate::{
    error::DataError,
    source::{AccessMode, DimensionedDataSource},
};
use tessel_core::{
    grid::{AxisExtents, GridPoint},
    num::ValueAlgebra,
};

/// How reads outside the inner extents are answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Padding<V> {
    /// Outside reads return this value.
    Constant(V),
    /// Outside reads return the nearest in-bounds sample.
    Edge,
}

/// A view that tolerates out-of-bounds reads.
///
/// # Examples
///
/// ```rust
/// # use tessel_core::grid::{AxisExtents, GridPoint};
/// # use tessel_data::{ArrayDataSource, DimensionedDataSource, PaddedDataSource};
///
/// let inner = ArrayDataSource::from_vec(AxisExtents::new(&[3]).unwrap(), vec![0, 10, 20]).unwrap();
/// let padded = PaddedDataSource::edge(inner);
///
/// let mut v = 0;
/// padded.get(&GridPoint::from([-1]), &mut v);
/// assert_eq!(v, 0);
/// padded.get(&GridPoint::from([4]), &mut v);
/// assert_eq!(v, 20);
/// ```
#[derive(Debug, Clone)]
pub struct PaddedDataSource<S, V> {
    inner: S,
    padding: Padding<V>,
}

impl<S, V> PaddedDataSource<S, V> {
    /// Wraps `inner` with the given padding.
    #[inline]
    pub fn new(inner: S, padding: Padding<V>) -> Self {
        Self { inner, padding }
    }

    /// Wraps `inner` with clamp-to-edge padding.
    #[inline]
    pub fn edge(inner: S) -> Self {
        Self::new(inner, Padding::Edge)
    }

    /// Wraps `inner` with zero padding, where zero is the algebra's freshly
    /// constructed value.
    #[inline]
    pub fn zero<A>(inner: S, algebra: &A) -> Self
    where
        A: ValueAlgebra<Value = V>,
    {
        Self::new(inner, Padding::Constant(algebra.construct()))
    }

    /// Returns the wrapped source.
    #[inline]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns the configured padding.
    #[inline]
    pub fn padding(&self) -> &Padding<V> {
        &self.padding
    }

    /// Unwraps the view.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, V> DimensionedDataSource<V> for PaddedDataSource<S, V>
where
    S: DimensionedDataSource<V>,
    V: Clone,
{
    type Storage = S::Storage;

    #[inline(always)]
    fn extents(&self) -> &AxisExtents {
        self.inner.extents()
    }

    fn get(&self, point: &GridPoint, out: &mut V) {
        let extents = self.inner.extents();
        if extents.contains(point) {
            self.inner.get(point, out);
            return;
        }

        assert!(
            point.num_dimensions() == extents.num_dimensions(),
            "called `PaddedDataSource::get` with a {}-dimensional point on {} extents",
            point.num_dimensions(),
            extents
        );

        match &self.padding {
            Padding::Constant(v) => out.clone_from(v),
            Padding::Edge => {
                let mut clamped = point.clone();
                for axis in 0..clamped.num_dimensions() {
                    let last = extents.dimension(axis) as i64 - 1;
                    clamped[axis] = clamped[axis].clamp(0, last);
                }
                self.inner.get(&clamped, out);
            }
        }
    }

    #[inline]
    fn set(&mut self, point: &GridPoint, value: &V) {
        self.inner.set(point, value);
    }

    #[inline(always)]
    fn access_mode(&self) -> AccessMode {
        self.inner.access_mode()
    }

    #[inline]
    fn allocate(&self, extents: &AxisExtents, zero: &V) -> Result<Self::Storage, DataError> {
        self.inner.allocate(extents, zero)
    }
}
