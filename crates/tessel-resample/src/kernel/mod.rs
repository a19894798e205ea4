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

//! # Interpolation Kernels
//!
//! A kernel turns one mapped input coordinate into one output value. Kernels
//! are pure per point, but each owns the scratch values it needs so a worker
//! can evaluate millions of points without constructing a single new value:
//! one kernel instance is created per worker and reused for every point of
//! its partition.
//!
//! | Method            | Reads per point | Needs padding |
//! |-------------------|-----------------|---------------|
//! | `NearestNeighbor` | 1               | no            |
//! | `Linear`          | 1 + N           | no            |
//! | `Cubic`           | 4 N             | yes           |
//!
//! Linear and Cubic interpolate along every axis independently, holding the
//! other axes at their floor coordinate, and return the unweighted mean of
//! the N per-axis estimates. This is not tensor-product (bilinear, bicubic)
//! interpolation.

pub mod cubic;
pub mod linear;
pub mod nearest;

pub use cubic::CubicKernel;
pub use linear::LinearKernel;
pub use nearest::NearestKernel;

use crate::coordinate::MappedCoordinate;
use tessel_core::num::ValueAlgebra;
use tessel_data::DimensionedDataSource;

/// Interpolation method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Copy the closest input sample.
    NearestNeighbor,
    /// Mean of per-axis linear estimates.
    #[default]
    Linear,
    /// Mean of per-axis cubic (Catmull-Rom) estimates. The input must
    /// tolerate reads one sample before and two samples after every lattice
    /// point, typically through a `PaddedDataSource`.
    Cubic,
}

impl Method {
    /// Returns the method name used in logs.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NearestNeighbor => "nearest-neighbor",
            Self::Linear => "linear",
            Self::Cubic => "cubic",
        }
    }

    /// Returns `true` if the method reads outside the nominal input bounds.
    #[inline]
    pub const fn requires_padding(&self) -> bool {
        matches!(self, Self::Cubic)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A per-point interpolation kernel over values of algebra `A`.
pub trait Interpolator<A>
where
    A: ValueAlgebra,
{
    /// The method this kernel implements.
    const METHOD: Method;

    /// Creates a kernel for sources with `num_dimensions` axes, constructing
    /// all scratch values up front.
    fn new(algebra: &A, num_dimensions: usize) -> Self;

    /// Interpolates `source` at the mapped coordinate `coords` (one entry per
    /// axis) and writes the result into `out`.
    fn interpolate<S>(
        &mut self,
        algebra: &A,
        source: &S,
        coords: &[MappedCoordinate],
        out: &mut A::Value,
    ) where
        S: DimensionedDataSource<A::Value> + ?Sized;
}

/// The samples one kernel evaluation reads, each paired with its weight.
///
/// Kernels express their result as a single weighted sum of input samples
/// and hand it to `ValueAlgebra::weighted_sum`. Sample slots and scratch
/// values are constructed once, so evaluating a point never constructs a
/// value.
pub(crate) struct WeightedSamples<V> {
    weights: Vec<f64>,
    values: Vec<V>,
    scratch: [V; 2],
}

impl<V> WeightedSamples<V> {
    pub(crate) fn new<A>(algebra: &A, len: usize) -> Self
    where
        A: ValueAlgebra<Value = V>,
    {
        Self {
            weights: vec![0.0; len],
            values: (0..len).map(|_| algebra.construct()).collect(),
            scratch: [algebra.construct(), algebra.construct()],
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns the weight and the sample slot at `index`.
    #[inline(always)]
    pub(crate) fn slot(&mut self, index: usize) -> (&mut f64, &mut V) {
        (&mut self.weights[index], &mut self.values[index])
    }

    #[inline]
    pub(crate) fn write_sum<A>(&mut self, algebra: &A, out: &mut V)
    where
        A: ValueAlgebra<Value = V>,
    {
        algebra.weighted_sum(&self.weights, &self.values, &mut self.scratch, out);
    }
}
