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

use super::{Interpolator, Method, WeightedSamples};
use crate::coordinate::MappedCoordinate;
use tessel_core::{grid::GridPoint, num::ValueAlgebra};
use tessel_data::DimensionedDataSource;

/// Linear kernel.
///
/// With `p` the point of floor coordinates and `t[i]` the fraction on axis
/// `i`, the result is
///
/// ```text
/// 1/N * sum_i ( (1 - t[i]) * v(p) + t[i] * v(p + e_i) )
/// ```
///
/// where `e_i` is the unit step along axis `i`. The right neighbour is
/// clamped to the last index of its axis; it only lies past the end when
/// `t[i]` is exactly zero, so the clamp never changes the result.
///
/// The terms on `v(p)` are merged, so the sum has `1 + N` non-negative
/// weights adding up to one and is evaluated with a single
/// `ValueAlgebra::weighted_sum`. For integer algebras this rounds once and
/// the result stays within the contributing samples.
pub struct LinearKernel<V> {
    point: GridPoint,
    samples: WeightedSamples<V>,
}

impl<A> Interpolator<A> for LinearKernel<A::Value>
where
    A: ValueAlgebra,
{
    const METHOD: Method = Method::Linear;

    fn new(algebra: &A, num_dimensions: usize) -> Self {
        Self {
            point: GridPoint::zeros(num_dimensions),
            samples: WeightedSamples::new(algebra, num_dimensions + 1),
        }
    }

    fn interpolate<S>(
        &mut self,
        algebra: &A,
        source: &S,
        coords: &[MappedCoordinate],
        out: &mut A::Value,
    ) where
        S: DimensionedDataSource<A::Value> + ?Sized,
    {
        debug_assert_eq!(coords.len(), self.point.num_dimensions());
        debug_assert_eq!(self.samples.len(), coords.len() + 1);

        for (axis, c) in coords.iter().enumerate() {
            self.point[axis] = c.floor();
        }
        source.get(&self.point, self.samples.slot(0).1);

        let inv_n = 1.0 / coords.len() as f64;
        let mut base_weight = 0.0;
        for (axis, c) in coords.iter().enumerate() {
            let t = c.fraction();
            let last = source.dimension(axis) as i64 - 1;

            self.point[axis] = (c.floor() + 1).min(last);
            let (weight, neighbour) = self.samples.slot(axis + 1);
            source.get(&self.point, neighbour);
            *weight = t * inv_n;
            self.point[axis] = c.floor();

            base_weight += (1.0 - t) * inv_n;
        }
        *self.samples.slot(0).0 = base_weight;

        self.samples.write_sum(algebra, out);
    }
}
