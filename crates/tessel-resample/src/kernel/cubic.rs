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

/// Catmull-Rom basis. Row `k` holds the `t^3`, `t^2`, `t` and constant
/// coefficients of the weight on the sample at offset `k - 1`.
///
/// Summing the rows against `y(-1), y(0), y(1), y(2)` gives the polynomial
/// coefficients `a = (-y(-1) + 3 y(0) - 3 y(1) + y(2)) / 2`,
/// `b = y(-1) - 5/2 y(0) + 2 y(1) - 1/2 y(2)`, `c = (y(1) - y(-1)) / 2` and
/// `d = y(0)`.
const BASIS: [[f64; 4]; 4] = [
    [-0.5, 1.0, -0.5, 0.0],
    [1.5, -2.5, 0.0, 1.0],
    [-1.5, 2.0, 0.5, 0.0],
    [0.5, -0.5, 0.0, 0.0],
];

#[inline(always)]
fn basis_weight(row: &[f64; 4], t: f64) -> f64 {
    ((row[0] * t + row[1]) * t + row[2]) * t + row[3]
}

/// Cubic (Catmull-Rom) kernel.
///
/// Along every axis the four samples at offsets `-1, 0, +1, +2` from the
/// floor coordinate are fitted by `f(x) = a x^3 + b x^2 + c x + d` and `f` is
/// evaluated at the axis fraction. The result is the mean of the per-axis
/// values. At a fraction of zero `f` evaluates to `d = y(0)`, so points that
/// map onto input samples reproduce them.
///
/// All `4 N` samples are combined in one `ValueAlgebra::weighted_sum`, with
/// the basis weights divided by `N`. The source must answer reads one sample
/// before and two samples after every lattice point.
pub struct CubicKernel<V> {
    point: GridPoint,
    samples: WeightedSamples<V>,
}

impl<A> Interpolator<A> for CubicKernel<A::Value>
where
    A: ValueAlgebra,
{
    const METHOD: Method = Method::Cubic;

    fn new(algebra: &A, num_dimensions: usize) -> Self {
        Self {
            point: GridPoint::zeros(num_dimensions),
            samples: WeightedSamples::new(algebra, 4 * num_dimensions),
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
        debug_assert_eq!(self.samples.len(), 4 * coords.len());

        for (axis, c) in coords.iter().enumerate() {
            self.point[axis] = c.floor();
        }

        let inv_n = 1.0 / coords.len() as f64;
        for (axis, c) in coords.iter().enumerate() {
            let floor = c.floor();
            let t = c.fraction();
            for (k, (offset, row)) in (-1i64..=2).zip(BASIS.iter()).enumerate() {
                self.point[axis] = floor + offset;
                let (weight, sample) = self.samples.slot(4 * axis + k);
                source.get(&self.point, sample);
                *weight = basis_weight(row, t) * inv_n;
            }
            self.point[axis] = floor;
        }

        self.samples.write_sum(algebra, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tessel_core::{grid::AxisExtents, num::FloatAlgebra};
    use tessel_data::{ArrayDataSource, PaddedDataSource};

    fn eval<S>(source: &S, coords: &[MappedCoordinate]) -> f64
    where
        S: DimensionedDataSource<f64>,
    {
        let alg = FloatAlgebra::<f64>::new();
        let mut kernel: CubicKernel<f64> = Interpolator::new(&alg, coords.len());
        let mut out = f64::NAN;
        kernel.interpolate(&alg, source, coords, &mut out);
        out
    }

    fn ramp(values: Vec<f64>) -> PaddedDataSource<ArrayDataSource<f64>, f64> {
        let extents = AxisExtents::new(&[values.len()]).unwrap();
        PaddedDataSource::edge(ArrayDataSource::from_vec(extents, values).unwrap())
    }

    #[test]
    fn test_zero_fraction_reproduces_sample() {
        let src = ramp(vec![0.0, 10.0, 20.0]);
        for i in 0..3 {
            assert_eq!(eval(&src, &[MappedCoordinate::new(i, 0.0)]), 10.0 * i as f64);
        }
    }

    #[test]
    fn test_reproduces_linear_ramp_in_interior() {
        let src = ramp(vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_relative_eq!(eval(&src, &[MappedCoordinate::new(1, 0.5)]), 1.5);
        assert_relative_eq!(eval(&src, &[MappedCoordinate::new(2, 0.25)]), 2.25);
    }

    #[test]
    fn test_catmull_rom_midpoint() {
        // y(-1), y0, y1, y2 = 0, 0, 1, 1 → f(0.5) = 0.5
        let src = ramp(vec![0.0, 0.0, 1.0, 1.0]);
        assert_relative_eq!(eval(&src, &[MappedCoordinate::new(1, 0.5)]), 0.5);
        // y = 0, 1, 0, 0 at t = 0.5: a = 1.5, b = -2.5, c = 0, d = 1 → 0.5625
        let src = ramp(vec![0.0, 1.0, 0.0, 0.0]);
        assert_relative_eq!(eval(&src, &[MappedCoordinate::new(1, 0.5)]), 0.5625);
    }

    #[test]
    fn test_basis_rows_sum_to_polynomial_coefficients() {
        // y = 0, 1, 0, 0: a = 1.5, b = -2.5, c = 0, d = 1
        assert_eq!(BASIS[1], [1.5, -2.5, 0.0, 1.0]);

        for t in [0.0, 0.25, 0.5, 0.75] {
            let total: f64 = BASIS.iter().map(|row| basis_weight(row, t)).sum();
            assert_relative_eq!(total, 1.0, epsilon = 1e-12);
        }
        assert_eq!(basis_weight(&BASIS[1], 0.0), 1.0);
        assert_eq!(basis_weight(&BASIS[0], 0.0), 0.0);
    }

    #[test]
    #[should_panic(expected = "outside of extents")]
    fn test_unpadded_border_read_panics() {
        let src = ArrayDataSource::from_vec(AxisExtents::new(&[3]).unwrap(), vec![0.0, 1.0, 2.0])
            .unwrap();
        let _ = eval(&src, &[MappedCoordinate::new(0, 0.0)]);
    }
}
