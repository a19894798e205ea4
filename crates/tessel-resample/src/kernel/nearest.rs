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

use super::{Interpolator, Method};
use crate::coordinate::MappedCoordinate;
use tessel_core::{grid::GridPoint, num::ValueAlgebra};
use tessel_data::DimensionedDataSource;

/// Nearest-neighbor kernel: rounds every axis to the closest input sample
/// (ties round up) and copies that single sample.
#[derive(Debug, Clone)]
pub struct NearestKernel<V> {
    point: GridPoint,
    _value: std::marker::PhantomData<fn() -> V>,
}

impl<A> Interpolator<A> for NearestKernel<A::Value>
where
    A: ValueAlgebra,
{
    const METHOD: Method = Method::NearestNeighbor;

    #[inline]
    fn new(_algebra: &A, num_dimensions: usize) -> Self {
        Self {
            point: GridPoint::zeros(num_dimensions),
            _value: std::marker::PhantomData,
        }
    }

    #[inline]
    fn interpolate<S>(
        &mut self,
        _algebra: &A,
        source: &S,
        coords: &[MappedCoordinate],
        out: &mut A::Value,
    ) where
        S: DimensionedDataSource<A::Value> + ?Sized,
    {
        debug_assert_eq!(coords.len(), self.point.num_dimensions());
        for (axis, c) in coords.iter().enumerate() {
            self.point[axis] = c.floor() + (c.fraction() + 0.5) as i64;
        }
        source.get(&self.point, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_core::{grid::AxisExtents, num::FloatAlgebra};
    use tessel_data::ArrayDataSource;

    fn eval(source: &ArrayDataSource<f64>, coords: &[MappedCoordinate]) -> f64 {
        let alg = FloatAlgebra::<f64>::new();
        let mut kernel: NearestKernel<f64> = Interpolator::new(&alg, coords.len());
        let mut out = 0.0;
        kernel.interpolate(&alg, source, coords, &mut out);
        out
    }

    #[test]
    fn test_rounds_to_closest_sample() {
        let src =
            ArrayDataSource::from_vec(AxisExtents::new(&[3]).unwrap(), vec![1.0, 2.0, 3.0])
                .unwrap();
        assert_eq!(eval(&src, &[MappedCoordinate::new(0, 0.49)]), 1.0);
        assert_eq!(eval(&src, &[MappedCoordinate::new(0, 0.5)]), 2.0);
        assert_eq!(eval(&src, &[MappedCoordinate::new(1, 0.75)]), 3.0);
        assert_eq!(eval(&src, &[MappedCoordinate::new(2, 0.0)]), 3.0);
    }

    #[test]
    fn test_each_axis_rounds_independently() {
        let src = ArrayDataSource::from_vec(
            AxisExtents::new(&[2, 2]).unwrap(),
            vec![1.0, 2.0, 3.0, 4.0],
        )
        .unwrap();
        let coords = [MappedCoordinate::new(0, 0.9), MappedCoordinate::new(0, 0.1)];
        assert_eq!(eval(&src, &coords), 3.0);
    }
}
