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

use proptest::prelude::*;
use tessel_core::{
    grid::{AxisExtents, GridIterator, GridPoint},
    num::{FloatAlgebra, IntegerAlgebra},
};
use tessel_data::{ArrayDataSource, DimensionedDataSource, PaddedDataSource};
use tessel_resample::{
    coordinate::{CoordinateMap, MappedCoordinate},
    resample_cubic, resample_linear, resample_nearest,
};

/// Input grids of one to three axes with arbitrary finite values.
fn input_grid() -> impl Strategy<Value = ArrayDataSource<f64>> {
    prop::collection::vec(1usize..7, 1..4).prop_flat_map(|dims| {
        let len = dims.iter().product::<usize>();
        prop::collection::vec(-1.0e3f64..1.0e3, len).prop_map(move |values| {
            ArrayDataSource::from_vec(AxisExtents::new(&dims).unwrap(), values).unwrap()
        })
    })
}

/// An input grid together with output extents of the same dimensionality.
fn input_and_target() -> impl Strategy<Value = (ArrayDataSource<f64>, Vec<usize>)> {
    input_grid().prop_flat_map(|input| {
        let n = input.num_dimensions();
        (Just(input), prop::collection::vec(1usize..10, n))
    })
}

/// Integer input grids of one to three axes with their output extents.
fn integer_input_and_target() -> impl Strategy<Value = (ArrayDataSource<i32>, Vec<usize>)> {
    prop::collection::vec(1usize..6, 1..4).prop_flat_map(|dims| {
        let len = dims.iter().product::<usize>();
        let n = dims.len();
        (
            prop::collection::vec(-1000i32..1000, len).prop_map(move |values| {
                ArrayDataSource::from_vec(AxisExtents::new(&dims).unwrap(), values).unwrap()
            }),
            prop::collection::vec(1usize..10, n),
        )
    })
}

/// Minimum and maximum of the samples a linear evaluation at `coords` reads.
fn contributing_range<V>(input: &ArrayDataSource<V>, coords: &[MappedCoordinate]) -> (V, V)
where
    V: Copy + PartialOrd + Default + Send + Sync,
{
    let n = coords.len();
    let mut base = GridPoint::zeros(n);
    for (axis, c) in coords.iter().enumerate() {
        base[axis] = c.floor();
    }
    let mut sample = V::default();
    input.get(&base, &mut sample);
    let (mut lo, mut hi) = (sample, sample);
    for (axis, c) in coords.iter().enumerate() {
        let mut neighbour = base.clone();
        neighbour[axis] = (c.floor() + 1).min(input.dimension(axis) as i64 - 1);
        input.get(&neighbour, &mut sample);
        if sample < lo {
            lo = sample;
        }
        if sample > hi {
            hi = sample;
        }
    }
    (lo, hi)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_nearest_identity_on_same_extents(input in input_grid(), max_pieces in 1usize..6) {
        let alg = FloatAlgebra::<f64>::new();
        let dims = input.extents().as_slice().to_vec();
        let output = resample_nearest(&alg, &dims, &input, max_pieces).unwrap();
        prop_assert_eq!(output.to_vec(), input.to_vec());
    }

    #[test]
    fn prop_linear_stays_within_contributing_samples(
        (input, target) in input_and_target(),
        max_pieces in 1usize..6,
    ) {
        let alg = FloatAlgebra::<f64>::new();
        let output = resample_linear(&alg, &target, &input, max_pieces).unwrap();

        let out_extents = AxisExtents::new(&target).unwrap();
        let map = CoordinateMap::new(input.extents(), &out_extents);
        let mut coords = vec![MappedCoordinate::default(); target.len()];
        let mut value = 0.0;

        for point in GridIterator::from_extents(&out_extents) {
            map.map_point(&point, &mut coords);
            let (lo, hi) = contributing_range(&input, &coords);

            output.get(&point, &mut value);
            let tolerance = 1e-9 * (1.0 + lo.abs().max(hi.abs()));
            prop_assert!(
                lo - tolerance <= value && value <= hi + tolerance,
                "value {} at {} outside [{}, {}]", value, point, lo, hi
            );
        }
    }

    #[test]
    fn prop_integer_linear_stays_within_contributing_samples(
        (input, target) in integer_input_and_target(),
        max_pieces in 1usize..6,
    ) {
        let alg = IntegerAlgebra::<i32>::new();
        let output = resample_linear(&alg, &target, &input, max_pieces).unwrap();

        let out_extents = AxisExtents::new(&target).unwrap();
        let map = CoordinateMap::new(input.extents(), &out_extents);
        let mut coords = vec![MappedCoordinate::default(); target.len()];
        let mut value = 0;

        for point in GridIterator::from_extents(&out_extents) {
            map.map_point(&point, &mut coords);
            let (lo, hi) = contributing_range(&input, &coords);

            output.get(&point, &mut value);
            prop_assert!(
                lo <= value && value <= hi,
                "value {} at {} outside [{}, {}]", value, point, lo, hi
            );
        }
    }

    #[test]
    fn prop_worker_count_does_not_change_result(
        (input, target) in input_and_target(),
        max_pieces in 2usize..9,
    ) {
        let alg = FloatAlgebra::<f64>::new();

        let single = resample_nearest(&alg, &target, &input, 1).unwrap();
        let multi = resample_nearest(&alg, &target, &input, max_pieces).unwrap();
        prop_assert_eq!(single.to_vec(), multi.to_vec());

        let single = resample_linear(&alg, &target, &input, 1).unwrap();
        let multi = resample_linear(&alg, &target, &input, max_pieces).unwrap();
        prop_assert_eq!(single.to_vec(), multi.to_vec());

        let padded = PaddedDataSource::edge(input);
        let single = resample_cubic(&alg, &target, &padded, 1).unwrap();
        let multi = resample_cubic(&alg, &target, &padded, max_pieces).unwrap();
        prop_assert_eq!(single.to_vec(), multi.to_vec());
    }

    #[test]
    fn prop_coordinate_map_is_monotone_and_bounded(
        out_extent in 2usize..2000,
        in_extent in 1usize..2000,
    ) {
        let mut previous = MappedCoordinate::new(0, 0.0);
        for o in 0..out_extent {
            let m = tessel_resample::coordinate::map_coordinate(o, out_extent, in_extent);
            prop_assert!((0.0..1.0).contains(&m.fraction()));
            prop_assert!(m.floor() >= 0 && (m.floor() as usize) < in_extent);
            prop_assert!(
                (m.floor(), m.fraction()) >= (previous.floor(), previous.fraction()),
                "mapping decreased at {}", o
            );
            previous = m;
        }
        let last = tessel_resample::coordinate::map_coordinate(out_extent - 1, out_extent, in_extent);
        prop_assert_eq!(last, MappedCoordinate::new(in_extent as i64 - 1, 0.0));
    }
}
