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

use approx::assert_relative_eq;
use num_complex::Complex;
use tessel_core::{
    grid::AxisExtents,
    num::{ComplexAlgebra, HypercomplexAlgebra, IntegerAlgebra, Octonion, Quaternion},
};
use tessel_data::{ArrayDataSource, PaddedDataSource};
use tessel_resample::{resample_cubic, resample_linear, resample_nearest, Method, ResamplerBuilder};

fn extents(dims: &[usize]) -> AxisExtents {
    AxisExtents::new(dims).unwrap()
}

#[test]
fn test_integer_linear_midpoint() {
    let alg = IntegerAlgebra::<i32>::new();
    let input = ArrayDataSource::from_vec(extents(&[2]), vec![0, 10]).unwrap();

    let output = resample_linear(&alg, &[3], &input, 2).unwrap();
    assert_eq!(output.to_vec(), vec![0, 5, 10]);
}

#[test]
fn test_integer_nearest_downsample() {
    let alg = IntegerAlgebra::<u16>::new();
    let input = ArrayDataSource::from_vec(extents(&[9]), (0..9u16).map(|v| v * 100).collect()).unwrap();

    let output = resample_nearest(&alg, &[3], &input, 3).unwrap();
    assert_eq!(output.to_vec(), vec![0, 400, 800]);
}

#[test]
fn test_integer_cubic_reproduces_samples() {
    let alg = IntegerAlgebra::<i64>::new();
    let inner = ArrayDataSource::from_vec(extents(&[3]), vec![-7, 1_000_000_007, 42]).unwrap();
    let input = PaddedDataSource::edge(inner);

    let output = resample_cubic(&alg, &[5], &input, 2).unwrap().to_vec();
    assert_eq!(output[0], -7);
    assert_eq!(output[2], 1_000_000_007);
    assert_eq!(output[4], 42);
}

#[test]
fn test_integer_linear_constant_has_no_overshoot() {
    let alg = IntegerAlgebra::<i32>::new();
    let input = ArrayDataSource::from_vec(extents(&[2]), vec![1, 1]).unwrap();

    let output = resample_linear(&alg, &[3], &input, 1).unwrap();
    assert_eq!(output.to_vec(), vec![1, 1, 1]);
}

#[test]
fn test_u8_cubic_constant_input() {
    let alg = IntegerAlgebra::<u8>::new();
    let input = PaddedDataSource::edge(ArrayDataSource::from_vec(extents(&[3]), vec![100; 3]).unwrap());

    assert_eq!(resample_cubic(&alg, &[5], &input, 1).unwrap().to_vec(), vec![100; 5]);
    assert_eq!(resample_cubic(&alg, &[9], &input, 2).unwrap().to_vec(), vec![100; 9]);
}

#[test]
fn test_u8_cubic_ramp() {
    let alg = IntegerAlgebra::<u8>::new();
    let input =
        PaddedDataSource::edge(ArrayDataSource::from_vec(extents(&[3]), vec![0, 100, 200]).unwrap());

    // t = 0.5 weights: -1/16, 9/16, 9/16, -1/16.
    // 0.5625 * 100 - 0.0625 * 200 = 43.75; 0.5625 * 300 - 0.0625 * 200 = 156.25.
    let output = resample_cubic(&alg, &[5], &input, 1).unwrap();
    assert_eq!(output.to_vec(), vec![0, 44, 100, 156, 200]);
}

#[test]
fn test_i8_cubic_ramp() {
    let alg = IntegerAlgebra::<i8>::new();
    let input =
        PaddedDataSource::edge(ArrayDataSource::from_vec(extents(&[3]), vec![-100, 0, 100]).unwrap());

    let output = resample_cubic(&alg, &[5], &input, 2).unwrap();
    assert_eq!(output.to_vec(), vec![-100, -56, 0, 56, 100]);
}

#[test]
fn test_u8_cubic_overshoot_saturates() {
    let alg = IntegerAlgebra::<u8>::new();
    let input = PaddedDataSource::edge(
        ArrayDataSource::from_vec(extents(&[4]), vec![0, 0, 255, 255]).unwrap(),
    );

    // o = 1 maps to floor 0, t = 0.25, where the curve dips below zero.
    let output = resample_cubic(&alg, &[13], &input, 1).unwrap().to_vec();
    assert_eq!(output[0], 0);
    assert_eq!(output[1], 0);
    assert_eq!(output[12], 255);
}

#[test]
fn test_complex_linear() {
    let alg = ComplexAlgebra::<f64>::new();
    let input = ArrayDataSource::from_vec(
        extents(&[2]),
        vec![Complex::new(0.0, 0.0), Complex::new(10.0, -4.0)],
    )
    .unwrap();

    let output = resample_linear(&alg, &[5], &input, 2).unwrap().to_vec();
    assert_eq!(output[0], Complex::new(0.0, 0.0));
    assert_relative_eq!(output[2].re, 5.0);
    assert_relative_eq!(output[2].im, -2.0);
    assert_relative_eq!(output[1].re, 2.5);
    assert_relative_eq!(output[1].im, -1.0);
    assert_eq!(output[4], Complex::new(10.0, -4.0));
}

#[test]
fn test_complex_cubic_zero_padding() {
    let alg = ComplexAlgebra::<f32>::new();
    let inner = ArrayDataSource::from_vec(
        extents(&[3]),
        vec![Complex::new(1.0, 1.0), Complex::new(2.0, 0.0), Complex::new(3.0, -1.0)],
    )
    .unwrap();
    let input = PaddedDataSource::zero(inner, &alg);

    let output = resample_cubic(&alg, &[3], &input, 1).unwrap();
    assert_eq!(
        output.to_vec(),
        vec![Complex::new(1.0, 1.0), Complex::new(2.0, 0.0), Complex::new(3.0, -1.0)]
    );
}

#[test]
fn test_quaternion_nearest_identity_2d() {
    let alg = HypercomplexAlgebra::<f64, 4>::new();
    let values: Vec<Quaternion<f64>> = (0..6)
        .map(|i| {
            let i = i as f64;
            Quaternion::new([i, -i, 2.0 * i, 0.5])
        })
        .collect();
    let input = ArrayDataSource::from_vec(extents(&[2, 3]), values.clone()).unwrap();

    let outcome = ResamplerBuilder::new()
        .with_method(Method::NearestNeighbor)
        .with_max_pieces(3)
        .build()
        .run(&alg, &[2, 3], &input)
        .unwrap();

    assert_eq!(outcome.statistics().used_workers, 3);
    assert_eq!(outcome.into_output().to_vec(), values);
}

#[test]
fn test_octonion_linear_midpoint() {
    let alg = HypercomplexAlgebra::<f64, 8>::new();
    let lo = Octonion::new([0.0; 8]);
    let hi = Octonion::new([8.0, 6.0, 4.0, 2.0, 0.0, -2.0, -4.0, -6.0]);
    let input = ArrayDataSource::from_vec(extents(&[2]), vec![lo, hi]).unwrap();

    let output = resample_linear(&alg, &[3], &input, 1).unwrap().to_vec();
    assert_eq!(output[0], lo);
    assert_eq!(output[1].components(), &[4.0, 3.0, 2.0, 1.0, 0.0, -1.0, -2.0, -3.0]);
    assert_eq!(output[2], hi);
}
