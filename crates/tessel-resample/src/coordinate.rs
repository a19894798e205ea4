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

//! # Coordinate Mapping
//!
//! Maps an integer output coordinate `o` on one axis onto the fractional
//! input coordinate
//!
//! ```text
//! f = o * (I - 1) / (O - 1)
//! ```
//!
//! where `I` and `O` are the input and output extents of that axis, so that
//! the first and last samples of both grids coincide.
//!
//! The product and quotient are evaluated exactly as a rational number
//! (`num_rational::Ratio<u128>`). The integer floor is taken from the exact
//! value and only the remaining fraction in `[0, 1)` is rounded to `f64`, so
//! the error of every mapped coordinate is bounded by one `f64` rounding
//! regardless of how many steps precede it. Points that land exactly on an
//! input sample always yield a fraction of exactly `0.0`.
//!
//! An output axis of extent 1 has no spacing to divide by; every coordinate
//! on such an axis maps to input coordinate 0.

use num_rational::Ratio;
use tessel_core::grid::{AxisExtents, GridPoint};

/// An input-grid coordinate split into its integer floor and the fractional
/// remainder in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MappedCoordinate {
    floor: i64,
    fraction: f64,
}

impl MappedCoordinate {
    #[inline]
    pub const fn new(floor: i64, fraction: f64) -> Self {
        Self { floor, fraction }
    }

    /// Returns the integer part.
    #[inline(always)]
    pub const fn floor(&self) -> i64 {
        self.floor
    }

    /// Returns the fractional remainder in `[0, 1)`.
    #[inline(always)]
    pub const fn fraction(&self) -> f64 {
        self.fraction
    }
}

/// Maps output coordinate `output_coord` on an axis of `output_extent`
/// samples onto an input axis of `input_extent` samples.
///
/// # Panics
///
/// Panics if either extent is zero.
///
/// # Examples
///
/// ```rust
/// # use tessel_resample::coordinate::map_coordinate;
///
/// let m = map_coordinate(1, 3, 2);
/// assert_eq!(m.floor(), 0);
/// assert_eq!(m.fraction(), 0.5);
///
/// let m = map_coordinate(2, 3, 2);
/// assert_eq!(m.floor(), 1);
/// assert_eq!(m.fraction(), 0.0);
/// ```
pub fn map_coordinate(
    output_coord: usize,
    output_extent: usize,
    input_extent: usize,
) -> MappedCoordinate {
    assert!(
        output_extent > 0 && input_extent > 0,
        "called `map_coordinate` with an empty axis: output extent {}, input extent {}",
        output_extent,
        input_extent
    );

    if output_extent == 1 {
        return MappedCoordinate::new(0, 0.0);
    }

    let exact = Ratio::new(
        output_coord as u128 * (input_extent as u128 - 1),
        output_extent as u128 - 1,
    );
    let floor = exact.to_integer();
    let rem = exact.fract();
    let fraction = *rem.numer() as f64 / *rem.denom() as f64;

    MappedCoordinate::new(floor as i64, fraction)
}

/// Precomputed per-axis mapping tables from an output grid onto an input
/// grid.
///
/// Each axis is mapped independently, so a table of `O[i]` entries per axis
/// covers every output point; building it costs `sum(O[i])` exact divisions
/// instead of one per point and axis.
#[derive(Debug, Clone)]
pub struct CoordinateMap {
    axes: Vec<Vec<MappedCoordinate>>,
}

impl CoordinateMap {
    /// Builds the tables mapping `output` onto `input`.
    ///
    /// # Panics
    ///
    /// Panics if the two grids differ in dimensionality.
    pub fn new(input: &AxisExtents, output: &AxisExtents) -> Self {
        assert!(
            input.num_dimensions() == output.num_dimensions(),
            "called `CoordinateMap::new` with a {}-dimensional input and a {}-dimensional output",
            input.num_dimensions(),
            output.num_dimensions()
        );

        let axes = (0..output.num_dimensions())
            .map(|axis| {
                let out_extent = output.dimension(axis);
                let in_extent = input.dimension(axis);
                (0..out_extent)
                    .map(|o| map_coordinate(o, out_extent, in_extent))
                    .collect()
            })
            .collect();

        Self { axes }
    }

    /// Returns the number of axes.
    #[inline]
    pub fn num_dimensions(&self) -> usize {
        self.axes.len()
    }

    /// Returns the mapping of output coordinate `coord` on `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis` or `coord` is out of range.
    #[inline(always)]
    pub fn lookup(&self, axis: usize, coord: usize) -> MappedCoordinate {
        self.axes[axis][coord]
    }

    /// Maps every coordinate of an output `point` into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `point` or `out` has the wrong length, or if `point` lies
    /// outside the output grid.
    #[inline]
    pub fn map_point(&self, point: &GridPoint, out: &mut [MappedCoordinate]) {
        assert!(
            point.num_dimensions() == self.axes.len() && out.len() == self.axes.len(),
            "called `CoordinateMap::map_point` with mismatched lengths: map {}, point {}, out {}",
            self.axes.len(),
            point.num_dimensions(),
            out.len()
        );
        for (axis, slot) in out.iter_mut().enumerate() {
            *slot = self.axes[axis][point[axis] as usize];
        }
    }
}
