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

use crate::grid::{error::GridError, point::GridPoint};
use smallvec::SmallVec;

/// The per-axis sizes of an N-dimensional grid.
///
/// Extents are validated once at construction: there is at least one axis,
/// every axis has a positive size, and the total number of points fits into
/// `usize`. After that they are immutable.
///
/// # Examples
///
/// ```rust
/// # use tessel_core::grid::{AxisExtents, GridError};
///
/// let e = AxisExtents::new(&[4, 3]).unwrap();
/// assert_eq!(e.num_dimensions(), 2);
/// assert_eq!(e.num_elements(), 12);
/// assert_eq!(e.strides().as_slice(), &[3, 1]);
///
/// assert_eq!(AxisExtents::new(&[0, 5]), Err(GridError::ZeroExtent { axis: 0 }));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AxisExtents {
    dims: SmallVec<[usize; 4]>,
    num_elements: usize,
}

impl AxisExtents {
    /// Validates and creates extents from per-axis sizes.
    pub fn new(dims: &[usize]) -> Result<Self, GridError> {
        if dims.is_empty() {
            return Err(GridError::EmptyExtents);
        }
        if let Some(axis) = dims.iter().position(|&d| d == 0) {
            return Err(GridError::ZeroExtent { axis });
        }
        let num_elements = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| GridError::Overflow {
                extents: dims.to_vec(),
            })?;

        Ok(Self {
            dims: SmallVec::from_slice(dims),
            num_elements,
        })
    }

    /// Returns the number of axes.
    #[inline(always)]
    pub fn num_dimensions(&self) -> usize {
        self.dims.len()
    }

    /// Returns the size of `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= self.num_dimensions()`.
    #[inline(always)]
    pub fn dimension(&self, axis: usize) -> usize {
        self.dims[axis]
    }

    /// Returns all per-axis sizes, axis 0 first.
    #[inline(always)]
    pub fn as_slice(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the total number of lattice points.
    #[inline(always)]
    pub fn num_elements(&self) -> usize {
        self.num_elements
    }

    /// Returns the axis with the largest extent; ties go to the lowest axis.
    pub fn largest_axis(&self) -> usize {
        let mut best = 0;
        for (axis, &d) in self.dims.iter().enumerate().skip(1) {
            if d > self.dims[best] {
                best = axis;
            }
        }
        best
    }

    /// Returns `true` if `point` has this dimensionality and lies inside
    /// `[0, extent)` on every axis.
    #[inline]
    pub fn contains(&self, point: &GridPoint) -> bool {
        point.num_dimensions() == self.dims.len()
            && point
                .coords()
                .iter()
                .zip(self.dims.iter())
                .all(|(&c, &d)| c >= 0 && (c as u64) < d as u64)
    }

    /// Returns row-major strides (last axis contiguous).
    pub fn strides(&self) -> SmallVec<[usize; 4]> {
        let mut strides = SmallVec::from_elem(1, self.dims.len());
        for axis in (0..self.dims.len().saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * self.dims[axis + 1];
        }
        strides
    }

    /// Returns the first lattice point, the origin.
    #[inline]
    pub fn min_point(&self) -> GridPoint {
        GridPoint::zeros(self.dims.len())
    }

    /// Returns the last lattice point, `extent - 1` on every axis.
    pub fn max_point(&self) -> GridPoint {
        let mut p = GridPoint::zeros(self.dims.len());
        for (axis, &d) in self.dims.iter().enumerate() {
            p.set_coord(axis, d as i64 - 1);
        }
        p
    }
}

impl std::fmt::Debug for AxisExtents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AxisExtents({:?})", self.dims.as_slice())
    }
}

impl std::fmt::Display for AxisExtents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, "x")?;
            }
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl TryFrom<&[usize]> for AxisExtents {
    type Error = GridError;

    fn try_from(dims: &[usize]) -> Result<Self, Self::Error> {
        Self::new(dims)
    }
}
