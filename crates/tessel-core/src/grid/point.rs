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

use smallvec::SmallVec;

/// Inline capacity for coordinates; grids with more axes spill to the heap.
const INLINE_AXES: usize = 4;

/// A point in an N-dimensional integer lattice.
///
/// Coordinates are signed so that neighbourhood reads one cell before the
/// origin (as cubic interpolation performs) can be expressed and handed to a
/// padded data source. Points produced by a `GridIterator` over a valid grid
/// are always non-negative.
///
/// A `GridPoint` is meant to be allocated once and overwritten in a loop;
/// `copy_from` and `set_coord` never allocate when the dimensionality already
/// matches.
///
/// # Examples
///
/// ```rust
/// # use tessel_core::grid::GridPoint;
///
/// let mut p = GridPoint::zeros(3);
/// p.set_coord(1, 7);
/// assert_eq!(p.coords(), &[0, 7, 0]);
/// assert_eq!(format!("{}", p), "GridPoint(0, 7, 0)");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct GridPoint {
    coords: SmallVec<[i64; INLINE_AXES]>,
}

impl GridPoint {
    /// Creates the origin of an `num_dimensions`-dimensional lattice.
    #[inline]
    pub fn zeros(num_dimensions: usize) -> Self {
        Self {
            coords: SmallVec::from_elem(0, num_dimensions),
        }
    }

    /// Creates a point from explicit coordinates.
    #[inline]
    pub fn from_slice(coords: &[i64]) -> Self {
        Self {
            coords: SmallVec::from_slice(coords),
        }
    }

    /// Returns the dimensionality of this point.
    #[inline(always)]
    pub fn num_dimensions(&self) -> usize {
        self.coords.len()
    }

    /// Returns the coordinate on `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= self.num_dimensions()`.
    #[inline(always)]
    pub fn coord(&self, axis: usize) -> i64 {
        self.coords[axis]
    }

    /// Overwrites the coordinate on `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= self.num_dimensions()`.
    #[inline(always)]
    pub fn set_coord(&mut self, axis: usize, value: i64) {
        self.coords[axis] = value;
    }

    /// Returns all coordinates, axis 0 first.
    #[inline(always)]
    pub fn coords(&self) -> &[i64] {
        &self.coords
    }

    /// Overwrites this point with `other`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the dimensionalities differ.
    #[inline(always)]
    pub fn copy_from(&mut self, other: &GridPoint) {
        debug_assert!(
            self.coords.len() == other.coords.len(),
            "called `GridPoint::copy_from` with mismatched dimensionality: {} vs {}",
            self.coords.len(),
            other.coords.len()
        );
        self.coords.copy_from_slice(&other.coords);
    }
}

impl std::ops::Index<usize> for GridPoint {
    type Output = i64;

    #[inline(always)]
    fn index(&self, axis: usize) -> &i64 {
        &self.coords[axis]
    }
}

impl std::ops::IndexMut<usize> for GridPoint {
    #[inline(always)]
    fn index_mut(&mut self, axis: usize) -> &mut i64 {
        &mut self.coords[axis]
    }
}

impl<const N: usize> From<[i64; N]> for GridPoint {
    fn from(coords: [i64; N]) -> Self {
        Self::from_slice(&coords)
    }
}

impl From<Vec<i64>> for GridPoint {
    fn from(coords: Vec<i64>) -> Self {
        Self {
            coords: SmallVec::from_vec(coords),
        }
    }
}

impl std::fmt::Debug for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GridPoint(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}
