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

//! # Grid Iteration
//!
//! `GridIterator` enumerates every lattice point of an inclusive,
//! axis-aligned box `[min, max]` exactly once in row-major order: axis 0
//! varies slowest and the last axis fastest.
//!
//! Two interfaces are offered. The allocation-free one, `has_next` plus
//! `next_into`, overwrites a caller-owned `GridPoint` and is what hot loops
//! use. The `Iterator` implementation yields owned points for convenience
//! and composes with the standard adaptors.
//!
//! ## Usage
//!
//! ```rust
//! use tessel_core::grid::{GridIterator, GridPoint};
//!
//! let mut iter = GridIterator::new(&GridPoint::from([0, 0]), &GridPoint::from([1, 2]));
//! let mut p = GridPoint::zeros(2);
//! let mut seen = Vec::new();
//! while iter.has_next() {
//!     iter.next_into(&mut p);
//!     seen.push((p[0], p[1]));
//! }
//! assert_eq!(seen, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
//! ```

use crate::grid::{extents::AxisExtents, point::GridPoint};
use std::iter::FusedIterator;

/// Row-major enumeration of the inclusive box `[min, max]`.
#[derive(Debug, Clone)]
pub struct GridIterator {
    min: GridPoint,
    max: GridPoint,
    current: GridPoint,
    total: usize,
    remaining: usize,
}

impl GridIterator {
    /// Creates an iterator over the inclusive box `[min, max]`.
    ///
    /// A box with `max < min` on any axis is empty.
    ///
    /// # Panics
    ///
    /// Panics if `min` and `max` differ in dimensionality, or if the number
    /// of points in the box exceeds `usize::MAX`.
    pub fn new(min: &GridPoint, max: &GridPoint) -> Self {
        assert!(
            min.num_dimensions() == max.num_dimensions(),
            "called `GridIterator::new` with mismatched bounds: min has {} axes but max has {}",
            min.num_dimensions(),
            max.num_dimensions()
        );

        let total = box_len(min, max);
        Self {
            min: min.clone(),
            max: max.clone(),
            current: min.clone(),
            total,
            remaining: total,
        }
    }

    /// Creates an iterator over every point of a grid with the given extents.
    #[inline]
    pub fn from_extents(extents: &AxisExtents) -> Self {
        Self::new(&extents.min_point(), &extents.max_point())
    }

    /// Returns `true` if at least one more point will be produced.
    #[inline(always)]
    pub fn has_next(&self) -> bool {
        self.remaining > 0
    }

    /// Returns the number of points not yet produced.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns the total number of points in the box.
    #[inline(always)]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns the inclusive lower corner of the box.
    #[inline]
    pub fn min(&self) -> &GridPoint {
        &self.min
    }

    /// Returns the inclusive upper corner of the box.
    #[inline]
    pub fn max(&self) -> &GridPoint {
        &self.max
    }

    /// Writes the next point into `out` and advances.
    ///
    /// # Panics
    ///
    /// Panics if the iterator is exhausted or if `out` has the wrong
    /// dimensionality.
    #[inline]
    pub fn next_into(&mut self, out: &mut GridPoint) {
        assert!(
            self.remaining > 0,
            "called `GridIterator::next_into` on an exhausted iterator"
        );
        assert!(
            out.num_dimensions() == self.current.num_dimensions(),
            "called `GridIterator::next_into` with a {}-dimensional point on a {}-dimensional box",
            out.num_dimensions(),
            self.current.num_dimensions()
        );

        out.copy_from(&self.current);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
    }

    /// Rewinds the iterator to the first point of the box.
    #[inline]
    pub fn reset(&mut self) {
        self.current.copy_from(&self.min);
        self.remaining = self.total;
    }

    /// Odometer step: bump the last axis, carrying into slower axes.
    #[inline(always)]
    fn advance(&mut self) {
        for axis in (0..self.current.num_dimensions()).rev() {
            if self.current[axis] < self.max[axis] {
                self.current[axis] += 1;
                return;
            }
            self.current[axis] = self.min[axis];
        }
    }
}

fn box_len(min: &GridPoint, max: &GridPoint) -> usize {
    let mut len = 1usize;
    for (&lo, &hi) in min.coords().iter().zip(max.coords().iter()) {
        if hi < lo {
            return 0;
        }
        let span = usize::try_from(hi - lo)
            .ok()
            .and_then(|s| s.checked_add(1))
            .expect("called `GridIterator::new` with an axis span exceeding usize::MAX");
        len = len
            .checked_mul(span)
            .expect("called `GridIterator::new` with a box exceeding usize::MAX points");
    }
    len
}

impl Iterator for GridIterator {
    type Item = GridPoint;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        let mut p = GridPoint::zeros(self.current.num_dimensions());
        self.next_into(&mut p);
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for GridIterator {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for GridIterator {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn pt(c: &[i64]) -> GridPoint {
        GridPoint::from_slice(c)
    }

    #[test]
    fn test_row_major_order_3d() {
        let iter = GridIterator::new(&pt(&[0, 0, 0]), &pt(&[1, 1, 1]));
        let points: Vec<Vec<i64>> = iter.map(|p| p.coords().to_vec()).collect();
        assert_eq!(
            points,
            vec![
                vec![0, 0, 0],
                vec![0, 0, 1],
                vec![0, 1, 0],
                vec![0, 1, 1],
                vec![1, 0, 0],
                vec![1, 0, 1],
                vec![1, 1, 0],
                vec![1, 1, 1],
            ]
        );
    }

    #[test]
    fn test_offset_box() {
        let iter = GridIterator::new(&pt(&[2, 5]), &pt(&[3, 6]));
        let points: Vec<Vec<i64>> = iter.map(|p| p.coords().to_vec()).collect();
        assert_eq!(points, vec![vec![2, 5], vec![2, 6], vec![3, 5], vec![3, 6]]);
    }

    #[test]
    fn test_single_point_box() {
        let mut iter = GridIterator::new(&pt(&[4, 4]), &pt(&[4, 4]));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(pt(&[4, 4])));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_inverted_box_is_empty() {
        let mut iter = GridIterator::new(&pt(&[0, 3]), &pt(&[5, 2]));
        assert!(!iter.has_next());
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_from_extents() {
        let extents = AxisExtents::new(&[3, 2]).unwrap();
        let iter = GridIterator::from_extents(&extents);
        assert_eq!(iter.total(), 6);
        assert_eq!(iter.count(), 6);
    }

    #[test]
    fn test_reset_restarts() {
        let mut iter = GridIterator::new(&pt(&[0]), &pt(&[2]));
        let first: Vec<GridPoint> = iter.by_ref().collect();
        assert!(!iter.has_next());

        iter.reset();
        assert_eq!(iter.remaining(), 3);
        let second: Vec<GridPoint> = iter.collect();
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "exhausted iterator")]
    fn test_next_into_past_end_panics() {
        let mut iter = GridIterator::new(&pt(&[0]), &pt(&[0]));
        let mut p = GridPoint::zeros(1);
        iter.next_into(&mut p);
        iter.next_into(&mut p);
    }

    #[test]
    #[should_panic(expected = "mismatched bounds")]
    fn test_mismatched_bounds_panics() {
        let _ = GridIterator::new(&pt(&[0, 0]), &pt(&[1]));
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut iter = GridIterator::new(&pt(&[0]), &pt(&[0]));
        assert!(iter.next().is_some());
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        fn assert_fused<I: FusedIterator>(_: I) {}
        assert_fused(iter);
    }

    proptest! {
        #[test]
        fn prop_exhaustive_and_distinct(
            bounds in prop::collection::vec((0i64..5, 0i64..4), 1..4)
        ) {
            let min: Vec<i64> = bounds.iter().map(|&(lo, _)| lo).collect();
            let max: Vec<i64> = bounds.iter().map(|&(lo, span)| lo + span).collect();
            let expected: usize = bounds.iter().map(|&(_, span)| (span + 1) as usize).product();

            let iter = GridIterator::new(&pt(&min), &pt(&max));
            prop_assert_eq!(iter.len(), expected);

            let mut seen = HashSet::new();
            for p in iter {
                for axis in 0..min.len() {
                    prop_assert!(p[axis] >= min[axis] && p[axis] <= max[axis]);
                }
                prop_assert!(seen.insert(p));
            }
            prop_assert_eq!(seen.len(), expected);
        }
    }
}
