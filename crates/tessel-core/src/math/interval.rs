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

use std::ops::Range;

/// A half-open range `[start, end)` of lattice coordinates along one axis.
///
/// # Invariants
///
/// `start <= end` always holds.
///
/// # Examples
///
/// ```rust
/// # use tessel_core::math::AxisRange;
///
/// let r = AxisRange::new(2, 6);
/// assert_eq!(r.len(), 4);
/// assert!(r.contains(5));
/// assert!(!r.contains(6));
/// assert_eq!(r.iter().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AxisRange {
    start: usize,
    end: usize,
}

impl AxisRange {
    /// Creates a new range.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        assert!(
            start <= end,
            "called `AxisRange::new` with start {} greater than end {}",
            start,
            end
        );
        Self { start, end }
    }

    /// Creates a new range, or `None` if `start > end`.
    #[inline]
    pub fn try_new(start: usize, end: usize) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Creates the range `[0, len)`.
    #[inline]
    pub const fn with_len(len: usize) -> Self {
        Self { start: 0, end: len }
    }

    /// Returns the inclusive start.
    #[inline(always)]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the exclusive end.
    #[inline(always)]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the inclusive last coordinate, or `None` for an empty range.
    #[inline]
    pub const fn last(&self) -> Option<usize> {
        if self.start < self.end {
            Some(self.end - 1)
        } else {
            None
        }
    }

    /// Returns the number of coordinates in the range.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the range holds no coordinate.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `value` lies in `[start, end)`.
    #[inline]
    pub const fn contains(&self, value: usize) -> bool {
        self.start <= value && value < self.end
    }

    /// Returns `true` if the two ranges share at least one coordinate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessel_core::math::AxisRange;
    ///
    /// let a = AxisRange::new(0, 10);
    /// assert!(a.intersects(AxisRange::new(5, 15)));
    /// assert!(!a.intersects(AxisRange::new(10, 20))); // adjacent only
    /// ```
    #[inline]
    pub const fn intersects(&self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns an iterator over the coordinates of the range.
    #[inline]
    pub fn iter(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Tiles the range into `pieces` contiguous, non-overlapping chunks.
    ///
    /// The first `pieces - 1` chunks hold `per_piece` coordinates each; the
    /// last chunk absorbs whatever remains, so the chunks always cover the
    /// range exactly once.
    ///
    /// # Panics
    ///
    /// Panics if `pieces == 0`, or if `(pieces - 1) * per_piece` exceeds the
    /// length of the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessel_core::math::AxisRange;
    ///
    /// let chunks = AxisRange::new(0, 10).split(3, 3);
    /// assert_eq!(
    ///     chunks,
    ///     vec![AxisRange::new(0, 3), AxisRange::new(3, 6), AxisRange::new(6, 10)]
    /// );
    /// ```
    pub fn split(&self, pieces: usize, per_piece: usize) -> Vec<Self> {
        assert!(pieces > 0, "called `AxisRange::split` with zero pieces");
        let leading = (pieces - 1)
            .checked_mul(per_piece)
            .filter(|&n| n <= self.len());
        assert!(
            leading.is_some(),
            "called `AxisRange::split` with {} pieces of {} on a range of length {}",
            pieces,
            per_piece,
            self.len()
        );

        let mut chunks = Vec::with_capacity(pieces);
        let mut cursor = self.start;
        for _ in 0..pieces - 1 {
            chunks.push(Self::new(cursor, cursor + per_piece));
            cursor += per_piece;
        }
        chunks.push(Self::new(cursor, self.end));
        chunks
    }
}

impl std::fmt::Debug for AxisRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl std::fmt::Display for AxisRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl From<Range<usize>> for AxisRange {
    #[inline]
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<AxisRange> for Range<usize> {
    #[inline]
    fn from(range: AxisRange) -> Self {
        range.start..range.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_and_accessors() {
        let r = AxisRange::new(3, 8);
        assert_eq!(r.start(), 3);
        assert_eq!(r.end(), 8);
        assert_eq!(r.len(), 5);
        assert_eq!(r.last(), Some(7));
        assert!(!r.is_empty());
    }

    #[test]
    fn test_empty_range() {
        let r = AxisRange::new(4, 4);
        assert!(r.is_empty());
        assert_eq!(r.last(), None);
        assert_eq!(r.iter().count(), 0);
    }

    #[test]
    #[should_panic(expected = "greater than end")]
    fn test_new_inverted_panics() {
        let _ = AxisRange::new(5, 4);
    }

    #[test]
    fn test_try_new() {
        assert!(AxisRange::try_new(0, 1).is_some());
        assert!(AxisRange::try_new(2, 1).is_none());
    }

    #[test]
    fn test_with_len() {
        assert_eq!(AxisRange::with_len(7), AxisRange::new(0, 7));
    }

    #[test]
    fn test_intersects() {
        let a = AxisRange::new(0, 5);
        assert!(a.intersects(AxisRange::new(4, 6)));
        assert!(!a.intersects(AxisRange::new(5, 6)));
        assert!(!a.intersects(AxisRange::new(7, 9)));
    }

    #[test]
    fn test_split_single_piece() {
        let r = AxisRange::new(2, 9);
        assert_eq!(r.split(1, 0), vec![r]);
    }

    #[test]
    fn test_split_last_absorbs_remainder() {
        let chunks = AxisRange::with_len(11).split(4, 2);
        assert_eq!(
            chunks,
            vec![
                AxisRange::new(0, 2),
                AxisRange::new(2, 4),
                AxisRange::new(4, 6),
                AxisRange::new(6, 11),
            ]
        );
    }

    #[test]
    #[should_panic(expected = "called `AxisRange::split` with 3 pieces of 5")]
    fn test_split_too_large_panics() {
        let _ = AxisRange::with_len(8).split(3, 5);
    }

    #[test]
    fn test_range_conversions() {
        let r: AxisRange = (1..4).into();
        assert_eq!(r, AxisRange::new(1, 4));
        let back: Range<usize> = r.into();
        assert_eq!(back, 1..4);
        assert_eq!(format!("{}", r), "[1, 4)");
    }

    proptest! {
        #[test]
        fn prop_split_tiles_exactly(len in 1usize..500, pieces in 1usize..32) {
            let pieces = pieces.min(len);
            let per_piece = len / pieces;
            let chunks = AxisRange::with_len(len).split(pieces, per_piece);

            prop_assert_eq!(chunks.len(), pieces);
            prop_assert_eq!(chunks[0].start(), 0);
            prop_assert_eq!(chunks[pieces - 1].end(), len);
            for w in chunks.windows(2) {
                prop_assert_eq!(w[0].end(), w[1].start());
                prop_assert!(!w[0].intersects(w[1]));
            }
            prop_assert_eq!(chunks.iter().map(|c| c.len()).sum::<usize>(), len);
        }
    }
}
