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

//! # Work Partitioning
//!
//! The output grid is split along a single axis, the *split axis*, into
//! contiguous slabs, one per worker. Every slab spans the full range of all
//! other axes, so slabs are disjoint by construction and their union is the
//! whole grid. This is the one place that establishes the disjointness the
//! parallel writers rely on.
//!
//! ```text
//!   split axis ──►
//!   ┌──────┬──────┬──────┬─────────┐
//!   │  w0  │  w1  │  w2  │   w3    │   (last slab absorbs the remainder)
//!   └──────┴──────┴──────┴─────────┘
//! ```

use tessel_core::{
    grid::{AxisExtents, GridIterator, GridPoint},
    math::AxisRange,
};
use tessel_data::AccessMode;

/// The number of workers and the number of split-axis coordinates each
/// worker but the last receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkPlan {
    pieces: usize,
    elements_per_piece: usize,
}

impl WorkPlan {
    /// Returns the number of workers.
    #[inline(always)]
    pub const fn pieces(&self) -> usize {
        self.pieces
    }

    /// Returns the split-axis length of every slab except the last.
    #[inline(always)]
    pub const fn elements_per_piece(&self) -> usize {
        self.elements_per_piece
    }

    /// Returns `true` if the work runs inline on the calling thread.
    #[inline(always)]
    pub const fn is_inline(&self) -> bool {
        self.pieces == 1
    }
}

impl std::fmt::Display for WorkPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WorkPlan(pieces: {}, elements_per_piece: {})",
            self.pieces, self.elements_per_piece
        )
    }
}

/// Decides how many workers to use along a split axis of `split_extent`
/// coordinates.
///
/// A `max_pieces` of zero is treated as one. The number of pieces never
/// exceeds `split_extent`, so no worker receives an empty slab. A
/// single-access `access_mode` forces exactly one piece.
///
/// # Panics
///
/// Panics if `split_extent` is zero.
///
/// # Examples
///
/// ```rust
/// # use tessel_data::AccessMode;
/// # use tessel_resample::partition::plan_work;
///
/// let plan = plan_work(10, 4, AccessMode::Concurrent);
/// assert_eq!(plan.pieces(), 4);
/// assert_eq!(plan.elements_per_piece(), 2);
///
/// let plan = plan_work(10, 4, AccessMode::SingleAccess);
/// assert_eq!(plan.pieces(), 1);
/// ```
pub fn plan_work(split_extent: usize, max_pieces: usize, access_mode: AccessMode) -> WorkPlan {
    assert!(
        split_extent > 0,
        "called `plan_work` with an empty split axis"
    );

    let pieces = if access_mode.is_single_access() {
        1
    } else {
        max_pieces.clamp(1, split_extent)
    };

    WorkPlan {
        pieces,
        elements_per_piece: split_extent / pieces,
    }
}

/// A contiguous slab of the output grid owned by exactly one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    min: GridPoint,
    max: GridPoint,
    split_axis: usize,
    range: AxisRange,
}

impl Partition {
    /// Returns the inclusive lower corner.
    #[inline]
    pub fn min(&self) -> &GridPoint {
        &self.min
    }

    /// Returns the inclusive upper corner.
    #[inline]
    pub fn max(&self) -> &GridPoint {
        &self.max
    }

    #[inline]
    pub fn split_axis(&self) -> usize {
        self.split_axis
    }

    /// Returns the slab's coordinates along the split axis.
    #[inline]
    pub fn range(&self) -> AxisRange {
        self.range
    }

    /// Returns the number of lattice points in the slab.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.min
            .coords()
            .iter()
            .zip(self.max.coords())
            .map(|(&lo, &hi)| (hi - lo + 1) as usize)
            .product()
    }

    /// Returns `true` if `point` lies inside the slab.
    #[inline]
    pub fn contains(&self, point: &GridPoint) -> bool {
        point.num_dimensions() == self.min.num_dimensions()
            && point
                .coords()
                .iter()
                .zip(self.min.coords().iter().zip(self.max.coords()))
                .all(|(&c, (&lo, &hi))| lo <= c && c <= hi)
    }

    /// Returns an iterator over the slab's points in row-major order.
    #[inline]
    pub fn iter(&self) -> GridIterator {
        GridIterator::new(&self.min, &self.max)
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Partition({} ..= {})", self.min, self.max)
    }
}

/// Tiles `extents` into `plan.pieces()` slabs along `split_axis`.
///
/// # Panics
///
/// Panics if `split_axis` is out of range or `plan` does not fit the split
/// axis.
pub fn partition_grid(extents: &AxisExtents, split_axis: usize, plan: WorkPlan) -> Vec<Partition> {
    assert!(
        split_axis < extents.num_dimensions(),
        "called `partition_grid` with split axis {} on {} extents",
        split_axis,
        extents
    );

    let full_min = extents.min_point();
    let full_max = extents.max_point();

    AxisRange::with_len(extents.dimension(split_axis))
        .split(plan.pieces, plan.elements_per_piece)
        .into_iter()
        .map(|range| {
            let mut min = full_min.clone();
            let mut max = full_max.clone();
            min[split_axis] = range.start() as i64;
            max[split_axis] = range.end() as i64 - 1;
            Partition {
                min,
                max,
                split_axis,
                range,
            }
        })
        .collect()
}
