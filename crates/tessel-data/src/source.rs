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

//! # Data Source Contracts
//!
//! `DimensionedDataSource<V>` is the narrow surface algorithms consume: a
//! logical N-dimensional array addressed by `GridPoint`, plus an allocation
//! factory that produces result storage of the same kind. `DisjointWrite<V>`
//! is the additional, unsafe capability used by parallel workers to write
//! into one shared store from several threads at once.
//!
//! ## Bounds
//!
//! Every point passed to `get`/`set` must satisfy `0 <= coord[i] < extent[i]`
//! unless the source is explicitly padded. Plain stores treat violations as
//! caller bugs and panic.

use crate::error::DataError;
use tessel_core::grid::{AxisExtents, GridPoint};

/// Whether a data source tolerates access from several threads at once.
///
/// Storage backed by a resource that cannot be read or written concurrently
/// declares `SingleAccess`; algorithms then fall back to a single worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessMode {
    /// Concurrent reads, and concurrent writes to disjoint points, are safe.
    #[default]
    Concurrent,
    /// Only one thread may touch the source at any time.
    SingleAccess,
}

impl AccessMode {
    /// Returns `true` for `AccessMode::SingleAccess`.
    #[inline(always)]
    pub const fn is_single_access(&self) -> bool {
        matches!(self, Self::SingleAccess)
    }
}

impl std::fmt::Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Concurrent => write!(f, "concurrent"),
            Self::SingleAccess => write!(f, "single-access"),
        }
    }
}

/// A logical N-dimensional array of values.
pub trait DimensionedDataSource<V> {
    /// The storage kind produced by `allocate`.
    type Storage: DisjointWrite<V>;

    /// Returns the per-axis sizes.
    fn extents(&self) -> &AxisExtents;

    /// Returns the number of axes.
    #[inline]
    fn num_dimensions(&self) -> usize {
        self.extents().num_dimensions()
    }

    /// Returns the size of `axis`.
    #[inline]
    fn dimension(&self, axis: usize) -> usize {
        self.extents().dimension(axis)
    }

    /// Copies the value at `point` into `out`.
    fn get(&self, point: &GridPoint, out: &mut V);

    /// Overwrites the value at `point`.
    fn set(&mut self, point: &GridPoint, value: &V);

    /// Declares whether the source tolerates concurrent access.
    fn access_mode(&self) -> AccessMode;

    /// Allocates storage of the same kind and access mode as `self`, sized to
    /// `extents`, with every value set to `zero`.
    fn allocate(&self, extents: &AxisExtents, zero: &V) -> Result<Self::Storage, DataError>;
}

/// Storage that can be written from several threads through a shared
/// reference, provided the threads address disjoint points.
///
/// # Safety
///
/// Implementors must guarantee that concurrent calls to `set_disjoint` on
/// distinct points, together with concurrent `get` calls on points nobody is
/// writing, are free of data races.
pub unsafe trait DisjointWrite<V>: DimensionedDataSource<V> + Sync {
    /// Overwrites the value at `point` through a shared reference.
    ///
    /// # Safety
    ///
    /// For the duration of the call no other thread may read or write the
    /// same `point`.
    unsafe fn set_disjoint(&self, point: &GridPoint, value: &V);
}
