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

//! # In-Memory Array Storage
//!
//! `ArrayDataSource<V>` stores one value per lattice point in a flat,
//! row-major buffer (last axis contiguous). Each value lives in its own
//! `UnsafeCell`, which lets parallel workers write disjoint output regions
//! through a shared reference without any lock; the `DisjointWrite`
//! contract places the burden of disjointness on the caller.
//!
//! The access mode is a property of the store and is inherited by anything
//! it allocates, so a store marked `SingleAccess` keeps resampling
//! single-threaded end to end.

use crate::{
    error::DataError,
    source::{AccessMode, DimensionedDataSource, DisjointWrite},
};
use smallvec::SmallVec;
use std::cell::UnsafeCell;
use tessel_core::grid::{AxisExtents, GridPoint};

#[repr(transparent)]
struct Slot<V>(UnsafeCell<V>);

// SAFETY: shared access to a slot is either a read through `get` or a write
// through `DisjointWrite::set_disjoint`, whose contract forbids any other
// access to the same slot for the duration of the write.
unsafe impl<V: Send + Sync> Sync for Slot<V> {}

/// Row-major in-memory N-dimensional storage.
///
/// # Examples
///
/// ```rust
/// # use tessel_core::grid::{AxisExtents, GridPoint};
/// # use tessel_data::{AccessMode, ArrayDataSource, DimensionedDataSource};
///
/// let extents = AxisExtents::new(&[3]).unwrap();
/// let data = ArrayDataSource::filled(extents, &0.5f64)
///     .unwrap()
///     .with_access_mode(AccessMode::SingleAccess);
///
/// assert_eq!(data.to_vec(), vec![0.5, 0.5, 0.5]);
/// assert!(data.access_mode().is_single_access());
/// ```
pub struct ArrayDataSource<V> {
    extents: AxisExtents,
    strides: SmallVec<[usize; 4]>,
    slots: Box<[Slot<V>]>,
    access: AccessMode,
}

impl<V> ArrayDataSource<V> {
    /// Creates storage from values laid out in row-major order.
    pub fn from_vec(extents: AxisExtents, values: Vec<V>) -> Result<Self, DataError> {
        if values.len() != extents.num_elements() {
            return Err(DataError::LengthMismatch {
                extents: extents.as_slice().to_vec(),
                expected: extents.num_elements(),
                actual: values.len(),
            });
        }

        let slots = values
            .into_iter()
            .map(|v| Slot(UnsafeCell::new(v)))
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Ok(Self {
            strides: extents.strides(),
            extents,
            slots,
            access: AccessMode::Concurrent,
        })
    }

    /// Sets the declared access mode.
    #[inline]
    pub fn with_access_mode(mut self, access: AccessMode) -> Self {
        self.access = access;
        self
    }

    /// Returns the number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no value is stored. Valid extents never produce an
    /// empty store.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the values in row-major order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        // SAFETY: with `&self` held, writers can only go through
        // `set_disjoint`, whose caller guarantees no overlapping reads.
        self.slots.iter().map(|s| unsafe { &*s.0.get() })
    }

    /// Consumes the store and returns its values in row-major order.
    pub fn into_vec(self) -> Vec<V> {
        self.slots
            .into_vec()
            .into_iter()
            .map(|s| s.0.into_inner())
            .collect()
    }

    /// Maps `point` to its flat row-major offset.
    ///
    /// # Panics
    ///
    /// Panics if `point` has the wrong dimensionality or lies outside the
    /// extents.
    #[inline]
    pub fn offset(&self, point: &GridPoint) -> usize {
        assert!(
            self.extents.contains(point),
            "called `ArrayDataSource::offset` with point {} outside of extents {}",
            point,
            self.extents
        );
        point
            .coords()
            .iter()
            .zip(self.strides.iter())
            .map(|(&c, &s)| c as usize * s)
            .sum()
    }
}

impl<V> ArrayDataSource<V>
where
    V: Clone,
{
    /// Creates storage with every value set to `value`.
    pub fn filled(extents: AxisExtents, value: &V) -> Result<Self, DataError> {
        let elements = extents.num_elements();
        let mut values = Vec::new();
        values
            .try_reserve_exact(elements)
            .map_err(|_| DataError::OutOfMemory { elements })?;
        values.resize(elements, value.clone());
        Self::from_vec(extents, values)
    }

    /// Returns a copy of the values in row-major order.
    #[inline]
    pub fn to_vec(&self) -> Vec<V> {
        self.values().cloned().collect()
    }
}

impl<V> DimensionedDataSource<V> for ArrayDataSource<V>
where
    V: Clone + Send + Sync,
{
    type Storage = ArrayDataSource<V>;

    #[inline(always)]
    fn extents(&self) -> &AxisExtents {
        &self.extents
    }

    #[inline]
    fn get(&self, point: &GridPoint, out: &mut V) {
        let offset = self.offset(point);
        // SAFETY: see `values`.
        out.clone_from(unsafe { &*self.slots[offset].0.get() });
    }

    #[inline]
    fn set(&mut self, point: &GridPoint, value: &V) {
        let offset = self.offset(point);
        self.slots[offset].0.get_mut().clone_from(value);
    }

    #[inline(always)]
    fn access_mode(&self) -> AccessMode {
        self.access
    }

    fn allocate(&self, extents: &AxisExtents, zero: &V) -> Result<Self::Storage, DataError> {
        tracing::trace!(extents = %extents, access = %self.access, "allocating array storage");
        Ok(Self::filled(extents.clone(), zero)?.with_access_mode(self.access))
    }
}

// SAFETY: every slot is a separate `UnsafeCell`, so writes to distinct
// points touch distinct memory.
unsafe impl<V> DisjointWrite<V> for ArrayDataSource<V>
where
    V: Clone + Send + Sync,
{
    #[inline]
    unsafe fn set_disjoint(&self, point: &GridPoint, value: &V) {
        let offset = self.offset(point);
        // SAFETY: the caller guarantees exclusive access to this point.
        unsafe { (*self.slots[offset].0.get()).clone_from(value) }
    }
}

impl<V> Clone for ArrayDataSource<V>
where
    V: Clone,
{
    fn clone(&self) -> Self {
        let slots = self
            .values()
            .map(|v| Slot(UnsafeCell::new(v.clone())))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self {
            extents: self.extents.clone(),
            strides: self.strides.clone(),
            slots,
            access: self.access,
        }
    }
}

impl<V> std::fmt::Debug for ArrayDataSource<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayDataSource")
            .field("extents", &self.extents)
            .field("access", &self.access)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn extents(dims: &[usize]) -> AxisExtents {
        AxisExtents::new(dims).unwrap()
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let err = ArrayDataSource::from_vec(extents(&[2, 2]), vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            DataError::LengthMismatch {
                extents: vec![2, 2],
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_row_major_layout() {
        let data = ArrayDataSource::from_vec(extents(&[2, 3]), (0..6).collect()).unwrap();
        let mut v = 0;
        data.get(&GridPoint::from([0, 2]), &mut v);
        assert_eq!(v, 2);
        data.get(&GridPoint::from([1, 0]), &mut v);
        assert_eq!(v, 3);
        assert_eq!(data.offset(&GridPoint::from([1, 2])), 5);
    }

    #[test]
    fn test_set_then_get() {
        let mut data = ArrayDataSource::filled(extents(&[3, 3, 3]), &0i64).unwrap();
        let p = GridPoint::from([2, 1, 0]);
        data.set(&p, &42);

        let mut v = 0;
        data.get(&p, &mut v);
        assert_eq!(v, 42);
        assert_eq!(data.values().filter(|&&x| x == 42).count(), 1);
    }

    #[test]
    #[should_panic(expected = "outside of extents")]
    fn test_get_out_of_bounds_panics() {
        let data = ArrayDataSource::filled(extents(&[2]), &0u8).unwrap();
        let mut v = 0;
        data.get(&GridPoint::from([2]), &mut v);
    }

    #[test]
    #[should_panic(expected = "outside of extents")]
    fn test_get_negative_panics() {
        let data = ArrayDataSource::filled(extents(&[2]), &0u8).unwrap();
        let mut v = 0;
        data.get(&GridPoint::from([-1]), &mut v);
    }

    #[test]
    fn test_allocate_mirrors_access_mode() {
        let data = ArrayDataSource::filled(extents(&[4]), &1.0f32)
            .unwrap()
            .with_access_mode(AccessMode::SingleAccess);

        let out = data.allocate(&extents(&[2, 5]), &0.0).unwrap();
        assert_eq!(out.extents(), &extents(&[2, 5]));
        assert_eq!(out.access_mode(), AccessMode::SingleAccess);
        assert!(out.values().all(|&v| v == 0.0));
    }

    #[test]
    fn test_into_vec_and_clone() {
        let data = ArrayDataSource::from_vec(extents(&[3]), vec![7, 8, 9]).unwrap();
        let copy = data.clone();
        assert_eq!(data.into_vec(), vec![7, 8, 9]);
        assert_eq!(copy.to_vec(), vec![7, 8, 9]);
        assert_eq!(copy.len(), 3);
        assert!(!copy.is_empty());
    }

    #[test]
    fn test_disjoint_writes_from_threads() {
        let data = ArrayDataSource::filled(extents(&[4, 8]), &0usize).unwrap();

        thread::scope(|scope| {
            for row in 0..4i64 {
                let data = &data;
                scope.spawn(move || {
                    for col in 0..8i64 {
                        let p = GridPoint::from([row, col]);
                        // SAFETY: every thread owns a distinct row.
                        unsafe { data.set_disjoint(&p, &((row * 8 + col) as usize)) };
                    }
                });
            }
        });

        assert_eq!(data.to_vec(), (0..32).collect::<Vec<_>>());
    }
}
