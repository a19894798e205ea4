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

//! # Tessel Data
//!
//! Logical N-dimensional arrays of algebra values. Algorithms see storage
//! only through the `DimensionedDataSource` contract: read a value at a
//! lattice point, write one back, report extents, declare whether the
//! backing resource tolerates concurrent access, and allocate a fresh store
//! of the same kind for results.
//!
//! ## Modules
//!
//! - `source`: The `DimensionedDataSource` and `DisjointWrite` contracts and
//!   the `AccessMode` single-access declaration.
//! - `array`: `ArrayDataSource<V>`, row-major in-memory storage that supports
//!   concurrent writes to disjoint regions without locking.
//! - `padded`: `PaddedDataSource<S, V>`, a view that answers reads outside
//!   the inner bounds with a constant or the nearest edge sample.
//! - `error`: `DataError`.
//!
//! ## Usage
//!
//! ```rust
//! use tessel_core::grid::{AxisExtents, GridPoint};
//! use tessel_data::{array::ArrayDataSource, source::DimensionedDataSource};
//!
//! let extents = AxisExtents::new(&[2, 2]).unwrap();
//! let mut data = ArrayDataSource::from_vec(extents, vec![1, 2, 3, 4]).unwrap();
//!
//! let p = GridPoint::from([1, 0]);
//! let mut v = 0;
//! data.get(&p, &mut v);
//! assert_eq!(v, 3);
//!
//! data.set(&p, &30);
//! assert_eq!(data.to_vec(), vec![1, 2, 30, 4]);
//! ```

pub mod array;
pub mod error;
pub mod padded;
pub mod source;

pub use array::ArrayDataSource;
pub use error::DataError;
pub use padded::{PaddedDataSource, Padding};
pub use source::{AccessMode, DimensionedDataSource, DisjointWrite};
