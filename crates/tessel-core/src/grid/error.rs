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

use thiserror::Error;

/// The error type for grid construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one axis.
    #[error("grid extents must contain at least one axis")]
    EmptyExtents,

    /// Every axis of a grid must have a positive size.
    #[error("axis {axis} has extent 0; all extents must be positive")]
    ZeroExtent {
        /// The offending axis.
        axis: usize,
    },

    /// The total number of lattice points does not fit into `usize`.
    #[error("grid with extents {extents:?} has more points than fit into usize")]
    Overflow {
        /// The requested extents.
        extents: Vec<usize>,
    },
}
