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

use tessel_core::grid::GridError;
use tessel_data::DataError;
use thiserror::Error;

/// The error type for resampling.
///
/// Every variant means the call produced no output: configuration errors are
/// raised before any worker starts, and worker failures discard whatever was
/// partially written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResampleError {
    /// The number of requested output extents differs from the input's
    /// dimensionality.
    #[error("dimensionality mismatch: input has {expected} axes but {actual} output extents were requested")]
    DimensionMismatch {
        /// The input's number of axes.
        expected: usize,
        /// The number of requested output extents.
        actual: usize,
    },

    /// The requested output extents do not form a valid grid.
    #[error("invalid data dimensions {extents:?}")]
    InvalidDimensions {
        /// The requested output extents.
        extents: Vec<usize>,
        /// Why the extents were rejected.
        #[source]
        source: GridError,
    },

    /// The output storage could not be allocated.
    #[error("failed to allocate output storage")]
    Allocation(#[from] DataError),

    /// A worker panicked while filling its partition.
    #[error("resample worker {worker} failed: {message}")]
    WorkerFailed {
        /// The index of the failed worker.
        worker: usize,
        /// The panic message, if one could be recovered.
        message: String,
    },
}

/// Result type for resampling operations.
pub type Result<T> = std::result::Result<T, ResampleError>;
