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

//! # Configured Resampler
//!
//! `Resampler` bundles an interpolation `Method` and a worker limit so one
//! configuration can be applied to many inputs. Unlike the free functions it
//! returns a `ResampleOutcome` that carries run statistics next to the
//! output.
//!
//! ## Usage
//!
//! ```rust
//! use tessel_core::{grid::AxisExtents, num::FloatAlgebra};
//! use tessel_data::ArrayDataSource;
//! use tessel_resample::{Method, ResamplerBuilder};
//!
//! let alg = FloatAlgebra::<f64>::new();
//! let input = ArrayDataSource::from_vec(
//!     AxisExtents::new(&[2, 2]).unwrap(),
//!     vec![0.0, 1.0, 2.0, 3.0],
//! )
//! .unwrap();
//!
//! let resampler = ResamplerBuilder::new()
//!     .with_method(Method::NearestNeighbor)
//!     .with_max_pieces(2)
//!     .build();
//!
//! let outcome = resampler.run(&alg, &[2, 2], &input).unwrap();
//! assert_eq!(outcome.statistics().used_workers, 2);
//! assert_eq!(outcome.into_output().to_vec(), vec![0.0, 1.0, 2.0, 3.0]);
//! ```

use crate::{
    engine::execute,
    error::Result,
    kernel::{CubicKernel, LinearKernel, Method, NearestKernel},
    stats::ResampleStatistics,
};
use tessel_core::num::ValueAlgebra;
use tessel_data::DimensionedDataSource;

/// The result of a successful resample call.
#[derive(Debug, Clone)]
pub struct ResampleOutcome<O> {
    output: O,
    statistics: ResampleStatistics,
}

impl<O> ResampleOutcome<O> {
    #[inline]
    pub(crate) fn new(output: O, statistics: ResampleStatistics) -> Self {
        Self { output, statistics }
    }

    /// Returns the fully populated output.
    #[inline]
    pub fn output(&self) -> &O {
        &self.output
    }

    #[inline]
    pub fn statistics(&self) -> &ResampleStatistics {
        &self.statistics
    }

    #[inline]
    pub fn into_output(self) -> O {
        self.output
    }

    #[inline]
    pub fn into_parts(self) -> (O, ResampleStatistics) {
        (self.output, self.statistics)
    }
}

impl<O> std::fmt::Display for ResampleOutcome<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.statistics)
    }
}

/// A reusable resample configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resampler {
    method: Method,
    max_pieces: usize,
}

impl Default for Resampler {
    #[inline]
    fn default() -> Self {
        ResamplerBuilder::new().build()
    }
}

impl Resampler {
    #[inline]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the upper bound on the number of workers.
    #[inline]
    pub fn max_pieces(&self) -> usize {
        self.max_pieces
    }

    /// Resamples `input` onto a grid of `new_extents`.
    ///
    /// # Errors
    ///
    /// - `ResampleError::DimensionMismatch` if `new_extents` has the wrong
    ///   number of axes.
    /// - `ResampleError::InvalidDimensions` if `new_extents` contains a zero.
    /// - `ResampleError::Allocation` if the output cannot be allocated.
    /// - `ResampleError::WorkerFailed` if any worker panicked.
    ///
    /// On error no output is returned.
    pub fn run<A, S>(
        &self,
        algebra: &A,
        new_extents: &[usize],
        input: &S,
    ) -> Result<ResampleOutcome<S::Storage>>
    where
        A: ValueAlgebra,
        S: DimensionedDataSource<A::Value> + Sync,
    {
        match self.method {
            Method::NearestNeighbor => execute::<A, S, NearestKernel<A::Value>>(
                algebra,
                new_extents,
                input,
                self.max_pieces,
            ),
            Method::Linear => execute::<A, S, LinearKernel<A::Value>>(
                algebra,
                new_extents,
                input,
                self.max_pieces,
            ),
            Method::Cubic => execute::<A, S, CubicKernel<A::Value>>(
                algebra,
                new_extents,
                input,
                self.max_pieces,
            ),
        }
    }
}

impl std::fmt::Display for Resampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Resampler(method: {}, max_pieces: {})",
            self.method, self.max_pieces
        )
    }
}

/// Builder for `Resampler`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResamplerBuilder {
    method: Method,
    max_pieces: usize,
}

impl Default for ResamplerBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ResamplerBuilder {
    /// Creates a builder for linear resampling with one worker per available
    /// hardware thread.
    #[inline]
    pub fn new() -> Self {
        Self {
            method: Method::default(),
            max_pieces: std::thread::available_parallelism()
                .map(std::num::NonZeroUsize::get)
                .unwrap_or(1),
        }
    }

    #[inline]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets the upper bound on the number of workers. Zero is treated as one.
    #[inline]
    pub fn with_max_pieces(mut self, max_pieces: usize) -> Self {
        self.max_pieces = max_pieces;
        self
    }

    #[inline]
    pub fn build(self) -> Resampler {
        Resampler {
            method: self.method,
            max_pieces: self.max_pieces,
        }
    }
}
