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

//! # Tessel Resample
//!
//! Generic N-dimensional resampling of `DimensionedDataSource`s onto grids of
//! a different shape, with nearest-neighbor, linear and cubic kernels.
//!
//! Every algorithm is written once against `ValueAlgebra`, so the same code
//! path resamples integers, reals, complex numbers and hypercomplex numbers.
//! Large outputs are filled in parallel: the longest output axis is split
//! into contiguous slabs, each filled by its own scoped thread writing into
//! the shared output without locks.
//!
//! ## Modules
//!
//! - `coordinate`: exact output-to-input coordinate mapping.
//! - `kernel`: the `Interpolator` trait and the three kernels.
//! - `partition`: the threading policy and slab partitioning.
//! - `engine`: the generic driver and the free `resample_*` functions.
//! - `resampler`: `Resampler`, its builder, and `ResampleOutcome`.
//! - `stats`: per-call statistics.
//! - `error`: `ResampleError`.
//!
//! ## Usage
//!
//! ```rust
//! use tessel_core::{grid::AxisExtents, num::FloatAlgebra};
//! use tessel_data::{ArrayDataSource, PaddedDataSource};
//! use tessel_resample::{resample_cubic, resample_linear};
//!
//! let alg = FloatAlgebra::<f64>::new();
//! let input = ArrayDataSource::from_vec(AxisExtents::new(&[3]).unwrap(), vec![0.0, 10.0, 20.0]).unwrap();
//!
//! let linear = resample_linear(&alg, &[5], &input, 2).unwrap();
//! assert_eq!(linear.to_vec(), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
//!
//! // Cubic reads past the borders and needs a padded view.
//! let padded = PaddedDataSource::edge(input);
//! let cubic = resample_cubic(&alg, &[5], &padded, 2).unwrap();
//! assert_eq!(cubic.to_vec()[2], 10.0);
//! ```

pub mod coordinate;
pub mod engine;
pub mod error;
pub mod kernel;
pub mod partition;
pub mod resampler;
pub mod stats;

pub use engine::{resample_cubic, resample_linear, resample_nearest};
pub use error::{ResampleError, Result};
pub use kernel::{Interpolator, Method};
pub use resampler::{ResampleOutcome, Resampler, ResamplerBuilder};
pub use stats::{ResampleStatistics, ResampleStatisticsBuilder};
