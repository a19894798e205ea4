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

//! # Resample Engine
//!
//! One generic driver serves every kernel and every value algebra.
//!
//! ## Flow
//!
//! 1. Validate the requested extents against the input. Nothing is allocated
//!    when validation fails.
//! 2. Allocate the output through the input's factory, filled with the
//!    algebra's zero.
//! 3. Pick the largest output axis as the split axis and ask `plan_work` for
//!    a worker count. A single-access input or output forces one worker.
//! 4. One worker runs inline on the calling thread through `set`. Several
//!    workers run on scoped threads, one slab each, writing through
//!    `DisjointWrite::set_disjoint`.
//! 5. Join every worker. A panic in any worker discards the output and is
//!    reported as `ResampleError::WorkerFailed`.
//!
//! ## Safety
//!
//! The parallel path writes into one shared output without locks. This is
//! sound because `partition_grid` hands every worker a slab that is disjoint
//! from all others, workers only write points their own `GridIterator`
//! yields, and nobody reads the output until all workers are joined. Debug
//! builds additionally assert that every write stays inside its slab.

use crate::{
    coordinate::{CoordinateMap, MappedCoordinate},
    error::{ResampleError, Result},
    kernel::{CubicKernel, Interpolator, LinearKernel, NearestKernel},
    partition::{partition_grid, plan_work, Partition},
    resampler::ResampleOutcome,
    stats::ResampleStatisticsBuilder,
};
use std::{
    any::Any,
    panic::{catch_unwind, AssertUnwindSafe},
    time::Instant,
};
use tessel_core::{
    grid::{AxisExtents, GridIterator, GridPoint},
    num::ValueAlgebra,
};
use tessel_data::{AccessMode, DimensionedDataSource, DisjointWrite};

/// Where a worker puts the values it computes.
trait PointSink<V> {
    fn write(&mut self, point: &GridPoint, value: &V);
}

/// Exclusive sink used when the whole grid is filled on the calling thread.
struct InlineSink<'a, O>(&'a mut O);

impl<V, O> PointSink<V> for InlineSink<'_, O>
where
    O: DimensionedDataSource<V>,
{
    #[inline(always)]
    fn write(&mut self, point: &GridPoint, value: &V) {
        self.0.set(point, value);
    }
}

/// Shared sink restricted to one partition.
struct PartitionWriter<'a, O> {
    output: &'a O,
    partition: &'a Partition,
}

impl<'a, O> PartitionWriter<'a, O> {
    /// # Safety
    ///
    /// No other writer may exist for any point of `partition`, and `output`
    /// must not be read while the writer is alive.
    #[inline]
    unsafe fn new(output: &'a O, partition: &'a Partition) -> Self {
        Self { output, partition }
    }
}

impl<V, O> PointSink<V> for PartitionWriter<'_, O>
where
    O: DisjointWrite<V>,
{
    #[inline(always)]
    fn write(&mut self, point: &GridPoint, value: &V) {
        debug_assert!(
            self.partition.contains(point),
            "called `PartitionWriter::write` with point {} outside of {}",
            point,
            self.partition
        );
        // SAFETY: the constructor's contract grants this writer exclusive
        // access to every point of its partition.
        unsafe { self.output.set_disjoint(point, value) }
    }
}

/// Fills every point of the inclusive box `[min, max]` and returns how many
/// points were written.
fn run_partition<A, S, K, W>(
    algebra: &A,
    input: &S,
    map: &CoordinateMap,
    min: &GridPoint,
    max: &GridPoint,
    sink: &mut W,
) -> usize
where
    A: ValueAlgebra,
    S: DimensionedDataSource<A::Value> + ?Sized,
    K: Interpolator<A>,
    W: PointSink<A::Value>,
{
    let num_dimensions = map.num_dimensions();
    let mut kernel = K::new(algebra, num_dimensions);
    let mut coords = vec![MappedCoordinate::default(); num_dimensions];
    let mut value = algebra.construct();
    let mut point = GridPoint::zeros(num_dimensions);

    let mut iter = GridIterator::new(min, max);
    let mut written = 0;
    while iter.has_next() {
        iter.next_into(&mut point);
        map.map_point(&point, &mut coords);
        kernel.interpolate(algebra, input, &coords, &mut value);
        sink.write(&point, &value);
        written += 1;
    }
    written
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked with a non-string payload".to_string()
    }
}

/// Resamples `input` onto a grid of `new_extents` with kernel `K`.
pub(crate) fn execute<A, S, K>(
    algebra: &A,
    new_extents: &[usize],
    input: &S,
    max_pieces: usize,
) -> Result<ResampleOutcome<S::Storage>>
where
    A: ValueAlgebra,
    S: DimensionedDataSource<A::Value> + Sync,
    K: Interpolator<A>,
{
    let start_time = Instant::now();

    // 1. Validate
    if new_extents.len() != input.num_dimensions() {
        return Err(ResampleError::DimensionMismatch {
            expected: input.num_dimensions(),
            actual: new_extents.len(),
        });
    }
    let output_extents =
        AxisExtents::new(new_extents).map_err(|source| ResampleError::InvalidDimensions {
            extents: new_extents.to_vec(),
            source,
        })?;

    // 2. Allocate
    let zero = algebra.construct();
    let mut output = input.allocate(&output_extents, &zero)?;

    // 3. Plan
    let split_axis = output_extents.largest_axis();
    let single_access =
        input.access_mode().is_single_access() || output.access_mode().is_single_access();
    let access = if single_access {
        AccessMode::SingleAccess
    } else {
        AccessMode::Concurrent
    };
    let plan = plan_work(output_extents.dimension(split_axis), max_pieces, access);

    let method = <K as Interpolator<A>>::METHOD;
    let span = tracing::debug_span!(
        "resample",
        method = %method,
        input = %input.extents(),
        output = %output_extents,
        workers = plan.pieces(),
    );
    let _enter = span.enter();

    if single_access && max_pieces > 1 {
        tracing::warn!(
            requested = max_pieces,
            "single-access storage forces a single worker"
        );
    }

    let map = CoordinateMap::new(input.extents(), &output_extents);

    // 4. Run
    let points_written = if plan.is_inline() {
        let min = output_extents.min_point();
        let max = output_extents.max_point();
        tracing::trace!(worker = 0, "worker started inline");
        let written = catch_unwind(AssertUnwindSafe(|| {
            let mut sink = InlineSink(&mut output);
            run_partition::<A, S, K, _>(algebra, input, &map, &min, &max, &mut sink)
        }))
        .map_err(|payload| ResampleError::WorkerFailed {
            worker: 0,
            message: panic_message(&*payload),
        })?;
        tracing::trace!(worker = 0, points = written, "worker finished");
        written
    } else {
        let partitions = partition_grid(&output_extents, split_axis, plan);
        run_parallel::<A, S, K>(algebra, input, &map, &output, &partitions)?
    };

    let statistics = ResampleStatisticsBuilder::new()
        .used_workers(plan.pieces())
        .points_written(points_written)
        .duration(start_time.elapsed())
        .build();
    tracing::debug!(
        points = points_written,
        secs = statistics.duration.as_secs_f64(),
        "resample finished"
    );

    Ok(ResampleOutcome::new(output, statistics))
}

/// Runs one scoped thread per partition and joins all of them.
fn run_parallel<A, S, K>(
    algebra: &A,
    input: &S,
    map: &CoordinateMap,
    output: &S::Storage,
    partitions: &[Partition],
) -> Result<usize>
where
    A: ValueAlgebra,
    S: DimensionedDataSource<A::Value> + Sync,
    K: Interpolator<A>,
{
    std::thread::scope(|scope| {
        let mut handles = Vec::with_capacity(partitions.len());

        for (worker, partition) in partitions.iter().enumerate() {
            let handle = scope.spawn(move || {
                tracing::trace!(worker, partition = %partition, "worker started");
                // SAFETY: `partition_grid` produced pairwise disjoint
                // partitions, each handed to exactly one worker, and the
                // output is not read before every worker is joined.
                let mut sink = unsafe { PartitionWriter::new(output, partition) };
                let written = run_partition::<A, S, K, _>(
                    algebra,
                    input,
                    map,
                    partition.min(),
                    partition.max(),
                    &mut sink,
                );
                tracing::trace!(worker, points = written, "worker finished");
                written
            });
            handles.push(handle);
        }

        let mut written = 0;
        let mut failure = None;
        for (worker, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(n) => written += n,
                Err(payload) => {
                    if failure.is_none() {
                        failure = Some(ResampleError::WorkerFailed {
                            worker,
                            message: panic_message(&*payload),
                        });
                    }
                }
            }
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(written),
        }
    })
}

/// Resamples `input` onto `new_extents` with the nearest-neighbor kernel,
/// using at most `max_pieces` workers.
///
/// # Errors
///
/// See `ResampleError`.
///
/// # Examples
///
/// ```rust
/// # use tessel_core::{grid::AxisExtents, num::IntegerAlgebra};
/// # use tessel_data::ArrayDataSource;
/// # use tessel_resample::resample_nearest;
///
/// let alg = IntegerAlgebra::<i32>::new();
/// let input = ArrayDataSource::from_vec(AxisExtents::new(&[4]).unwrap(), vec![10, 20, 30, 40]).unwrap();
/// let output = resample_nearest(&alg, &[4], &input, 2).unwrap();
/// assert_eq!(output.to_vec(), vec![10, 20, 30, 40]);
/// ```
pub fn resample_nearest<A, S>(
    algebra: &A,
    new_extents: &[usize],
    input: &S,
    max_pieces: usize,
) -> Result<S::Storage>
where
    A: ValueAlgebra,
    S: DimensionedDataSource<A::Value> + Sync,
{
    execute::<A, S, NearestKernel<A::Value>>(algebra, new_extents, input, max_pieces)
        .map(ResampleOutcome::into_output)
}

/// Resamples `input` onto `new_extents` with the linear kernel, using at
/// most `max_pieces` workers.
///
/// # Errors
///
/// See `ResampleError`.
///
/// # Examples
///
/// ```rust
/// # use tessel_core::{grid::AxisExtents, num::FloatAlgebra};
/// # use tessel_data::ArrayDataSource;
/// # use tessel_resample::resample_linear;
///
/// let alg = FloatAlgebra::<f64>::new();
/// let input = ArrayDataSource::from_vec(AxisExtents::new(&[2]).unwrap(), vec![0.0, 10.0]).unwrap();
/// let output = resample_linear(&alg, &[3], &input, 1).unwrap();
/// assert_eq!(output.to_vec(), vec![0.0, 5.0, 10.0]);
/// ```
pub fn resample_linear<A, S>(
    algebra: &A,
    new_extents: &[usize],
    input: &S,
    max_pieces: usize,
) -> Result<S::Storage>
where
    A: ValueAlgebra,
    S: DimensionedDataSource<A::Value> + Sync,
{
    execute::<A, S, LinearKernel<A::Value>>(algebra, new_extents, input, max_pieces)
        .map(ResampleOutcome::into_output)
}

/// Resamples `input` onto `new_extents` with the cubic kernel, using at most
/// `max_pieces` workers.
///
/// `input` must tolerate reads one sample before and two samples after every
/// lattice point; wrap plain storage in a `PaddedDataSource`. Out-of-bounds
/// reads on unpadded storage surface as `ResampleError::WorkerFailed`.
pub fn resample_cubic<A, S>(
    algebra: &A,
    new_extents: &[usize],
    input: &S,
    max_pieces: usize,
) -> Result<S::Storage>
where
    A: ValueAlgebra,
    S: DimensionedDataSource<A::Value> + Sync,
{
    execute::<A, S, CubicKernel<A::Value>>(algebra, new_extents, input, max_pieces)
        .map(ResampleOutcome::into_output)
}
