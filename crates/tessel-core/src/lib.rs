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

//! # Tessel Core
//!
//! Foundational numerics and lattice primitives for the Tessel resampling
//! ecosystem. This crate holds the pieces every higher layer agrees on: how a
//! number type is manipulated generically, how a point in an N-dimensional
//! integer lattice is represented, and how a box of such points is walked.
//!
//! ## Modules
//!
//! - `num`: The `ValueAlgebra` capability trait (construct, zero, assign, add,
//!   scale by `f64`) together with algebras for primitive floats, every
//!   primitive integer width, complex numbers, quaternions, and octonions.
//! - `grid`: `GridPoint` (a reusable lattice coordinate), `AxisExtents`
//!   (validated per-axis sizes), and `GridIterator` (exhaustive row-major
//!   enumeration of an inclusive box).
//! - `math`: Closed-open `AxisRange` intervals with the tiling split used to
//!   hand out contiguous work ranges.
//!
//! ## Purpose
//!
//! Algorithms written against these primitives are written once and run
//! unchanged for integers, reals, and hypercomplex values alike.

pub mod grid;
pub mod math;
pub mod num;
