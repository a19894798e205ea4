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

//! # Numeric Foundations
//!
//! The value algebra contract and its concrete implementations. Algorithms
//! never touch a value directly; they hold an algebra `A: ValueAlgebra` and
//! route every construction, copy, addition, and scaling through it.
//!
//! ## Submodules
//!
//! - `algebra`: The `ValueAlgebra` trait itself.
//! - `scalar`: `FloatAlgebra<T>` for IEEE floats and `IntegerAlgebra<T>` for
//!   every primitive integer width (saturating add and scaling, weighted
//!   sums rounded once).
//! - `complex`: `ComplexAlgebra<T>` over `num_complex::Complex<T>`.
//! - `hypercomplex`: `Hypercomplex<T, N>` with the `Quaternion` and
//!   `Octonion` aliases and their component-wise algebra.

pub mod algebra;
pub mod complex;
pub mod hypercomplex;
pub mod scalar;

pub use algebra::ValueAlgebra;
pub use complex::ComplexAlgebra;
pub use hypercomplex::{Hypercomplex, HypercomplexAlgebra, Octonion, Quaternion};
pub use scalar::{FloatAlgebra, IntegerAlgebra};
