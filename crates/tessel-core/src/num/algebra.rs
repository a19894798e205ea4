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

/// The minimal capability set a number type must supply to be resampled.
///
/// An algebra is a (usually zero-sized) object that knows how to build and
/// combine values of its associated `Value` type. Generic algorithms hold a
/// `&A` and never inspect a value's representation, so one algorithm body
/// serves integers, reals, complex numbers, and hypercomplex numbers.
///
/// Output parameters are always the last argument and are never aliased with
/// the inputs; callers that need an in-place update keep a scratch value.
///
/// # Examples
///
/// ```rust
/// # use tessel_core::num::{FloatAlgebra, ValueAlgebra};
///
/// let alg = FloatAlgebra::<f64>::new();
/// let a = 2.0;
/// let b = 3.0;
/// let mut sum = alg.construct();
/// alg.add(&a, &b, &mut sum);
///
/// let mut scaled = alg.construct();
/// alg.scale_by_double(0.5, &sum, &mut scaled);
/// assert_eq!(scaled, 2.5);
/// ```
pub trait ValueAlgebra: Sync {
    /// The concrete member type manipulated by this algebra.
    type Value: Clone + Send + Sync;

    /// Returns a freshly constructed, zero-initialized value.
    fn construct(&self) -> Self::Value;

    /// Sets `a` to zero.
    fn zero(&self, a: &mut Self::Value);

    /// Copies `from` into `to`.
    fn assign(&self, from: &Self::Value, to: &mut Self::Value);

    /// Computes `c = a + b`.
    fn add(&self, a: &Self::Value, b: &Self::Value, c: &mut Self::Value);

    /// Computes `b = factor * a`.
    fn scale_by_double(&self, factor: f64, a: &Self::Value, b: &mut Self::Value);

    /// Computes `out = sum_k weights[k] * values[k]`.
    ///
    /// The provided body is a chain of `scale_by_double` and `add` calls
    /// staged through the two `scratch` values. Algebras whose scaling
    /// rounds (integers) override it to round the whole sum once.
    ///
    /// # Panics
    ///
    /// In debug builds, if `weights` and `values` differ in length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessel_core::num::{IntegerAlgebra, ValueAlgebra};
    ///
    /// let alg = IntegerAlgebra::<i32>::new();
    /// let mut scratch = [0, 0];
    /// let mut out = 0;
    /// alg.weighted_sum(&[0.5, 0.5], &[1, 1], &mut scratch, &mut out);
    /// assert_eq!(out, 1);
    /// ```
    fn weighted_sum(
        &self,
        weights: &[f64],
        values: &[Self::Value],
        scratch: &mut [Self::Value; 2],
        out: &mut Self::Value,
    ) {
        debug_assert_eq!(
            weights.len(),
            values.len(),
            "called `ValueAlgebra::weighted_sum` with {} weights for {} values",
            weights.len(),
            values.len()
        );

        let [term, sum] = scratch;
        self.zero(out);
        for (&w, v) in weights.iter().zip(values) {
            self.scale_by_double(w, v, term);
            self.add(out, term, sum);
            std::mem::swap(out, sum);
        }
    }
}
