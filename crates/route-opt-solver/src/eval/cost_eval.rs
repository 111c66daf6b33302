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

use std::fmt;

/// Scores a single route in a given row of a schedule.
///
/// `C` is an opaque context threaded unchanged through a whole search; `T`
/// is the route item type. Implementations must be pure and deterministic:
/// equal routes in equal rows must yield bit-equal costs, since results are
/// memoized and compared with strict `<`. Returning NaN is undefined
/// behavior. An evaluator that needs to fail should panic; the engine never
/// catches or caches a panicking evaluation.
pub trait RouteEvaluator<C, T>: Send {
    /// A short identifier for logging and diagnostics.
    fn name(&self) -> &str;

    /// Computes the cost of `route` when driven by the vehicle of row `row`.
    fn eval_route(&self, context: &C, row: usize, route: &[T]) -> f64;
}

impl<'a, C, T> fmt::Debug for dyn RouteEvaluator<C, T> + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteEvaluator({})", self.name())
    }
}

impl<'a, C, T> fmt::Display for dyn RouteEvaluator<C, T> + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteEvaluator({})", self.name())
    }
}
