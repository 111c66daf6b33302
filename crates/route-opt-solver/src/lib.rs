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

//! 2-opt local search over multi-route schedules.
//!
//! The engine explores *2-opt swaps*: moving every occurrence of a single
//! item from one route to chosen positions in the same or another route. Two
//! drivers are provided in [`engine::opt2`]: a deterministic best-improvement
//! search ([`engine::opt2::bfs_opt2`]) and a seeded stochastic
//! first-improvement search ([`engine::opt2::dfs_opt2`]). Both repeat full
//! passes over the swap neighborhood until no swap improves the objective,
//! honoring a cooperative [`monitor::stop::StopToken`].
//!
//! Route costs come from a caller-supplied [`eval::cost_eval::RouteEvaluator`]
//! and are memoized per search invocation in an
//! [`eval::cache::RouteCostCache`].

pub mod engine;
pub mod eval;
pub mod monitor;
pub mod search;
pub mod state;

pub mod prelude {
    pub use crate::engine::err::SearchInterrupted;
    pub use crate::engine::opt2::{bfs_opt2, dfs_opt2};
    pub use crate::eval::cache::RouteCostCache;
    pub use crate::eval::cost_eval::RouteEvaluator;
    pub use crate::monitor::observer::{NullObserver, ScheduleObserver};
    pub use crate::monitor::stop::StopToken;
    pub use crate::search::swaps::Swap;
    pub use route_opt_model::prelude::{Route, Schedule, ScheduleError};
}
