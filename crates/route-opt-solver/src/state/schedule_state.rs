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

use crate::eval::cost_eval::RouteEvaluator;
use route_opt_model::prelude::{Route, Schedule};
use std::sync::Arc;

/// An evaluated schedule snapshot: routes plus their per-row costs and the
/// objective (the sum of the per-row costs).
///
/// Snapshots are immutable. Committing a swap produces a new snapshot that
/// shares every untouched route allocation and the start-index slice with
/// its predecessor.
#[derive(Debug, Clone)]
pub struct ScheduleState<T> {
    routes: Vec<Route<T>>,
    start_indices: Arc<[usize]>,
    route_costs: Vec<f64>,
    objective: f64,
}

impl<T> ScheduleState<T> {
    /// Evaluates every row of `schedule` with the given evaluator.
    pub fn evaluate<C, E>(schedule: &Schedule<T>, context: &C, evaluator: &E) -> Self
    where
        T: Clone,
        E: RouteEvaluator<C, T>,
    {
        let route_costs: Vec<f64> = schedule
            .routes()
            .iter()
            .enumerate()
            .map(|(row, route)| evaluator.eval_route(context, row, route.as_slice()))
            .collect();
        let objective = route_costs.iter().sum();
        Self {
            routes: schedule.routes().to_vec(),
            start_indices: schedule.start_indices_shared(),
            route_costs,
            objective,
        }
    }

    /// New snapshot with one row replaced; the objective shifts by the cost
    /// difference of that row.
    pub(crate) fn replace_row(&self, row: usize, route: Route<T>, cost: f64) -> Self
    where
        T: Clone,
    {
        let mut routes = self.routes.clone();
        let mut route_costs = self.route_costs.clone();
        let objective = self.objective - route_costs[row] + cost;
        routes[row] = route;
        route_costs[row] = cost;
        Self {
            routes,
            start_indices: Arc::clone(&self.start_indices),
            route_costs,
            objective,
        }
    }

    /// New snapshot with two distinct rows replaced.
    pub(crate) fn replace_rows(
        &self,
        (row_a, route_a, cost_a): (usize, Route<T>, f64),
        (row_b, route_b, cost_b): (usize, Route<T>, f64),
    ) -> Self
    where
        T: Clone,
    {
        debug_assert_ne!(row_a, row_b);
        let mut routes = self.routes.clone();
        let mut route_costs = self.route_costs.clone();
        let objective = self.objective - route_costs[row_a] + cost_a - route_costs[row_b] + cost_b;
        routes[row_a] = route_a;
        route_costs[row_a] = cost_a;
        routes[row_b] = route_b;
        route_costs[row_b] = cost_b;
        Self {
            routes,
            start_indices: Arc::clone(&self.start_indices),
            route_costs,
            objective,
        }
    }

    /// Releases the snapshot back into a plain schedule. The rows were
    /// derived from a validated schedule with frozen prefixes preserved, so
    /// validation is not repeated.
    pub fn into_schedule(self) -> Schedule<T> {
        Schedule::from_parts_unchecked(self.routes, self.start_indices)
    }

    #[inline]
    pub fn routes(&self) -> &[Route<T>] {
        &self.routes
    }

    #[inline]
    pub fn route(&self, row: usize) -> &Route<T> {
        &self.routes[row]
    }

    #[inline]
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    pub fn start_index(&self, row: usize) -> usize {
        self.start_indices[row]
    }

    #[inline]
    pub fn route_cost(&self, row: usize) -> f64 {
        self.route_costs[row]
    }

    #[inline]
    pub fn objective(&self) -> f64 {
        self.objective
    }
}
