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

use crate::engine::err::SearchInterrupted;
use crate::eval::cache::RouteCostCache;
use crate::eval::cost_eval::RouteEvaluator;
use crate::monitor::observer::ScheduleObserver;
use crate::monitor::stop::StopToken;
use crate::search::swaps::{Swap, apply_swap, swap_iterator};
use crate::state::schedule_state::ScheduleState;
use rand::{Rng, RngCore, seq::SliceRandom};
use route_opt_model::prelude::Schedule;
use std::hash::Hash;

/// How each pass orders its candidate swaps.
enum SwapOrdering<'r> {
    /// Canonical enumeration order; together with best-improvement
    /// thresholding this makes the search deterministic on its input.
    Canonical,
    /// A uniform shuffle of the full pass, drawn from the caller's generator.
    Shuffled(&'r mut dyn RngCore),
}

/// 2-opt local search, breadth-first variant.
///
/// Scans every candidate swap of the current schedule; a swap is committed
/// when the schedule it produces beats the best one seen so far, so within a
/// pass the incumbent only tightens. Passes repeat until one commits
/// nothing. Deterministic: equal inputs produce equal outputs.
///
/// `stop` is polled once per candidate swap; a set token aborts with
/// [`SearchInterrupted`] and no schedule. `observer`, when given, is
/// notified after every committed swap with strictly decreasing objectives.
///
/// Returns a schedule whose objective is at most the input's; row count and
/// start indices are unchanged.
#[tracing::instrument(level = "debug", name = "BFS 2-opt", skip_all)]
pub fn bfs_opt2<C, T, E>(
    schedule: &Schedule<T>,
    context: &C,
    evaluator: &E,
    stop: &StopToken,
    observer: Option<&mut dyn ScheduleObserver<T>>,
) -> Result<Schedule<T>, SearchInterrupted>
where
    T: Clone + Eq + Hash,
    E: RouteEvaluator<C, T>,
{
    opt2(
        schedule,
        context,
        evaluator,
        SwapOrdering::Canonical,
        stop,
        observer,
    )
}

/// 2-opt local search, depth-first variant.
///
/// Each pass materializes the candidate swaps, shuffles them with `rng`, and
/// commits the first improving one, restarting from the improved schedule.
/// Stops once a full shuffled pass commits nothing. Deterministic for a
/// fixed generator seed.
#[tracing::instrument(level = "debug", name = "DFS 2-opt", skip_all)]
pub fn dfs_opt2<C, T, E, R>(
    schedule: &Schedule<T>,
    context: &C,
    evaluator: &E,
    rng: &mut R,
    stop: &StopToken,
    observer: Option<&mut dyn ScheduleObserver<T>>,
) -> Result<Schedule<T>, SearchInterrupted>
where
    T: Clone + Eq + Hash,
    E: RouteEvaluator<C, T>,
    R: Rng,
{
    opt2(
        schedule,
        context,
        evaluator,
        SwapOrdering::Shuffled(rng),
        stop,
        observer,
    )
}

fn opt2<C, T, E>(
    schedule: &Schedule<T>,
    context: &C,
    evaluator: &E,
    mut ordering: SwapOrdering<'_>,
    stop: &StopToken,
    mut observer: Option<&mut dyn ScheduleObserver<T>>,
) -> Result<Schedule<T>, SearchInterrupted>
where
    T: Clone + Eq + Hash,
    E: RouteEvaluator<C, T>,
{
    let depth_first = matches!(ordering, SwapOrdering::Shuffled(_));
    let base = ScheduleState::evaluate(schedule, context, evaluator);
    tracing::debug!(
        objective = base.objective(),
        rows = base.num_routes(),
        evaluator = evaluator.name(),
        depth_first,
        "starting 2-opt search"
    );

    // The cache lives for this invocation only, seeded with the costs the
    // initial evaluation already paid for.
    let mut cache = RouteCostCache::new();
    for (row, route) in base.routes().iter().enumerate() {
        cache.store(route.clone(), base.route_cost(row));
    }

    let mut best = base;
    let mut passes = 0u32;
    let mut improving = true;
    while improving {
        improving = false;
        passes += 1;

        let pass_base = best.clone();
        let swaps: Box<dyn Iterator<Item = Swap<T>> + '_> = match &mut ordering {
            SwapOrdering::Canonical => Box::new(swap_iterator(&pass_base)),
            SwapOrdering::Shuffled(rng) => {
                let mut all: Vec<Swap<T>> = swap_iterator(&pass_base).collect();
                all.shuffle(&mut **rng);
                Box::new(all.into_iter())
            }
        };

        for swap in swaps {
            if stop.is_set() {
                tracing::debug!(passes, "2-opt search stopped on request");
                return Err(SearchInterrupted);
            }
            // Candidates are applied to the pass base; they must beat the
            // best schedule seen, not just the base.
            let threshold = best.objective() - pass_base.objective();
            if let Some(improved) =
                apply_swap(&pass_base, &swap, threshold, context, evaluator, &mut cache)
            {
                improving = true;
                tracing::trace!(
                    objective = improved.objective(),
                    from_row = swap.from_row(),
                    to_row = swap.to_row(),
                    "committed improving swap"
                );
                best = improved;
                if let Some(observer) = &mut observer {
                    observer.on_improvement(best.routes(), best.objective());
                }
                if depth_first {
                    break;
                }
            }
        }
    }

    tracing::debug!(passes, objective = best.objective(), "2-opt search converged");
    Ok(best.into_schedule())
}
