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

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use route_opt_model::prelude::{Route, Schedule};
use route_opt_solver::engine::opt2::{bfs_opt2, dfs_opt2};
use route_opt_solver::eval::cost_eval::RouteEvaluator;
use route_opt_solver::monitor::stop::StopToken;
use std::hint::black_box;

/// Each item prefers the position `item % row_width`; cost is the total
/// displacement. The context carries the row width.
struct Displacement;

impl RouteEvaluator<usize, u32> for Displacement {
    fn name(&self) -> &str {
        "Displacement"
    }

    fn eval_route(&self, row_width: &usize, _row: usize, route: &[u32]) -> f64 {
        route
            .iter()
            .enumerate()
            .map(|(position, &item)| position.abs_diff(item as usize % *row_width))
            .sum::<usize>() as f64
    }
}

/// Rows of distinct items laid out in reverse of their preferred order, so
/// the search has plenty of improving swaps to chew through.
fn build_schedule(rows: usize, per_row: usize) -> Schedule<u32> {
    let routes = (0..rows)
        .map(|row| {
            (0..per_row)
                .rev()
                .map(|i| (row * per_row + i) as u32)
                .collect::<Vec<_>>()
        })
        .map(Route::from)
        .collect();
    Schedule::unrestricted(routes)
}

fn bench_bfs_opt2(c: &mut Criterion) {
    let schedule = build_schedule(3, 6);
    c.bench_function("bfs_opt2 3x6 reversed", |b| {
        b.iter(|| {
            let result = bfs_opt2(
                black_box(&schedule),
                &6,
                &Displacement,
                &StopToken::new(),
                None,
            )
            .unwrap();
            black_box(result)
        })
    });
}

fn bench_dfs_opt2(c: &mut Criterion) {
    let schedule = build_schedule(3, 6);
    c.bench_function("dfs_opt2 3x6 reversed", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            let result = dfs_opt2(
                black_box(&schedule),
                &6,
                &Displacement,
                &mut rng,
                &StopToken::new(),
                None,
            )
            .unwrap();
            black_box(result)
        })
    });
}

criterion_group!(benches, bench_bfs_opt2, bench_dfs_opt2);
criterion_main!(benches);
