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

use crate::eval::cache::RouteCostCache;
use crate::eval::cost_eval::RouteEvaluator;
use crate::search::insertion::{IndexVec, InsertionIndexIter, insert_at};
use crate::state::schedule_state::ScheduleState;
use route_opt_model::prelude::Route;
use std::collections::HashSet;
use std::hash::Hash;

/// One candidate 2-opt move: every occurrence of `item` leaves `from_row`
/// and lands in `to_row` at `insertion_indices`.
///
/// The number of indices equals the number of occurrences of the item in
/// `from_row`. For an intra-row move (`from_row == to_row`) the indices are
/// interpreted against the row *without* the item in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swap<T> {
    item: T,
    from_row: usize,
    to_row: usize,
    insertion_indices: IndexVec,
}

impl<T> Swap<T> {
    pub fn new(item: T, from_row: usize, to_row: usize, insertion_indices: IndexVec) -> Self {
        Self {
            item,
            from_row,
            to_row,
            insertion_indices,
        }
    }

    #[inline]
    pub fn item(&self) -> &T {
        &self.item
    }

    #[inline]
    pub fn from_row(&self) -> usize {
        self.from_row
    }

    #[inline]
    pub fn to_row(&self) -> usize {
        self.to_row
    }

    #[inline]
    pub fn insertion_indices(&self) -> &[usize] {
        &self.insertion_indices
    }
}

/// Lazily enumerates every candidate swap of `state`, in canonical order.
///
/// Rows are scanned linearly; the first sighting of each distinct item at a
/// mutable position makes that row the item's `from_row`. Every position
/// feeds the seen-set, frozen prefixes included, so an item whose first
/// sighting is frozen is never a swap source, not even from a later row.
/// Single-occurrence items only move within their own row; items occurring
/// several times may move to any row. Intra-row emissions that would land
/// the item exactly where it already is are suppressed.
pub fn swap_iterator<T>(state: &ScheduleState<T>) -> impl Iterator<Item = Swap<T>> + '_
where
    T: Clone + Eq + Hash,
{
    let mut seen: HashSet<T> = HashSet::new();
    let mut sources: Vec<(T, usize)> = Vec::new();
    for (row, route) in state.routes().iter().enumerate() {
        for (position, item) in route.iter().enumerate() {
            if seen.insert(item.clone()) && position >= state.start_index(row) {
                sources.push((item.clone(), row));
            }
        }
    }
    sources
        .into_iter()
        .flat_map(move |(item, from_row)| one_item_swaps(state, item, from_row))
}

/// All candidate swaps that move the occurrences of one item out of
/// `from_row`.
fn one_item_swaps<T>(
    state: &ScheduleState<T>,
    item: T,
    from_row: usize,
) -> impl Iterator<Item = Swap<T>> + '_
where
    T: Clone + Eq,
{
    let occurrences = occurrence_indices(state.route(from_row), &item);
    let to_rows = if occurrences.len() == 1 {
        from_row..from_row + 1
    } else {
        0..state.num_routes()
    };
    to_rows.flat_map(move |to_row| {
        let mut row_size = state.route(to_row).len();
        if to_row == from_row {
            row_size -= occurrences.len();
        }
        // Putting the item back where it came from is not a move.
        let identity = (to_row == from_row).then(|| occurrences.clone());
        let item = item.clone();
        InsertionIndexIter::new(occurrences.len(), row_size, state.start_index(to_row))
            .filter(move |indices| identity.as_ref().is_none_or(|occ| indices != occ))
            .map(move |indices| Swap::new(item.clone(), from_row, to_row, indices))
    })
}

/// Applies `swap` to `state` and returns the resulting snapshot, but only if
/// it changes the objective by strictly less than `threshold`. Route costs
/// are obtained through `cache`, which consults `evaluator` on a miss.
///
/// # Panics
///
/// Panics if a swap row is out of range, if the item does not occur in
/// `from_row` for an inter-row move, if the occurrence count does not match
/// the number of insertion indices, or if an intra-row move targets exactly
/// the item's current positions.
pub fn apply_swap<C, T, E>(
    state: &ScheduleState<T>,
    swap: &Swap<T>,
    threshold: f64,
    context: &C,
    evaluator: &E,
    cache: &mut RouteCostCache<T>,
) -> Option<ScheduleState<T>>
where
    T: Clone + Eq + Hash,
    E: RouteEvaluator<C, T>,
{
    let rows = state.num_routes();
    assert!(
        swap.from_row() < rows,
        "from_row must be < {rows}, it is {}",
        swap.from_row()
    );
    assert!(
        swap.to_row() < rows,
        "to_row must be < {rows}, it is {}",
        swap.to_row()
    );

    if swap.from_row() == swap.to_row() {
        // Reordering within one vehicle: only that row's cost moves.
        let row = swap.from_row();
        let original_cost = state.route_cost(row);
        let new_route = in_route_swap(state.route(row), swap.insertion_indices(), swap.item());
        let new_cost = cache.cost_or_eval(context, row, &new_route, evaluator);
        let diff = new_cost - original_cost;
        (diff < threshold).then(|| state.replace_row(row, new_route, new_cost))
    } else {
        // Transfer between vehicles: removal and insertion each shift one
        // row's cost.
        let (remaining, removed) = remove_all(state.route(swap.from_row()), swap.item());
        assert!(
            !removed.is_empty(),
            "item is not in row {}, it cannot be swapped to row {}",
            swap.from_row(),
            swap.to_row()
        );
        assert!(
            removed.len() == swap.insertion_indices().len(),
            "number of occurrences in from_row ({}) must equal the number of insertion indices ({})",
            removed.len(),
            swap.insertion_indices().len()
        );

        let new_from = Route::from(remaining);
        let cost_from = cache.cost_or_eval(context, swap.from_row(), &new_from, evaluator);
        let diff_from = cost_from - state.route_cost(swap.from_row());

        let new_to = insert_at(
            state.route(swap.to_row()),
            swap.insertion_indices(),
            swap.item(),
        );
        let cost_to = cache.cost_or_eval(context, swap.to_row(), &new_to, evaluator);
        let diff_to = cost_to - state.route_cost(swap.to_row());

        (diff_from + diff_to < threshold).then(|| {
            state.replace_rows(
                (swap.from_row(), new_from, cost_from),
                (swap.to_row(), new_to, cost_to),
            )
        })
    }
}

/// Moves the occurrences of `item` to the given positions of `route`,
/// leaving the relative order of all other items unchanged. The indices are
/// interpreted against the route with the item removed.
fn in_route_swap<T>(route: &Route<T>, insertion_indices: &[usize], item: &T) -> Route<T>
where
    T: Clone + Eq,
{
    assert!(!route.is_empty(), "the route may not be empty");
    let (remaining, removed) = remove_all(route, item);
    assert!(
        remaining.len() == route.len() - insertion_indices.len(),
        "number of occurrences ({}) must equal the number of insertion indices ({})",
        removed.len(),
        insertion_indices.len()
    );
    assert!(
        removed.as_slice() != insertion_indices,
        "attempt to move the item to exactly its current positions {removed:?}"
    );
    insert_at(&remaining, insertion_indices, item)
}

/// Removes every occurrence of `item` and reports the original positions of
/// the removed occurrences.
fn remove_all<T>(route: &Route<T>, item: &T) -> (Vec<T>, IndexVec)
where
    T: Clone + Eq,
{
    let mut remaining = Vec::with_capacity(route.len());
    let mut removed = IndexVec::new();
    for (position, current) in route.iter().enumerate() {
        if current == item {
            removed.push(position);
        } else {
            remaining.push(current.clone());
        }
    }
    (remaining, removed)
}

/// Positions of `item` in `route`.
fn occurrence_indices<T: Eq>(route: &Route<T>, item: &T) -> IndexVec {
    route
        .iter()
        .enumerate()
        .filter_map(|(position, current)| (current == item).then_some(position))
        .collect()
}
