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

use route_opt_model::prelude::Route;
use smallvec::{SmallVec, smallvec};

/// Insertion positions for the occurrences of one item. Swaps rarely move
/// more than a handful of occurrences, so the vector stays inline.
pub type IndexVec = SmallVec<[usize; 4]>;

/// Number of `k`-multisubsets of an `n`-set: `C(n + k - 1, k)`.
pub fn multichoose(n: usize, k: usize) -> u64 {
    binomial((n + k).saturating_sub(1) as u64, k as u64)
}

/// Exact binomial coefficient. Each partial product of `k` consecutive
/// integers is divisible by `k!`, so the division below never truncates.
fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 1..=k {
        acc = acc * (n - k + i) as u128 / i as u128;
    }
    acc as u64
}

/// Enumerates, in lexicographic order, every non-decreasing index vector of
/// length `num_insertions` whose entries lie in `[start_index, list_size]`.
///
/// Each vector describes where to place the occurrences of one item relative
/// to a list of `list_size` elements; an entry of `list_size` means "after
/// the last element". The total number of emissions is
/// `multichoose(list_size + 1 - start_index, num_insertions)`.
#[derive(Debug, Clone)]
pub struct InsertionIndexIter {
    positions: IndexVec,
    list_size: usize,
    remaining: u64,
    started: bool,
}

impl InsertionIndexIter {
    /// # Panics
    ///
    /// Panics if `start_index > list_size`.
    pub fn new(num_insertions: usize, list_size: usize, start_index: usize) -> Self {
        assert!(
            start_index <= list_size,
            "start_index ({start_index}) must be <= list_size ({list_size})"
        );
        Self {
            positions: smallvec![start_index; num_insertions],
            list_size,
            remaining: multichoose(list_size + 1 - start_index, num_insertions),
            started: false,
        }
    }

    /// Advances `positions` to the lexicographic successor. The first entry
    /// already at `list_size` bumps its predecessor and drags every entry
    /// from its own slot onward down to the predecessor's new value; if no
    /// entry is saturated, the last one increments.
    fn advance(&mut self) {
        for i in 0..self.positions.len() {
            if self.positions[i] == self.list_size {
                // Exhaustion is caught by `remaining`, so i > 0 here.
                self.positions[i - 1] += 1;
                let value = self.positions[i - 1];
                for p in &mut self.positions[i..] {
                    *p = value;
                }
                return;
            }
            if i == self.positions.len() - 1 {
                self.positions[i] += 1;
            }
        }
    }
}

impl Iterator for InsertionIndexIter {
    type Item = IndexVec;

    fn next(&mut self) -> Option<IndexVec> {
        if self.remaining == 0 {
            return None;
        }
        if self.started {
            self.advance();
        }
        self.started = true;
        self.remaining -= 1;
        Some(self.positions.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

/// Inserts `item` at each of the given `indices` of `list`, interpreted
/// against the original list: the j-th copy lands right after the first
/// `indices[j]` original elements. The relative order of the original
/// elements is unchanged.
///
/// # Panics
///
/// Panics if `indices` is empty, not ascending, or contains an index greater
/// than `list.len()`.
pub fn insert_at<T: Clone>(list: &[T], indices: &[usize], item: &T) -> Route<T> {
    assert!(
        !indices.is_empty(),
        "at least one insertion index must be given"
    );
    let mut out = Vec::with_capacity(list.len() + indices.len());
    let mut prev = 0;
    for &index in indices {
        assert!(
            index <= list.len(),
            "insertion index {index} out of range, list length is {}",
            list.len()
        );
        assert!(
            index >= prev,
            "insertion indices must be ascending, got {indices:?}"
        );
        out.extend_from_slice(&list[prev..index]);
        out.push(item.clone());
        prev = index;
    }
    out.extend_from_slice(&list[prev..]);
    Route::from(out)
}

/// Lazily yields every route obtained by inserting `num_insertions` copies
/// of `item` into `route` at positions `>= start_index`, in the canonical
/// order of [`InsertionIndexIter`].
///
/// # Panics
///
/// Panics if `num_insertions` is zero or `start_index > route.len()`.
pub fn insertions_iter<'a, T: Clone>(
    route: &'a Route<T>,
    item: &'a T,
    start_index: usize,
    num_insertions: usize,
) -> impl Iterator<Item = Route<T>> + 'a {
    assert!(num_insertions > 0, "num_insertions must be positive");
    InsertionIndexIter::new(num_insertions, route.len(), start_index)
        .map(move |indices| insert_at(route, &indices, item))
}

/// Eager variant of [`insertions_iter`].
pub fn insertions<T: Clone>(
    route: &Route<T>,
    item: &T,
    start_index: usize,
    num_insertions: usize,
) -> Vec<Route<T>> {
    insertions_iter(route, item, start_index, num_insertions).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(k: usize, n: usize, start: usize) -> Vec<Vec<usize>> {
        InsertionIndexIter::new(k, n, start)
            .map(|v| v.to_vec())
            .collect()
    }

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(5, 5), 1);
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(10, 3), 120);
        assert_eq!(binomial(3, 5), 0);
        assert_eq!(binomial(52, 5), 2_598_960);
    }

    #[test]
    fn multichoose_values() {
        // multichoose(n, k) = C(n + k - 1, k)
        assert_eq!(multichoose(1, 1), 1);
        assert_eq!(multichoose(2, 1), 2);
        assert_eq!(multichoose(3, 2), 6);
        assert_eq!(multichoose(4, 3), 20);
        assert_eq!(multichoose(5, 0), 1);
    }

    #[test]
    fn emission_count_matches_multichoose() {
        for n in 0..5 {
            for k in 0..4 {
                for start in 0..=n {
                    let got = collect(k, n, start).len() as u64;
                    assert_eq!(
                        got,
                        multichoose(n + 1 - start, k),
                        "count mismatch for k={k}, n={n}, start={start}"
                    );
                }
            }
        }
    }

    #[test]
    fn emissions_are_lex_ascending_and_distinct() {
        let all = collect(3, 4, 1);
        for window in all.windows(2) {
            assert!(window[0] < window[1], "not ascending: {window:?}");
        }
        for v in &all {
            assert!(v.windows(2).all(|w| w[0] <= w[1]), "not sorted: {v:?}");
            assert!(v.iter().all(|&p| (1..=4).contains(&p)));
        }
    }

    #[test]
    fn two_insertions_over_two_slots() {
        assert_eq!(
            collect(2, 1, 0),
            vec![vec![0, 0], vec![0, 1], vec![1, 1]],
        );
    }

    #[test]
    fn zero_insertions_yield_a_single_empty_vector() {
        assert_eq!(collect(0, 3, 1), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn start_equal_to_size_yields_single_saturated_vector() {
        assert_eq!(collect(3, 2, 2), vec![vec![2, 2, 2]]);
    }

    #[test]
    #[should_panic(expected = "start_index")]
    fn start_index_beyond_list_size_panics() {
        let _ = InsertionIndexIter::new(1, 2, 3);
    }

    #[test]
    fn insert_at_interleaves_at_the_given_positions() {
        let list = ['a', 'b', 'c'];
        assert_eq!(insert_at(&list, &[0], &'x').as_slice(), &['x', 'a', 'b', 'c']);
        assert_eq!(insert_at(&list, &[3], &'x').as_slice(), &['a', 'b', 'c', 'x']);
        assert_eq!(
            insert_at(&list, &[1, 1], &'x').as_slice(),
            &['a', 'x', 'x', 'b', 'c']
        );
        assert_eq!(
            insert_at(&list, &[0, 2, 3], &'x').as_slice(),
            &['x', 'a', 'b', 'x', 'c', 'x']
        );
    }

    #[test]
    fn insert_then_remove_round_trips() {
        let list = [1, 2, 3, 4];
        for indices in InsertionIndexIter::new(2, list.len(), 0) {
            let inserted = insert_at(&list, &indices, &9);
            let stripped: Vec<i32> = inserted.iter().copied().filter(|&x| x != 9).collect();
            assert_eq!(stripped, list);
        }
    }

    #[test]
    #[should_panic(expected = "ascending")]
    fn insert_at_rejects_descending_indices() {
        let _ = insert_at(&[1, 2, 3], &[2, 1], &9);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn insert_at_rejects_out_of_range_index() {
        let _ = insert_at(&[1, 2, 3], &[4], &9);
    }

    #[test]
    #[should_panic(expected = "at least one insertion index")]
    fn insert_at_rejects_empty_indices() {
        let _ = insert_at::<i32>(&[1, 2, 3], &[], &9);
    }

    #[test]
    fn insertions_iter_enumerates_all_single_insertions() {
        let route = Route::from(vec!['a', 'b', 'c']);
        let got: Vec<Vec<char>> = insertions_iter(&route, &'x', 0, 1)
            .map(|r| r.to_vec())
            .collect();
        assert_eq!(
            got,
            vec![
                vec!['x', 'a', 'b', 'c'],
                vec!['a', 'x', 'b', 'c'],
                vec!['a', 'b', 'x', 'c'],
                vec!['a', 'b', 'c', 'x'],
            ]
        );
    }

    #[test]
    fn insertions_respects_the_start_index() {
        let route = Route::from(vec!['a', 'b', 'c']);
        let got = insertions(&route, &'x', 2, 1);
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].as_slice(), &['a', 'b', 'x', 'c']);
        assert_eq!(got[1].as_slice(), &['a', 'b', 'c', 'x']);
    }
}
