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

pub mod err;

use err::ScheduleError;
use std::ops::Deref;
use std::sync::Arc;

/// An immutable ordered sequence of items visited by one vehicle.
///
/// Routes are backed by a shared slice, so cloning one is a reference-count
/// bump. Equality and hashing go by contents, which lets identical routes in
/// different rows hit the same cost-cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route<T>(Arc<[T]>);

impl<T> Route<T> {
    /// An empty route.
    #[inline]
    pub fn empty() -> Self {
        Route(Arc::from([]))
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T> Deref for Route<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for Route<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Route(items.into())
    }
}

impl<T: Clone> From<&[T]> for Route<T> {
    #[inline]
    fn from(items: &[T]) -> Self {
        Route(items.into())
    }
}

impl<T> FromIterator<T> for Route<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Route(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Route<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An ordered collection of routes paired one-to-one with start indices.
///
/// `start_indices[r] = n` means positions `[0, n)` of row `r` are frozen:
/// a solver may neither move items out of those positions nor insert items
/// into them. Positions `[n, len)` are mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule<T> {
    routes: Vec<Route<T>>,
    start_indices: Arc<[usize]>,
}

impl<T> Schedule<T> {
    /// Creates a schedule, validating the route/start-index pairing.
    pub fn new(
        routes: Vec<Route<T>>,
        start_indices: impl Into<Arc<[usize]>>,
    ) -> Result<Self, ScheduleError> {
        let start_indices = start_indices.into();
        if routes.len() != start_indices.len() {
            return Err(ScheduleError::RowCountMismatch {
                routes: routes.len(),
                start_indices: start_indices.len(),
            });
        }
        for (row, (route, &start_index)) in routes.iter().zip(start_indices.iter()).enumerate() {
            if start_index > route.len() {
                return Err(ScheduleError::StartIndexOutOfBounds {
                    row,
                    start_index,
                    route_len: route.len(),
                });
            }
        }
        Ok(Self {
            routes,
            start_indices,
        })
    }

    /// Creates a schedule with every position mutable (all start indices 0).
    pub fn unrestricted(routes: Vec<Route<T>>) -> Self {
        let start_indices: Arc<[usize]> = vec![0; routes.len()].into();
        Self {
            routes,
            start_indices,
        }
    }

    /// Builds a schedule from parts already known to satisfy the pairing
    /// invariants. Used when committing solver snapshots whose rows were
    /// derived from a validated schedule; validation is skipped here because
    /// it was performed on the original.
    pub fn from_parts_unchecked(routes: Vec<Route<T>>, start_indices: Arc<[usize]>) -> Self {
        debug_assert_eq!(routes.len(), start_indices.len());
        Self {
            routes,
            start_indices,
        }
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
    pub fn start_indices(&self) -> &[usize] {
        &self.start_indices
    }

    #[inline]
    pub fn start_index(&self, row: usize) -> usize {
        self.start_indices[row]
    }

    /// Shared handle to the start indices; rows of derived schedules keep
    /// pointing at the same allocation.
    #[inline]
    pub fn start_indices_shared(&self) -> Arc<[usize]> {
        Arc::clone(&self.start_indices)
    }

    #[inline]
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
