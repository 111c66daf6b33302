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

/// Validation failures when pairing routes with start indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleError {
    /// The number of start indices does not match the number of routes.
    RowCountMismatch { routes: usize, start_indices: usize },
    /// A start index points past the end of its route.
    StartIndexOutOfBounds {
        row: usize,
        start_index: usize,
        route_len: usize,
    },
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::RowCountMismatch {
                routes,
                start_indices,
            } => write!(
                f,
                "Number of start indices ({}) must equal number of routes ({})",
                start_indices, routes
            ),
            ScheduleError::StartIndexOutOfBounds {
                row,
                start_index,
                route_len,
            } => write!(
                f,
                "Start index {} of row {} exceeds the route length {}",
                start_index, row, route_len
            ),
        }
    }
}

impl std::error::Error for ScheduleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_violated_bound() {
        let e = ScheduleError::RowCountMismatch {
            routes: 3,
            start_indices: 2,
        };
        let s = e.to_string();
        assert!(s.contains('3'));
        assert!(s.contains('2'));

        let e = ScheduleError::StartIndexOutOfBounds {
            row: 1,
            start_index: 5,
            route_len: 4,
        };
        let s = e.to_string();
        assert!(s.contains("row 1"));
        assert!(s.contains('5'));
        assert!(s.contains('4'));
    }
}
