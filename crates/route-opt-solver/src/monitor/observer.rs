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
use std::fmt;

/// Observer for improving schedules found during a search.
///
/// Notified once per accepted swap with the new routes and objective; the
/// objectives seen by one search are strictly decreasing. Observers may
/// record or publish snapshots but must not attempt to influence the search.
pub trait ScheduleObserver<T>: Send {
    /// A short identifier for logging and diagnostics.
    fn name(&self) -> &str {
        "ScheduleObserver"
    }

    /// Called after each improving snapshot.
    fn on_improvement(&mut self, routes: &[Route<T>], objective: f64);
}

/// A no-op observer useful as default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl<T> ScheduleObserver<T> for NullObserver {
    fn name(&self) -> &str {
        "NullObserver"
    }

    fn on_improvement(&mut self, _routes: &[Route<T>], _objective: f64) {}
}

impl<'a, T> fmt::Debug for dyn ScheduleObserver<T> + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScheduleObserver({})", self.name())
    }
}

impl<'a, T> fmt::Display for dyn ScheduleObserver<T> + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScheduleObserver({})", self.name())
    }
}
