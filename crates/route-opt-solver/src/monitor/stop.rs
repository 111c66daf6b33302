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
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering::Relaxed};

/// Cheap cooperative stop token.
///
/// The search polls the token once per candidate swap; any holder of a clone
/// (typically another thread) may request a stop at any time. A set token
/// aborts the search with a cancellation error and discards all progress.
#[derive(Clone, Default, Debug)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.0.load(Relaxed)
    }

    #[inline]
    pub fn request_stop(&self) {
        self.0.store(true, Relaxed)
    }
}

impl PartialEq for StopToken {
    /// Equality is based on identity (same underlying Arc), not current value.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl Eq for StopToken {}

impl fmt::Display for StopToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopToken(set: {})", self.is_set())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag_and_fresh_tokens_do_not() {
        let a = StopToken::new();
        let b = a.clone();
        let c = StopToken::new();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(!a.is_set());

        b.request_stop();
        assert!(a.is_set());
        assert!(b.is_set());
        assert!(!c.is_set());
    }

    #[test]
    fn display_reports_the_current_state() {
        let token = StopToken::new();
        assert_eq!(token.to_string(), "StopToken(set: false)");
        token.request_stop();
        assert_eq!(token.to_string(), "StopToken(set: true)");
    }
}
