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

/// Default ceiling on recorded step events per run.
///
/// Each event stores a full grid copy, so trace memory is bounded by
/// this cap times N².
pub const DEFAULT_MAX_EVENTS: usize = 5000;

/// A hard ceiling on the number of step events a run may record.
///
/// The guard admits events one at a time until the cap is reached;
/// from then on it is tripped permanently for the remainder of the
/// invocation and the search fails every pending level. The terminal
/// summary event is appended outside the guard so a cap‑exceeded run
/// holds exactly `cap` search events plus one summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationGuard {
    cap: usize,
    admitted: usize,
    tripped: bool,
}

impl Default for IterationGuard {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EVENTS)
    }
}

impl IterationGuard {
    /// Creates a guard with the given event cap.
    ///
    /// # Panics
    ///
    /// Panics if `cap` is zero.
    pub fn new(cap: usize) -> Self {
        assert!(
            cap >= 1,
            "called `IterationGuard::new` with zero cap: at least one event must be admissible"
        );

        Self {
            cap,
            admitted: 0,
            tripped: false,
        }
    }

    /// Requests admission for one more event. Returns `false` once the
    /// cap is reached; after that the guard never admits again.
    #[inline]
    pub fn admit(&mut self) -> bool {
        if self.tripped {
            return false;
        }
        if self.admitted >= self.cap {
            self.tripped = true;
            return false;
        }
        self.admitted += 1;
        true
    }

    /// Returns whether the guard has tripped.
    #[inline]
    pub fn tripped(&self) -> bool {
        self.tripped
    }

    /// Returns the configured cap.
    #[inline]
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Returns the number of admitted events so far.
    #[inline]
    pub fn admitted(&self) -> usize {
        self.admitted
    }
}
