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

use crate::stats::SearchStatistics;
use gambit_model::{api::SolveResponse, event::StepEvent};

/// Why a search run ended.
///
/// All of these are ordinary outcomes carried in the result value;
/// none of them is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A full valid placement was reached.
    Solved,
    /// The caller‑chosen first queen was rejected by the safety check.
    /// Unreachable while the engine always starts from an empty board;
    /// kept as defensive validation for collaborators that may seed a
    /// non‑empty grid.
    StartUnsafe,
    /// The deterministic exploration order ran out without a solution.
    Exhausted,
    /// The iteration guard tripped; the run is inconclusive, not a
    /// proof of unsolvability.
    CapExceeded,
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::Solved => write!(f, "Solved"),
            Termination::StartUnsafe => write!(f, "Starting Position Unsafe"),
            Termination::Exhausted => write!(f, "Search Space Exhausted"),
            Termination::CapExceeded => write!(f, "Iteration Cap Exceeded"),
        }
    }
}

/// Result of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    events: Vec<StepEvent>,
    termination: Termination,
    statistics: SearchStatistics,
    queens_placed: usize,
    message: String,
}

impl SolveOutcome {
    /// A run that reached a full valid placement.
    pub fn solved(
        events: Vec<StepEvent>,
        statistics: SearchStatistics,
        queens_placed: usize,
    ) -> Self {
        Self {
            events,
            termination: Termination::Solved,
            statistics,
            queens_placed,
            message: String::from("Solution found!"),
        }
    }

    /// A run rejected at the starting cell, with no recorded events.
    pub fn start_unsafe() -> Self {
        Self {
            events: Vec::new(),
            termination: Termination::StartUnsafe,
            statistics: SearchStatistics::default(),
            queens_placed: 0,
            message: String::from("Starting position is not safe!"),
        }
    }

    /// A run that exhausted its exploration order without a solution.
    pub fn exhausted(
        events: Vec<StepEvent>,
        statistics: SearchStatistics,
        queens_placed: usize,
    ) -> Self {
        Self {
            events,
            termination: Termination::Exhausted,
            statistics,
            queens_placed,
            message: String::from("No solution exists from this starting position"),
        }
    }

    /// A run stopped early by the iteration guard.
    pub fn cap_exceeded(
        events: Vec<StepEvent>,
        statistics: SearchStatistics,
        queens_placed: usize,
        cap: usize,
    ) -> Self {
        Self {
            events,
            termination: Termination::CapExceeded,
            statistics,
            queens_placed,
            message: format!("Computation stopped: Too complex for visualization ({cap}+ iterations)"),
        }
    }

    /// Returns whether a full valid placement was reached.
    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self.termination, Termination::Solved)
    }

    /// Returns the recorded step events in occurrence order.
    #[inline]
    pub fn events(&self) -> &[StepEvent] {
        &self.events
    }

    /// Returns the queens on the board when the search concluded.
    #[inline]
    pub fn queens_placed(&self) -> usize {
        self.queens_placed
    }

    /// Returns the total number of recorded events, including the
    /// terminal summary.
    #[inline]
    pub fn total_events(&self) -> usize {
        self.events.len()
    }

    /// Returns the run summary message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Returns the search statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

impl From<SolveOutcome> for SolveResponse {
    fn from(outcome: SolveOutcome) -> Self {
        let solution_found = outcome.is_solved();
        let total_queens = outcome.queens_placed;
        let total_iterations = outcome.events.len();

        Self {
            iterations: outcome.events,
            total_queens,
            total_iterations,
            solution_found,
            message: outcome.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_unsafe_has_no_events() {
        let outcome = SolveOutcome::start_unsafe();
        assert!(!outcome.is_solved());
        assert_eq!(outcome.total_events(), 0);
        assert_eq!(outcome.queens_placed(), 0);
        assert_eq!(outcome.termination(), Termination::StartUnsafe);
    }

    #[test]
    fn test_cap_message_is_distinct_from_exhaustion() {
        let capped =
            SolveOutcome::cap_exceeded(Vec::new(), SearchStatistics::default(), 1, 5000);
        let exhausted = SolveOutcome::exhausted(Vec::new(), SearchStatistics::default(), 1);

        assert_ne!(capped.message(), exhausted.message());
        assert!(capped.message().contains("5000"));
        assert_eq!(capped.termination(), Termination::CapExceeded);
        assert_eq!(exhausted.termination(), Termination::Exhausted);
    }

    #[test]
    fn test_response_shaping() {
        let outcome = SolveOutcome::solved(Vec::new(), SearchStatistics::default(), 4);
        let response: SolveResponse = outcome.into();
        assert!(response.solution_found);
        assert_eq!(response.total_queens, 4);
        assert_eq!(response.total_iterations, 0);
        assert_eq!(response.message, "Solution found!");
    }
}
