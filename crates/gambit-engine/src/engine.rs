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

//! The traced backtracking search session.
//!
//! A [`SearchSession`] bundles the occupancy board, the trace
//! recorder, the iteration guard, and the run counters into one value
//! created fresh per invocation and consumed by [`run`].
//! Nothing survives a run and nothing is shared between runs, so a
//! caller that serves concurrent requests simply constructs one
//! session each; there is no reentrancy hazard and no locking.
//!
//! The exploration order is fixed: rows ascend naturally from the row
//! below the starting queen, and within each row columns ascend from
//! zero. The session returns the first solution reachable under that
//! order, which makes traces reproducible byte for byte.
//!
//! [`run`]: SearchSession::run

use crate::{
    guard::IterationGuard,
    outcome::SolveOutcome,
    safety,
    stats::SearchStatistics,
    trace::TraceRecorder,
};
use gambit_model::{
    board::Board,
    event::{StepEvent, StepStatus},
    position::Position,
};
use tracing::debug;

/// One traced N‑Queens search run.
///
/// Construct a fresh session per invocation; [`SearchSession::run`]
/// consumes it. Bounds are the caller's contract: the starting cell
/// must lie within the board.
#[derive(Debug, Clone)]
pub struct SearchSession {
    board: Board,
    recorder: TraceRecorder,
    guard: IterationGuard,
    statistics: SearchStatistics,
    start: Position,
}

impl SearchSession {
    /// Creates a session with the default event cap.
    pub fn new(size: usize, start: Position) -> Self {
        Self::with_guard(size, start, IterationGuard::default())
    }

    /// Creates a session with a custom event cap.
    pub fn with_event_cap(size: usize, start: Position, cap: usize) -> Self {
        Self::with_guard(size, start, IterationGuard::new(cap))
    }

    fn with_guard(size: usize, start: Position, guard: IterationGuard) -> Self {
        debug_assert!(
            start.row < size && start.col < size,
            "called `SearchSession` constructor with start cell out of bounds: the size is {} but the cell is {}",
            size,
            start
        );

        Self {
            board: Board::new(size),
            recorder: TraceRecorder::new(),
            guard,
            statistics: SearchStatistics::default(),
            start,
        }
    }

    /// Runs the search to completion, to exhaustion, or to the event
    /// cap, and returns the outcome.
    pub fn run(mut self) -> SolveOutcome {
        debug!(
            size = self.board.size(),
            start_row = self.start.row,
            start_col = self.start.col,
            "starting traced n-queens search"
        );

        // Defensive: always true on an empty board, but collaborators
        // may one day seed a non-empty grid.
        if !safety::is_safe(&self.board, self.start.row, self.start.col) {
            debug!(start = %self.start, "starting cell rejected by safety check");
            return SolveOutcome::start_unsafe();
        }

        self.board.place(self.start.row, self.start.col);
        self.statistics.on_placement();
        self.record_step(
            self.start,
            StepStatus::Success,
            format!("Starting queen placed at position {}", self.start),
        );

        let solved = self.solve_from(self.start.row + 1);

        // Queens still standing once the search has concluded; failed
        // branches have already been unwound at this point.
        let queens = self.board.queens();

        if self.guard.tripped() {
            debug!(cap = self.guard.cap(), "search stopped by iteration guard");
            self.recorder.record(StepEvent::summary(
                self.board.snapshot(),
                StepStatus::Backtrack,
                String::from(
                    "Too many iterations. Board size too large or starting position difficult!",
                ),
            ));
            let cap = self.guard.cap();
            return SolveOutcome::cap_exceeded(
                self.recorder.into_events(),
                self.statistics,
                queens,
                cap,
            );
        }

        if solved {
            debug!(queens, "search found a full placement");
            self.recorder.record(StepEvent::summary(
                self.board.snapshot(),
                StepStatus::Success,
                format!("Solution found with {queens} queens!"),
            ));
            SolveOutcome::solved(self.recorder.into_events(), self.statistics, queens)
        } else {
            debug!("search space exhausted without a solution");
            self.recorder.record(StepEvent::summary(
                self.board.snapshot(),
                StepStatus::Backtrack,
                String::from("No solution possible from this starting position"),
            ));
            SolveOutcome::exhausted(self.recorder.into_events(), self.statistics, queens)
        }
    }

    /// Recursive step: place a queen somewhere in `row` and complete
    /// the rows below it. Returns `true` on the first completion found
    /// under the fixed exploration order.
    fn solve_from(&mut self, row: usize) -> bool {
        if self.guard.tripped() {
            return false;
        }

        if row == self.board.size() {
            return true;
        }

        for col in 0..self.board.size() {
            let cell = Position::new(row, col);

            // The guard is consulted before every new attempt; once it
            // refuses, this branch and all pending levels fail.
            if !self.record_step(
                cell,
                StepStatus::Trying,
                format!("Trying to place queen at {cell}"),
            ) {
                return false;
            }
            self.statistics.on_attempt();

            if safety::is_safe(&self.board, row, col) {
                self.board.place(row, col);
                self.statistics.on_placement();
                self.record_step(cell, StepStatus::Success, format!("Queen placed at {cell}"));

                if self.solve_from(row + 1) {
                    return true;
                }

                self.board.remove(row, col);
                self.statistics.on_backtrack();
                self.record_step(
                    cell,
                    StepStatus::Backtrack,
                    format!("Backtracking from {cell}"),
                );
            }
        }

        false
    }

    /// Records one step event if the guard admits it. Success and
    /// backtrack records past the cap are dropped silently; the run is
    /// already inconclusive at that point and terminates at the next
    /// guard consultation.
    fn record_step(&mut self, cell: Position, status: StepStatus, message: String) -> bool {
        if !self.guard.admit() {
            return false;
        }

        self.statistics.on_event_recorded();
        self.recorder
            .record(StepEvent::at(self.board.snapshot(), cell, status, message));
        true
    }
}
