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

//! Gambit‑Engine: traced backtracking search for the N‑Queens puzzle
//!
//! Implements a deterministic, fully synchronous search engine that
//! computes a step‑by‑step trace of the classic N‑Queens backtracking
//! procedure, seeded with a caller‑chosen first queen. Every attempt,
//! placement, and retreat is recorded with a full board snapshot so a
//! visualization layer can replay the search one decision at a time.
//!
//! Core flow
//! - Build a [`engine::SearchSession`] for a board size and start cell.
//! - Call [`engine::SearchSession::run`]; the session validates the
//!   start cell, places the first queen, and recurses over the
//!   remaining rows in a fixed row‑ascending, column‑ascending order.
//! - Inspect the returned [`outcome::SolveOutcome`] for the event
//!   sequence, termination reason, and statistics.
//!
//! Design highlights
//! - All run‑scoped state (board, recorder, guard, counters) lives in
//!   one session value created fresh per invocation; nothing is shared
//!   between runs, so isolation needs no locks.
//! - "No solution" and "iteration cap exceeded" are ordinary terminal
//!   outcomes, not errors; the engine has no recoverable‑error channel.
//! - Each recorded event deep‑copies the grid. The iteration guard
//!   exists precisely because memory grows with cap × N².
//!
//! Module map
//! - `engine`: the search session and recursive backtracking procedure.
//! - `safety`: the conflict predicate over the occupancy grid.
//! - `guard`: the hard ceiling on recorded events.
//! - `trace`: the ordered event recorder.
//! - `query`: the safe‑position enumeration for a single placed queen.
//! - `outcome`: run results with termination reasons.
//! - `stats`: lightweight search counters.

pub mod engine;
pub mod guard;
pub mod outcome;
pub mod query;
pub mod safety;
pub mod stats;
pub mod trace;
