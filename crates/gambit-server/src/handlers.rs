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

//! Endpoint handlers for the N‑Queens trace API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/nqueens/solve` | Run a traced backtracking search |
//! | `GET` | `/api/nqueens/safe-positions` | List cells safe from one queen |
//!
//! Validation happens here, before the engine runs: board sizes must
//! lie in [`MIN_BOARD_SIZE`, `MAX_BOARD_SIZE`] and coordinates inside
//! the board. Each accepted solve request gets a fresh
//! [`SearchSession`]; the engine is not reentrant by contract, so
//! sessions are never shared.

use axum::Json;
use axum::extract::Query;
use gambit_engine::{engine::SearchSession, query};
use gambit_model::api::{
    SafePositionsQuery, SafePositionsResponse, SolveRequest, SolveResponse,
};
use gambit_model::position::Position;
use tracing::info;

use crate::error::ServerError;

/// Smallest board the API accepts.
pub const MIN_BOARD_SIZE: i64 = 4;
/// Largest board the API accepts; bounds recursion depth and trace
/// memory alongside the engine's own iteration cap.
pub const MAX_BOARD_SIZE: i64 = 20;

/// Checks the supported size range and cell bounds, converting the
/// signed wire values into engine coordinates.
fn validate(board_size: i64, row: i64, col: i64) -> Result<(usize, Position), ServerError> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
        return Err(ServerError::BoardSizeOutOfRange(board_size));
    }

    if row < 0 || row >= board_size || col < 0 || col >= board_size {
        return Err(ServerError::StartOutOfBounds { row, col });
    }

    Ok((
        board_size as usize,
        Position::new(row as usize, col as usize),
    ))
}

/// `POST /api/nqueens/solve` -- run a traced search from the
/// requested starting queen.
///
/// Unsolvable and cap‑exceeded runs are ordinary `200` responses with
/// `solutionFound = false`; only malformed requests produce `400`s.
pub async fn solve(Json(request): Json<SolveRequest>) -> Result<Json<SolveResponse>, ServerError> {
    let (size, start) = validate(request.board_size, request.start_row, request.start_col)?;

    let outcome = SearchSession::new(size, start).run();
    info!(
        size,
        start_row = start.row,
        start_col = start.col,
        solved = outcome.is_solved(),
        events = outcome.total_events(),
        "solve request completed"
    );

    Ok(Json(outcome.into()))
}

/// `GET /api/nqueens/safe-positions` -- list every cell a lone queen
/// at the given cell does not attack.
pub async fn safe_positions(
    Query(params): Query<SafePositionsQuery>,
) -> Result<Json<SafePositionsResponse>, ServerError> {
    let (size, queen) = validate(params.board_size, params.row, params.col)?;

    let safe: Vec<[usize; 2]> = query::safe_positions(size, queen.row, queen.col)
        .into_iter()
        .map(Into::into)
        .collect();
    let count = safe.len();
    info!(size, row = queen.row, col = queen.col, count, "safe-positions request completed");

    Ok(Json(SafePositionsResponse {
        safe_positions: safe,
        count,
    }))
}
