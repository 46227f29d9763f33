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

//! Wire types for the solve and safe‑position endpoints.
//!
//! Field names match the JSON contract of the visualization front end
//! (camelCase). Request coordinates are signed so that out‑of‑range
//! values reach the validation layer instead of failing
//! deserialization; the delivery layer converts them to `usize` only
//! after range checks pass.

use crate::event::StepEvent;
use serde::{Deserialize, Serialize};

/// Request body for a solve run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    /// Side length of the board; also the number of queens to place.
    pub board_size: i64,
    /// Row of the caller‑chosen first queen.
    pub start_row: i64,
    /// Column of the caller‑chosen first queen.
    pub start_col: i64,
}

/// Response body for a solve run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    /// The ordered step events of the search, in occurrence order.
    pub iterations: Vec<StepEvent>,
    /// Queens on the board at the moment the search concluded.
    pub total_queens: usize,
    /// Total number of recorded events, including the terminal summary.
    pub total_iterations: usize,
    /// Whether a full valid placement was reached.
    pub solution_found: bool,
    /// Summary of the run outcome.
    pub message: String,
}

/// Query parameters for the safe‑position endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafePositionsQuery {
    pub board_size: i64,
    pub row: i64,
    pub col: i64,
}

/// Response body for the safe‑position endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafePositionsResponse {
    /// Safe cells as `[row, col]` pairs in row‑major order.
    pub safe_positions: Vec<[usize; 2]>,
    /// Number of safe cells.
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_request_accepts_camel_case() {
        let request: SolveRequest =
            serde_json::from_str(r#"{"boardSize":8,"startRow":0,"startCol":3}"#).unwrap();
        assert_eq!(request.board_size, 8);
        assert_eq!(request.start_row, 0);
        assert_eq!(request.start_col, 3);
    }

    #[test]
    fn test_solve_request_accepts_negative_coordinates() {
        // Range rejection is the validation layer's job, not serde's.
        let request: SolveRequest =
            serde_json::from_str(r#"{"boardSize":8,"startRow":-1,"startCol":0}"#).unwrap();
        assert_eq!(request.start_row, -1);
    }

    #[test]
    fn test_safe_positions_response_wire_shape() {
        let response = SafePositionsResponse {
            safe_positions: vec![[1, 2], [1, 3]],
            count: 2,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["safePositions"], serde_json::json!([[1, 2], [1, 3]]));
        assert_eq!(json["count"], 2);
    }

    #[test]
    fn test_solve_response_uses_camel_case_keys() {
        let response = SolveResponse {
            iterations: Vec::new(),
            total_queens: 0,
            total_iterations: 0,
            solution_found: false,
            message: String::from("Starting position is not safe!"),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("solutionFound").is_some());
        assert!(json.get("totalIterations").is_some());
        assert!(json.get("totalQueens").is_some());
    }
}
