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

//! Integration tests for the N‑Queens trace API endpoints.
//!
//! Tests drive Axum's `Router` directly via `tower::ServiceExt`
//! without starting a TCP server. This validates handler logic,
//! validation, and routing without a live network connection.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use gambit_server::router::build_router;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn solve_request(board_size: i64, start_row: i64, start_col: i64) -> Request<Body> {
    Request::post("/api/nqueens/solve")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "boardSize": board_size,
                "startRow": start_row,
                "startCol": start_col,
            })
            .to_string(),
        ))
        .unwrap()
}

#[tokio::test]
async fn test_solve_finds_solution_from_valid_start() {
    let response = build_router()
        .oneshot(solve_request(4, 0, 1))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;

    assert_eq!(body["solutionFound"], true);
    assert_eq!(body["totalQueens"], 4);
    assert_eq!(body["message"], "Solution found!");

    let iterations = body["iterations"].as_array().unwrap();
    assert_eq!(body["totalIterations"], iterations.len());
    assert_eq!(iterations.last().unwrap()["final"], true);
    assert_eq!(iterations.last().unwrap()["row"], -1);
}

#[tokio::test]
async fn test_solve_reports_unsolvable_start_as_ok() {
    let response = build_router()
        .oneshot(solve_request(4, 0, 0))
        .await
        .unwrap();

    // "No solution" is an ordinary outcome, not an HTTP error.
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;

    assert_eq!(body["solutionFound"], false);
    assert_eq!(
        body["message"],
        "No solution exists from this starting position"
    );
}

#[tokio::test]
async fn test_solve_rejects_board_size_below_range() {
    let response = build_router()
        .oneshot(solve_request(3, 0, 0))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["error"], "Board size must be between 4 and 20");
}

#[tokio::test]
async fn test_solve_rejects_board_size_above_range() {
    let response = build_router()
        .oneshot(solve_request(21, 0, 0))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_solve_rejects_out_of_bounds_start() {
    let response = build_router()
        .oneshot(solve_request(4, 4, 0))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["error"], "Starting position is out of bounds");
}

#[tokio::test]
async fn test_solve_rejects_negative_start() {
    let response = build_router()
        .oneshot(solve_request(8, -1, 2))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_safe_positions_for_corner_queen() {
    let response = build_router()
        .oneshot(
            Request::get("/api/nqueens/safe-positions?boardSize=4&row=0&col=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_to_json(response.into_body()).await;

    assert_eq!(body["count"], 6);
    assert_eq!(
        body["safePositions"],
        json!([[1, 2], [1, 3], [2, 1], [2, 3], [3, 1], [3, 2]])
    );
}

#[tokio::test]
async fn test_safe_positions_rejects_invalid_board_size() {
    let response = build_router()
        .oneshot(
            Request::get("/api/nqueens/safe-positions?boardSize=2&row=0&col=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_repeated_solves_are_identical() {
    let first = build_router()
        .oneshot(solve_request(6, 0, 1))
        .await
        .unwrap();
    let second = build_router()
        .oneshot(solve_request(6, 0, 1))
        .await
        .unwrap();

    let first_body = body_to_json(first.into_body()).await;
    let second_body = body_to_json(second.into_body()).await;
    assert_eq!(first_body, second_body);
}
