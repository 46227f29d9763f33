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

//! Error types for the delivery layer.
//!
//! [`ServerError`] covers the request rejections the engine leaves to
//! its collaborator. Variants convert into JSON error responses via
//! [`IntoResponse`](axum::response::IntoResponse). Unsolvable and
//! cap‑exceeded runs are *not* errors; they travel as ordinary solve
//! responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur in the delivery layer.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The requested board size lies outside the supported range.
    #[error("Board size must be between 4 and 20")]
    BoardSizeOutOfRange(i64),

    /// The starting position lies outside the board.
    #[error("Starting position is out of bounds")]
    StartOutOfBounds { row: i64, col: i64 },
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BoardSizeOutOfRange(size) => {
                tracing::debug!(size = *size, "rejected request: board size out of range");
                StatusCode::BAD_REQUEST
            }
            Self::StartOutOfBounds { row, col } => {
                tracing::debug!(row = *row, col = *col, "rejected request: cell out of bounds");
                StatusCode::BAD_REQUEST
            }
        };

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
