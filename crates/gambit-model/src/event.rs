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

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Classification of one recorded search decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// A cell is being considered for placement.
    Trying,
    /// A queen was placed, or the run concluded with a full solution.
    Success,
    /// A placement was undone, or the run concluded without a solution.
    Backtrack,
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepStatus::Trying => write!(f, "trying"),
            StepStatus::Success => write!(f, "success"),
            StepStatus::Backtrack => write!(f, "backtrack"),
        }
    }
}

/// One recorded unit of a search trace.
///
/// Every event carries a fully independent board snapshot so the
/// visualization layer can replay the search without reconstructing
/// state. Terminal summary events use the `-1, -1` sentinel instead of
/// a concrete cell and are the only events with the final flag set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEvent {
    /// Independent copy of the full grid at the moment of the event.
    pub board: Vec<Vec<u8>>,
    /// Row of the concerned cell, or [`StepEvent::SENTINEL`].
    pub row: i32,
    /// Column of the concerned cell, or [`StepEvent::SENTINEL`].
    pub col: i32,
    /// Status tag of this event.
    pub status: StepStatus,
    /// Human‑readable description for the replay UI.
    pub message: String,
    /// Set on the last event of a run and nowhere else.
    #[serde(rename = "final")]
    pub is_final: bool,
}

impl StepEvent {
    /// Row/column value used by terminal summary events.
    pub const SENTINEL: i32 = -1;

    /// Creates a non‑final event concerning a concrete cell.
    pub fn at(
        board: Vec<Vec<u8>>,
        position: Position,
        status: StepStatus,
        message: String,
    ) -> Self {
        Self {
            board,
            row: position.row as i32,
            col: position.col as i32,
            status,
            message,
            is_final: false,
        }
    }

    /// Creates the terminal summary event of a run.
    pub fn summary(board: Vec<Vec<u8>>, status: StepStatus, message: String) -> Self {
        Self {
            board,
            row: Self::SENTINEL,
            col: Self::SENTINEL,
            status,
            message,
            is_final: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&StepStatus::Backtrack).unwrap(),
            "\"backtrack\""
        );
    }

    #[test]
    fn test_summary_uses_sentinel_and_final_flag() {
        let event = StepEvent::summary(
            vec![vec![0]],
            StepStatus::Success,
            String::from("Solution found with 1 queens!"),
        );
        assert_eq!(event.row, StepEvent::SENTINEL);
        assert_eq!(event.col, StepEvent::SENTINEL);
        assert!(event.is_final);
    }

    #[test]
    fn test_event_wire_shape() {
        let event = StepEvent::at(
            vec![vec![0, 1], vec![0, 0]],
            Position::new(0, 1),
            StepStatus::Trying,
            String::from("Trying to place queen at (0, 1)"),
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["board"], serde_json::json!([[0, 1], [0, 0]]));
        assert_eq!(json["row"], 0);
        assert_eq!(json["col"], 1);
        assert_eq!(json["status"], "trying");
        assert_eq!(json["final"], false);
    }
}
