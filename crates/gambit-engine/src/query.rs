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

//! Safe‑position enumeration for a single placed queen.

use crate::safety;
use gambit_model::{board::Board, position::Position};

/// Lists every cell not attacked by a lone queen at `(row, col)`.
///
/// The queen's own cell is excluded. Results are in row‑major order:
/// ascending row, then ascending column. This is a pure O(N²)
/// evaluation with no recursion and no trace recording; repeated calls
/// with the same arguments yield identical results.
pub fn safe_positions(size: usize, row: usize, col: usize) -> Vec<Position> {
    let mut board = Board::new(size);
    board.place(row, col);

    let mut safe = Vec::new();
    for i in 0..size {
        for j in 0..size {
            if i == row && j == col {
                continue;
            }
            if safety::is_safe(&board, i, j) {
                safe.push(Position::new(i, j));
            }
        }
    }

    safe
}
