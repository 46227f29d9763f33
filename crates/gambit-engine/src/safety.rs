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

//! The conflict predicate: is a candidate cell attacked by any queen
//! already on the board.

use gambit_model::board::Board;

/// Returns `true` iff no occupied cell attacks `(row, col)`.
///
/// Checks the candidate's column, both upper diagonals, both lower
/// diagonals, and its row. Six independent linear scans, O(N) total.
/// The predicate is evaluated against the board's current state; the
/// candidate cell itself must not be occupied yet when a placement is
/// being considered.
pub fn is_safe(board: &Board, row: usize, col: usize) -> bool {
    let size = board.size();

    // Column
    for i in 0..size {
        if board.is_occupied(i, col) {
            return false;
        }
    }

    // Upper left diagonal
    let mut step = 1;
    while step <= row && step <= col {
        if board.is_occupied(row - step, col - step) {
            return false;
        }
        step += 1;
    }

    // Upper right diagonal
    let mut step = 1;
    while step <= row && col + step < size {
        if board.is_occupied(row - step, col + step) {
            return false;
        }
        step += 1;
    }

    // Lower left diagonal
    let mut step = 1;
    while row + step < size && step <= col {
        if board.is_occupied(row + step, col - step) {
            return false;
        }
        step += 1;
    }

    // Lower right diagonal
    let mut step = 1;
    while row + step < size && col + step < size {
        if board.is_occupied(row + step, col + step) {
            return false;
        }
        step += 1;
    }

    // Row
    for j in 0..size {
        if board.is_occupied(row, j) {
            return false;
        }
    }

    true
}
