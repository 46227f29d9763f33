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

/// A mutable N×N occupancy grid, the working state of a search.
///
/// Cells hold `1` when a queen occupies them and `0` otherwise. The
/// grid is stored as a single flat vector in row‑major order; the
/// snapshot operation rebuilds the nested row layout the trace format
/// expects.
///
/// Invariants upheld by the search engine, not by this type:
/// - Among occupied cells of a state recorded as a success, no two
///   share a row, column, or diagonal.
///
/// Bounds are the caller's responsibility. Coordinates are
/// debug‑asserted only; the size is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<u8>,
    size: usize,
}

impl Board {
    /// Creates an empty board with the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(
            size >= 1,
            "called `Board::new` with zero size: a board must have at least one cell"
        );

        Self {
            cells: vec![0; size * size],
            size,
        }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.size && col < self.size,
            "called `Board` accessor with cell out of bounds: the size is {} but the cell is ({}, {})",
            self.size,
            row,
            col
        );

        row * self.size + col
    }

    /// Returns the side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns whether a queen occupies the given cell.
    #[inline]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)] == 1
    }

    /// Marks the given cell as occupied.
    #[inline]
    pub fn place(&mut self, row: usize, col: usize) {
        let index = self.index(row, col);
        self.cells[index] = 1;
    }

    /// Clears the given cell.
    #[inline]
    pub fn remove(&mut self, row: usize, col: usize) {
        let index = self.index(row, col);
        self.cells[index] = 0;
    }

    /// Returns the number of queens currently on the board.
    #[inline]
    pub fn queens(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }

    /// Returns a fully independent copy of the grid in nested row
    /// layout. Mutations to the live board after this call are never
    /// visible in the returned copy.
    pub fn snapshot(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.to_vec())
            .collect()
    }
}
