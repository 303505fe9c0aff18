//! Board representation and move generation for the sliding-tile puzzle.
//!
//! Generic over grid dimension (`N`) and total cell count (`CELLS = N^2`).
//! The board is a flat row-major array where each cell contains a tile value,
//! with 0 denoting the blank.

use arrayvec::ArrayVec;

use crate::error::{Error, Result};

/// Grid dimension of the classic 8-puzzle.
pub const CLASSIC_DIM: usize = 3;

/// Number of cells in the classic 8-puzzle grid.
pub const CLASSIC_CELLS: usize = 9;

/// The classic 3x3 board.
pub type ClassicBoard = Board<CLASSIC_DIM, CLASSIC_CELLS>;

/// Blank-neighbor offsets as (row delta, column delta), in the fixed order
/// successors are generated: up, left, right, down.
const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// A sliding-tile board configuration.
///
/// Cell (row, col) lives at index `row * N + col`. Each value in 0..CELLS
/// appears exactly once; `new` enforces this, so every constructed board is a
/// valid permutation with a single blank.
///
/// Boards are immutable values: sliding a tile produces a new board. Equality
/// and hashing are structural over the cell array, which lets a board key the
/// visited set directly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board<const N: usize, const CELLS: usize> {
    cells: [u8; CELLS],
}

impl<const N: usize, const CELLS: usize> Board<N, CELLS> {
    /// Creates a board from a flat row-major cell array, validating that
    /// every value in 0..CELLS appears exactly once.
    pub fn new(cells: [u8; CELLS]) -> Result<Self> {
        assert!(N > 0, "N must be positive");
        assert!(N * N == CELLS, "CELLS must equal N^2");
        let mut seen = [false; CELLS];
        for &value in &cells {
            if (value as usize) >= CELLS {
                return Err(Error::TileOutOfRange {
                    value,
                    cells: CELLS,
                });
            }
            if seen[value as usize] {
                return Err(Error::DuplicateTile { value });
            }
            seen[value as usize] = true;
        }
        Ok(Self { cells })
    }

    /// Creates a board from nested rows, top to bottom.
    pub fn from_rows(rows: [[u8; N]; N]) -> Result<Self> {
        let mut cells = [0u8; CELLS];
        for (row_index, row) in rows.iter().enumerate() {
            cells[row_index * N..(row_index + 1) * N].copy_from_slice(row);
        }
        Self::new(cells)
    }

    /// Returns the solved configuration: values ascending row-major with the
    /// blank (0) in the top-left cell.
    ///
    /// The blank-first layout is deliberate. The conventional 8-puzzle goal
    /// places the blank last; the two layouts sit in different halves of the
    /// permutation space, so "correcting" this one would silently change
    /// which boards are reachable.
    pub const fn goal() -> Self {
        assert!(N > 0, "N must be positive");
        assert!(N * N == CELLS, "CELLS must equal N^2");
        let mut cells = [0u8; CELLS];
        let mut i = 0;
        while i < CELLS {
            cells[i] = i as u8;
            i += 1;
        }
        Self { cells }
    }

    /// Returns true iff every cell holds its own row-major index.
    pub fn is_goal(&self) -> bool {
        self.cells
            .iter()
            .enumerate()
            .all(|(index, &value)| value as usize == index)
    }

    /// Returns the flat row-major cell array.
    #[inline]
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// Iterates over the board's rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(N)
    }

    /// Returns the (row, col) position of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        // new() guarantees exactly one blank
        let index = self.cells.iter().position(|&value| value == 0).unwrap_or(0);
        (index / N, index % N)
    }

    /// Returns every board reachable by sliding one tile into the blank.
    ///
    /// Neighbor offsets are tried in the fixed order of `NEIGHBOR_OFFSETS`;
    /// each in-bounds neighbor yields a copy of this board with the blank and
    /// that neighbor swapped. A 3x3 board has 2 successors when the blank is
    /// in a corner, 3 on an edge and 4 in the center.
    pub fn successors(&self) -> ArrayVec<Self, 4> {
        let (blank_row, blank_col) = self.blank_position();
        let mut moves = ArrayVec::new();

        for (row_delta, col_delta) in NEIGHBOR_OFFSETS {
            let row = blank_row as i32 + row_delta;
            let col = blank_col as i32 + col_delta;

            if !(0..N as i32).contains(&row) || !(0..N as i32).contains(&col) {
                continue;
            }

            let mut cells = self.cells;
            cells.swap(blank_row * N + blank_col, row as usize * N + col as usize);
            moves.push(Self { cells });
        }

        moves
    }

    /// Counts pairs of non-blank values that appear in the opposite of goal
    /// order when the board is read row-major.
    pub fn inversions(&self) -> usize {
        let mut count = 0;
        for i in 0..CELLS {
            for j in i + 1..CELLS {
                if self.cells[j] != 0 && self.cells[i] > self.cells[j] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Returns true iff this board lies in the goal's reachability class.
    ///
    /// A blank slide within a row leaves the inversion count unchanged; a
    /// slide between rows changes it by up to N-1, flipping its parity only
    /// when N is even. Relative to the blank-first goal (zero inversions,
    /// blank in row 0): for odd N a board is solvable iff its inversion count
    /// is even, for even N iff inversions plus the blank's row is even.
    pub fn solvable(&self) -> bool {
        if N % 2 == 1 {
            self.inversions() % 2 == 0
        } else {
            let (blank_row, _) = self.blank_position();
            (self.inversions() + blank_row) % 2 == 0
        }
    }
}
