//! Heuristic estimates of remaining distance to the goal.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::Error;

/// Sum over all non-blank cells of the row plus column distance between the
/// cell and its tile's goal cell.
///
/// With the blank-first goal layout, value v's home is cell v, i.e. row v / N
/// and column v % N. Each move slides one tile a single step, so the sum
/// changes by at most 1 per move: the estimate never exceeds the true
/// remaining distance.
pub fn manhattan_distance<const N: usize, const CELLS: usize>(board: &Board<N, CELLS>) -> u32 {
    let mut distance = 0;

    for (index, &value) in board.tiles().iter().enumerate() {
        if value == 0 {
            continue;
        }
        let home = value as usize;
        distance += ((index / N).abs_diff(home / N) + (index % N).abs_diff(home % N)) as u32;
    }

    distance
}

/// Number of cells whose value differs from the cell's row-major goal index.
///
/// The blank participates: it counts as misplaced whenever it sits away from
/// the top-left cell.
pub fn misplaced_tiles<const N: usize, const CELLS: usize>(board: &Board<N, CELLS>) -> u32 {
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(index, &value)| value as usize != index)
        .count() as u32
}

/// Selects the per-node cost-to-goal estimate used by the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Total Manhattan distance of all tiles from their goal cells.
    Manhattan,
    /// Count of cells not holding their goal value.
    Misplaced,
}

impl Heuristic {
    /// Evaluates this heuristic on a board.
    pub fn evaluate<const N: usize, const CELLS: usize>(&self, board: &Board<N, CELLS>) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan_distance(board),
            Heuristic::Misplaced => misplaced_tiles(board),
        }
    }
}

impl FromStr for Heuristic {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Heuristic::Manhattan),
            "misplaced" => Ok(Heuristic::Misplaced),
            _ => Err(Error::ParseHeuristic {
                input: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Manhattan => write!(f, "Manhattan distance"),
            Heuristic::Misplaced => write!(f, "misplaced tiles"),
        }
    }
}
