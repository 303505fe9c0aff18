//! Error types for the npuzzle crate.

use thiserror::Error;

/// Main error type for the npuzzle crate.
///
/// Board malformation is caught here at construction time; the search loop
/// itself is total over well-formed boards and never produces an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("tile value {value} is out of range for a board of {cells} cells")]
    TileOutOfRange { value: u8, cells: usize },

    #[error("tile value {value} appears more than once")]
    DuplicateTile { value: u8 },

    #[error("invalid heuristic '{input}'. Expected one of: manhattan, misplaced")]
    ParseHeuristic { input: String },

    #[error("invalid priority mode '{input}'. Expected one of: astar, greedy")]
    ParsePriorityMode { input: String },
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
