//! Sliding-Tile Puzzle Solver Library
//!
//! Provides the core search functionality for the 8-puzzle: board
//! representation and move generation, heuristic evaluation, and a best-first
//! search engine that is parameterized by heuristic and priority mode (A* or
//! greedy).

pub mod board;
pub mod error;
pub mod heuristic;
pub mod render;
pub mod solver;

pub use board::{Board, ClassicBoard, CLASSIC_CELLS, CLASSIC_DIM};
pub use error::{Error, Result};
pub use heuristic::Heuristic;
pub use solver::{solve, PriorityMode, SearchConfig, SearchNode, SearchResult};
