//! Console formatting for boards and search progress.
//!
//! The engine emits plain observation records; the CLI turns them into text
//! here so the search itself stays free of formatting concerns.

use crate::board::Board;
use crate::solver::{PriorityMode, SearchNode};

/// Separator printed after every annotated board.
const SEPARATOR: &str = "-----------------";

/// Renders a board one row per line, values separated by single spaces.
pub fn format_board<const N: usize, const CELLS: usize>(board: &Board<N, CELLS>) -> String {
    let mut output = String::new();

    for row in board.rows() {
        for (col, value) in row.iter().enumerate() {
            if col > 0 {
                output.push(' ');
            }
            output.push_str(&value.to_string());
        }
        output.push('\n');
    }

    output
}

/// Renders one expansion record: the board, its annotation line and the
/// separator. A* annotates heuristic and step count; greedy runs do not
/// track cost in the priority, so only the heuristic is shown.
pub fn format_expansion<const N: usize, const CELLS: usize>(
    node: &SearchNode<N, CELLS>,
    mode: PriorityMode,
) -> String {
    let mut output = format_board(&node.board);

    match mode {
        PriorityMode::AStar => {
            output.push_str(&format!(
                "Heuristic: {} Steps: {}\n",
                node.heuristic, node.path_len
            ));
        }
        PriorityMode::Greedy => {
            output.push_str(&format!("Heuristic: {}\n", node.heuristic));
        }
    }

    output.push_str(SEPARATOR);
    output.push('\n');

    output
}
