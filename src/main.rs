//! Sliding-Tile Puzzle Solver
//!
//! Runs informed best-first search over the classic 8-puzzle from a fixed
//! starting layout, printing every expanded state and a final banner. The
//! heuristic (Manhattan distance or misplaced tiles) and the priority mode
//! (A* or greedy) are selected on the command line.

use clap::Parser;

use npuzzle::board::ClassicBoard;
use npuzzle::heuristic::Heuristic;
use npuzzle::render;
use npuzzle::solver::{self, PriorityMode, SearchConfig, SearchNode, SearchResult};

/// Solves the 8-puzzle with a configurable heuristic and priority mode.
#[derive(Parser)]
#[command(name = "npuzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Cost-to-goal estimate: "manhattan" or "misplaced".
    #[arg(long, default_value = "manhattan")]
    heuristic: Heuristic,

    /// Frontier ranking: "astar" (path length + heuristic) or "greedy"
    /// (heuristic alone).
    #[arg(long, default_value = "astar")]
    mode: PriorityMode,

    /// Stop after this many expanded states instead of searching to
    /// exhaustion.
    #[arg(long)]
    max_expansions: Option<u64>,
}

fn main() {
    let cli = Cli::parse();
    let config = SearchConfig {
        heuristic: cli.heuristic,
        mode: cli.mode,
        max_expansions: cli.max_expansions,
    };

    let initial = match ClassicBoard::from_rows([[8, 0, 6], [5, 4, 7], [2, 3, 1]]) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Invalid starting board: {}", e);
            return;
        }
    };

    run_search(initial, config, |chunk| print!("{chunk}"));
}

/// Drives the search and hands each chunk of console output to `sink` in
/// print order: the initial state, one record per expanded state, then the
/// final banner.
fn run_search(initial: ClassicBoard, config: SearchConfig, mut sink: impl FnMut(&str)) {
    let initial_node = SearchNode::new(initial, 0, config.heuristic);
    sink("Initial state:\n");
    sink(&render::format_expansion(&initial_node, config.mode));

    sink(&format!(
        "Starting {} search with {} heuristic...\n",
        config.mode, config.heuristic
    ));

    let result = solver::solve(initial, config, |node| {
        sink(&render::format_expansion(node, config.mode));
    });

    match result {
        SearchResult::Found { board, path_len } => {
            sink("Goal state reached!\n");
            // rebuilt for rendering; both heuristics are 0 at the goal
            let goal_node = SearchNode::new(board, path_len, config.heuristic);
            sink(&render::format_expansion(&goal_node, config.mode));
        }
        SearchResult::Unreachable => sink("Goal state not reachable!\n"),
        SearchResult::Cancelled => sink("Search budget exhausted!\n"),
    }
}
