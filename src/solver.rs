//! Best-first search over sliding-tile boards.
//!
//! One engine covers every variant:
//! - A* (priority = path length + heuristic) or greedy (heuristic alone)
//! - Manhattan distance or misplaced tiles as the estimate
//! - BinaryHeap frontier, reversed ordering with insertion-order tie-break
//! - FxHashSet for visited-state deduplication
//!
//! Duplicate boards may coexist in the frontier; they are dropped when
//! popped, after the goal check. An expanded board is never reopened, even
//! when a later path reaches it more cheaply.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::error::Error;
use crate::heuristic::Heuristic;

/// Whether accumulated path length contributes to a node's priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriorityMode {
    /// Rank nodes by path length + heuristic.
    AStar,
    /// Rank nodes by heuristic alone.
    Greedy,
}

impl FromStr for PriorityMode {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "astar" => Ok(PriorityMode::AStar),
            "greedy" => Ok(PriorityMode::Greedy),
            _ => Err(Error::ParsePriorityMode {
                input: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for PriorityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityMode::AStar => write!(f, "A*"),
            PriorityMode::Greedy => write!(f, "greedy"),
        }
    }
}

/// Search parameters: the heuristic, the frontier ranking, and an optional
/// expansion budget.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    pub mode: PriorityMode,
    /// Stop with [`SearchResult::Cancelled`] once this many nodes have been
    /// expanded. `None` searches to exhaustion.
    pub max_expansions: Option<u64>,
}

/// A board under consideration, carrying its distance from the start and its
/// precomputed heuristic estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchNode<const N: usize, const CELLS: usize> {
    pub board: Board<N, CELLS>,
    /// Moves taken from the initial board to reach this one.
    pub path_len: u32,
    /// The configured heuristic, evaluated once at construction.
    pub heuristic: u32,
}

impl<const N: usize, const CELLS: usize> SearchNode<N, CELLS> {
    /// Creates a node with the heuristic evaluated on `board`.
    pub fn new(board: Board<N, CELLS>, path_len: u32, heuristic: Heuristic) -> Self {
        Self {
            board,
            path_len,
            heuristic: heuristic.evaluate(&board),
        }
    }

    /// The frontier key for this node under `mode`.
    fn priority(&self, mode: PriorityMode) -> u32 {
        match mode {
            PriorityMode::AStar => self.path_len + self.heuristic,
            PriorityMode::Greedy => self.heuristic,
        }
    }
}

/// Terminal outcome of a search.
///
/// All three variants are ordinary results; an unreachable goal is reported
/// here, not as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchResult<const N: usize, const CELLS: usize> {
    /// The goal board was reached, `path_len` moves from the start.
    Found {
        board: Board<N, CELLS>,
        path_len: u32,
    },
    /// The frontier drained without producing the goal board.
    Unreachable,
    /// The expansion budget ran out first.
    Cancelled,
}

/// Frontier entry: a node with its fixed priority and insertion sequence
/// number. `BinaryHeap` is a max-heap, so the ordering is reversed to pop the
/// lowest priority first, oldest entry winning ties.
struct FrontierEntry<const N: usize, const CELLS: usize> {
    node: SearchNode<N, CELLS>,
    priority: u32,
    seq: u64,
}

impl<const N: usize, const CELLS: usize> FrontierEntry<N, CELLS> {
    fn new(node: SearchNode<N, CELLS>, mode: PriorityMode, seq: u64) -> Self {
        Self {
            node,
            priority: node.priority(mode),
            seq,
        }
    }
}

impl<const N: usize, const CELLS: usize> PartialEq for FrontierEntry<N, CELLS> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<const N: usize, const CELLS: usize> Eq for FrontierEntry<N, CELLS> {}

impl<const N: usize, const CELLS: usize> Ord for FrontierEntry<N, CELLS> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<const N: usize, const CELLS: usize> PartialOrd for FrontierEntry<N, CELLS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs best-first search from `initial` until the goal board is popped, the
/// frontier drains, or the expansion budget runs out.
///
/// `on_expand` fires once per expanded node, in expansion order: after the
/// node has passed the goal and visited checks, before its successors are
/// pushed. No board appears twice in one run's observations. The engine does
/// no I/O of its own; the callback is its only boundary crossing, and its
/// effects are opaque here.
///
/// The goal check runs on every popped node before the visited check, so a
/// goal node terminates the search without being counted as an expansion.
pub fn solve<const N: usize, const CELLS: usize>(
    initial: Board<N, CELLS>,
    config: SearchConfig,
    mut on_expand: impl FnMut(&SearchNode<N, CELLS>),
) -> SearchResult<N, CELLS> {
    let mut frontier = BinaryHeap::new();
    let mut visited: FxHashSet<Board<N, CELLS>> = FxHashSet::default();
    let mut sequence = 0u64;
    let mut expanded = 0u64;

    frontier.push(FrontierEntry::new(
        SearchNode::new(initial, 0, config.heuristic),
        config.mode,
        sequence,
    ));

    loop {
        // cooperative cancellation between iterations; a budget of 0 stops
        // before the first pop
        if config.max_expansions.is_some_and(|budget| expanded >= budget) {
            return SearchResult::Cancelled;
        }

        let Some(entry) = frontier.pop() else {
            return SearchResult::Unreachable;
        };
        let node = entry.node;

        if node.board.is_goal() {
            return SearchResult::Found {
                board: node.board,
                path_len: node.path_len,
            };
        }

        // rediscovered boards are dropped here, whatever their path length
        if !visited.insert(node.board) {
            continue;
        }

        expanded += 1;
        on_expand(&node);

        for successor in node.board.successors() {
            sequence += 1;
            frontier.push(FrontierEntry::new(
                SearchNode::new(successor, node.path_len + 1, config.heuristic),
                config.mode,
                sequence,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ClassicBoard;

    fn classic(cells: [u8; 9]) -> ClassicBoard {
        ClassicBoard::new(cells).unwrap()
    }

    fn config(heuristic: Heuristic, mode: PriorityMode) -> SearchConfig {
        SearchConfig {
            heuristic,
            mode,
            max_expansions: None,
        }
    }

    #[test]
    fn test_goal_start_terminates_without_expansion() {
        let mut observations = 0;
        let result = solve(
            ClassicBoard::goal(),
            config(Heuristic::Manhattan, PriorityMode::AStar),
            |_| observations += 1,
        );

        assert_eq!(
            result,
            SearchResult::Found {
                board: ClassicBoard::goal(),
                path_len: 0
            }
        );
        assert_eq!(observations, 0);
    }

    #[test]
    fn test_one_move_instance() {
        let start = classic([1, 0, 2, 3, 4, 5, 6, 7, 8]);

        for mode in [PriorityMode::AStar, PriorityMode::Greedy] {
            let result = solve(start, config(Heuristic::Manhattan, mode), |_| {});
            assert_eq!(
                result,
                SearchResult::Found {
                    board: ClassicBoard::goal(),
                    path_len: 1
                },
                "mode {mode}"
            );
        }
    }

    #[test]
    fn test_two_move_instance() {
        let start = classic([1, 2, 0, 3, 4, 5, 6, 7, 8]);

        let result = solve(start, config(Heuristic::Manhattan, PriorityMode::AStar), |_| {});
        assert_eq!(
            result,
            SearchResult::Found {
                board: ClassicBoard::goal(),
                path_len: 2
            }
        );
    }

    #[test]
    fn test_astar_manhattan_finds_shortest_path() {
        // four slides away from the goal; Manhattan distance of the start is
        // also 4, so no shorter path exists
        let start = classic([1, 2, 5, 3, 0, 4, 6, 7, 8]);

        let result = solve(start, config(Heuristic::Manhattan, PriorityMode::AStar), |_| {});
        assert_eq!(
            result,
            SearchResult::Found {
                board: ClassicBoard::goal(),
                path_len: 4
            }
        );
    }

    #[test]
    fn test_first_observation_is_the_start() {
        let start = classic([8, 0, 6, 5, 4, 7, 2, 3, 1]);
        let mut first = None;

        solve(
            start,
            config(Heuristic::Manhattan, PriorityMode::AStar),
            |node| {
                if first.is_none() {
                    first = Some(*node);
                }
            },
        );

        let first = first.unwrap();
        assert_eq!(first.board, start);
        assert_eq!(first.path_len, 0);
        assert_eq!(first.heuristic, 21);
    }

    #[test]
    fn test_no_board_is_observed_twice() {
        let start = classic([8, 0, 6, 5, 4, 7, 2, 3, 1]);
        let mut seen = std::collections::HashSet::new();
        let mut observations = 0u64;

        let result = solve(
            start,
            config(Heuristic::Manhattan, PriorityMode::AStar),
            |node| {
                observations += 1;
                assert!(seen.insert(node.board), "board expanded twice");
            },
        );

        assert!(matches!(result, SearchResult::Found { .. }));
        assert_eq!(observations, seen.len() as u64);
    }

    #[test]
    fn test_swapped_pair_is_unreachable_in_both_modes() {
        // two tiles exchanged directly: the wrong permutation parity class
        let start = classic([0, 2, 1, 3, 4, 5, 6, 7, 8]);
        assert!(!start.solvable());

        let astar = solve(start, config(Heuristic::Manhattan, PriorityMode::AStar), |_| {});
        assert_eq!(astar, SearchResult::Unreachable);

        let greedy = solve(start, config(Heuristic::Misplaced, PriorityMode::Greedy), |_| {});
        assert_eq!(greedy, SearchResult::Unreachable);
    }

    #[test]
    fn test_expansion_budget_cancels() {
        let start = classic([8, 0, 6, 5, 4, 7, 2, 3, 1]);
        let mut observations = 0u64;

        let result = solve(
            start,
            SearchConfig {
                heuristic: Heuristic::Manhattan,
                mode: PriorityMode::AStar,
                max_expansions: Some(10),
            },
            |_| observations += 1,
        );

        assert_eq!(result, SearchResult::Cancelled);
        assert_eq!(observations, 10);
    }

    #[test]
    fn test_zero_budget_cancels_before_any_observation() {
        let start = classic([8, 0, 6, 5, 4, 7, 2, 3, 1]);
        let mut observations = 0u64;

        let result = solve(
            start,
            SearchConfig {
                heuristic: Heuristic::Manhattan,
                mode: PriorityMode::AStar,
                max_expansions: Some(0),
            },
            |_| observations += 1,
        );

        assert_eq!(result, SearchResult::Cancelled);
        assert_eq!(observations, 0);
    }

    #[test]
    fn test_generous_budget_does_not_cancel() {
        let start = classic([1, 0, 2, 3, 4, 5, 6, 7, 8]);

        let result = solve(
            start,
            SearchConfig {
                heuristic: Heuristic::Manhattan,
                mode: PriorityMode::AStar,
                max_expansions: Some(1_000),
            },
            |_| {},
        );

        assert!(matches!(result, SearchResult::Found { path_len: 1, .. }));
    }

    #[test]
    fn test_frontier_pops_lowest_priority_oldest_first() {
        let node = SearchNode {
            board: ClassicBoard::goal(),
            path_len: 0,
            heuristic: 0,
        };

        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry { node, priority: 5, seq: 0 });
        heap.push(FrontierEntry { node, priority: 3, seq: 1 });
        heap.push(FrontierEntry { node, priority: 3, seq: 2 });
        heap.push(FrontierEntry { node, priority: 4, seq: 3 });

        let order: Vec<_> =
            std::iter::from_fn(|| heap.pop().map(|entry| (entry.priority, entry.seq))).collect();
        assert_eq!(order, vec![(3, 1), (3, 2), (4, 3), (5, 0)]);
    }

    #[test]
    fn test_two_by_two_search() {
        let start = Board::<2, 4>::new([1, 0, 2, 3]).unwrap();

        let result = solve(start, config(Heuristic::Manhattan, PriorityMode::AStar), |_| {});
        assert_eq!(
            result,
            SearchResult::Found {
                board: Board::<2, 4>::goal(),
                path_len: 1
            }
        );
    }

    #[test]
    fn test_parse_priority_mode() {
        assert_eq!("astar".parse::<PriorityMode>(), Ok(PriorityMode::AStar));
        assert_eq!("Greedy".parse::<PriorityMode>(), Ok(PriorityMode::Greedy));
        assert_eq!(
            "dijkstra".parse::<PriorityMode>(),
            Err(Error::ParsePriorityMode {
                input: "dijkstra".to_string()
            })
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(PriorityMode::AStar.to_string(), "A*");
        assert_eq!(PriorityMode::Greedy.to_string(), "greedy");
    }
}
