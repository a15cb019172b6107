//! Search strategies for the 8-puzzle
//!
//! Both strategies implement [`Solver`] and report their answer as a sequence of
//! blank destination indices: entry `i` is the cell the blank occupies after
//! move `i + 1`. An empty sequence with `solved == false` means no solution was
//! found within the search bounds.
//!
//! - [`IterativeDeepening`]: depth-limited DFS with increasing limits
//! - [`AStar`]: best-first search on `g + manhattan_distance`

pub mod astar;
pub mod iddfs;

use std::time::Instant;

use log::warn;

use crate::{board::Board, config::SearchConfig, stats::SearchStatistics};

pub use astar::AStar;
pub use iddfs::IterativeDeepening;

/// Trait for interchangeable puzzle search strategies
pub trait Solver {
    /// Searches for a move sequence taking `start` to [`Board::GOAL`]
    fn solve(&self, start: &Board) -> Solution;

    /// Short name used in logs and reports
    fn name(&self) -> &'static str;
}

/// Result of one search
#[derive(Debug, Clone)]
pub struct Solution {
    /// Blank destination index after each move
    pub moves: Vec<usize>,

    /// Whether the goal was reached
    ///
    /// Distinguishes an already-solved board (empty moves, solved) from an
    /// exhausted search (empty moves, not solved).
    pub solved: bool,

    /// Statistics gathered during the search
    pub statistics: SearchStatistics,
}

impl Solution {
    fn found(moves: Vec<usize>, statistics: SearchStatistics) -> Self {
        Solution {
            moves,
            solved: true,
            statistics,
        }
    }

    fn exhausted(statistics: SearchStatistics) -> Self {
        Solution {
            moves: Vec::new(),
            solved: false,
            statistics,
        }
    }

    /// Number of moves in the solution
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the solution has no moves
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Handles the cases every solver answers without searching
///
/// Returns `Some` for a board that is already solved, or one the parity check
/// proves unsolvable.
fn trivial_outcome(start: &Board, config: &SearchConfig, started: Instant) -> Option<Solution> {
    let mut statistics = SearchStatistics::new();

    if start.is_goal() {
        statistics.total_time = started.elapsed();
        return Some(Solution::found(Vec::new(), statistics));
    }

    if config.parity_check && !start.is_solvable() {
        warn!(
            "board {:?} has odd inversion parity and cannot reach the goal",
            start.tiles()
        );
        statistics.rejected_unsolvable = true;
        statistics.total_time = started.elapsed();
        return Some(Solution::exhausted(statistics));
    }

    None
}

/// Blank position in each board after the first
fn blank_trail<'a>(boards: impl IntoIterator<Item = &'a Board>) -> Vec<usize> {
    boards.into_iter().skip(1).map(Board::blank_index).collect()
}

/// Solves `board` with iterative deepening using the default configuration
///
/// Returns an empty sequence if no depth limit up to the ceiling succeeds, and
/// also if `board` is already the goal. Use [`Solver::solve`] and check
/// [`Solution::solved`] to tell the two apart.
pub fn iterative_deepening(board: &Board) -> Vec<usize> {
    IterativeDeepening::default().solve(board).moves
}

/// Solves `board` with A* using the default configuration
///
/// Returns an empty sequence if the open set empties without reaching the goal,
/// and also if `board` is already the goal. Use [`Solver::solve`] and check
/// [`Solution::solved`] to tell the two apart.
pub fn a_star(board: &Board) -> Vec<usize> {
    AStar::default().solve(board).moves
}
