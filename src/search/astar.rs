//! A* search with the Manhattan-distance heuristic
//!
//! The open set is a binary min-heap keyed by `(f, tie-break, insertion order)`.
//! Nodes live in an arena and point to their parent by index, so a path is
//! rebuilt only once the goal is popped.
//!
//! Duplicate entries for the same board may coexist in the open set. A board
//! is never expanded twice: neighbors already closed are not enqueued, and
//! stale entries for closed boards are discarded when popped.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

use log::debug;

use crate::{
    board::Board,
    config::{SearchConfig, TieBreak},
    search::{blank_trail, trivial_outcome, Solution, Solver},
    stats::SearchStatistics,
    Result,
};

/// A* solver
#[derive(Debug, Clone, Default)]
pub struct AStar {
    config: SearchConfig,
}

impl AStar {
    /// Creates a solver after validating the configuration
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(AStar { config })
    }

    /// Returns the solver configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// A board reached during search
struct Node {
    board: Board,
    parent: Option<usize>,
    cost: usize,
}

/// Priority key of an open-set entry
///
/// Arena indices grow with every push, so `node` doubles as insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    estimate: usize,
    cost: usize,
    node: usize,
    tie_break: TieBreak,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_cost = match self.tie_break {
            TieBreak::LowerCost => self.cost.cmp(&other.cost),
            TieBreak::HigherCost => other.cost.cmp(&self.cost),
        };
        self.estimate
            .cmp(&other.estimate)
            .then(by_cost)
            .then(self.node.cmp(&other.node))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-call search state
struct Frontier {
    arena: Vec<Node>,
    open: BinaryHeap<Reverse<Entry>>,
    closed: HashSet<Board>,
    tie_break: TieBreak,
}

impl Frontier {
    fn new(tie_break: TieBreak) -> Self {
        Frontier {
            arena: Vec::new(),
            open: BinaryHeap::new(),
            closed: HashSet::new(),
            tie_break,
        }
    }

    fn push(&mut self, board: Board, parent: Option<usize>, cost: usize) {
        let node = self.arena.len();
        self.arena.push(Node {
            board,
            parent,
            cost,
        });
        self.open.push(Reverse(Entry {
            estimate: cost + board.manhattan_distance(),
            cost,
            node,
            tie_break: self.tie_break,
        }));
    }

    /// Boards from the start to `node`, in order
    fn path_to(&self, node: usize) -> Vec<Board> {
        let mut path = Vec::new();
        let mut cursor = Some(node);
        while let Some(index) = cursor {
            path.push(self.arena[index].board);
            cursor = self.arena[index].parent;
        }
        path.reverse();
        path
    }
}

impl Solver for AStar {
    fn solve(&self, start: &Board) -> Solution {
        let started = Instant::now();
        if let Some(outcome) = trivial_outcome(start, &self.config, started) {
            return outcome;
        }

        let mut statistics = SearchStatistics::new();
        let mut frontier = Frontier::new(self.config.tie_break);
        frontier.push(*start, None, 0);

        while let Some(Reverse(entry)) = frontier.open.pop() {
            let board = frontier.arena[entry.node].board;

            if board.is_goal() {
                let moves = blank_trail(&frontier.path_to(entry.node));
                statistics.total_time = started.elapsed();
                debug!(
                    "{} found a {}-move solution after {} expansions",
                    self.name(),
                    moves.len(),
                    statistics.nodes_expanded
                );
                return Solution::found(moves, statistics);
            }

            if !frontier.closed.insert(board) {
                continue;
            }

            statistics.nodes_expanded += 1;
            let cost = frontier.arena[entry.node].cost + 1;

            for neighbor in board.neighbors() {
                statistics.nodes_generated += 1;
                if frontier.closed.contains(&neighbor) {
                    continue;
                }
                frontier.push(neighbor, Some(entry.node), cost);
            }

            statistics.max_frontier = statistics.max_frontier.max(frontier.open.len());
        }

        statistics.total_time = started.elapsed();
        debug!(
            "{} emptied the open set after {} expansions without reaching the goal",
            self.name(),
            statistics.nodes_expanded
        );
        Solution::exhausted(statistics)
    }

    fn name(&self) -> &'static str {
        "a-star"
    }
}
