//! Iterative-deepening depth-first search
//!
//! Each pass runs a depth-first search that only accepts the goal at exactly
//! the current depth limit. Limits grow by one from 1 up to the configured
//! ceiling, so the first successful pass yields a shortest solution.

use std::collections::HashSet;
use std::time::Instant;

use log::{debug, trace};

use crate::{
    board::Board,
    config::SearchConfig,
    search::{blank_trail, trivial_outcome, Solution, Solver},
    stats::SearchStatistics,
    Result,
};

/// Iterative-deepening solver
#[derive(Debug, Clone, Default)]
pub struct IterativeDeepening {
    config: SearchConfig,
}

impl IterativeDeepening {
    /// Creates a solver after validating the configuration
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(IterativeDeepening { config })
    }

    /// Returns the solver configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Solver for IterativeDeepening {
    fn solve(&self, start: &Board) -> Solution {
        let started = Instant::now();
        if let Some(outcome) = trivial_outcome(start, &self.config, started) {
            return outcome;
        }

        let mut statistics = SearchStatistics::new();

        for limit in 1..=self.config.max_depth {
            statistics.depth_limit = limit;

            let mut pass = DepthLimitedPass::new(*start, &mut statistics);
            if pass.descend(*start, limit) {
                let moves = blank_trail(&pass.branch);
                statistics.total_time = started.elapsed();
                debug!(
                    "{} solved at depth {} after {} expansions",
                    self.name(),
                    limit,
                    statistics.nodes_expanded
                );
                return Solution::found(moves, statistics);
            }

            trace!(
                "depth limit {} exhausted ({} expansions so far)",
                limit,
                statistics.nodes_expanded
            );
        }

        statistics.total_time = started.elapsed();
        debug!(
            "{} exhausted all depth limits up to {}",
            self.name(),
            self.config.max_depth
        );
        Solution::exhausted(statistics)
    }

    fn name(&self) -> &'static str {
        "iterative-deepening"
    }
}

/// State owned by one depth-limited pass
///
/// `visited` holds exactly the boards on the current branch: a board is
/// inserted on descent and removed on backtrack, so it may be reached again
/// through a different branch.
struct DepthLimitedPass<'a> {
    visited: HashSet<Board>,
    branch: Vec<Board>,
    statistics: &'a mut SearchStatistics,
}

impl<'a> DepthLimitedPass<'a> {
    fn new(start: Board, statistics: &'a mut SearchStatistics) -> Self {
        DepthLimitedPass {
            visited: HashSet::from([start]),
            branch: vec![start],
            statistics,
        }
    }

    /// Returns true once `branch` ends at the goal with no depth left
    fn descend(&mut self, current: Board, remaining: usize) -> bool {
        if remaining == 0 {
            return current.is_goal();
        }

        self.statistics.nodes_expanded += 1;

        for neighbor in current.neighbors() {
            self.statistics.nodes_generated += 1;
            if !self.visited.insert(neighbor) {
                continue;
            }
            self.branch.push(neighbor);
            self.statistics.max_frontier = self.statistics.max_frontier.max(self.branch.len());

            if self.descend(neighbor, remaining - 1) {
                return true;
            }

            self.branch.pop();
            self.visited.remove(&neighbor);
        }

        false
    }
}
