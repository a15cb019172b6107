//! Statistics collection for puzzle searches
//!
//! This module provides a structure for collecting and reporting statistics
//! about a single solver invocation.

use std::time::Duration;

/// Statistics collected during one search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStatistics {
    /// Boards whose neighbors were generated
    pub nodes_expanded: usize,

    /// Neighbor boards produced (including ones later skipped)
    pub nodes_generated: usize,

    /// Largest frontier held at once
    ///
    /// For A* this is the open-set size; for iterative deepening it is the
    /// length of the current branch.
    pub max_frontier: usize,

    /// Deepest iterative-deepening limit attempted (0 for A*)
    pub depth_limit: usize,

    /// Total time spent searching
    pub total_time: Duration,

    /// Whether the parity precheck rejected the board before searching
    pub rejected_unsolvable: bool,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        SearchStatistics {
            nodes_expanded: 0,
            nodes_generated: 0,
            max_frontier: 0,
            depth_limit: 0,
            total_time: Duration::from_secs(0),
            rejected_unsolvable: false,
        }
    }

    /// Returns the number of expansions per second
    pub fn nodes_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.nodes_expanded as f64 / self.total_time.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "Search Statistics:\n\
             - Nodes expanded: {}\n\
             - Nodes generated: {}\n\
             - Peak frontier: {}\n\
             - Depth limit reached: {}\n\
             - Total time: {:.3} ms\n\
             - Nodes per second: {:.1}\n\
             - Rejected as unsolvable: {}",
            self.nodes_expanded,
            self.nodes_generated,
            self.max_frontier,
            self.depth_limit,
            self.total_time.as_secs_f64() * 1000.0,
            self.nodes_per_second(),
            self.rejected_unsolvable
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
