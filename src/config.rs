//! Configuration options for the puzzle solvers and the TD pipeline
//!
//! This module defines the parameters that control search bounds, A* ordering,
//! and the learning constants of the temporal-difference estimator.

use crate::{PuzzleError, Result};

/// Ordering among A* frontier entries with equal `f = g + h`
///
/// Any remaining tie is broken by insertion order, so the pop order is a
/// strict total order and repeated runs return identical move sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Prefer the entry closer to the start (smaller `g`)
    LowerCost,

    /// Prefer the entry deeper in the search (larger `g`)
    ///
    /// Usually expands fewer nodes, since deeper entries with the same `f`
    /// are closer to the goal according to the heuristic.
    HigherCost,
}

/// Configuration for the 8-puzzle solvers
///
/// # Example
///
/// ```
/// use eightpuzzle_td::{SearchConfig, config::TieBreak};
///
/// let config = SearchConfig::default()
///     .with_max_depth(31)
///     .with_parity_check(false)
///     .with_tie_break(TieBreak::HigherCost);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Largest depth limit tried by iterative deepening
    ///
    /// Limits run from 1 up to and including this value. The default of 49 is
    /// a generous safety ceiling; no 3×3 board needs more than 31 moves.
    pub max_depth: usize,

    /// Reject unsolvable boards up front using inversion parity
    ///
    /// Without it an unsolvable board exhausts the whole depth range (IDDFS)
    /// or the whole reachable state space (A*) before returning no solution.
    pub parity_check: bool,

    /// Ordering among A* entries with equal f-value
    pub tie_break: TieBreak,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: 49,
            parity_check: true,
            tie_break: TieBreak::LowerCost,
        }
    }
}

impl SearchConfig {
    /// Sets the iterative deepening depth ceiling
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Sets whether unsolvable boards are rejected before searching
    pub fn with_parity_check(mut self, enabled: bool) -> Self {
        self.parity_check = enabled;
        self
    }

    /// Sets the A* tie-break rule
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Checks that the configuration describes a usable search
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(PuzzleError::InvalidConfiguration(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for temporal-difference value estimation and policy improvement
///
/// # Example
///
/// ```
/// use eightpuzzle_td::TdConfig;
///
/// let config = TdConfig::default()
///     .with_learning_rate(0.05)
///     .with_discount_factor(0.95)
///     .with_iterations(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TdConfig {
    /// Step size α applied to each TD error
    pub learning_rate: f64,

    /// Discount factor γ for the value of the next state
    pub discount_factor: f64,

    /// Number of full sweeps over all episodes
    pub iterations: usize,

    /// Half-open range `[low, high)` that initial state values are drawn from
    pub initial_value_range: (f64, f64),

    /// Seed for the initial values; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for TdConfig {
    fn default() -> Self {
        TdConfig {
            learning_rate: 0.1,
            discount_factor: 0.9,
            iterations: 1000,
            initial_value_range: (0.0, 5.0),
            seed: None,
        }
    }
}

impl TdConfig {
    /// Sets the learning rate α
    pub fn with_learning_rate(mut self, alpha: f64) -> Self {
        self.learning_rate = alpha;
        self
    }

    /// Sets the discount factor γ
    pub fn with_discount_factor(mut self, gamma: f64) -> Self {
        self.discount_factor = gamma;
        self
    }

    /// Sets the number of sweeps over the episodes
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the range initial values are drawn from
    pub fn with_initial_value_range(mut self, low: f64, high: f64) -> Self {
        self.initial_value_range = (low, high);
        self
    }

    /// Fixes the random seed used for initial values
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the learning constants are in range
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(PuzzleError::InvalidConfiguration(format!(
                "learning_rate must be in (0, 1], got {}",
                self.learning_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.discount_factor) {
            return Err(PuzzleError::InvalidConfiguration(format!(
                "discount_factor must be in [0, 1], got {}",
                self.discount_factor
            )));
        }
        let (low, high) = self.initial_value_range;
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(PuzzleError::InvalidConfiguration(format!(
                "initial_value_range must be a non-empty finite range, got [{}, {})",
                low, high
            )));
        }
        Ok(())
    }
}
