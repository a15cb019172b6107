//! # eightpuzzle-td
//!
//! Two small, independent solvers sharing one crate:
//!
//! - An 8-puzzle search core: board representation, neighbor generation, and two
//!   search strategies (iterative-deepening depth-first search and A* with the
//!   Manhattan-distance heuristic).
//! - A tabular reinforcement-learning pipeline: load recorded episodes, estimate
//!   state values with temporal-difference (TD) learning, and derive a greedy policy.
//!
//! ## Solving a puzzle
//!
//! ```
//! use eightpuzzle_td::{a_star, iterative_deepening, Board};
//!
//! fn main() -> Result<(), eightpuzzle_td::PuzzleError> {
//!     let board = Board::new([0, 4, 1, 3, 8, 2, 6, 7, 5])?;
//!
//!     // Each entry is the index the blank tile moves to
//!     let moves = a_star(&board);
//!     assert_eq!(moves, vec![1, 2, 5, 8]);
//!     assert!(board.apply_moves(&moves)?.is_goal());
//!
//!     let moves = iterative_deepening(&board);
//!     assert_eq!(moves.len(), 4);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuring a solver
//!
//! ```
//! use eightpuzzle_td::{AStar, Board, SearchConfig, Solver, config::TieBreak};
//!
//! fn main() -> Result<(), eightpuzzle_td::PuzzleError> {
//!     let config = SearchConfig::default()
//!         .with_tie_break(TieBreak::HigherCost)
//!         .with_parity_check(true);
//!
//!     let solver = AStar::new(config)?;
//!     let solution = solver.solve(&Board::new([8, 0, 1, 3, 4, 2, 6, 7, 5])?);
//!
//!     assert!(solution.solved);
//!     println!("{}", solution.statistics.summary());
//!     Ok(())
//! }
//! ```
//!
//! ## Learning from episodes
//!
//! ```
//! use eightpuzzle_td::td::{parse_episodes, PolicyImprover, TdEstimator};
//! use eightpuzzle_td::TdConfig;
//!
//! fn main() -> Result<(), eightpuzzle_td::PuzzleError> {
//!     let episodes = parse_episodes(r#"[[[[0, 0], "right", 1, [0, 1]]]]"#)?;
//!
//!     let config = TdConfig::default().with_seed(7);
//!     let values = TdEstimator::new(config.clone())?.estimate(&episodes);
//!     let policy = PolicyImprover::new(config.discount_factor).improve(&values, &episodes);
//!
//!     assert_eq!(policy.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod config;
pub mod search;
pub mod stats;
pub mod td;

pub use board::{neighbors, Board, BLANK};
pub use config::{SearchConfig, TdConfig};
pub use search::{a_star, iterative_deepening, AStar, IterativeDeepening, Solution, Solver};
pub use stats::SearchStatistics;

/// Error types for the puzzle search core and the TD pipeline
#[derive(thiserror::Error, Debug)]
pub enum PuzzleError {
    /// A board must hold exactly nine tiles
    #[error("Invalid board: expected 9 tiles, got {got}")]
    InvalidBoardLength { got: usize },

    /// A tile label outside 0..=8
    #[error("Invalid board: tile {tile} is out of range 0..=8")]
    TileOutOfRange { tile: u8 },

    /// A tile label appears more than once
    #[error("Invalid board: tile {tile} appears more than once")]
    DuplicateTile { tile: u8 },

    /// A replayed move does not slide the blank to an adjacent cell
    #[error("Illegal move: blank at {from} cannot move to {to}")]
    IllegalMove { from: usize, to: usize },

    /// The episode file could not be read
    #[error("Failed to read episodes from {path}: {source}")]
    EpisodeIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The episode data is not an array of `[state, action, reward, next_state]` steps
    #[error("Malformed episode data: {0}")]
    EpisodeFormat(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for puzzle and TD operations
pub type Result<T> = std::result::Result<T, PuzzleError>;
