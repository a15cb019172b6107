//! Tabular temporal-difference learning over recorded episodes
//!
//! The pipeline is linear: [`load_episodes`] reads transitions from disk,
//! [`TdEstimator`] learns a value per state, and [`PolicyImprover`] picks the
//! greedy action per state from those values.

pub mod episode;
pub mod estimator;
pub mod policy;

pub use episode::{load_episodes, parse_episodes, Action, Episode, State, Step};
pub use estimator::{StateValues, TdEstimator};
pub use policy::{ActionValue, Policy, PolicyImprover};
