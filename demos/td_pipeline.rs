//! Temporal-difference learning example
//!
//! Loads recorded episodes, estimates state values, and prints the greedy policy.
//!
//! ```bash
//! cargo run --example td_pipeline -- demos/data/episodes.json
//! ```

use std::env;

use eightpuzzle_td::td::{load_episodes, PolicyImprover, TdEstimator};
use eightpuzzle_td::TdConfig;

fn main() -> Result<(), eightpuzzle_td::PuzzleError> {
    // Initialize logging
    env_logger::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/data/episodes.json".to_string());

    let episodes = load_episodes(&path)?;
    println!("Loaded {} episodes from {}", episodes.len(), path);
    println!();

    let config = TdConfig::default();
    let values = TdEstimator::new(config.clone())?.estimate(&episodes);

    println!("Computed State Values:");
    for state in values.sorted_states() {
        if let Some(value) = values.get(state) {
            println!("  {} -> {:.4}", state, value);
        }
    }
    println!();

    let policy = PolicyImprover::new(config.discount_factor).improve(&values, &episodes);

    println!("Computed Policy:");
    for state in values.sorted_states() {
        if let Some(action) = policy.action(state) {
            println!("  {} -> {}", state, action);
        }
    }

    Ok(())
}
