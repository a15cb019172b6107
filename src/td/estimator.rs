//! Tabular TD(0) state-value estimation over recorded episodes

use std::collections::HashMap;

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::TdConfig,
    td::episode::{Episode, State},
    Result,
};

/// Estimated value of each state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateValues {
    values: HashMap<State, f64>,
}

impl StateValues {
    /// Creates an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `state`, if it has one
    pub fn get(&self, state: &State) -> Option<f64> {
        self.values.get(state).copied()
    }

    /// Sets the value of `state`
    pub fn insert(&mut self, state: State, value: f64) {
        self.values.insert(state, value);
    }

    /// Returns true if `state` has a value
    pub fn contains(&self, state: &State) -> bool {
        self.values.contains_key(state)
    }

    /// Returns the number of valued states
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no state has a value
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over states and values in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&State, f64)> {
        self.values.iter().map(|(state, &value)| (state, value))
    }

    /// States in ascending order, for stable reporting
    pub fn sorted_states(&self) -> Vec<&State> {
        let mut states: Vec<&State> = self.values.keys().collect();
        states.sort();
        states
    }
}

impl FromIterator<(State, f64)> for StateValues {
    fn from_iter<I: IntoIterator<Item = (State, f64)>>(iter: I) -> Self {
        StateValues {
            values: iter.into_iter().collect(),
        }
    }
}

/// TD(0) value estimator
///
/// Every state that appears as the origin of some step gets a random initial
/// value. Each sweep then walks all episodes in order and moves `V(s)` toward
/// `reward + γ·V(next)`. A next state that never appears as an origin has no
/// value and contributes only its reward.
#[derive(Debug, Clone)]
pub struct TdEstimator {
    config: TdConfig,
}

impl TdEstimator {
    /// Creates an estimator after validating the configuration
    pub fn new(config: TdConfig) -> Result<Self> {
        config.validate()?;
        Ok(TdEstimator { config })
    }

    /// Returns the estimator configuration
    pub fn config(&self) -> &TdConfig {
        &self.config
    }

    /// Draws an initial value for every origin state
    pub fn initial_values(&self, episodes: &[Episode]) -> StateValues {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (low, high) = self.config.initial_value_range;

        let mut values = StateValues::new();
        for step in episodes.iter().flatten() {
            if !values.contains(&step.state) {
                values.insert(step.state.clone(), rng.gen_range(low..high));
            }
        }
        values
    }

    /// Runs the configured number of sweeps and returns the learned values
    pub fn estimate(&self, episodes: &[Episode]) -> StateValues {
        let values = self.initial_values(episodes);
        info!(
            "estimating values for {} states over {} sweeps",
            values.len(),
            self.config.iterations
        );
        self.refine(values, episodes)
    }

    /// Continues TD sweeps from existing values
    pub fn refine(&self, mut values: StateValues, episodes: &[Episode]) -> StateValues {
        let alpha = self.config.learning_rate;
        let gamma = self.config.discount_factor;

        for sweep in 0..self.config.iterations {
            let mut largest_change = 0.0f64;

            for step in episodes.iter().flatten() {
                let target = match values.get(&step.next_state) {
                    Some(next) => step.reward + gamma * next,
                    None => step.reward,
                };
                let Some(current) = values.get(&step.state) else {
                    continue;
                };
                let change = alpha * (target - current);
                values.insert(step.state.clone(), current + change);
                largest_change = largest_change.max(change.abs());
            }

            if sweep % 100 == 0 {
                debug!("sweep {}: largest value change {:.6}", sweep, largest_change);
            }
        }

        values
    }
}
