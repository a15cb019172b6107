//! Greedy policy derivation from state values and observed transitions

use std::collections::HashMap;

use log::{info, trace};

use crate::td::{
    episode::{Action, Episode, State, Step},
    estimator::StateValues,
};

/// Average one-step return of an action, with the number of observations behind it
#[derive(Debug, Clone, PartialEq)]
pub struct ActionValue {
    pub action: Action,
    pub value: f64,
    /// Zero when `value` fell back to the state's own value
    pub observations: usize,
}

/// Best action per state, with the evaluation that chose it
#[derive(Debug, Clone, Default)]
pub struct Policy {
    actions: HashMap<State, Action>,
    evaluations: HashMap<State, Vec<ActionValue>>,
}

impl Policy {
    /// Returns the chosen action for `state`
    pub fn action(&self, state: &State) -> Option<&Action> {
        self.actions.get(state)
    }

    /// Returns every action's value for `state`, in evaluation order
    pub fn evaluations(&self, state: &State) -> Option<&[ActionValue]> {
        self.evaluations.get(state).map(Vec::as_slice)
    }

    /// Returns the number of states with a chosen action
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if no state has a chosen action
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterates over state/action pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&State, &Action)> {
        self.actions.iter()
    }
}

/// Derives a greedy policy by one-step lookahead over observed transitions
///
/// For each valued state, every action in [`Action::ALL`] is scored by the mean
/// of `reward + γ·V(next)` over the steps that took it from that state. An
/// action never observed from a state is scored with the state's own value.
/// The first action with the strictly highest score wins. Steps recorded with
/// an [`Action::Other`] label only matter through the state values they shaped.
#[derive(Debug, Clone)]
pub struct PolicyImprover {
    discount_factor: f64,
}

impl PolicyImprover {
    /// Creates an improver with discount factor `gamma`
    pub fn new(discount_factor: f64) -> Self {
        PolicyImprover { discount_factor }
    }

    /// Scores every action for `state`
    fn evaluate(
        &self,
        state: &State,
        values: &StateValues,
        observed: &HashMap<(&State, &Action), Vec<&Step>>,
    ) -> Vec<ActionValue> {
        let fallback = values.get(state).unwrap_or(0.0);

        Action::ALL
            .iter()
            .map(|action| {
                let steps = observed
                    .get(&(state, action))
                    .map(Vec::as_slice)
                    .unwrap_or_default();

                let value = if steps.is_empty() {
                    fallback
                } else {
                    let total: f64 = steps
                        .iter()
                        .map(|step| self.one_step_return(step, values))
                        .sum();
                    total / steps.len() as f64
                };

                trace!(
                    "state {} action {}: value {:.4} from {} observations",
                    state,
                    action,
                    value,
                    steps.len()
                );
                ActionValue {
                    action: action.clone(),
                    value,
                    observations: steps.len(),
                }
            })
            .collect()
    }

    /// Builds the greedy policy for every state in `values`
    pub fn improve(&self, values: &StateValues, episodes: &[Episode]) -> Policy {
        let mut observed: HashMap<(&State, &Action), Vec<&Step>> = HashMap::new();
        for step in episodes.iter().flatten() {
            observed
                .entry((&step.state, &step.action))
                .or_default()
                .push(step);
        }

        let mut policy = Policy::default();
        for (state, _) in values.iter() {
            let evaluations = self.evaluate(state, values, &observed);

            let mut best: Option<&ActionValue> = None;
            for candidate in &evaluations {
                if best.map_or(true, |b| candidate.value > b.value) {
                    best = Some(candidate);
                }
            }

            if let Some(best) = best {
                trace!(
                    "state {} best action {} ({:.4})",
                    state,
                    best.action,
                    best.value
                );
                policy.actions.insert(state.clone(), best.action.clone());
            }
            policy.evaluations.insert(state.clone(), evaluations);
        }

        info!("derived policy for {} states", policy.len());
        policy
    }

    fn one_step_return(&self, step: &Step, values: &StateValues) -> f64 {
        match values.get(&step.next_state) {
            Some(next) => step.reward + self.discount_factor * next,
            None => step.reward,
        }
    }
}

impl Default for PolicyImprover {
    fn default() -> Self {
        Self::new(0.9)
    }
}
