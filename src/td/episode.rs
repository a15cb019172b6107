//! Episode data model and loader
//!
//! Episodes are stored as a JSON array of episodes, each an array of steps
//! encoded as `[state, action, reward, next_state]`:
//!
//! ```json
//! [[[[0, 0], "right", 1, [0, 1]], [[0, 1], "down", 2, [1, 1]]]]
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::{PuzzleError, Result};

/// An observed environment state, compared and hashed by value
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(pub Vec<i64>);

impl From<Vec<i64>> for State {
    fn from(values: Vec<i64>) -> Self {
        State(values)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(i64::to_string).collect();
        write!(f, "({})", parts.join(", "))
    }
}

/// Action label recorded with a step
///
/// The four moves the policy chooses between have their own variants. Any other
/// label is kept verbatim in [`Action::Other`]: such steps still take part in
/// value estimation, but the policy never selects them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Other(String),
}

impl Action {
    /// The actions the policy improver chooses between, in evaluation order
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Returns the label as written in episode files
    pub fn as_str(&self) -> &str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::Other(label) => label,
        }
    }
}

impl From<String> for Action {
    fn from(label: String) -> Self {
        match label.as_str() {
            "up" => Action::Up,
            "down" => Action::Down,
            "left" => Action::Left,
            "right" => Action::Right,
            _ => Action::Other(label),
        }
    }
}

impl From<&str> for Action {
    fn from(label: &str) -> Self {
        Action::from(label.to_string())
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        match action {
            Action::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recorded transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(State, Action, f64, State)", into = "(State, Action, f64, State)")]
pub struct Step {
    pub state: State,
    pub action: Action,
    pub reward: f64,
    pub next_state: State,
}

impl Step {
    /// Creates a step from its four components
    pub fn new(state: State, action: Action, reward: f64, next_state: State) -> Self {
        Step {
            state,
            action,
            reward,
            next_state,
        }
    }
}

impl From<(State, Action, f64, State)> for Step {
    fn from((state, action, reward, next_state): (State, Action, f64, State)) -> Self {
        Step {
            state,
            action,
            reward,
            next_state,
        }
    }
}

impl From<Step> for (State, Action, f64, State) {
    fn from(step: Step) -> Self {
        (step.state, step.action, step.reward, step.next_state)
    }
}

/// An ordered sequence of steps
pub type Episode = Vec<Step>;

/// Parses episodes from a JSON string
pub fn parse_episodes(json: &str) -> Result<Vec<Episode>> {
    Ok(serde_json::from_str(json)?)
}

/// Loads episodes from a JSON file
///
/// A missing or unreadable file is reported as [`PuzzleError::EpisodeIo`].
pub fn load_episodes(path: impl AsRef<Path>) -> Result<Vec<Episode>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| PuzzleError::EpisodeIo {
        path: path.display().to_string(),
        source,
    })?;

    let episodes = parse_episodes(&contents)?;
    info!(
        "loaded {} episodes ({} steps) from {}",
        episodes.len(),
        episodes.iter().map(Vec::len).sum::<usize>(),
        path.display()
    );
    Ok(episodes)
}

/// Serializes episodes back to the on-disk JSON layout
pub fn to_json(episodes: &[Episode]) -> Result<String> {
    Ok(serde_json::to_string(episodes)?)
}
