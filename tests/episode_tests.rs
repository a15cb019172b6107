use std::path::PathBuf;

use eightpuzzle_td::td::{episode::to_json, load_episodes, parse_episodes, Action, State, Step};
use eightpuzzle_td::PuzzleError;

const SAMPLE: &str = r#"[
    [[[0, 0], "right", 1, [0, 1]], [[0, 1], "down", 2, [1, 1]]],
    [[[1, 1], "left", -1, [0, 1]], [[0, 1], "up", 0.5, [0, 0]]]
]"#;

#[test]
fn test_parse_episodes() {
    let episodes = parse_episodes(SAMPLE).unwrap();

    assert_eq!(episodes.len(), 2);
    assert_eq!(episodes[0].len(), 2);
    assert_eq!(
        episodes[0][0],
        Step::new(State(vec![0, 0]), Action::Right, 1.0, State(vec![0, 1]))
    );
    assert_eq!(episodes[1][0].reward, -1.0);
    assert_eq!(episodes[1][1].action, Action::Up);
    assert_eq!(episodes[1][1].reward, 0.5);
    assert_eq!(episodes[1][1].next_state, State(vec![0, 0]));
}

#[test]
fn test_states_compare_by_value() {
    let episodes = parse_episodes(SAMPLE).unwrap();

    // The same state recorded in two different episodes
    assert_eq!(episodes[0][0].next_state, episodes[1][1].state);
}

#[test]
fn test_serialized_layout_matches_input() {
    let episodes = parse_episodes(SAMPLE).unwrap();
    let json = to_json(&episodes).unwrap();

    assert!(json.starts_with(r#"[[[[0,0],"right",1.0,[0,1]]"#));
    assert_eq!(parse_episodes(&json).unwrap(), episodes);
}

#[test]
fn test_rejects_malformed_steps() {
    // Missing next state
    let result = parse_episodes(r#"[[[[0], "up", 1]]]"#);
    assert!(matches!(result, Err(PuzzleError::EpisodeFormat(_))));

    // Action must be a string
    let result = parse_episodes(r#"[[[[0], 3, 1, [1]]]]"#);
    assert!(matches!(result, Err(PuzzleError::EpisodeFormat(_))));
}

#[test]
fn test_unlisted_actions_are_kept() {
    let episodes = parse_episodes(r#"[[[[0], "jump", 1, [1]], [[1], "Up", 0, [2]]]]"#).unwrap();

    assert_eq!(episodes[0][0].action, Action::Other("jump".to_string()));
    // Labels match exactly
    assert_eq!(episodes[0][1].action, Action::Other("Up".to_string()));
    assert_eq!(episodes[0][0].action.to_string(), "jump");

    let json = to_json(&episodes).unwrap();
    assert!(json.contains(r#""jump""#));
    assert_eq!(parse_episodes(&json).unwrap(), episodes);
}

#[test]
fn test_missing_file_is_an_error() {
    let result = load_episodes("does/not/exist.json");
    match result {
        Err(PuzzleError::EpisodeIo { path, source }) => {
            assert_eq!(path, "does/not/exist.json");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected EpisodeIo, got {:?}", other),
    }
}

#[test]
fn test_load_sample_file() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/data/episodes.json");
    let episodes = load_episodes(path).unwrap();

    assert!(!episodes.is_empty());
    assert!(episodes.iter().all(|episode| !episode.is_empty()));
}
