use eightpuzzle_td::td::{parse_episodes, Action, PolicyImprover, State, StateValues, TdEstimator};
use eightpuzzle_td::TdConfig;

fn state(values: &[i64]) -> State {
    State(values.to_vec())
}

const SAMPLE: &str = r#"[
    [[[0, 0], "right", 1, [0, 1]], [[0, 1], "down", 2, [1, 1]]],
    [[[1, 1], "left", -1, [0, 1]], [[0, 1], "up", 0, [0, 0]]]
]"#;

#[test]
fn test_terminal_step_converges_to_reward() {
    // [9] never appears as an origin, so it has no value
    let episodes = parse_episodes(r#"[[[[0], "up", 2, [9]]]]"#).unwrap();
    let estimator = TdEstimator::new(TdConfig::default().with_seed(1)).unwrap();

    let values = estimator.estimate(&episodes);

    assert_eq!(values.len(), 1);
    assert!(!values.contains(&state(&[9])));
    assert!((values.get(&state(&[0])).unwrap() - 2.0).abs() < 1e-9);
}

#[test]
fn test_chain_converges_to_discounted_return() {
    let episodes =
        parse_episodes(r#"[[[[0], "right", 1, [1]], [[1], "right", 2, [2]]]]"#).unwrap();
    let estimator = TdEstimator::new(TdConfig::default().with_seed(3)).unwrap();

    let values = estimator.estimate(&episodes);

    assert!((values.get(&state(&[1])).unwrap() - 2.0).abs() < 1e-6);
    assert!((values.get(&state(&[0])).unwrap() - 2.8).abs() < 1e-6);
}

#[test]
fn test_initial_values_are_seeded_and_in_range() {
    let episodes = parse_episodes(SAMPLE).unwrap();
    let config = TdConfig::default().with_seed(42);

    let first = TdEstimator::new(config.clone()).unwrap().initial_values(&episodes);
    let second = TdEstimator::new(config).unwrap().initial_values(&episodes);

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    for (_, value) in first.iter() {
        assert!((0.0..5.0).contains(&value));
    }
}

#[test]
fn test_zero_iterations_keeps_initial_values() {
    let episodes = parse_episodes(SAMPLE).unwrap();
    let config = TdConfig::default().with_seed(5).with_iterations(0);
    let estimator = TdEstimator::new(config).unwrap();

    assert_eq!(estimator.estimate(&episodes), estimator.initial_values(&episodes));
}

#[test]
fn test_seeded_estimates_are_reproducible() {
    let episodes = parse_episodes(SAMPLE).unwrap();
    let config = TdConfig::default().with_seed(11).with_iterations(50);

    let first = TdEstimator::new(config.clone()).unwrap().estimate(&episodes);
    let second = TdEstimator::new(config).unwrap().estimate(&episodes);

    assert_eq!(first, second);
}

#[test]
fn test_estimator_rejects_invalid_config() {
    assert!(TdEstimator::new(TdConfig::default().with_learning_rate(0.0)).is_err());
}

#[test]
fn test_policy_from_fixed_values() {
    let episodes = parse_episodes(SAMPLE).unwrap();
    let values: StateValues = [
        (state(&[0, 0]), 1.5),
        (state(&[0, 1]), 2.0),
        (state(&[1, 0]), 1.0),
        (state(&[1, 1]), 3.0),
    ]
    .into_iter()
    .collect();

    let policy = PolicyImprover::new(0.9).improve(&values, &episodes);

    assert_eq!(policy.len(), 4);
    // 1 + 0.9 * 2.0 beats the 1.5 fallback
    assert_eq!(policy.action(&state(&[0, 0])), Some(&Action::Right));
    // down: 2 + 0.9 * 3.0 = 4.7, up: 0 + 0.9 * 1.5 = 1.35
    assert_eq!(policy.action(&state(&[0, 1])), Some(&Action::Down));
    // Never visited: every action falls back to 1.0, first one wins
    assert_eq!(policy.action(&state(&[1, 0])), Some(&Action::Up));
    // left: -1 + 0.9 * 2.0 = 0.8 loses to the 3.0 fallback
    assert_eq!(policy.action(&state(&[1, 1])), Some(&Action::Up));
}

#[test]
fn test_policy_evaluations_record_fallbacks() {
    let episodes = parse_episodes(SAMPLE).unwrap();
    let values: StateValues = [(state(&[0, 1]), 2.0), (state(&[1, 1]), 3.0)]
        .into_iter()
        .collect();

    let policy = PolicyImprover::default().improve(&values, &episodes);
    let evaluations = policy.evaluations(&state(&[0, 1])).unwrap();

    let order: Vec<Action> = evaluations.iter().map(|e| e.action.clone()).collect();
    assert_eq!(order, Action::ALL.to_vec());

    // up leads to [0, 0], which has no value here
    assert_eq!(evaluations[0].observations, 1);
    assert!((evaluations[0].value - 0.0).abs() < 1e-12);
    assert!((evaluations[1].value - 4.7).abs() < 1e-12);
    assert_eq!(evaluations[2].observations, 0);
    assert!((evaluations[2].value - 2.0).abs() < 1e-12);
}

#[test]
fn test_policy_averages_repeated_observations() {
    let episodes = parse_episodes(
        r#"[
            [[[0], "left", 1, [5]]],
            [[[0], "left", 3, [5]]],
            [[[0], "right", 1.5, [5]]]
        ]"#,
    )
    .unwrap();
    let values: StateValues = [(state(&[0]), -10.0)].into_iter().collect();

    let policy = PolicyImprover::default().improve(&values, &episodes);
    let evaluations = policy.evaluations(&state(&[0])).unwrap();

    assert_eq!(evaluations[2].observations, 2);
    assert!((evaluations[2].value - 2.0).abs() < 1e-12);
    assert_eq!(policy.action(&state(&[0])), Some(&Action::Left));
}

#[test]
fn test_full_pipeline() {
    let episodes = parse_episodes(SAMPLE).unwrap();
    let config = TdConfig::default().with_seed(2024);

    let values = TdEstimator::new(config.clone()).unwrap().estimate(&episodes);
    let policy = PolicyImprover::new(config.discount_factor).improve(&values, &episodes);

    assert_eq!(policy.len(), values.len());
    for (state, _) in values.iter() {
        assert!(policy.action(state).is_some());
    }
}

#[test]
fn test_unlisted_actions_still_update_values() {
    let episodes = parse_episodes(
        r#"[
            [[[0], "stay", 4, [9]]],
            [[[1], "right", 1, [9]]]
        ]"#,
    )
    .unwrap();
    assert_eq!(episodes[0][0].action, Action::Other("stay".to_string()));

    let config = TdConfig::default().with_seed(5).with_iterations(500);
    let estimator = TdEstimator::new(config).unwrap();
    let initial = estimator.initial_values(&episodes);
    let values = estimator.refine(initial.clone(), &episodes);

    // [9] is terminal, so V([0]) moves from its random start to the reward
    assert!(initial.contains(&state(&[0])));
    assert!((values.get(&state(&[0])).unwrap() - 4.0).abs() < 1e-6);
    assert_ne!(values.get(&state(&[0])), initial.get(&state(&[0])));
}

#[test]
fn test_policy_never_chooses_unlisted_actions() {
    let episodes = parse_episodes(
        r#"[
            [[[0], "stay", 100, [9]], [[0], "left", 1, [9]]]
        ]"#,
    )
    .unwrap();
    let values: StateValues = [(state(&[0]), 0.0)].into_iter().collect();

    let policy = PolicyImprover::default().improve(&values, &episodes);
    let evaluations = policy.evaluations(&state(&[0])).unwrap();

    assert_eq!(evaluations.len(), Action::ALL.len());
    assert!(evaluations
        .iter()
        .all(|e| !matches!(e.action, Action::Other(_))));
    // left: 1 beats the 0.0 fallback; the stay reward is ignored here
    assert_eq!(policy.action(&state(&[0])), Some(&Action::Left));
}
