use super::*;

#[test]
fn test_parse_minimax_spec() {
    let spec: PlayerSpec = "minimax:hard:4".parse().unwrap();
    assert_eq!(spec.policy, Policy::Minimax);
    assert_eq!(spec.tier, EvalTier::Hard);
    assert_eq!(spec.depth, 4);
    assert_eq!(spec.seed, None);
}

#[test]
fn test_parse_defaults() {
    let spec: PlayerSpec = "minimax".parse().unwrap();
    assert_eq!(spec.tier, EvalTier::Easy);
    assert_eq!(spec.depth, DEFAULT_DEPTH);

    let spec: PlayerSpec = "randomized:medium".parse().unwrap();
    assert_eq!(spec.tier, EvalTier::Medium);
    assert_eq!(spec.depth, DEFAULT_DEPTH);
}

#[test]
fn test_parse_seeds() {
    let spec: PlayerSpec = "randomized:impossible:2@17".parse().unwrap();
    assert_eq!(spec.policy, Policy::Randomized);
    assert_eq!(spec.seed, Some(17));

    let spec: PlayerSpec = "random@3".parse().unwrap();
    assert_eq!(spec.policy, Policy::Random);
    assert_eq!(spec.seed, Some(3));
}

#[test]
fn test_parse_errors() {
    for bad in [
        "alphazero",
        "minimax:brutal",
        "minimax:hard:deep",
        "minimax:hard:3:extra",
        "minimax@5",
        "random:hard",
        "random@x",
    ] {
        assert!(bad.parse::<PlayerSpec>().is_err(), "{bad} should not parse");
    }
}

#[test]
fn test_display_round_trips() {
    for text in ["minimax:hard:3", "randomized:easy:2@7", "random@1", "random"] {
        let spec: PlayerSpec = text.parse().unwrap();
        assert_eq!(spec.to_string(), text);
    }
}

#[test]
fn test_build_names_the_engine() {
    let spec: PlayerSpec = "minimax:medium:2".parse().unwrap();
    assert_eq!(spec.build().name(), "Minimax (medium)");
    let spec: PlayerSpec = "random@4".parse().unwrap();
    assert_eq!(spec.build().name(), "Random");
}

#[test]
fn test_toml_config() {
    let config = ArenaConfig::from_toml_str(
        r#"
games = 4
max_plies = 80

[player_one]
policy = "minimax"
tier = "hard"
depth = 3

[player_two]
policy = "randomized"
tier = "easy"
depth = 2
seed = 7
"#,
    )
    .unwrap();
    assert_eq!(config.games, 4);
    assert_eq!(config.max_plies, 80);
    assert_eq!(config.player_one, "minimax:hard:3".parse().unwrap());
    assert_eq!(config.player_two, "randomized:easy:2@7".parse().unwrap());
}

#[test]
fn test_toml_defaults() {
    let config = ArenaConfig::from_toml_str(
        r#"
[player_one]
policy = "random"

[player_two]
policy = "minimax"
"#,
    )
    .unwrap();
    assert_eq!(config.games, DEFAULT_GAMES);
    assert_eq!(config.max_plies, DEFAULT_MAX_PLIES);
    assert_eq!(config.player_two.depth, DEFAULT_DEPTH);
    assert_eq!(config.player_two.tier, EvalTier::Easy);
}

#[test]
fn test_toml_rejects_unknown_tier() {
    let err = ArenaConfig::from_toml_str(
        r#"
[player_one]
policy = "minimax"
tier = "brutal"

[player_two]
policy = "random"
"#,
    );
    assert!(matches!(err, Err(ArenaError::Config(_))));
}

#[test]
fn test_missing_file() {
    let err = ArenaConfig::load(Path::new("/definitely/not/here.toml"));
    assert!(matches!(err, Err(ArenaError::Io { .. })));
}

#[test]
fn test_sample_config_parses() {
    let config = ArenaConfig::from_toml_str(include_str!("../arena.toml")).unwrap();
    assert_eq!(config.player_one.policy, Policy::Minimax);
    assert_eq!(config.player_two.seed, Some(7));
}
