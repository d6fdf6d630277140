use super::*;

#[test]
fn defaults_match_the_classic_setup() {
    let config = PlayConfig::default();
    assert_eq!(config.players.white, PlayerKind::Classical);
    assert_eq!(config.players.black, PlayerKind::Human);
    assert_eq!(config.engine.depth, 3);
    assert_eq!(config.engine.limits().move_time, None);
}

#[test]
fn parses_full_file() {
    let config = PlayConfig::from_toml_str(
        r#"
        [players]
        white = "human"
        black = "random"

        [engine]
        depth = 5
        move_time_ms = 250
        "#,
    )
    .unwrap();
    assert_eq!(config.players.for_side(Color::White), PlayerKind::Human);
    assert_eq!(config.players.for_side(Color::Black), PlayerKind::Random);
    let limits = config.engine.limits();
    assert_eq!(limits.depth, 5);
    assert_eq!(limits.move_time, Some(Duration::from_millis(250)));
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let config = PlayConfig::from_toml_str("[engine]\ndepth = 2\n").unwrap();
    assert_eq!(config.players, PlayersConfig::default());
    assert_eq!(config.engine.depth, 2);
    assert_eq!(PlayConfig::from_toml_str("").unwrap(), PlayConfig::default());
}

#[test]
fn rejects_bad_values() {
    assert!(matches!(
        PlayConfig::from_toml_str("[engine]\ndepth = 0\n"),
        Err(ConfigError::InvalidDepth(0))
    ));
    assert!(matches!(
        PlayConfig::from_toml_str("[engine]\ndepth = 9\n"),
        Err(ConfigError::InvalidDepth(9))
    ));
    assert!(matches!(
        PlayConfig::from_toml_str("[players]\nwhite = \"robot\"\n"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn missing_file_reports_its_path() {
    let err = PlayConfig::load(Path::new("/nonexistent/play.toml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/play.toml"));
}

#[test]
fn shipped_settings_file_parses() {
    let config = PlayConfig::from_toml_str(include_str!("../play.toml")).unwrap();
    assert_eq!(config, PlayConfig::default());
}

#[test]
fn only_humans_have_no_engine() {
    assert!(PlayerKind::Human.engine().is_none());
    assert_eq!(PlayerKind::Classical.engine().unwrap().name(), "Classical v1.0");
    assert_eq!(PlayerKind::Random.engine().unwrap().name(), "Random v1.0");
}
