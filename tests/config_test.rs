//! Tests for loading the TOML configuration.

use std::io::Write;
use tictac::GameConfig;
use tictac_rules::Player;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_names_loaded_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "player_x_name = \"Alice\"\nplayer_o_name = \"Bob\"").expect("write");

    let config = GameConfig::load_or_default(file.path()).expect("valid config");
    assert_eq!(config.name_for(Player::X), "Alice");
    assert_eq!(config.name_for(Player::O), "Bob");
}

#[test]
fn test_malformed_file_errors() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "player_x_name = ").expect("write");

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert_eq!(err.path, file.path());
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn test_unreadable_path_errors() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = GameConfig::from_file(dir.path()).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
