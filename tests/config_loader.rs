use std::fs;

use supplysoul::config::{Config, ConfigError};
use supplysoul::ui::Page;

/// Defaults match the documented values.
#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.start_page, Page::Catalog);
    assert_eq!(config.assistant.response_delay_ms, 500);
    assert_eq!(config.assistant.category_vocabulary.len(), 6);
    assert!(config.assistant.speech_command.is_empty());
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.inventory.seed_items().len(), 15);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_location() {
    let path = Config::config_path();
    assert!(path.ends_with("supplysoul/config.toml"), "{}", path.display());
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("load");
    assert_eq!(config, Config::default());
}

#[test]
fn test_empty_file_yields_defaults() {
    let config = Config::parse("").expect("parse");
    assert_eq!(config, Config::default());
}

/// Partial sections keep defaults for the keys they leave out.
#[test]
fn test_load_partial_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[ui]
start_page = "assistant"

[assistant]
response_delay_ms = 0
category_vocabulary = ["vitamins", "first aid"]
speech_command = ["whisper-listen", "--once"]

[logging]
level = "debug"
"#,
    )
    .expect("write config");

    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.ui.start_page, Page::Assistant);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.assistant.response_delay_ms, 0);
    assert_eq!(config.assistant.category_vocabulary, ["vitamins", "first aid"]);
    assert_eq!(config.assistant.speech_command, ["whisper-listen", "--once"]);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_custom_seed_replaces_builtin() {
    let config = Config::parse(
        r#"
[[inventory.seed]]
id = 1
name = "Vitamin C"
category = "Vitamins"
quantity = 40
threshold = 10

[[inventory.seed]]
id = 2
name = "Zinc"
category = "Vitamins"
quantity = 0
threshold = 5
"#,
    )
    .expect("parse");
    let items = config.inventory.seed_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].name, "Zinc");
    assert!(config.validate().is_ok());
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui\ntick_rate_ms = ").expect("write config");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().starts_with("Failed to parse config file"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\nstart_page = \"settings\"\n").expect("write config");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_tick_rate_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntick_rate_ms = 0\n").expect("write config");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("tick_rate_ms"));
}

#[test]
fn test_unknown_log_level_is_rejected() {
    let config = Config::parse("[logging]\nlevel = \"loud\"\n").expect("parse");
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Unknown log level 'loud'"));
}

#[test]
fn test_blank_vocabulary_term_is_rejected() {
    let config = Config::parse("[assistant]\ncategory_vocabulary = [\"  \"]\n").expect("parse");
    assert!(config.validate().is_err());
}

#[test]
fn test_duplicate_seed_ids_are_rejected() {
    let config = Config::parse(
        r#"
[[inventory.seed]]
id = 3
name = "A"
category = "X"
quantity = 1
threshold = 1

[[inventory.seed]]
id = 3
name = "B"
category = "X"
quantity = 1
threshold = 1
"#,
    )
    .expect("parse");
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("Duplicate seed item id 3"));
}

#[test]
fn test_zero_seed_id_is_rejected() {
    let config = Config::parse(
        "[[inventory.seed]]\nid = 0\nname = \"A\"\ncategory = \"X\"\nquantity = 1\nthreshold = 1\n",
    )
    .expect("parse");
    assert!(config.validate().is_err());
}
