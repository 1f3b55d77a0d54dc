use std::fs;

use tally_config::{Config, ConfigError, ConfigManager};
use tally_domain::{CurrencyDisplay, NegativeStyle};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(!cfg.locale.is_empty());
    assert_eq!(cfg.log_filter, "tally=info");
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("tally")).expect("manager");

    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, Config::default());
    assert!(!manager.config_path().exists());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.currency = "NGN".to_string();
    cfg.locale = "en-NG".to_string();
    cfg.negative_style = NegativeStyle::Parentheses;
    cfg.currency_display = CurrencyDisplay::Code;

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "locale": "de-DE", "currency": "eur", "decimal_separator": "," }"#)
        .expect("write");

    let loaded = ConfigManager::new(path).load().expect("load config");

    assert_eq!(loaded.currency_code().as_str(), "EUR");
    assert_eq!(loaded.locale_config().decimal_separator, ',');
    assert_eq!(loaded.locale_config().grouping_separator, ',');
    assert_eq!(loaded.format_options().negative_style, NegativeStyle::Sign);
}

#[test]
fn malformed_file_is_a_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").expect("write");

    let err = ConfigManager::new(path).load().unwrap_err();

    assert!(matches!(err, ConfigError::Serde(_)));
}
