use std::fs;

use fraction::calc;
use fraction::config::{Config, DEFAULT_PRECISION, load_config};
use tempdir::TempDir;

#[test]
fn test_load_missing_config() {
    let dir = TempDir::new("fraction").unwrap();
    let cfg = load_config(dir.path().join("missing.json")).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_load_config_file() {
    let dir = TempDir::new("fraction").unwrap();
    let path = dir.path().join("fraction.json");
    fs::write(&path, r#"{"show_float": true, "precision": 4}"#).unwrap();

    let cfg = load_config(&path).unwrap();
    assert!(cfg.show_float);
    assert_eq!(cfg.precision, 4);

    // results follow the loaded options
    assert_eq!(
        calc::run(&["1", "2", "+", "1", "4"], &cfg).unwrap(),
        "3/4 ≈ 0.7500"
    );
}

#[test]
fn test_load_malformed_config() {
    let dir = TempDir::new("fraction").unwrap();
    let path = dir.path().join("fraction.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(load_config(&path).is_err());
}

#[test]
fn test_default_precision() {
    let cfg = Config::default();
    assert_eq!(cfg.precision, DEFAULT_PRECISION);
    assert_eq!(calc::run(&["2", "3", "float"], &cfg).unwrap(), "0.666667");
}
