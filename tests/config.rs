use std::fs;

use payconfirm::config::{Config, PaymentInstructions};
use payconfirm::error::AppError;

#[test]
fn test_defaults_are_verbatim() {
    let info = PaymentInstructions::default();
    assert_eq!(info.account_number, "1002830115");
    assert_eq!(info.bank_name, "Sparkle");
    assert_eq!(info.account_name, "Joel Samuel");
    assert_eq!(info.amount, "20,000 naira");
}

#[test]
fn test_partial_yaml_keeps_other_defaults() {
    let yaml = "instructions:\n  bank_name: Meadow\n  amount: 5,000 naira\n";
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.instructions.bank_name, "Meadow");
    assert_eq!(config.instructions.amount, "5,000 naira");
    assert_eq!(config.instructions.account_number, "1002830115");
}

#[test]
fn test_empty_file_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "").unwrap();
    assert_eq!(Config::load(Some(path.as_path())).unwrap(), Config::default());
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.yaml");
    match Config::load(Some(path.as_path())) {
        Err(AppError::ConfigRead { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected read error, got {:?}", other),
    }
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "instructions: [unclosed").unwrap();
    assert!(matches!(
        Config::load(Some(path.as_path())),
        Err(AppError::ConfigParse { .. })
    ));
}
