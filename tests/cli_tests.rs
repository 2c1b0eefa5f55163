mod common;

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn cms_cache(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cms-cache"))
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("Failed to run the cms-cache binary")
}

#[test]
fn test_missing_config_exits_with_failure() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("missing.toml");

    let output = cms_cache(&config_path, &["get", "k"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[CONFIG]"), "stderr was: {}", stderr);
    assert!(output.stdout.is_empty());
    assert!(!config_path.exists(), "Config must not be created without --create-config");
}

#[test]
fn test_set_then_get_through_binary() {
    let temp_dir = common::create_temp_dir();
    let config_path = temp_dir.path().join("config.toml");
    let mut config = common::create_test_config(&temp_dir);
    config.log_level = "off".to_string();
    fs::write(&config_path, toml::to_string(&config).unwrap()).unwrap();

    let stored = cms_cache(&config_path, &["-n", "pages", "set", "k", r#"{"a":1}"#]);
    assert_eq!(stored.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&stored.stdout).trim(), "OK STORED");

    let read = cms_cache(&config_path, &["-n", "pages", "get", "k"]);
    assert_eq!(read.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&read.stdout).trim(), r#"{"a":1}"#);

    let missed = cms_cache(&config_path, &["get", "k"]);
    assert_eq!(missed.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&missed.stdout).trim(), "MISS k");
}
