use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{rba, setup_test_config};

#[test]
fn init_creates_config_file() {
    let cfg_path = setup_test_config("init");

    rba()
        .args(["--config", &cfg_path, "init"])
        .assert()
        .success()
        .stdout(contains("Config file"))
        .stdout(contains("initialization completed"));

    let content = fs::read_to_string(&cfg_path).expect("config file written");
    assert!(content.contains("break_alert_interval"));
    assert!(content.contains("reminder_title"));
}

#[test]
fn init_test_mode_does_not_write() {
    let cfg_path = setup_test_config("init_test_mode");

    rba()
        .args(["--config", &cfg_path, "--test", "init"])
        .assert()
        .success();

    assert!(!Path::new(&cfg_path).exists());
}

#[test]
fn config_print_shows_defaults() {
    let cfg_path = setup_test_config("print_defaults");

    rba()
        .args(["--config", &cfg_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("reminder_title: Take a break"))
        .stdout(contains("break_alert_interval: 40m"))
        .stdout(contains("idle_after: 2m"));
}

#[test]
fn config_print_reads_custom_values() {
    let cfg_path = setup_test_config("print_custom");
    fs::write(&cfg_path, "break_alert_interval: \"55m\"\n").expect("write config");

    rba()
        .args(["--config", &cfg_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("break_alert_interval: 55m"));
}

#[test]
fn config_check_accepts_defaults() {
    let cfg_path = setup_test_config("check_defaults");

    rba()
        .args(["--config", &cfg_path, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is valid"));
}

#[test]
fn config_check_flags_invalid_duration() {
    let cfg_path = setup_test_config("check_invalid");
    fs::write(&cfg_path, "idle_after: \"nonsense\"\n").expect("write config");

    rba()
        .args(["--config", &cfg_path, "config", "--check"])
        .assert()
        .failure()
        .stderr(contains("idle_after"))
        .stderr(contains("invalid duration"))
        .stdout(contains("Configuration is valid").not());
}

#[test]
fn unparsable_config_file_is_an_error() {
    let cfg_path = setup_test_config("broken_yaml");
    fs::write(&cfg_path, ": not yaml :::\n").expect("write config");

    rba()
        .args(["--config", &cfg_path, "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
