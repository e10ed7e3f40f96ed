#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rba() -> Command {
    cargo_bin_cmd!("rbreakalert")
}

/// Create a unique test config path inside the system temp dir and remove any existing file
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbreakalert.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}
