//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pathfinder() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("pathfinder"))
}

#[test]
fn test_cli_version() {
    let mut cmd = pathfinder();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("pathfinder"));
}

#[test]
fn test_cli_help() {
    let mut cmd = pathfinder();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Dotted-path config lookup"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("months"))
        .stdout(predicate::str::contains("normalize"));
}

#[test]
fn test_get_discovers_default_config_in_working_dir() {
    let tmp = TempDir::new().expect("tmp");
    fs::create_dir(tmp.path().join("config")).expect("mkdir");
    fs::write(tmp.path().join("config/configuration.yml"), "paths:\n  raw: data/raw\n")
        .expect("write config");

    let mut cmd = pathfinder();
    cmd.current_dir(tmp.path()).args(["get", "paths.raw"]);
    cmd.assert().success().stdout("data/raw\n");
}

#[test]
fn test_get_falls_back_to_json_default() {
    let tmp = TempDir::new().expect("tmp");
    fs::create_dir(tmp.path().join("config")).expect("mkdir");
    fs::write(tmp.path().join("config/configuration.json"), r#"{"workers": 8}"#)
        .expect("write config");

    let mut cmd = pathfinder();
    cmd.current_dir(tmp.path()).args(["get", "workers"]);
    cmd.assert().success().stdout("8\n");
}

#[test]
fn test_get_without_any_config_fails() {
    let tmp = TempDir::new().expect("tmp");
    let mut cmd = pathfinder();
    cmd.current_dir(tmp.path()).args(["get", "anything"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("configuration.yml or configuration.json"));
}

#[test]
fn test_get_merges_files_last_wins() {
    let tmp = TempDir::new().expect("tmp");
    let base = tmp.path().join("base.yml");
    let local = tmp.path().join("local.json");
    fs::write(&base, "env: prod\nworkers: 2\n").expect("write base");
    fs::write(&local, r#"{"env": "dev"}"#).expect("write local");

    let mut cmd = pathfinder();
    cmd.args(["get", "env", "-c"]).arg(&base).arg("-c").arg(&local);
    cmd.assert().success().stdout("dev\n");

    let mut cmd = pathfinder();
    cmd.args(["get", "workers", "-c"]).arg(&base).arg("-c").arg(&local);
    cmd.assert().success().stdout("2\n");
}

#[test]
fn test_get_with_select_and_yaml_output() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("c.yaml");
    fs::write(&path, "db:\n  primary:\n    host: db1\n    port: 5432\n").expect("write");

    let mut cmd = pathfinder();
    cmd.args(["get", "primary", "--select", "db", "--format", "yaml", "-c"]).arg(&path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("host: db1"))
        .stdout(predicate::str::contains("port: 5432"));
}

#[test]
fn test_get_missing_key_fails() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("c.json");
    fs::write(&path, r#"{"a": {"b": 1}}"#).expect("write");

    let mut cmd = pathfinder();
    cmd.args(["get", "a.c", "-c"]).arg(&path);
    cmd.assert().failure().stderr(predicate::str::contains("Key 'c' not found under 'a'"));
}

#[test]
fn test_get_rejects_unknown_extension() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("c.toml");
    fs::write(&path, "a = 1\n").expect("write");

    let mut cmd = pathfinder();
    cmd.args(["get", "a", "-c"]).arg(&path);
    cmd.assert().failure().stderr(predicate::str::contains("Unsupported config extension"));
}

#[test]
fn test_months_translates_each_value() {
    let mut cmd = pathfinder();
    cmd.args(["months", "Dezembro", "dez", "15/Mar/2021"]);
    cmd.assert().success().stdout("december\ndec\n15/mar/2021\n");
}

#[test]
fn test_normalize_with_case() {
    let mut cmd = pathfinder();
    cmd.args(["normalize", "São Paulo!", "--case", "upper"]);
    cmd.assert().success().stdout("SAO_PAULO\n");
}

#[test]
fn test_normalize_rejects_unknown_case() {
    let mut cmd = pathfinder();
    cmd.args(["normalize", "x", "--case", "title"]);
    cmd.assert().failure().stderr(predicate::str::contains("Unknown case directive"));
}

fn default_config_dir(content: &str) -> TempDir {
    let tmp = TempDir::new().expect("tmp");
    fs::create_dir(tmp.path().join("config")).expect("mkdir");
    fs::write(tmp.path().join("config/configuration.yml"), content).expect("write config");
    tmp
}

#[test]
fn test_rust_log_enables_debug_output() {
    let tmp = default_config_dir("a: 1\n");
    let mut cmd = pathfinder();
    cmd.current_dir(tmp.path()).env("RUST_LOG", "debug").args(["get", "a"]);
    cmd.assert()
        .success()
        .stdout("1\n")
        .stderr(predicate::str::contains("Loaded Yaml config"));
}

#[test]
fn test_verbose_flag_enables_debug_output() {
    let tmp = default_config_dir("a: 1\n");
    let mut cmd = pathfinder();
    cmd.current_dir(tmp.path()).env_remove("RUST_LOG").args(["-v", "get", "a"]);
    cmd.assert().success().stderr(predicate::str::contains("Loaded Yaml config"));
}

#[test]
fn test_quiet_by_default() {
    let tmp = default_config_dir("a: 1\n");
    let mut cmd = pathfinder();
    cmd.current_dir(tmp.path()).env_remove("RUST_LOG").args(["get", "a"]);
    cmd.assert().success().stdout("1\n").stderr(predicate::str::is_empty());
}

#[test]
fn test_rust_log_overrides_verbose() {
    let tmp = default_config_dir("a: 1\n");
    let mut cmd = pathfinder();
    cmd.current_dir(tmp.path()).env("RUST_LOG", "error").args(["-v", "get", "a"]);
    cmd.assert().success().stderr(predicate::str::is_empty());
}
