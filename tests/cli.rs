use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchbook_cmd() -> Command {
    Command::cargo_bin("sketchbook").expect("binary exists")
}

#[test]
fn help_prints_usage() {
    sketchbook_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sketchpad"))
        .stdout(predicate::str::contains("--export-dir"));
}

#[test]
fn requires_wayland_env() {
    let temp = TempDir::new().unwrap();
    sketchbook_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}

#[test]
fn init_config_writes_example_once() {
    let temp = TempDir::new().unwrap();

    sketchbook_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let written = temp.path().join("sketchbook").join("config.toml");
    let contents = std::fs::read_to_string(&written).unwrap();
    assert!(contents.contains("[keybindings]"));

    sketchbook_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn schema_dump_prints_config_sections() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("keybindings"))
        .stdout(predicate::str::contains("canvas"));
}
