use predicates::prelude::*;

use crate::common::TestEnv;

#[test]
fn config_show_defaults() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default registry"))
        .stdout(predicate::str::contains(
            "https://raw.githubusercontent.com/LumexUI/composable/main",
        ))
        .stdout(predicate::str::contains("Package manager:  dotnet"))
        .stdout(predicate::str::contains("Project pattern:  *.csproj"));
}

#[test]
fn config_set_package_manager() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "set", "package_manager", "/usr/local/bin/dotnet"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Set package_manager = /usr/local/bin/dotnet",
        ));

    env.cmd()
        .args(["config", "get", "package_manager"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/usr/local/bin/dotnet"));

    assert!(env.config_dir.path().join("config.toml").exists());
}

#[test]
fn config_set_project_pattern() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "set", "project_pattern", "*.fsproj"])
        .assert()
        .success();

    env.cmd()
        .args(["config", "get", "project_pattern"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*.fsproj"));
}

#[test]
fn config_set_invalid_pattern() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "set", "project_pattern", "*.{csproj"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid project file pattern"));
}

#[test]
fn config_set_empty_value() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "set", "default_registry", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));
}

#[test]
fn config_set_invalid_key() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "set", "nonexistent_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn config_get_invalid_key() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "get", "nonexistent_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key"));
}
