use predicates::prelude::*;

use crate::common::{Fixture, TestEnv};

#[test]
fn list_shows_components_sorted() {
    let env = TestEnv::new();
    let registry = env.create_registry(&[
        Fixture {
            name: "Tabs",
            files: &[("Tabs.razor", ""), ("Tab.razor", "")],
            dependencies: &["Button"],
            packages: &[],
        },
        Fixture::new("Avatar", &[("Avatar.razor", "")]),
    ]);

    env.cmd()
        .args(["list", "--registry"])
        .arg(&registry)
        .assert()
        .success()
        .stdout(predicate::str::contains("Available components:"))
        .stdout(predicate::str::is_match(r"(?s)  Avatar\n.*  Tabs\n").unwrap())
        .stdout(predicate::str::contains("    Files: Tabs.razor, Tab.razor"))
        .stdout(predicate::str::contains("    Dependencies: Button"))
        .stdout(predicate::str::contains("Total: 2 components"));
}

#[test]
fn list_shows_packages() {
    let env = TestEnv::new();
    let registry = env.create_registry(&[Fixture {
        name: "Popover",
        files: &[("Popover.razor", "")],
        dependencies: &[],
        packages: &[("TailwindMerge.NET", Some("1.0.0"))],
    }]);

    env.cmd()
        .args(["list", "-r"])
        .arg(&registry)
        .assert()
        .success()
        .stdout(predicate::str::contains("    Packages: TailwindMerge.NET (1.0.0)"));
}

#[test]
fn list_empty_registry() {
    let env = TestEnv::new();
    let registry = env.create_registry(&[]);

    env.cmd()
        .args(["list", "-r"])
        .arg(&registry)
        .assert()
        .success()
        .stdout(predicate::str::contains("Available components:"))
        .stdout(predicate::str::contains("Total: 0 components"));
}

#[test]
fn list_without_manifest_fails() {
    let env = TestEnv::new();

    env.cmd()
        .args(["list", "-r", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to fetch registry manifest"));
}

#[test]
fn list_malformed_manifest_fails() {
    let env = TestEnv::new();
    let registry = env.create_registry(&[]);
    std::fs::write(registry.join("registry.json"), "{\"components\": 3}").unwrap();

    env.cmd()
        .args(["list", "-r"])
        .arg(&registry)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}
