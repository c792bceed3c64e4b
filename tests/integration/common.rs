use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::json;
use tempfile::TempDir;

/// A component to place in a test registry: name, `(file, content)` pairs
/// and `(package, version)` pairs.
pub struct Fixture<'a> {
    pub name: &'a str,
    pub files: &'a [(&'a str, &'a str)],
    pub dependencies: &'a [&'a str],
    pub packages: &'a [(&'a str, Option<&'a str>)],
}

impl<'a> Fixture<'a> {
    pub fn new(name: &'a str, files: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            name,
            files,
            dependencies: &[],
            packages: &[],
        }
    }
}

pub struct TestEnv {
    pub config_dir: TempDir,
    pub project_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            config_dir: TempDir::new().expect("failed to create config_dir"),
            project_dir: TempDir::new().expect("failed to create project_dir"),
        }
    }

    /// Build a composable Command pre-configured with --config-dir and cwd = project_dir.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("composable"));
        cmd.arg("--config-dir")
            .arg(self.config_dir.path())
            .env_remove("COMPOSABLE_REGISTRY")
            .env_remove("COMPOSABLE_CONFIG_DIR")
            .current_dir(self.project_dir.path());
        cmd
    }

    /// Write a local registry under project_dir/registry and return its path.
    /// Layout:
    ///   registry/
    ///     registry.json
    ///     components/<name>/<file>
    pub fn create_registry(&self, components: &[Fixture]) -> PathBuf {
        let root = self.project_dir.path().join("registry");
        fs::create_dir_all(&root).unwrap();

        let entries: Vec<_> = components
            .iter()
            .map(|c| {
                let packages: Vec<_> = c
                    .packages
                    .iter()
                    .map(|(name, version)| match version {
                        Some(v) => json!({ "name": name, "version": v }),
                        None => json!({ "name": name }),
                    })
                    .collect();
                json!({
                    "name": c.name,
                    "files": c.files.iter().map(|(f, _)| *f).collect::<Vec<_>>(),
                    "dependencies": c.dependencies,
                    "packages": packages,
                })
            })
            .collect();
        fs::write(
            root.join("registry.json"),
            serde_json::to_string_pretty(&json!({ "components": entries })).unwrap(),
        )
        .unwrap();

        for c in components {
            let dir = root.join("components").join(c.name);
            fs::create_dir_all(&dir).unwrap();
            for (file, content) in c.files {
                fs::write(dir.join(file), content).unwrap();
            }
        }
        root
    }

    /// Shorthand: create an empty project file in project_dir.
    pub fn create_project_file(&self, name: &str) -> PathBuf {
        let path = self.project_dir.path().join(name);
        fs::write(&path, "<Project Sdk=\"Microsoft.NET.Sdk.Razor\" />\n").unwrap();
        path
    }

    /// Shorthand: set a config value.
    pub fn set_config(&self, key: &str, value: &str) {
        self.cmd()
            .args(["config", "set", key, value])
            .assert()
            .success();
    }
}
