use serde::{Deserialize, Serialize};

pub const DEFAULT_REGISTRY_URL: &str = "https://raw.githubusercontent.com/LumexUI/composable/main";
pub const DEFAULT_PACKAGE_MANAGER: &str = "dotnet";
pub const DEFAULT_PROJECT_PATTERN: &str = "*.csproj";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Registry used when `--registry` is not given.
    #[serde(default = "default_registry")]
    pub default_registry: String,
    /// Executable invoked as `<tool> add <project> package <name>`.
    #[serde(default = "default_package_manager")]
    pub package_manager: String,
    /// Glob matched against file names in the working directory.
    #[serde(default = "default_project_pattern")]
    pub project_pattern: String,
}

fn default_registry() -> String {
    DEFAULT_REGISTRY_URL.to_string()
}

fn default_package_manager() -> String {
    DEFAULT_PACKAGE_MANAGER.to_string()
}

fn default_project_pattern() -> String {
    DEFAULT_PROJECT_PATTERN.to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_registry: default_registry(),
            package_manager: default_package_manager(),
            project_pattern: default_project_pattern(),
        }
    }
}
