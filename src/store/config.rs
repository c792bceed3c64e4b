use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ComposableError;
use crate::model::GlobalConfig;

const CONFIG_FILE: &str = "config.toml";

/// `config.toml` in the user's config directory.
pub struct ConfigStore {
    root: PathBuf,
    config: GlobalConfig,
}

impl ConfigStore {
    /// Load from `config_dir`, or the platform config directory when `None`.
    /// A missing file yields the defaults; nothing is written until `save`.
    pub fn open(config_dir: Option<&Path>) -> Result<Self, ComposableError> {
        let root = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_config_dir()?,
        };
        let config = load_config(&root)?;
        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut GlobalConfig {
        &mut self.config
    }

    pub fn save(&self) -> Result<(), ComposableError> {
        fs::create_dir_all(&self.root).map_err(|source| ComposableError::DirCreate {
            path: self.root.clone(),
            source,
        })?;
        let path = self.root.join(CONFIG_FILE);
        let content = toml::to_string_pretty(&self.config)?;
        fs::write(&path, content).map_err(|source| ComposableError::FileWrite { path, source })?;
        Ok(())
    }
}

fn default_config_dir() -> Result<PathBuf, ComposableError> {
    dirs::config_dir()
        .map(|d| d.join("composable"))
        .ok_or(ComposableError::ConfigDirNotFound)
}

fn load_config(root: &Path) -> Result<GlobalConfig, ComposableError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(GlobalConfig::default());
    }
    let content = fs::read_to_string(&path).map_err(|source| ComposableError::FileRead {
        path: path.clone(),
        source,
    })?;
    let config: GlobalConfig = toml::from_str(&content)?;
    Ok(config)
}
