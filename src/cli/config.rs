use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::ConfigSubcommand;
use crate::store::ConfigStore;
use crate::store::project::validate_pattern;

const KEYS: &str = "default_registry, package_manager, project_pattern";

pub fn run(config_dir: Option<&Path>, cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Show => run_show(config_dir),
        ConfigSubcommand::Set { key, value } => run_set(config_dir, key, value),
        ConfigSubcommand::Get { key } => run_get(config_dir, key),
    }
}

fn run_show(config_dir: Option<&Path>) -> Result<()> {
    let store = ConfigStore::open(config_dir).context("failed to load configuration")?;

    let config = store.config();
    println!("Config directory: {}", store.root().display());
    println!("Default registry: {}", config.default_registry);
    println!("Package manager:  {}", config.package_manager);
    println!("Project pattern:  {}", config.project_pattern);
    Ok(())
}

fn run_set(config_dir: Option<&Path>, key: String, value: String) -> Result<()> {
    let mut store = ConfigStore::open(config_dir).context("failed to load configuration")?;

    if value.trim().is_empty() {
        anyhow::bail!("value for {key} cannot be empty");
    }

    let config = store.config_mut();
    match key.as_str() {
        "default_registry" => config.default_registry = value.clone(),
        "package_manager" => config.package_manager = value.clone(),
        "project_pattern" => {
            validate_pattern(&value)?;
            config.project_pattern = value.clone();
        }
        _ => anyhow::bail!("unknown config key: {key}\nValid keys: {KEYS}"),
    }

    store.save().context("failed to save config")?;
    println!("Set {key} = {value}");
    Ok(())
}

fn run_get(config_dir: Option<&Path>, key: String) -> Result<()> {
    let store = ConfigStore::open(config_dir).context("failed to load configuration")?;

    let config = store.config();
    match key.as_str() {
        "default_registry" => println!("{}", config.default_registry),
        "package_manager" => println!("{}", config.package_manager),
        "project_pattern" => println!("{}", config.project_pattern),
        _ => anyhow::bail!("unknown config key: {key}\nValid keys: {KEYS}"),
    }
    Ok(())
}
