use std::path::Path;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;

use crate::registry::RegistrySource;
use crate::store::ConfigStore;

pub async fn run(
    config_dir: Option<&Path>,
    registry: Option<String>,
    cancel: &CancellationToken,
) -> Result<()> {
    let store = ConfigStore::open(config_dir).context("failed to load configuration")?;

    let source = RegistrySource::resolve(registry.as_deref(), &store.config().default_registry);
    println!("Registry: {source}");
    println!();

    let provider = source.into_provider().context("failed to open registry")?;
    let manifest = provider
        .get_manifest(cancel)
        .await
        .context("failed to fetch registry manifest")?;

    println!("Available components:");
    println!();

    for component in manifest.sorted() {
        println!("  {}", component.name);
        if !component.files.is_empty() {
            println!("    Files: {}", component.files.join(", "));
        }
        if !component.dependencies.is_empty() {
            println!("    Dependencies: {}", component.dependencies.join(", "));
        }
        if !component.packages.is_empty() {
            let packages: Vec<_> = component.packages.iter().map(|p| p.to_string()).collect();
            println!("    Packages: {}", packages.join(", "));
        }
    }

    println!();
    println!("Total: {} components", manifest.components.len());
    Ok(())
}
