use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;

use crate::copier::ComponentCopier;
use crate::installer::{CommandRunner, PackageInstaller};
use crate::model::PackageReference;
use crate::registry::RegistrySource;
use crate::store::{ConfigStore, find_project_file};

pub async fn run(
    config_dir: Option<&Path>,
    components: Vec<String>,
    output: PathBuf,
    registry: Option<String>,
    project: Option<PathBuf>,
    cancel: &CancellationToken,
) -> Result<()> {
    let store = ConfigStore::open(config_dir).context("failed to load configuration")?;
    let config = store.config();

    let source = RegistrySource::resolve(registry.as_deref(), &config.default_registry);
    println!("Adding components from: {source}");
    println!();

    let provider = source.into_provider().context("failed to open registry")?;
    let result = ComponentCopier::new(provider.as_ref())
        .copy_components(components.as_slice(), &output, cancel)
        .await
        .context("failed to copy components")?;

    if !result.copied.is_empty() {
        println!("Added components:");
        for name in &result.copied {
            println!("  + {name}");
        }
        println!();
        let output = std::path::absolute(&output).unwrap_or(output);
        println!(
            "Files written to: {} ({} files)",
            output.display(),
            result.copied_files.len()
        );
    }

    if !result.not_found.is_empty() {
        println!();
        println!("Components not found:");
        for name in &result.not_found {
            println!("  ? {name}");
        }
    }

    if result.required_packages.is_empty() {
        return Ok(());
    }
    println!();

    let project_file = match project {
        Some(path) => Some(path),
        None => {
            let cwd = std::env::current_dir().context("failed to read current directory")?;
            find_project_file(&cwd, &config.project_pattern)?
        }
    };

    let Some(project_file) = project_file else {
        println!("Required packages (no project file found, install manually):");
        print_packages("-", &result.required_packages);
        return Ok(());
    };

    println!("Installing packages into {}...", project_file.display());
    let installer = PackageInstaller::new(CommandRunner::new(&config.package_manager));
    let outcome = installer
        .install_packages(&result.required_packages, &project_file, cancel)
        .await
        .context("failed to install packages")?;

    if !outcome.installed.is_empty() {
        println!("Installed packages:");
        print_packages("+", &outcome.installed);
    }
    if !outcome.failed.is_empty() {
        println!("Failed to install:");
        print_packages("!", &outcome.failed);
    }
    Ok(())
}

fn print_packages(marker: &str, packages: &[PackageReference]) {
    for package in packages {
        println!("  {marker} {package}");
    }
}
