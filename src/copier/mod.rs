use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use tokio_util::sync::CancellationToken;

use crate::cancel::cancellable;
use crate::error::ComposableError;
use crate::model::{ComponentEntry, PackageReference};
use crate::registry::RegistryProvider;

/// Outcome of one `copy_components` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyResult {
    /// Manifest names of the components that were written.
    pub copied: Vec<String>,
    /// Absolute paths of every file written.
    pub copied_files: Vec<PathBuf>,
    /// Requested names with no manifest entry, as the user spelled them.
    pub not_found: Vec<String>,
    /// Packages of every copied component in copy order, duplicates kept.
    pub required_packages: Vec<PackageReference>,
}

pub struct ComponentCopier<'a> {
    registry: &'a dyn RegistryProvider,
}

impl<'a> ComponentCopier<'a> {
    pub fn new(registry: &'a dyn RegistryProvider) -> Self {
        Self { registry }
    }

    /// Write every requested component to `<output_dir>/<component>/<file>`.
    ///
    /// The manifest is fetched once. Names are matched case-insensitively;
    /// unknown names end up in [`CopyResult::not_found`] and do not fail the
    /// run. Any fetch or write error aborts the remaining work, leaving files
    /// already written in place. Existing files are overwritten.
    pub async fn copy_components<S: AsRef<str>>(
        &self,
        names: &[S],
        output_dir: &Path,
        cancel: &CancellationToken,
    ) -> Result<CopyResult, ComposableError> {
        let manifest = self.registry.get_manifest(cancel).await?;
        tracing::debug!(
            "manifest from {} lists {} components",
            self.registry.location(),
            manifest.components.len()
        );

        // Later entries overwrite earlier ones with the same folded name.
        let lookup: HashMap<String, &ComponentEntry> = manifest
            .components
            .iter()
            .map(|c| (c.name.to_lowercase(), c))
            .collect();

        let output_dir =
            std::path::absolute(output_dir).unwrap_or_else(|_| output_dir.to_path_buf());
        let mut result = CopyResult::default();

        for name in names {
            let name = name.as_ref();
            match lookup.get(&name.to_lowercase()) {
                Some(component) => {
                    self.copy_component(component, &output_dir, &mut result, cancel)
                        .await?
                }
                None => {
                    tracing::debug!("component '{name}' not in manifest");
                    result.not_found.push(name.to_string());
                }
            }
        }

        Ok(result)
    }

    async fn copy_component(
        &self,
        component: &ComponentEntry,
        output_dir: &Path,
        result: &mut CopyResult,
        cancel: &CancellationToken,
    ) -> Result<(), ComposableError> {
        validate_relative(&component.name, &component.name)?;
        for file in &component.files {
            validate_relative(&component.name, file)?;
        }

        let component_dir = output_dir.join(&component.name);
        create_dir(&component_dir).await?;

        for file in &component.files {
            let bytes = self.registry.get_file(&component.name, file, cancel).await?;

            let target = component_dir.join(file);
            if let Some(parent) = target.parent() {
                create_dir(parent).await?;
            }
            cancellable(cancel, write(&target, &bytes)).await?;
            tracing::debug!("wrote {} ({} bytes)", target.display(), bytes.len());

            result.copied_files.push(target);
        }

        tracing::info!(
            "copied {} ({} files)",
            component.name,
            component.files.len()
        );
        result.copied.push(component.name.clone());
        result
            .required_packages
            .extend(component.packages.iter().cloned());
        Ok(())
    }
}

/// Reject names that would land outside the component directory.
fn validate_relative(component: &str, path: &str) -> Result<(), ComposableError> {
    let safe = !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if safe {
        Ok(())
    } else {
        Err(ComposableError::UnsafePath {
            component: component.to_string(),
            path: path.to_string(),
        })
    }
}

async fn create_dir(path: &Path) -> Result<(), ComposableError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| ComposableError::DirCreate {
            path: path.to_path_buf(),
            source,
        })
}

async fn write(path: &Path, bytes: &[u8]) -> Result<(), ComposableError> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| ComposableError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
}
