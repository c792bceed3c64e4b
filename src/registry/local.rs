use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::RegistryProvider;
use crate::cancel::cancellable;
use crate::error::ComposableError;
use crate::model::{MANIFEST_FILE, RegistryManifest};

const COMPONENTS_DIR: &str = "components";

/// A registry laid out on disk as `registry.json` plus `components/<name>/<file>`.
pub struct LocalRegistry {
    root: PathBuf,
}

impl LocalRegistry {
    pub fn new(root: &Path) -> Self {
        let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    pub fn file_path(&self, component: &str, file: &str) -> PathBuf {
        self.root.join(COMPONENTS_DIR).join(component).join(file)
    }
}

#[async_trait]
impl RegistryProvider for LocalRegistry {
    async fn get_manifest(
        &self,
        cancel: &CancellationToken,
    ) -> Result<RegistryManifest, ComposableError> {
        let path = self.manifest_path();
        let bytes = cancellable(cancel, read(&path, "registry manifest")).await?;
        RegistryManifest::from_slice(&bytes).map_err(|source| ComposableError::Parse {
            location: path.display().to_string(),
            source,
        })
    }

    async fn get_file(
        &self,
        component: &str,
        file: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, ComposableError> {
        let path = self.file_path(component, file);
        tracing::debug!("reading {}", path.display());
        cancellable(cancel, read(&path, "component file")).await
    }

    fn location(&self) -> String {
        self.root().display().to_string()
    }
}

async fn read(path: &Path, what: &'static str) -> Result<Vec<u8>, ComposableError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ComposableError::NotFound {
            what,
            location: path.display().to_string(),
        }),
        Err(source) => Err(ComposableError::FileRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}
