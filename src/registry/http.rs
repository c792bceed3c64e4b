use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::RegistryProvider;
use crate::cancel::cancellable;
use crate::error::ComposableError;
use crate::model::{MANIFEST_FILE, RegistryManifest};

/// Directory under the base URL that holds component files.
const FILES_PATH: &str = "Registry";

/// A registry served over HTTP(S) from a base URL.
pub struct HttpRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRegistry {
    pub fn new(base_url: &str) -> Result<Self, ComposableError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("composable/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ComposableError::Transport {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn manifest_url(&self) -> String {
        format!("{}/{MANIFEST_FILE}", self.base_url)
    }

    pub fn file_url(&self, component: &str, file: &str) -> String {
        format!("{}/{FILES_PATH}/{component}/{file}", self.base_url)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ComposableError> {
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ComposableError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ComposableError::Transport {
                url: url.to_string(),
                reason: format!("HTTP {status}"),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ComposableError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl RegistryProvider for HttpRegistry {
    async fn get_manifest(
        &self,
        cancel: &CancellationToken,
    ) -> Result<RegistryManifest, ComposableError> {
        let url = self.manifest_url();
        let bytes = cancellable(cancel, self.fetch(&url)).await?;
        RegistryManifest::from_slice(&bytes)
            .map_err(|source| ComposableError::Parse { location: url, source })
    }

    async fn get_file(
        &self,
        component: &str,
        file: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, ComposableError> {
        let url = self.file_url(component, file);
        cancellable(cancel, self.fetch(&url)).await
    }

    fn location(&self) -> String {
        self.base_url().to_string()
    }
}
