pub mod http;
pub mod local;
pub mod source;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::ComposableError;
use crate::model::RegistryManifest;

pub use http::HttpRegistry;
pub use local::LocalRegistry;
pub use source::RegistrySource;

/// Read-only access to a registry snapshot.
#[async_trait]
pub trait RegistryProvider: Send + Sync {
    /// Fetch and parse the registry manifest.
    async fn get_manifest(
        &self,
        cancel: &CancellationToken,
    ) -> Result<RegistryManifest, ComposableError>;

    /// Fetch the raw bytes of one file belonging to one component.
    async fn get_file(
        &self,
        component: &str,
        file: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>, ComposableError>;

    /// Where this registry reads from, for display.
    fn location(&self) -> String;
}
