use std::path::PathBuf;

use super::{HttpRegistry, LocalRegistry, RegistryProvider};
use crate::error::ComposableError;

/// Where a registry lives, decided from the user's `--registry` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    Local(PathBuf),
    Http(String),
}

impl RegistrySource {
    /// Absolute `http`/`https` URLs are remote; anything else is a local path.
    /// Without a source, `default_registry` is used.
    pub fn resolve(source: Option<&str>, default_registry: &str) -> Self {
        let source = source.unwrap_or(default_registry);
        match reqwest::Url::parse(source) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Http(source.to_string()),
            _ => Self::Local(PathBuf::from(source)),
        }
    }

    pub fn into_provider(self) -> Result<Box<dyn RegistryProvider>, ComposableError> {
        let provider: Box<dyn RegistryProvider> = match self {
            Self::Local(path) => Box::new(LocalRegistry::new(&path)),
            Self::Http(url) => Box::new(HttpRegistry::new(&url)?),
        };
        Ok(provider)
    }
}

impl std::fmt::Display for RegistrySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Http(url) => write!(f, "{url}"),
        }
    }
}
