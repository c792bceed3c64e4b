use serde::{Deserialize, Serialize};

use super::component::ComponentEntry;

pub const MANIFEST_FILE: &str = "registry.json";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// The `registry.json` document a registry publishes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RegistryManifest {
    pub components: Vec<ComponentEntry>,
}

impl RegistryManifest {
    /// Parse manifest JSON. A leading UTF-8 byte-order mark is skipped.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes))
    }

    /// Components sorted by name ignoring case, for display.
    pub fn sorted(&self) -> Vec<&ComponentEntry> {
        let mut components: Vec<_> = self.components.iter().collect();
        components.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
        components
    }
}
