pub mod component;
pub mod config;
pub mod manifest;

pub use component::{ComponentEntry, PackageReference};
pub use config::GlobalConfig;
pub use manifest::{MANIFEST_FILE, RegistryManifest};
