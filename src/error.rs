use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComposableError {
    #[error("{what} not found: {location}")]
    NotFound { what: &'static str, location: String },

    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("failed to parse {location}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to run `{program}`")]
    Process {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory: {path}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("refusing to write '{path}' for component '{component}': path escapes the output directory")]
    UnsafePath { component: String, path: String },

    #[error("operation cancelled")]
    Cancelled,

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("failed to determine config directory; set COMPOSABLE_CONFIG_DIR or --config-dir")]
    ConfigDirNotFound,

    #[error("invalid project file pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}
