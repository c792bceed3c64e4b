pub mod config;
pub mod project;

pub use config::ConfigStore;
pub use project::find_project_file;
