pub mod add;
pub mod config;
pub mod list;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "composable",
    about = "Copy UI components from a registry into your project",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Override the config directory (default: ~/.config/composable)
    #[arg(long, env = "COMPOSABLE_CONFIG_DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add components to your project
    Add {
        /// Names of the components to copy (case-insensitive)
        #[arg(required = true)]
        components: Vec<String>,

        /// Target directory for components
        #[arg(short, long)]
        output: PathBuf,

        /// Override registry source (local path or URL)
        #[arg(short, long, env = "COMPOSABLE_REGISTRY")]
        registry: Option<String>,

        /// Project file to install packages into (default: the single match in the current directory)
        #[arg(long)]
        project: Option<PathBuf>,
    },

    /// List available components
    List {
        /// Override registry source (local path or URL)
        #[arg(short, long, env = "COMPOSABLE_REGISTRY")]
        registry: Option<String>,
    },

    /// Manage global configuration
    #[command(subcommand)]
    Config(ConfigSubcommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (default_registry, package_manager, project_pattern)
        key: String,
        /// Configuration value
        value: String,
    },

    /// Get a specific configuration value
    Get {
        /// Configuration key
        key: String,
    },
}
