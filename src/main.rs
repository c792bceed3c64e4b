use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

mod cancel;
mod cli;
mod copier;
mod error;
mod installer;
mod model;
mod registry;
mod store;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(if cli.verbose {
                "composable=debug"
            } else {
                "composable=info"
            })
        }))
        .init();

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted; cancelling");
            on_interrupt.cancel();
        }
    });

    let config_dir = cli.config_dir.as_deref();
    match cli.command {
        cli::Command::Add {
            components,
            output,
            registry,
            project,
        } => cli::add::run(config_dir, components, output, registry, project, &cancel).await,
        cli::Command::List { registry } => cli::list::run(config_dir, registry, &cancel).await,
        cli::Command::Config(cmd) => cli::config::run(config_dir, cmd),
    }
}
