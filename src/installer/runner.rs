use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use crate::cancel::cancellable;
use crate::error::ComposableError;
use crate::model::PackageReference;

/// Adds one package to a project.
///
/// `Ok(true)` means the package manager exited with status zero, `Ok(false)`
/// any other status. `Err` is reserved for a process that could not be run
/// at all, or for cancellation.
#[async_trait]
pub trait PackageRunner: Send + Sync {
    async fn add_package(
        &self,
        package: &PackageReference,
        project_file: &Path,
        cancel: &CancellationToken,
    ) -> Result<bool, ComposableError>;
}

/// Runs `<program> add <project> package <name> [--version <version>]`.
pub struct CommandRunner {
    program: String,
}

impl CommandRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn args(package: &PackageReference, project_file: &Path) -> Vec<String> {
        let mut args = vec![
            "add".to_string(),
            project_file.display().to_string(),
            "package".to_string(),
            package.name.clone(),
        ];
        if let Some(version) = package.version() {
            args.push("--version".to_string());
            args.push(version.to_string());
        }
        args
    }
}

#[async_trait]
impl PackageRunner for CommandRunner {
    async fn add_package(
        &self,
        package: &PackageReference,
        project_file: &Path,
        cancel: &CancellationToken,
    ) -> Result<bool, ComposableError> {
        let args = Self::args(package, project_file);
        tracing::debug!("running {} {}", self.program, args.join(" "));

        let mut cmd = Command::new(&self.program);
        cmd.args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = cancellable(cancel, async {
            cmd.output().await.map_err(|source| ComposableError::Process {
                program: self.program.clone(),
                source,
            })
        })
        .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            );
        }
        Ok(output.status.success())
    }
}
