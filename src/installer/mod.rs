mod runner;

use std::path::Path;

use tokio_util::sync::CancellationToken;

use crate::error::ComposableError;
use crate::model::PackageReference;

pub use runner::{CommandRunner, PackageRunner};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageInstallResult {
    pub installed: Vec<PackageReference>,
    pub failed: Vec<PackageReference>,
}

pub struct PackageInstaller<R> {
    runner: R,
}

impl<R: PackageRunner> PackageInstaller<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Add each package to `project_file`, one at a time, in order.
    ///
    /// A package that fails to install is recorded and the rest still run.
    /// Only cancellation stops the loop early.
    pub async fn install_packages(
        &self,
        packages: &[PackageReference],
        project_file: &Path,
        cancel: &CancellationToken,
    ) -> Result<PackageInstallResult, ComposableError> {
        let mut result = PackageInstallResult::default();

        for package in packages {
            let installed = match self.runner.add_package(package, project_file, cancel).await {
                Ok(status) => status,
                Err(ComposableError::Cancelled) => return Err(ComposableError::Cancelled),
                Err(e) => {
                    tracing::warn!("could not install {package}: {e}");
                    false
                }
            };

            if installed {
                tracing::info!("installed {package}");
                result.installed.push(package.clone());
            } else {
                result.failed.push(package.clone());
            }
        }

        Ok(result)
    }
}
