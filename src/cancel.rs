use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::error::ComposableError;

/// Run `fut` unless `cancel` fires first, in which case `fut` is dropped.
pub async fn cancellable<T, F>(cancel: &CancellationToken, fut: F) -> Result<T, ComposableError>
where
    F: Future<Output = Result<T, ComposableError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ComposableError::Cancelled),
        result = fut => result,
    }
}
