//! Deadline for calls into external collaborators.

use std::future::Future;
use std::time::Duration;

/// Await `call`, converting an elapsed deadline into the caller's error type.
pub(crate) async fn with_timeout<F, T, E>(
    limit: Duration,
    call: F,
    on_timeout: impl FnOnce() -> E,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(on_timeout()),
    }
}
