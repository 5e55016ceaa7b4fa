//! Process signals that stop the server.

use std::future::Future;

use anyhow::Result;
use tokio::signal;

/// Install the shutdown handlers and return a future that resolves on the
/// first Ctrl+C or SIGTERM.
///
/// Handlers are registered before this returns, so a failure surfaces as a
/// startup error instead of an immediate shutdown.
///
/// # Errors
/// Returns an error if the SIGTERM handler cannot be installed.
#[cfg(unix)]
pub fn shutdown_signal() -> Result<impl Future<Output = ()> + Send + 'static> {
    use anyhow::Context as _;
    use signal::unix::{SignalKind, signal as unix_signal};

    let mut sigterm =
        unix_signal(SignalKind::terminate()).context("failed to install SIGTERM handler")?;

    Ok(async move {
        tokio::select! {
            res = signal::ctrl_c() => match res {
                Ok(()) => tracing::info!("Ctrl+C received, stopping users server"),
                Err(e) => {
                    tracing::warn!(error = %e, "Ctrl+C listener unavailable, waiting for SIGTERM");
                    sigterm.recv().await;
                    tracing::info!("SIGTERM received, stopping users server");
                }
            },
            _ = sigterm.recv() => tracing::info!("SIGTERM received, stopping users server"),
        }
    })
}

/// # Errors
/// Never fails on this platform; the signature matches the unix variant.
#[cfg(not(unix))]
pub fn shutdown_signal() -> Result<impl Future<Output = ()> + Send + 'static> {
    Ok(async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Ctrl+C received, stopping users server"),
            Err(e) => {
                tracing::warn!(error = %e, "Ctrl+C listener unavailable, serving until killed");
                std::future::pending::<()>().await;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn handlers_install_and_stay_pending_without_a_signal() {
        let shutdown = shutdown_signal().unwrap();
        let res = tokio::time::timeout(Duration::from_millis(50), shutdown).await;
        assert!(res.is_err(), "shutdown resolved without any signal");
    }
}
