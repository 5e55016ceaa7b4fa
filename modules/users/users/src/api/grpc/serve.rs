//! Hosting of the `tonic::Server` for the users service.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::transport::Server;
use users_sdk::{SERVICE_NAME, UserServiceServer};

use super::server::UsersServiceImpl;

/// Parse `listen_addr` and bind a TCP listener.
///
/// # Errors
/// Returns an error if the address is malformed or the bind fails.
pub async fn bind(listen_addr: &str) -> anyhow::Result<TcpListener> {
    let addr = listen_addr
        .parse::<SocketAddr>()
        .with_context(|| format!("invalid listen_addr '{listen_addr}'"))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind gRPC listener at '{addr}'"))?;
    Ok(listener)
}

/// Serve gRPC on an already-bound listener until `cancel` fires.
///
/// In-flight calls are drained before this returns.
///
/// # Errors
/// Returns an error if the listener is unusable or the server fails.
pub async fn serve_with_listener(
    listener: TcpListener,
    svc: UsersServiceImpl,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let bound_addr = listener.local_addr()?;
    tracing::info!(%bound_addr, service = SERVICE_NAME, "gRPC server listening");

    let incoming = TcpListenerStream::new(listener);
    Server::builder()
        .add_service(UserServiceServer::new(svc))
        .serve_with_incoming_shutdown(incoming, async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("gRPC server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_rejects_malformed_address() {
        let err = bind("not-an-address").await.unwrap_err();
        assert!(err.to_string().contains("invalid listen_addr"));
    }

    #[tokio::test]
    async fn bind_supports_ephemeral_port() {
        let listener = bind("127.0.0.1:0").await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }
}
