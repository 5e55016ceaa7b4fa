//! gRPC client implementation of `UsersClient`.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};

use crate::api::{UsersClient, UsersError};
use crate::models::{User, UserRequest};
use crate::proto;
use crate::proto::user_service_client::UserServiceClient;

/// Transport settings for [`UsersGrpcClient`].
#[derive(Debug, Clone)]
pub struct GrpcClientConfig {
    /// Timeout for establishing the initial connection.
    pub connect_timeout: Duration,

    /// Timeout for individual RPC calls (applied at transport level).
    pub rpc_timeout: Duration,
}

impl Default for GrpcClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            rpc_timeout: Duration::from_secs(30),
        }
    }
}

impl GrpcClientConfig {
    /// Set the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the RPC timeout.
    #[must_use]
    pub fn with_rpc_timeout(mut self, timeout: Duration) -> Self {
        self.rpc_timeout = timeout;
        self
    }
}

fn build_endpoint(uri: String, cfg: &GrpcClientConfig) -> Result<Endpoint, tonic::transport::Error> {
    let endpoint = Endpoint::from_shared(uri)?
        .connect_timeout(cfg.connect_timeout)
        .timeout(cfg.rpc_timeout)
        .tcp_keepalive(Some(Duration::from_secs(30)))
        .http2_keep_alive_interval(Duration::from_secs(30))
        .keep_alive_timeout(Duration::from_secs(10))
        .keep_alive_while_idle(true);

    Ok(endpoint)
}

fn require_user(user: Option<proto::User>) -> Result<User, UsersError> {
    user.map(Into::into)
        .ok_or_else(|| UsersError::Internal("response is missing the user".to_owned()))
}

/// gRPC client for `users.v1.UserService`.
#[derive(Clone)]
pub struct UsersGrpcClient {
    inner: UserServiceClient<Channel>,
}

impl UsersGrpcClient {
    /// Connect using the default transport configuration.
    ///
    /// # Errors
    /// Returns an error if the URI is invalid or the connection cannot be established.
    pub async fn connect(uri: impl Into<String>) -> Result<Self> {
        Self::with_config(uri, &GrpcClientConfig::default()).await
    }

    /// Connect with explicit transport settings.
    ///
    /// # Errors
    /// Returns an error if the URI is invalid or the connection cannot be established.
    pub async fn with_config(uri: impl Into<String>, cfg: &GrpcClientConfig) -> Result<Self> {
        let uri = uri.into();
        let channel = build_endpoint(uri.clone(), cfg)?.connect().await?;
        tracing::debug!(%uri, "users gRPC client connected");
        Ok(Self {
            inner: UserServiceClient::new(channel),
        })
    }
}

#[async_trait]
impl UsersClient for UsersGrpcClient {
    async fn create_user(&self, req: UserRequest) -> Result<User, UsersError> {
        let mut client = self.inner.clone();
        let resp = client
            .create_user(proto::CreateUserRequest {
                email: req.email,
                password: req.password,
            })
            .await?;
        require_user(resp.into_inner().user)
    }

    async fn get_user(&self, id: &str) -> Result<User, UsersError> {
        let mut client = self.inner.clone();
        let resp = client
            .get_user(proto::GetUserRequest { id: id.to_owned() })
            .await?;
        require_user(resp.into_inner().user)
    }

    async fn list_users(&self) -> Result<Vec<User>, UsersError> {
        let mut client = self.inner.clone();
        let resp = client.list_users(proto::ListUsersRequest {}).await?;
        Ok(resp.into_inner().users.into_iter().map(Into::into).collect())
    }

    async fn update_user(&self, id: &str, req: UserRequest) -> Result<User, UsersError> {
        let mut client = self.inner.clone();
        let resp = client
            .update_user(proto::UpdateUserRequest {
                id: id.to_owned(),
                email: req.email,
                password: req.password,
            })
            .await?;
        require_user(resp.into_inner().user)
    }

    async fn delete_user(&self, id: &str) -> Result<(), UsersError> {
        let mut client = self.inner.clone();
        let resp = client
            .delete_user(proto::DeleteUserRequest { id: id.to_owned() })
            .await?;
        if resp.into_inner().success {
            Ok(())
        } else {
            Err(UsersError::Internal("delete was not acknowledged".to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_uri() {
        let cfg = GrpcClientConfig::default();
        assert!(build_endpoint("not a uri".to_owned(), &cfg).is_err());
    }

    #[test]
    fn config_builders_override_timeouts() {
        let cfg = GrpcClientConfig::default()
            .with_connect_timeout(Duration::from_millis(250))
            .with_rpc_timeout(Duration::from_secs(2));
        assert_eq!(cfg.connect_timeout, Duration::from_millis(250));
        assert_eq!(cfg.rpc_timeout, Duration::from_secs(2));
    }

    #[test]
    fn missing_user_in_response_is_internal() {
        assert!(matches!(require_user(None), Err(UsersError::Internal(_))));
    }
}
