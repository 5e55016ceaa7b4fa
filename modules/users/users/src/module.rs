//! Users module definition
//!
//! Composes repository -> service -> gRPC handler at startup. Every
//! dependency is passed down explicitly; nothing is held in globals.

use std::sync::Arc;

use anyhow::Result;
use tokio_util::sync::CancellationToken;

use crate::api::grpc::{UsersServiceImpl, bind, serve_with_listener};
use crate::config::UsersConfig;
use crate::domain::repo::UsersRepository;
use crate::domain::service::Service;
use crate::infra::storage::{SeaOrmUsersRepository, db};

/// Users module.
pub struct UsersModule {
    config: UsersConfig,
    service: Arc<Service>,
}

impl UsersModule {
    /// Connect the database, run migrations and build the service graph.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub async fn init(config: UsersConfig) -> Result<Self> {
        tracing::info!("Initializing users module");

        let conn = db::connect(&config.database).await?;
        let repo = Arc::new(SeaOrmUsersRepository::new(conn));

        tracing::info!("users module initialized");
        Ok(Self::with_repository(config, repo))
    }

    /// Build the module on top of an arbitrary repository.
    #[must_use]
    pub fn with_repository(config: UsersConfig, repo: Arc<dyn UsersRepository>) -> Self {
        Self {
            config,
            service: Arc::new(Service::new(repo)),
        }
    }

    #[must_use]
    pub fn config(&self) -> &UsersConfig {
        &self.config
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    #[must_use]
    pub fn grpc_service(&self) -> UsersServiceImpl {
        UsersServiceImpl::new(self.service())
    }

    /// Bind the configured address and serve until `cancel` fires.
    ///
    /// # Errors
    /// Returns an error if binding or serving fails.
    pub async fn serve(&self, cancel: CancellationToken) -> Result<()> {
        let listener = bind(&self.config.server.listen_addr).await?;
        serve_with_listener(listener, self.grpc_service(), cancel).await
    }
}
