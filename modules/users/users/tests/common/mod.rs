#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for users integration tests

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use users::config::{DatabaseConfig, UsersConfig};
use users::infra::storage::{SeaOrmUsersRepository, db};
use users::UsersModule;

pub fn memory_db_config() -> DatabaseConfig {
    DatabaseConfig {
        dsn: "sqlite::memory:".to_owned(),
        ..DatabaseConfig::default()
    }
}

/// Fresh in-memory database with the schema applied.
pub async fn memory_db() -> DatabaseConnection {
    db::connect(&memory_db_config()).await.unwrap()
}

pub async fn memory_repo() -> Arc<SeaOrmUsersRepository> {
    Arc::new(SeaOrmUsersRepository::new(memory_db().await))
}

/// A users server running on an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub cancel: CancellationToken,
    pub handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    pub fn uri(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(self) {
        self.cancel.cancel();
        tokio::time::timeout(Duration::from_secs(10), self.handle)
            .await
            .expect("server did not stop in time")
            .unwrap()
            .unwrap();
    }
}

pub async fn start_server() -> TestServer {
    let mut config = UsersConfig::default();
    config.database = memory_db_config();
    config.server.listen_addr = "127.0.0.1:0".to_owned();

    let module = UsersModule::init(config).await.unwrap();
    let listener = users::api::grpc::bind(&module.config().server.listen_addr)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let cancel = CancellationToken::new();
    let handle = tokio::spawn(users::api::grpc::serve_with_listener(
        listener,
        module.grpc_service(),
        cancel.clone(),
    ));

    TestServer {
        addr,
        cancel,
        handle,
    }
}
