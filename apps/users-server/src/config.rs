//! Layered application configuration.
//!
//! Precedence, lowest first: built-in defaults, YAML file, `APP__*`
//! environment variables, command-line overrides.

use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use users::{DatabaseConfig, GrpcServerConfig, UsersConfig};

use crate::logging::LoggingConfig;

pub const ENV_PREFIX: &str = "APP__";
pub const MOCK_DSN: &str = "sqlite::memory:";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: GrpcServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Values from the command line that win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub listen: Option<String>,
    pub dsn: Option<String>,
    pub mock: bool,
}

impl AppConfig {
    /// Load defaults, then the YAML file (if any), then the environment.
    ///
    /// # Errors
    /// Returns an error if the file is missing or any layer fails to deserialize.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("failed to load configuration")
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(listen) = &cli.listen {
            self.server.listen_addr.clone_from(listen);
        }
        if let Some(dsn) = &cli.dsn {
            self.database.dsn.clone_from(dsn);
        }
        if cli.mock {
            self.database.dsn = MOCK_DSN.to_owned();
        }
    }

    #[must_use]
    pub fn users_config(&self) -> UsersConfig {
        UsersConfig {
            server: self.server.clone(),
            database: self.database.clone(),
        }
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}
