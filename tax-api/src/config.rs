//! Command-line and environment configuration.

use std::time::Duration;

use clap::Parser;
use tax_core::db::DbConfig;

use crate::api::AdminCredentials;

/// Progressive income-tax calculator service.
#[derive(Parser, Debug, Clone)]
#[command(name = "tax-api")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080, env = "PORT")]
    pub port: u16,

    /// Database backend to use
    #[arg(long, default_value = "sqlite", env = "DB_BACKEND")]
    pub backend: String,

    /// Database connection string.
    /// For SQLite this is a file path (e.g. `taxes.db`) or `:memory:`.
    #[arg(long, default_value = "taxes.db", env = "DATABASE_URL")]
    pub database_url: String,

    /// Username accepted on the admin routes
    #[arg(long, default_value = "adminTax", env = "ADMIN_USERNAME")]
    pub admin_username: String,

    /// Password accepted on the admin routes
    #[arg(long, default_value = "admin!", env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: String,

    /// How many times to retry opening the database before giving up
    #[arg(long, default_value_t = 5)]
    pub connect_retries: u32,

    /// Delay between database connection attempts, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub retry_delay_ms: u64,
}

impl Config {
    pub fn db_config(&self) -> DbConfig {
        DbConfig {
            backend: self.backend.clone(),
            connection_string: self.database_url.clone(),
        }
    }

    pub fn admin_credentials(&self) -> AdminCredentials {
        AdminCredentials::new(&self.admin_username, &self.admin_password)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}
