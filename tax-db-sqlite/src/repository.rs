use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tax_core::{DeductionRepository, RepositoryError};

use crate::decimal::{decimal_to_f64, get_decimal};

const PERSONAL_DEFAULT: &str = "personal_default";
const K_RECEIPT_MAX: &str = "kreceipt_max";

pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Connects to `database_url` (sqlx form, e.g. `sqlite:taxes.db?mode=rwc`).
    ///
    /// In-memory databases are pinned to a single long-lived connection;
    /// each new SQLite connection would otherwise see an empty database.
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = options
            .connect(database_url)
            .await
            .with_context(|| format!("Failed to connect to database: {}", database_url))?;
        Ok(Self { pool })
    }

    pub async fn new_with_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    /// Load and execute all SQL seed files from the specified directory.
    /// Files are executed in alphabetical order by filename.
    pub async fn run_seeds(
        &self,
        seeds_dir: &Path,
    ) -> Result<()> {
        let mut entries: Vec<_> = std::fs::read_dir(seeds_dir)
            .with_context(|| format!("Failed to read seeds directory '{}'", seeds_dir.display()))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "sql"))
            .collect();

        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            let sql = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read seed file '{}'", path.display()))?;

            sqlx::raw_sql(&sql)
                .execute(&self.pool)
                .await
                .with_context(|| format!("Failed to execute seed file '{}'", path.display()))?;
            tracing::debug!(file = %path.display(), "applied seed file");
        }

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn get_amount(
        &self,
        allowance_type: &str,
    ) -> Result<Decimal, RepositoryError> {
        let row = sqlx::query("SELECT amount FROM allowance_setting WHERE allowance_type = ?")
            .bind(allowance_type)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?
            .ok_or(RepositoryError::NotFound)?;

        get_decimal(&row, "amount")
    }

    /// Writes the amount, then reads it back.
    async fn set_amount(
        &self,
        allowance_type: &str,
        amount: Decimal,
    ) -> Result<Decimal, RepositoryError> {
        let result = sqlx::query(
            "UPDATE allowance_setting SET amount = ?, updated_at = ? WHERE allowance_type = ?",
        )
        .bind(decimal_to_f64(amount)?)
        .bind(Utc::now())
        .bind(allowance_type)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tracing::info!(allowance_type, %amount, "deduction limit updated");
        self.get_amount(allowance_type).await
    }
}

#[async_trait]
impl DeductionRepository for SqliteRepository {
    async fn get_personal_deduction(&self) -> Result<Decimal, RepositoryError> {
        self.get_amount(PERSONAL_DEFAULT).await
    }

    async fn update_personal_deduction(
        &self,
        amount: Decimal,
    ) -> Result<Decimal, RepositoryError> {
        self.set_amount(PERSONAL_DEFAULT, amount).await
    }

    async fn get_k_receipt_cap(&self) -> Result<Decimal, RepositoryError> {
        self.get_amount(K_RECEIPT_MAX).await
    }

    async fn update_k_receipt_cap(
        &self,
        amount: Decimal,
    ) -> Result<Decimal, RepositoryError> {
        self.set_amount(K_RECEIPT_MAX, amount).await
    }
}
