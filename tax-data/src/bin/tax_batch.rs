use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tax_core::db::{DbConfig, RepositoryRegistry};
use tax_core::{DeductionLimits, TaxCalculator};
use tax_data::{compute_batch, csv_loader};
use tax_db_sqlite::SqliteRepositoryFactory;

/// Compute tax for every row of a CSV file and print the results as JSON.
///
/// The CSV has a header row followed by `totalIncome,wht,donation` rows.
#[derive(Parser, Debug)]
#[command(name = "tax-batch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file
    #[arg(short, long)]
    file: PathBuf,

    /// Database backend holding the deduction limits
    #[arg(long, default_value = "sqlite")]
    backend: String,

    /// Database connection string (e.g. `taxes.db` or `:memory:`)
    #[arg(long, default_value = "taxes.db")]
    db: String,

    /// Skip the database and use the default deduction limits
    #[arg(long, default_value_t = false)]
    offline: bool,
}

/// Logs go to stderr so stdout stays a clean JSON document.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

async fn load_limits(args: &Args) -> Result<DeductionLimits> {
    if args.offline {
        debug!("using default deduction limits");
        return Ok(DeductionLimits::default());
    }

    let mut registry = RepositoryRegistry::new();
    registry.register(Box::new(SqliteRepositoryFactory));

    let db_config = DbConfig {
        backend: args.backend.clone(),
        connection_string: args.db.clone(),
    };
    debug!("connecting to {} backend", db_config.backend);

    let repo = registry
        .create(&db_config)
        .await
        .with_context(|| format!("Failed to open {} database: {}", args.backend, args.db))?;
    repo.get_deduction_limits()
        .await
        .context("Failed to read deduction limits")
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let limits = load_limits(&args).await?;
    info!(
        personal = %limits.personal_deduction,
        k_receipt = %limits.k_receipt_cap,
        "loaded deduction limits"
    );

    let records = csv_loader::load_from_file(&args.file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;
    info!("Parsed {} records from {}", records.len(), args.file.display());

    let report = compute_batch(&records, &TaxCalculator::new(), &limits)
        .with_context(|| format!("Failed to compute taxes for {}", args.file.display()))?;

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize results")?;
    println!("{json}");

    Ok(())
}
