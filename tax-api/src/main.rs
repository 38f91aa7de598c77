use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};

use tax_api::config::Config;
use tax_api::{AppState, build_router, logging};
use tax_core::db::{RepositoryError, RepositoryRegistry};
use tax_core::{DeductionRepository, TaxCalculator};
use tax_db_sqlite::SqliteRepositoryFactory;

fn build_registry() -> RepositoryRegistry {
    let mut registry = RepositoryRegistry::new();
    registry.register(Box::new(SqliteRepositoryFactory));
    registry
}

/// Opens the repository, retrying connection and database failures.
/// An unknown backend fails immediately.
async fn connect(config: &Config) -> Result<Arc<dyn DeductionRepository>> {
    let registry = build_registry();
    let db_config = config.db_config();
    let attempts = config.connect_retries + 1;

    let mut attempt = 1;
    loop {
        match registry.create(&db_config).await {
            Ok(repo) => return Ok(Arc::from(repo)),
            Err(e @ RepositoryError::Configuration(_)) => {
                return Err(e).context("Invalid database configuration");
            }
            Err(e) if attempt < attempts => {
                warn!(attempt, attempts, error = %e, "database not ready, retrying");
                tokio::time::sleep(config.retry_delay()).await;
                attempt += 1;
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to open database after {} attempts", attempts)
                });
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_default_logging();

    let config = Config::parse();
    info!(
        backend = %config.backend,
        database = %config.database_url,
        "Starting tax-api on port {}",
        config.port
    );

    let repo = connect(&config).await?;
    let limits = repo
        .get_deduction_limits()
        .await
        .context("Failed to read deduction limits")?;
    info!(
        personal = %limits.personal_deduction,
        k_receipt = %limits.k_receipt_cap,
        "deduction limits loaded"
    );

    let state = AppState::new(repo, TaxCalculator::new(), config.admin_credentials());
    let app = build_router(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM. If a handler cannot be installed, that
/// signal source is ignored rather than stopping the server.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
