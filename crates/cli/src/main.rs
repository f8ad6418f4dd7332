//! shopsync - export ERP reference data to a storefront webservice
//!
//! Wires configuration, the local database, the storefront client and the
//! report writer together and runs one country export pass.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use shopsync_core::{CountryExportService, StorefrontGateway};
use shopsync_infra::config::loader;
use shopsync_infra::{
    DbManager, FileReportWriter, PrestashopClient, SqliteCountryRepository,
    StorefrontClientConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "shopsync",
    version,
    about = "Export ERP reference data to a storefront webservice"
)]
struct Cli {
    /// Only export records created or updated after this RFC 3339 instant
    #[arg(long, value_name = "TIMESTAMP")]
    since: Option<DateTime<Utc>>,

    /// Path to a config file (environment variables win when both are set)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Probe the storefront webservice and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(".env not found, relying on process environment"),
    }

    let config = match cli.config {
        Some(path) => loader::load_from_file(Some(path)),
        None => loader::load(),
    }
    .context("failed to load configuration")?;

    let gateway = Arc::new(
        PrestashopClient::with_config(StorefrontClientConfig {
            base_url: config.storefront.base_url.clone(),
            api_key: config.storefront.api_key.clone(),
            timeout: Duration::from_secs(config.storefront.timeout_seconds),
        })
        .context("failed to build storefront client")?,
    );

    if cli.check {
        let healthy = gateway.health_check().await.context("health check failed")?;
        println!("storefront reachable: {healthy}");
        return Ok(());
    }

    let db = Arc::new(
        DbManager::new(&config.database.path, config.database.pool_size)
            .context("failed to open database")?,
    );
    db.run_migrations().context("failed to run migrations")?;

    let repository = Arc::new(SqliteCountryRepository::new(db));
    let report = Arc::new(
        FileReportWriter::open(&config.report.path).context("failed to open report file")?,
    );

    let service = CountryExportService::new(repository, gateway, report);
    let summary = service.export(cli.since).await.context("country export aborted")?;

    println!("Succeed : {} Anomaly : {}", summary.succeeded, summary.failed);
    Ok(())
}
