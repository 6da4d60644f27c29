// Main entry point - Dependency injection and export run
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;

use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::export_service::ExportService;
use crate::infrastructure::config::load_export_config;
use crate::infrastructure::dashboard_store::DashboardStore;
use crate::infrastructure::grafana_client::GrafanaClient;
use crate::presentation::cli::CliArgs;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    match run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: CliArgs) -> anyhow::Result<bool> {
    // Load configuration
    let config = load_export_config(args.overrides())?;

    let client = Arc::new(GrafanaClient::new(&config.url, &config.token));
    let store = DashboardStore::new(config.path.clone());
    let root = store.root().to_path_buf();
    let service = ExportService::new(client, store, config.failure_policy());

    let report = service.run().await?;
    for failure in &report.failures {
        tracing::error!("Failed to export {:?}: {}", failure.title, failure.error);
    }
    tracing::info!("Exported {} dashboards to {}", report.written.len(), root.display());

    Ok(report.is_success())
}
