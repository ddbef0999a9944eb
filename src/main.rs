//! Paged Table - Demo Entry Point

use anyhow::Context;
use paged_table::app::application::run_app;
use paged_table::domain::TableConfig;
use paged_table::features::desserts::controller::sample_rows;
use paged_table::states::load_table_config;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting paged-table demo...");

    let config = load_table_config().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Using default table config");
        TableConfig::default()
    });
    let rows = sample_rows().context("bundled sample rows are malformed")?;

    // Run the GPUI application
    run_app(config, rows);
    Ok(())
}
