use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // .env is optional; real environment variables take precedence
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let db =
        database::postgres::connect_from_config_with_retry(config.database.clone(), None).await?;
    database::postgres::run_migrations::<migration::Migrator>(&db, "customers_api").await?;

    let state = AppState { config, db };
    let app = api::app(&state);

    info!("Starting customers API with graceful shutdown (30s timeout)");

    // State moves into the cleanup future
    let server_config = state.config.server.clone();

    create_production_app(
        app,
        &server_config,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database connections");
            match state.db.close().await {
                Ok(_) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Customers API shutdown complete");
    Ok(())
}
