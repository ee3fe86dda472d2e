use anyhow::Context;
use catalog_backend::app;
use catalog_backend::config::settings::{AppConfig, StorageDriver};
use catalog_backend::infrastructure::db::pool::{connect_to_db, run_migrations};
use catalog_backend::state::AppState;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting server...");

    let config = AppConfig::new()?;

    let state = match config.storage_driver {
        StorageDriver::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set")?;
            let pool = connect_to_db(url, config.db_max_connections).await?;
            run_migrations(&pool).await?;
            AppState::postgres(pool)
        }
        StorageDriver::Memory => AppState::in_memory(),
    };
    info!(driver = %config.storage_driver, "Storage ready");

    let app = app::create_app(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
