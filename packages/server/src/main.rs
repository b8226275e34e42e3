use std::sync::Arc;

use anyhow::Context;
use common::storage::FilesystemFileStore;
use tracing::{Level, info};

use agency_server::config::AppConfig;
use agency_server::database::init_db;
use agency_server::repository::SeaOrmStore;
use agency_server::seed::seed_default_admin;
use agency_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load().context("Failed to load config")?;

    ensure_sqlite_dir(&config.database.url).await?;
    let db = init_db(&config.database.url)
        .await
        .context("Failed to initialize database")?;
    info!("Database ready");

    let files = FilesystemFileStore::new(
        config.storage.upload_dir.clone(),
        config.storage.max_upload_size,
    )
    .await
    .context("Failed to prepare upload directory")?;
    info!(upload_dir = %config.storage.upload_dir.display(), "File store ready");

    let store = Arc::new(SeaOrmStore::new(db));
    seed_default_admin(&*store, &config.seed)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to seed default admin: {e:?}"))?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        store,
        files: Arc::new(files),
        config,
    };
    let app = agency_server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// SQLite does not create missing parent directories of its database file.
async fn ensure_sqlite_dir(url: &str) -> anyhow::Result<()> {
    let Some(rest) = url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path.starts_with(':') {
        return Ok(());
    }
    if let Some(parent) = std::path::Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}
