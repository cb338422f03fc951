//! Application wiring: database, storage, external tools, routes.

pub mod routes;
pub mod server;

use crate::auth::JwtService;
use crate::state::AppState;
use anyhow::Context;
use axum::Router;
use reelhost_core::Config;
use reelhost_db::VideoRepository;
use reelhost_processing::{FfmpegRemuxer, FfprobeProber, MediaProber, Remuxer};
use reelhost_storage::create_storage;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

const DB_MAX_CONNECTIONS: u32 = 20;
const DB_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Build the application state and router from configuration.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(DB_MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(DB_ACQUIRE_TIMEOUT_SECS))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let storage = create_storage(&config)
        .await
        .context("Failed to create storage backend")?;

    tokio::fs::create_dir_all(&config.assets_root)
        .await
        .with_context(|| {
            format!(
                "Failed to create assets directory {}",
                config.assets_root.display()
            )
        })?;

    let tool_timeout = Duration::from_secs(config.tool_timeout_secs);
    let prober: Arc<dyn MediaProber> =
        Arc::new(FfprobeProber::new(config.ffprobe_path.clone(), tool_timeout)?);
    let remuxer: Arc<dyn Remuxer> =
        Arc::new(FfmpegRemuxer::new(config.ffmpeg_path.clone(), tool_timeout)?);

    let jwt = JwtService::new(config.jwt_secret.clone(), config.jwt_expiry_hours);

    let state = Arc::new(AppState {
        videos: VideoRepository::new(pool),
        storage,
        prober,
        remuxer,
        jwt,
        config,
    });

    let router = routes::setup_routes(state.clone())?;
    Ok((state, router))
}
