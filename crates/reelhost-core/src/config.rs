//! Configuration module
//!
//! Process configuration is loaded once at startup from the environment and
//! passed explicitly to every component; nothing reads ambient globals after
//! boot.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};

use crate::constants;

const DEFAULT_SERVER_PORT: u16 = 8091;
const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;
const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 60;
const MIN_JWT_SECRET_LEN: usize = 32;

/// Which storage backend holds uploaded video objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    S3,
    Local,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s3" => Ok(StorageBackend::S3),
            "local" => Ok(StorageBackend::Local),
            other => Err(anyhow!("Unknown storage backend: {}", other)),
        }
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    /// Custom endpoint for S3-compatible providers (MinIO, Spaces, ...)
    pub s3_endpoint: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    // Thumbnail assets served by this process
    pub assets_root: PathBuf,
    pub assets_base_url: String,
    // External tools
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
    pub tool_timeout_secs: u64,
    // Upload ceilings
    pub max_video_size_bytes: usize,
    pub max_thumbnail_size_bytes: usize,
    // Playback
    pub signed_url_ttl_secs: u64,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> Result<T, anyhow::Error>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow!("Invalid value for {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let server_port = env_parse("PORT", DEFAULT_SERVER_PORT)?;
        let assets_base_url = env_or(
            "ASSETS_BASE_URL",
            &format!("http://localhost:{}", server_port),
        );

        let config = Config {
            server_port,
            environment: env_or("ENVIRONMENT", "development"),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            database_url: env::var("DATABASE_URL").context("DATABASE_URL is required")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET is required")?,
            jwt_expiry_hours: env_parse("JWT_EXPIRY_HOURS", DEFAULT_JWT_EXPIRY_HOURS)?,
            storage_backend: env_or("STORAGE_BACKEND", "s3").parse()?,
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION").ok().or(env::var("AWS_REGION").ok()),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
            assets_root: PathBuf::from(env_or("ASSETS_ROOT", "./assets")),
            assets_base_url,
            ffmpeg_path: env_or("FFMPEG_PATH", "ffmpeg"),
            ffprobe_path: env_or("FFPROBE_PATH", "ffprobe"),
            tool_timeout_secs: env_parse("TOOL_TIMEOUT_SECS", DEFAULT_TOOL_TIMEOUT_SECS)?,
            max_video_size_bytes: env_parse(
                "MAX_VIDEO_SIZE_BYTES",
                constants::MAX_VIDEO_UPLOAD_BYTES,
            )?,
            max_thumbnail_size_bytes: env_parse(
                "MAX_THUMBNAIL_SIZE_BYTES",
                constants::MAX_THUMBNAIL_UPLOAD_BYTES,
            )?,
            signed_url_ttl_secs: env_parse("SIGNED_URL_TTL_SECS", constants::SIGNED_URL_TTL_SECS)?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.jwt_secret.len() < MIN_JWT_SECRET_LEN {
            bail!(
                "JWT_SECRET must be at least {} characters",
                MIN_JWT_SECRET_LEN
            );
        }
        if self.tool_timeout_secs == 0 {
            bail!("TOOL_TIMEOUT_SECS must be greater than zero");
        }
        match self.storage_backend {
            StorageBackend::S3 => {
                if self.s3_bucket.is_none() {
                    bail!("S3_BUCKET is required with the s3 storage backend");
                }
                if self.s3_region.is_none() {
                    bail!("S3_REGION or AWS_REGION is required with the s3 storage backend");
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() || self.local_storage_base_url.is_none() {
                    bail!(
                        "LOCAL_STORAGE_PATH and LOCAL_STORAGE_BASE_URL are required with the local storage backend"
                    );
                }
            }
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}
