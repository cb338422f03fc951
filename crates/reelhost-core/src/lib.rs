//! Core types for the reelhost video service.
//!
//! This crate holds configuration, the unified error type, and the domain
//! models shared by the storage, processing, and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
