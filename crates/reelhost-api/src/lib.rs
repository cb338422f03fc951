//! HTTP surface of the reelhost video service.

pub mod api_doc;
pub mod assets;
pub mod auth;
pub mod error;
pub mod handlers;
pub mod multipart;
pub mod scratch;
pub mod setup;
pub mod state;
pub mod telemetry;
