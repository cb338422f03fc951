//! Storage backends for uploaded video objects.
//!
//! The `Storage` trait is the seam between the ingestion pipeline and the
//! object store. Keys are derived centrally in the `keys` module:
//! `{orientation}/{video_id}.mp4`, so playback URLs group by orientation.
//! Keys must not contain `..` or a leading `/`.

pub mod factory;
pub mod keys;
pub mod local;
pub mod s3;
pub mod traits;

pub use factory::create_storage;
pub use keys::video_object_key;
pub use local::LocalStorage;
pub use reelhost_core::config::StorageBackend;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
