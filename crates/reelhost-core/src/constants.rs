//! Service-wide constants.

/// Prefix for all JSON API routes.
pub const API_PREFIX: &str = "/api";

/// Upload ceiling for video bodies: 1 GiB.
pub const MAX_VIDEO_UPLOAD_BYTES: usize = 1 << 30;

/// Upload ceiling for thumbnail bodies: 10 MiB.
pub const MAX_THUMBNAIL_UPLOAD_BYTES: usize = 10 << 20;

/// The single accepted video container type.
pub const VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// Accepted thumbnail image types.
pub const THUMBNAIL_CONTENT_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// How long presigned playback URLs stay valid.
pub const SIGNED_URL_TTL_SECS: u64 = 5 * 60;
