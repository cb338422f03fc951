//! Shared key derivation for storage backends.
//!
//! Key format: `{orientation}/{video_id}.mp4`. The orientation label comes
//! from probing the uploaded file and namespaces the bucket by playback shape.

use uuid::Uuid;

/// Derive the object key for an uploaded video.
pub fn video_object_key(orientation: &str, video_id: Uuid) -> String {
    format!("{}/{}.mp4", orientation, video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_object_key_format() {
        let id = Uuid::parse_str("1f0194f6-1c13-4f45-9d19-2f1a2c5d9b77").unwrap();
        assert_eq!(
            video_object_key("landscape", id),
            "landscape/1f0194f6-1c13-4f45-9d19-2f1a2c5d9b77.mp4"
        );
        assert_eq!(
            video_object_key("other", id),
            "other/1f0194f6-1c13-4f45-9d19-2f1a2c5d9b77.mp4"
        );
    }
}
