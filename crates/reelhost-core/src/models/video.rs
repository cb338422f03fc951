use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A video record. `video_url` holds the storage key of the uploaded object
/// (not a public URL) and stays `None` until the owner uploads media;
/// `thumbnail_url` is a directly servable asset URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Video {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Wire representation of a video record. `video_url` carries a time-limited
/// presigned playback URL when the record has stored media.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VideoResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        VideoResponse {
            id: video.id,
            user_id: video.user_id,
            title: video.title,
            description: video.description,
            video_url: video.video_url,
            thumbnail_url: video.thumbnail_url,
            created_at: video.created_at,
            updated_at: video.updated_at,
        }
    }
}

impl VideoResponse {
    /// Replace the stored video reference with a resolved playback URL.
    /// Records with no stored media are returned unmodified.
    pub fn with_playback_url(mut self, url: Option<String>) -> Self {
        if url.is_some() {
            self.video_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_video(video_url: Option<&str>) -> Video {
        let now = Utc::now();
        Video {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Launch highlights".to_string(),
            description: "Cut of the launch stream".to_string(),
            video_url: video_url.map(String::from),
            thumbnail_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_response_preserves_record_fields() {
        let video = test_video(Some("landscape/9f2c.mp4"));
        let response = VideoResponse::from(video.clone());
        assert_eq!(response.id, video.id);
        assert_eq!(response.user_id, video.user_id);
        assert_eq!(response.video_url.as_deref(), Some("landscape/9f2c.mp4"));
    }

    #[test]
    fn test_with_playback_url_rewrites_reference() {
        let response = VideoResponse::from(test_video(Some("landscape/9f2c.mp4")))
            .with_playback_url(Some("https://signed.example/landscape/9f2c.mp4?sig=x".into()));
        assert_eq!(
            response.video_url.as_deref(),
            Some("https://signed.example/landscape/9f2c.mp4?sig=x")
        );
    }

    #[test]
    fn test_with_playback_url_keeps_record_unmodified_without_media() {
        let response = VideoResponse::from(test_video(None)).with_playback_url(None);
        assert_eq!(response.video_url, None);
    }
}
