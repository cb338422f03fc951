//! Video record endpoints: create, list, fetch.
//!
//! Responses never expose raw storage keys: a stored video reference is
//! rewritten to a time-limited presigned playback URL on the way out.

use crate::auth::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use reelhost_core::models::{Video, VideoResponse};
use reelhost_core::AppError;
use reelhost_storage::Storage;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVideoRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Build the wire representation of a record, swapping a stored object key
/// for a presigned playback URL. Records without media pass through as-is.
pub(crate) async fn to_response(
    storage: &dyn Storage,
    signed_url_ttl: Duration,
    video: Video,
) -> Result<VideoResponse, HttpAppError> {
    let playback_url = match &video.video_url {
        Some(key) => Some(storage.get_presigned_url(key, signed_url_ttl).await?),
        None => None,
    };
    Ok(VideoResponse::from(video).with_playback_url(playback_url))
}

#[utoipa::path(
    post,
    path = "/api/videos",
    tag = "videos",
    request_body = CreateVideoRequest,
    responses(
        (status = 201, description = "Video record created", body = VideoResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse)
    )
)]
pub async fn create_video(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Json(request): Json<CreateVideoRequest>,
) -> Result<(StatusCode, Json<VideoResponse>), HttpAppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title must not be empty".to_string()).into());
    }

    let video = state
        .videos
        .create_video(current_user.user_id, request.title.trim(), &request.description)
        .await?;

    Ok((StatusCode::CREATED, Json(VideoResponse::from(video))))
}

#[utoipa::path(
    get,
    path = "/api/videos",
    tag = "videos",
    responses(
        (status = 200, description = "Videos owned by the caller", body = [VideoResponse]),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse)
    )
)]
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
) -> Result<Json<Vec<VideoResponse>>, HttpAppError> {
    let ttl = Duration::from_secs(state.config.signed_url_ttl_secs);

    let mut responses = Vec::new();
    for video in state.videos.get_videos_by_user(current_user.user_id).await? {
        responses.push(to_response(state.storage.as_ref(), ttl, video).await?);
    }

    Ok(Json(responses))
}

#[utoipa::path(
    get,
    path = "/api/videos/{video_id}",
    tag = "videos",
    params(("video_id" = Uuid, Path, description = "Video identifier")),
    responses(
        (status = 200, description = "Video record", body = VideoResponse),
        (status = 404, description = "Unknown video", body = ErrorResponse)
    )
)]
pub async fn get_video(
    State(state): State<Arc<AppState>>,
    _current_user: CurrentUser,
    Path(video_id): Path<Uuid>,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let video = state
        .videos
        .get_video(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Video {} not found", video_id)))?;

    let ttl = Duration::from_secs(state.config.signed_url_ttl_secs);
    Ok(Json(to_response(state.storage.as_ref(), ttl, video).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use reelhost_storage::LocalStorage;

    fn test_video(video_url: Option<&str>) -> Video {
        let now = Utc::now();
        Video {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "clip".to_string(),
            description: String::new(),
            video_url: video_url.map(String::from),
            thumbnail_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_to_response_rewrites_stored_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), "http://localhost:8091/media".to_string())
            .await
            .unwrap();

        let response = to_response(
            &storage,
            Duration::from_secs(300),
            test_video(Some("landscape/abc.mp4")),
        )
        .await
        .unwrap();

        assert_eq!(
            response.video_url.as_deref(),
            Some("http://localhost:8091/media/landscape/abc.mp4")
        );
    }

    #[tokio::test]
    async fn test_to_response_passes_through_without_media() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), "http://localhost:8091/media".to_string())
            .await
            .unwrap();

        let response = to_response(&storage, Duration::from_secs(300), test_video(None))
            .await
            .unwrap();

        assert_eq!(response.video_url, None);
    }
}
