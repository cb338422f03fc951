//! Thumbnail upload: validated bytes written straight to the assets root.
//!
//! Unlike the video path there is no scratch lifecycle; the write destination
//! is the final destination and the record points at the served URL.

use crate::assets::{asset_url, random_asset_name};
use crate::auth::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::videos::to_response;
use crate::multipart::{extract_multipart_file, validate_content_type, validate_file_size};
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use reelhost_core::models::VideoResponse;
use reelhost_core::{constants, AppError};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/videos/{video_id}/thumbnail",
    tag = "videos",
    params(("video_id" = Uuid, Path, description = "Video identifier")),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Thumbnail uploaded", body = VideoResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 403, description = "Caller does not own the video", body = ErrorResponse),
        (status = 404, description = "Unknown video", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse)
    )
)]
pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    current_user: CurrentUser,
    Path(video_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<VideoResponse>, HttpAppError> {
    let video = state
        .videos
        .get_video(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Video {} not found", video_id)))?;

    if video.user_id != current_user.user_id {
        return Err(AppError::Forbidden("Not the owner of this video".to_string()).into());
    }

    let (data, content_type) = extract_multipart_file(multipart, "thumbnail").await?;
    validate_file_size(data.len(), state.config.max_thumbnail_size_bytes)?;
    validate_content_type(&content_type, &constants::THUMBNAIL_CONTENT_TYPES)?;

    let filename = random_asset_name(&content_type);
    let disk_path = state.config.assets_root.join(&filename);
    tokio::fs::write(&disk_path, &data).await.map_err(|e| {
        AppError::Internal(format!(
            "Failed to write asset {}: {}",
            disk_path.display(),
            e
        ))
    })?;

    let thumbnail_url = asset_url(&state.config.assets_base_url, &filename);
    let updated = state
        .videos
        .update_thumbnail_url(video_id, &thumbnail_url)
        .await?;

    tracing::info!(
        video_id = %video_id,
        user_id = %current_user.user_id,
        size_bytes = data.len(),
        asset = %filename,
        "Thumbnail stored"
    );

    let ttl = Duration::from_secs(state.config.signed_url_ttl_secs);
    Ok(Json(to_response(state.storage.as_ref(), ttl, updated).await?))
}
