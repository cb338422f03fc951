//! Video ingestion pipeline: validate -> scratch -> remux -> probe -> store.
//!
//! The uploaded bytes land in a scratch file named after the video id; the
//! remuxed fast-start copy is uploaded under `{orientation}/{video_id}.mp4`
//! and the record keeps the key. Both scratch files are drop-guarded, so the
//! temp directory is clean after every request, including failed ones.

use crate::auth::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::videos::to_response;
use crate::multipart::{extract_multipart_file, validate_content_type, validate_file_size};
use crate::scratch::ScratchFile;
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use reelhost_core::models::VideoResponse;
use reelhost_core::{constants, AppError};
use reelhost_processing::remux::faststart_output_path;
use reelhost_storage::video_object_key;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/videos/{video_id}/video",
    tag = "videos",
    params(("video_id" = Uuid, Path, description = "Video identifier")),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Video uploaded", body = VideoResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 403, description = "Caller does not own the video", body = ErrorResponse),
        (status = 404, description = "Unknown video", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Processing or storage failure", body = ErrorResponse)
    )
)]
pub async fn upload_video(
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

    let (data, content_type) = extract_multipart_file(multipart, "video").await?;
    validate_file_size(data.len(), state.config.max_video_size_bytes)?;
    validate_content_type(&content_type, &[constants::VIDEO_CONTENT_TYPE])?;

    tracing::info!(
        video_id = %video_id,
        user_id = %current_user.user_id,
        size_bytes = data.len(),
        "Video upload accepted"
    );

    let scratch_path = std::env::temp_dir().join(format!("{}.mp4", video_id));
    let scratch = ScratchFile::create(scratch_path, &data).await?;
    drop(data);

    // Remux before anything else touches the file; a failed remux may leave
    // partial output behind, which the guard disposes of.
    let remuxed = match state.remuxer.remux(scratch.path()).await {
        Ok(path) => ScratchFile::adopt(path),
        Err(e) => {
            drop(ScratchFile::adopt(faststart_output_path(scratch.path())));
            return Err(e.into());
        }
    };

    // Orientation comes from the original upload, not the remuxed copy.
    let dimensions = state.prober.probe(scratch.path()).await?;
    let orientation = dimensions.orientation();

    let storage_key = video_object_key(orientation.as_str(), video_id);
    let remuxed_data = tokio::fs::read(remuxed.path())
        .await
        .map_err(AppError::from)?;
    state
        .storage
        .upload_with_key(&storage_key, remuxed_data, constants::VIDEO_CONTENT_TYPE)
        .await?;

    let updated = state.videos.update_video_url(video_id, &storage_key).await?;

    tracing::info!(
        video_id = %video_id,
        storage_key = %storage_key,
        orientation = %orientation,
        width = dimensions.width,
        height = dimensions.height,
        "Video upload stored"
    );

    drop(scratch);
    drop(remuxed);

    let ttl = Duration::from_secs(state.config.signed_url_ttl_secs);
    Ok(Json(to_response(state.storage.as_ref(), ttl, updated).await?))
}
