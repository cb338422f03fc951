use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "reelhost API",
        description = "Video hosting service: authenticated uploads, fast-start remux, signed playback URLs"
    ),
    paths(
        crate::handlers::health::healthz,
        crate::handlers::videos::create_video,
        crate::handlers::videos::list_videos,
        crate::handlers::videos::get_video,
        crate::handlers::video_upload::upload_video,
        crate::handlers::thumbnail_upload::upload_thumbnail,
    ),
    components(schemas(
        reelhost_core::models::VideoResponse,
        crate::handlers::videos::CreateVideoRequest,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "videos", description = "Video records and media uploads"),
        (name = "health", description = "Service probes")
    )
)]
pub struct ApiDoc;
