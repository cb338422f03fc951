use chrono::Utc;
use reelhost_core::models::Video;
use reelhost_core::AppError;
use sqlx::PgPool;
use uuid::Uuid;

/// Repository for video records.
///
/// The repository only persists; ownership checks live in the handlers, next
/// to the authenticated identity.
#[derive(Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_video(
        &self,
        user_id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<Video, AppError> {
        let video = sqlx::query_as::<_, Video>(
            r#"
            INSERT INTO videos (id, user_id, title, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id, user_id, title, description, video_url, thumbnail_url,
                      created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(video_id = %video.id, user_id = %user_id, "Video record created");
        Ok(video)
    }

    pub async fn get_video(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        let video = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, user_id, title, description, video_url, thumbnail_url,
                   created_at, updated_at
            FROM videos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(video)
    }

    pub async fn get_videos_by_user(&self, user_id: Uuid) -> Result<Vec<Video>, AppError> {
        let videos = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, user_id, title, description, video_url, thumbnail_url,
                   created_at, updated_at
            FROM videos
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(videos)
    }

    /// Set the stored object key for an uploaded video. Overwrites any
    /// previous reference; the superseded object is not deleted here.
    pub async fn update_video_url(&self, id: Uuid, video_url: &str) -> Result<Video, AppError> {
        let video = sqlx::query_as::<_, Video>(
            r#"
            UPDATE videos
            SET video_url = $2, updated_at = $3
            WHERE id = $1
            RETURNING id, user_id, title, description, video_url, thumbnail_url,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(video_url)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Video {} not found", id)))?;

        tracing::info!(video_id = %id, video_url = %video_url, "Video reference updated");
        Ok(video)
    }

    pub async fn update_thumbnail_url(
        &self,
        id: Uuid,
        thumbnail_url: &str,
    ) -> Result<Video, AppError> {
        let video = sqlx::query_as::<_, Video>(
            r#"
            UPDATE videos
            SET thumbnail_url = $2, updated_at = $3
            WHERE id = $1
            RETURNING id, user_id, title, description, video_url, thumbnail_url,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(thumbnail_url)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Video {} not found", id)))?;

        tracing::info!(video_id = %id, "Thumbnail reference updated");
        Ok(video)
    }
}
