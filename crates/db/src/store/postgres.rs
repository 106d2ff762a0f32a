//! PostgreSQL-backed [`VideoStore`].

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::video::Video;
use crate::store::{StoreError, VideoStore};

const COLUMNS: &str = "id, titulo, duracao, data_upload";

/// PostgreSQL unique-violation error code.
const UNIQUE_VIOLATION: &str = "23505";

/// Video store over a `sqlx` connection pool.
pub struct PgVideoStore {
    pool: PgPool,
}

impl PgVideoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique-constraint violation to [`StoreError::DuplicateId`].
fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return StoreError::DuplicateId;
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl VideoStore for PgVideoStore {
    async fn list(&self) -> Result<Vec<Video>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM videos");
        let rows = sqlx::query_as::<_, Video>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Video>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        let row = sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, video: &Video) -> Result<Video, StoreError> {
        let query = format!(
            "INSERT INTO videos (id, titulo, duracao, data_upload) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&video.id)
            .bind(&video.titulo)
            .bind(video.duracao)
            .bind(video.data_upload)
            .fetch_one(&self.pool)
            .await
            .map_err(classify)
    }

    async fn update(&self, original_id: &str, video: &Video) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE videos \
             SET id = $1, titulo = $2, duracao = $3, data_upload = $4 \
             WHERE id = $5",
        )
        .bind(&video.id)
        .bind(&video.titulo)
        .bind(video.duracao)
        .bind(video.data_upload)
        .bind(original_id)
        .execute(&self.pool)
        .await
        .map_err(classify)?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
