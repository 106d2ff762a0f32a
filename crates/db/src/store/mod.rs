//! The video store seam.
//!
//! Handlers receive the store as an injected `Arc<dyn VideoStore>` rather
//! than a process-wide handle, so tests can substitute
//! [`memory::MemoryVideoStore`] for the PostgreSQL-backed
//! [`postgres::PgVideoStore`].

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::video::Video;

/// Errors surfaced by a [`VideoStore`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A row with the requested id already exists. Uniqueness is enforced
    /// by the store (primary key), so this is the canonical conflict
    /// signal for both insert and id-renaming updates.
    #[error("duplicate video id")]
    DuplicateId,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// CRUD operations over the `videos` table.
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// All rows, in the store's natural order.
    async fn list(&self) -> Result<Vec<Video>, StoreError>;

    /// Look up a single row by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Video>, StoreError>;

    /// Insert a row, returning it as persisted. Fails with
    /// [`StoreError::DuplicateId`] if the id is taken.
    async fn insert(&self, video: &Video) -> Result<Video, StoreError>;

    /// Overwrite the row identified by `original_id` with `video` (which
    /// may carry a new id). Returns the number of rows affected.
    async fn update(&self, original_id: &str, video: &Video) -> Result<u64, StoreError>;

    /// Delete a row by id. Returns the number of rows affected; zero
    /// means no such row existed.
    async fn delete(&self, id: &str) -> Result<u64, StoreError>;
}
