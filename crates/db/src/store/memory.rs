//! In-memory [`VideoStore`] used as a test double and for local runs
//! without a database.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::video::Video;
use crate::store::{StoreError, VideoStore};

/// Vec-backed store. Insertion order doubles as the natural list order.
#[derive(Default)]
pub struct MemoryVideoStore {
    rows: RwLock<Vec<Video>>,
}

impl MemoryVideoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoStore for MemoryVideoStore {
    async fn list(&self) -> Result<Vec<Video>, StoreError> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Video>, StoreError> {
        Ok(self.rows.read().await.iter().find(|v| v.id == id).cloned())
    }

    async fn insert(&self, video: &Video) -> Result<Video, StoreError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|v| v.id == video.id) {
            return Err(StoreError::DuplicateId);
        }
        rows.push(video.clone());
        Ok(video.clone())
    }

    async fn update(&self, original_id: &str, video: &Video) -> Result<u64, StoreError> {
        let mut rows = self.rows.write().await;
        if video.id != original_id && rows.iter().any(|v| v.id == video.id) {
            return Err(StoreError::DuplicateId);
        }
        match rows.iter_mut().find(|v| v.id == original_id) {
            Some(row) => {
                *row = video.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|v| v.id != id);
        Ok((before - rows.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn video(id: &str) -> Video {
        Video {
            id: id.to_string(),
            titulo: format!("title for {id}"),
            duracao: 120.0,
            data_upload: Utc::now(),
        }
    }

    #[tokio::test]
    async fn insert_then_list_preserves_order() {
        let store = MemoryVideoStore::new();
        store.insert(&video("a")).await.unwrap();
        store.insert(&video("b")).await.unwrap();

        let ids: Vec<String> = store.list().await.unwrap().into_iter().map(|v| v.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let store = MemoryVideoStore::new();
        store.insert(&video("a")).await.unwrap();

        let err = store.insert(&video("a")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId));
    }

    #[tokio::test]
    async fn update_reports_missing_rows() {
        let store = MemoryVideoStore::new();
        assert_eq!(store.update("ghost", &video("ghost")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_rejects_rename_onto_existing_id() {
        let store = MemoryVideoStore::new();
        store.insert(&video("a")).await.unwrap();
        store.insert(&video("b")).await.unwrap();

        let mut renamed = store.find_by_id("b").await.unwrap().unwrap();
        renamed.id = "a".to_string();
        let err = store.update("b", &renamed).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId));
    }

    #[tokio::test]
    async fn delete_counts_removed_rows() {
        let store = MemoryVideoStore::new();
        store.insert(&video("a")).await.unwrap();

        assert_eq!(store.delete("a").await.unwrap(), 1);
        assert_eq!(store.delete("a").await.unwrap(), 0);
        assert!(store.list().await.unwrap().is_empty());
    }
}
