//! In-memory implementation of [`UrlRepository`].

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::entities::{ClickInfo, UrlEntry};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Process-lifetime map from shortcode to [`UrlEntry`].
///
/// Created empty at startup, never persisted or reloaded. Entries are never
/// removed; expired entries stay queryable for stats. Lock scopes are
/// synchronous and never held across an await point.
pub struct InMemoryUrlStore {
    entries: RwLock<HashMap<String, UrlEntry>>,
}

impl InMemoryUrlStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    fn read_entries(&self) -> Result<RwLockReadGuard<'_, HashMap<String, UrlEntry>>, AppError> {
        self.entries
            .read()
            .map_err(|_| AppError::internal("URL store lock poisoned"))
    }

    fn write_entries(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, UrlEntry>>, AppError> {
        self.entries
            .write()
            .map_err(|_| AppError::internal("URL store lock poisoned"))
    }
}

impl Default for InMemoryUrlStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlStore {
    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.read_entries()?.contains_key(code))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlEntry>, AppError> {
        Ok(self.read_entries()?.get(code).cloned())
    }

    async fn insert(&self, entry: UrlEntry) -> Result<(), AppError> {
        self.write_entries()?
            .insert(entry.shortcode.clone(), entry);
        Ok(())
    }

    async fn append_click(&self, code: &str, click: ClickInfo) -> Result<bool, AppError> {
        let mut entries = self.write_entries()?;
        match entries.get_mut(code) {
            Some(entry) => {
                entry.record_click(click);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn sample_entry(code: &str) -> UrlEntry {
        let now = Utc::now();
        UrlEntry::new(
            code.to_string(),
            "https://example.com".to_string(),
            now,
            now + Duration::minutes(30),
        )
    }

    #[tokio::test]
    async fn test_insert_then_lookup() {
        let store = InMemoryUrlStore::new();

        assert!(!store.exists("abc123").await.unwrap());
        assert!(store.find_by_code("abc123").await.unwrap().is_none());

        store.insert(sample_entry("abc123")).await.unwrap();

        assert!(store.exists("abc123").await.unwrap());
        let entry = store.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(entry.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_append_click_to_existing_entry() {
        let store = InMemoryUrlStore::new();
        store.insert(sample_entry("clickme")).await.unwrap();

        let click = ClickInfo::new(Utc::now(), None, Some("127.0.0.1".to_string()));
        let appended = store.append_click("clickme", click).await.unwrap();
        assert!(appended);

        let entry = store.find_by_code("clickme").await.unwrap().unwrap();
        assert_eq!(entry.total_clicks(), 1);
        assert_eq!(entry.clicks[0].location, "127.0.0.1");
    }

    #[tokio::test]
    async fn test_append_click_unknown_code() {
        let store = InMemoryUrlStore::new();

        let click = ClickInfo::new(Utc::now(), None, None);
        let appended = store.append_click("missing", click).await.unwrap();
        assert!(!appended);
    }

    #[tokio::test]
    async fn test_find_returns_snapshot() {
        let store = InMemoryUrlStore::new();
        store.insert(sample_entry("snap")).await.unwrap();

        let before = store.find_by_code("snap").await.unwrap().unwrap();

        let click = ClickInfo::new(Utc::now(), None, None);
        store.append_click("snap", click).await.unwrap();

        // The earlier snapshot is unaffected by later mutation.
        assert_eq!(before.total_clicks(), 0);
        let after = store.find_by_code("snap").await.unwrap().unwrap();
        assert_eq!(after.total_clicks(), 1);
    }
}
