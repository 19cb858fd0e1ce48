//! Read-only statistics projection for stored entries.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::ClickInfo;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Projection of an entry returned by the stats endpoint.
#[derive(Debug, Clone)]
pub struct UrlStats {
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub total_clicks: usize,
    /// Full click history in insertion order.
    pub click_history: Vec<ClickInfo>,
}

/// Service for reading entry statistics.
pub struct StatsService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the stats projection for `code`.
    ///
    /// Works for expired entries too: expiry refuses redirects, not stats.
    /// Never mutates the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no entry exists for `code`.
    pub async fn get_stats(&self, code: &str) -> Result<UrlStats, AppError> {
        let entry = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Shortcode not found"))?;

        Ok(UrlStats {
            shortcode: entry.shortcode,
            original_url: entry.original_url,
            created_at: entry.created_at,
            expiry: entry.expiry,
            total_clicks: entry.clicks.len(),
            click_history: entry.clicks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UrlEntry;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::Duration;

    #[tokio::test]
    async fn test_get_stats_projection() {
        let mut repo = MockUrlRepository::new();

        let now = Utc::now();
        let mut entry = UrlEntry::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
            now + Duration::minutes(30),
        );
        entry.record_click(ClickInfo::new(
            now,
            Some("https://google.com".to_string()),
            Some("1.2.3.4".to_string()),
        ));
        entry.record_click(ClickInfo::new(
            now + Duration::seconds(5),
            None,
            Some("5.6.7.8".to_string()),
        ));

        repo.expect_find_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(move |_| Ok(Some(entry.clone())));

        let service = StatsService::new(Arc::new(repo));
        let stats = service.get_stats("abc123").await.unwrap();

        assert_eq!(stats.shortcode, "abc123");
        assert_eq!(stats.original_url, "https://example.com");
        assert_eq!(stats.created_at, now);
        assert_eq!(stats.total_clicks, 2);
        assert_eq!(stats.click_history.len(), 2);
        assert_eq!(stats.click_history[0].location, "1.2.3.4");
        assert_eq!(stats.click_history[1].location, "5.6.7.8");
    }

    #[tokio::test]
    async fn test_get_stats_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_code().times(1).returning(|_| Ok(None));

        let service = StatsService::new(Arc::new(repo));
        let result = service.get_stats("missing").await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "Shortcode not found");
    }

    #[tokio::test]
    async fn test_get_stats_works_for_expired_entry() {
        let mut repo = MockUrlRepository::new();

        let now = Utc::now();
        let entry = UrlEntry::new(
            "old".to_string(),
            "https://example.com".to_string(),
            now - Duration::hours(2),
            now - Duration::hours(1),
        );

        repo.expect_find_by_code()
            .times(1)
            .returning(move |_| Ok(Some(entry.clone())));

        let service = StatsService::new(Arc::new(repo));
        let stats = service.get_stats("old").await.unwrap();

        assert_eq!(stats.total_clicks, 0);
        assert!(stats.expiry < Utc::now());
    }
}
