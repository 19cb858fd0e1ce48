//! Repository trait for short URL entry storage.

use crate::domain::entities::{ClickInfo, UrlEntry};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for short URL entries, keyed by shortcode.
///
/// The store exclusively owns all entries; services read and mutate only
/// through these accessors. Note that `exists` followed by `insert` is not
/// transactional: two concurrent creations with the same code can both pass
/// the existence check. The service layer keeps that check-then-set shape
/// deliberately.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::InMemoryUrlStore`] - process-lifetime map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Returns whether an entry exists for `code`.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Returns a snapshot of the entry for `code`, or `None`.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlEntry>, AppError>;

    /// Stores `entry` under its shortcode, replacing any previous value.
    ///
    /// Uniqueness is the caller's responsibility (see trait docs).
    async fn insert(&self, entry: UrlEntry) -> Result<(), AppError>;

    /// Appends a click to the entry for `code`.
    ///
    /// Returns `Ok(false)` when no entry exists for `code`.
    async fn append_click(&self, code: &str, click: ClickInfo) -> Result<bool, AppError>;
}
