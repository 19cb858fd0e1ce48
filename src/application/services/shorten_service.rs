//! Short link creation and redirect resolution.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::{ClickInfo, UrlEntry};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code};

/// Validity applied when the caller does not supply one.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Result of a successful creation.
#[derive(Debug, Clone)]
pub struct CreatedEntry {
    pub short_link: String,
    pub expiry: DateTime<Utc>,
}

/// Service for creating short links and resolving redirects.
pub struct ShortenService<R: UrlRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: UrlRepository> ShortenService<R> {
    /// Creates a new shortening service.
    ///
    /// `base_url` is the prefix of every returned short link.
    pub fn new(repository: Arc<R>, base_url: String) -> Self {
        Self {
            repository,
            base_url,
        }
    }

    /// Creates and stores a new entry.
    ///
    /// # Arguments
    ///
    /// - `url` - the destination; must be non-empty (handler-validated)
    /// - `validity_minutes` - lifetime until expiry; defaults to 30
    /// - `custom_code` - used verbatim as the candidate code when supplied
    ///   and non-empty, otherwise a random 6-character code is generated
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a non-positive or out-of-range
    /// validity and
    /// [`AppError::Conflict`] when the candidate code is already taken. There
    /// is no regeneration on collision, even for generated codes: the caller
    /// receives the conflict.
    ///
    /// The existence check and the insert are two separate store operations;
    /// two concurrent creations with the same custom code can both pass the
    /// check. That window is accepted for this service's scope.
    pub async fn create_entry(
        &self,
        url: String,
        validity_minutes: Option<i64>,
        custom_code: Option<String>,
    ) -> Result<CreatedEntry, AppError> {
        let minutes = validity_minutes.unwrap_or(DEFAULT_VALIDITY_MINUTES);
        if minutes <= 0 {
            return Err(AppError::bad_request(
                "'validity' must be a positive number of minutes",
            ));
        }

        // try_minutes and checked_add_signed keep an absurd validity from
        // panicking inside chrono; it surfaces as a 400 like any bad input.
        let now = Utc::now();
        let expiry = Duration::try_minutes(minutes)
            .and_then(|validity| now.checked_add_signed(validity))
            .ok_or_else(|| AppError::bad_request("'validity' is out of range"))?;

        // An empty shortcode is treated as absent: it could never be reached
        // by the redirect route.
        let code = custom_code
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| generate_code(DEFAULT_CODE_LENGTH));

        if self.repository.exists(&code).await? {
            return Err(AppError::conflict(format!(
                "Shortcode '{}' already exists",
                code
            )));
        }

        let entry = UrlEntry::new(code.clone(), url, now, expiry);
        self.repository.insert(entry).await?;

        Ok(CreatedEntry {
            short_link: format!("{}/{}", self.base_url.trim_end_matches('/'), code),
            expiry,
        })
    }

    /// Resolves a redirect for `code`, recording the click.
    ///
    /// The flow is linear: lookup, expiry check, record-and-return. Only the
    /// success path mutates the store (a single click append).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code and
    /// [`AppError::Expired`] past expiry; neither records a click.
    pub async fn redirect(
        &self,
        code: &str,
        referrer: Option<String>,
        location: Option<String>,
    ) -> Result<String, AppError> {
        let entry = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found"))?;

        if entry.is_expired() {
            return Err(AppError::expired("Short URL has expired"));
        }

        let click = ClickInfo::new(Utc::now(), referrer, location);
        self.repository.append_click(code, click).await?;

        Ok(entry.original_url)
    }
}
