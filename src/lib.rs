//! # Shortlinks
//!
//! A minimal URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! The crate follows a layered design with clear separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the storage trait
//! - **Application Layer** ([`application`]) - Shortening and stats services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and the
//!   remote log shipper
//! - **API Layer** ([`api`]) - HTTP handlers and DTOs
//!
//! ## Features
//!
//! - Short link creation with optional custom codes and per-link validity
//! - Click tracking with referrer and client address metadata
//! - Link expiry (redirects are refused after expiry, stats remain queryable)
//! - Best-effort structured log shipping to an external ingestion endpoint
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: point the log shipper at an ingestion endpoint
//! export LOG_API="https://logs.example.com/ingest"
//! export LOG_API_KEY="secret-token"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortenService, StatsService};
    pub use crate::domain::entities::{ClickInfo, UrlEntry};
    pub use crate::error::AppError;
    pub use crate::infrastructure::logging::RemoteLogger;
    pub use crate::infrastructure::store::InMemoryUrlStore;
    pub use crate::state::AppState;
}
