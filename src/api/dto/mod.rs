//! Request and response DTOs.
//!
//! Wire format is camelCase (`shortLink`, `createdAt`, `totalClicks`,
//! `clickHistory`), matching what the service's clients consume.

pub mod shorten;
pub mod stats;
