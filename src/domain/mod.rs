//! Core business entities and the storage trait.

pub mod entities;
pub mod repositories;
