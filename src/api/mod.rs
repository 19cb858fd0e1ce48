//! HTTP API: handlers and DTOs.

pub mod dto;
pub mod handlers;
