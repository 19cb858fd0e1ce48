//! Infrastructure: storage and external integrations.

pub mod logging;
pub mod store;
