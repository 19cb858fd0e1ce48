//! Wire model for remote log events.
//!
//! The ingestion endpoint expects a JSON body of the form
//! `{"stack": "backend", "level": "warn", "package": "handler", "message": "..."}`.

use serde::Serialize;

/// Which half of the system produced the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStack {
    Backend,
    Frontend,
}

/// Severity accepted by the ingestion endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Originating package name accepted by the ingestion endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogPackage {
    Cache,
    Controller,
    CronJob,
    Db,
    Domain,
    Handler,
    Repository,
    Route,
    Service,
    Auth,
    Config,
    Middleware,
    Utils,
}

/// One structured log event to be shipped.
#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    pub stack: LogStack,
    pub level: LogLevel,
    pub package: LogPackage,
    pub message: String,
}

impl LogEvent {
    /// Creates a backend-stack event.
    pub fn backend(level: LogLevel, package: LogPackage, message: impl Into<String>) -> Self {
        Self {
            stack: LogStack::Backend,
            level,
            package,
            message: message.into(),
        }
    }
}
