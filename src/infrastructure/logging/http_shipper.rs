//! HTTP implementation of [`LogShipper`].

use std::time::Duration;

use async_trait::async_trait;
use ureq::Agent;

use super::event::LogEvent;
use super::shipper::{LogShipper, ShipError, ShipResult};

/// Per-request timeout for the ingestion endpoint.
const SHIP_TIMEOUT_SECS: u64 = 5;

/// Ships events as JSON POSTs to an external log-ingestion endpoint.
///
/// Uses a blocking `ureq` agent driven through `spawn_blocking`, with a short
/// global timeout so a slow sink cannot back up the log worker indefinitely.
pub struct HttpLogShipper {
    endpoint: String,
    api_key: Option<String>,
    agent: Agent,
}

impl HttpLogShipper {
    /// Creates a shipper for `endpoint`.
    ///
    /// `api_key`, when present, is sent verbatim as the `Authorization`
    /// header, which is the scheme the ingestion endpoint expects.
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(SHIP_TIMEOUT_SECS)))
            .build()
            .into();

        Self {
            endpoint,
            api_key,
            agent,
        }
    }

    fn ship_sync(
        agent: &Agent,
        endpoint: &str,
        api_key: Option<&str>,
        event: &LogEvent,
    ) -> ShipResult<()> {
        let mut request = agent.post(endpoint);

        if let Some(key) = api_key {
            request = request.header("Authorization", key);
        }

        match request.send_json(event) {
            Ok(_) => Ok(()),
            Err(ureq::Error::StatusCode(status)) => Err(ShipError::Rejected(status)),
            Err(e) => Err(ShipError::Transport(e.to_string())),
        }
    }
}

#[async_trait]
impl LogShipper for HttpLogShipper {
    async fn ship(&self, event: LogEvent) -> ShipResult<()> {
        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();
        let api_key = self.api_key.clone();

        tokio::task::spawn_blocking(move || {
            Self::ship_sync(&agent, &endpoint, api_key.as_deref(), &event)
        })
        .await
        .map_err(|e| ShipError::Transport(e.to_string()))?
    }
}
