#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::ConnectInfo;
use axum::routing::{get, post};
use chrono::{DateTime, Duration, Utc};
use tokio::sync::mpsc;

use shortlinks::api::handlers::{redirect_handler, shorten_handler, stats_handler};
use shortlinks::domain::entities::UrlEntry;
use shortlinks::domain::repositories::UrlRepository;
use shortlinks::infrastructure::logging::{LogEvent, RemoteLogger};
use shortlinks::infrastructure::store::InMemoryUrlStore;
use shortlinks::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// Builds a fresh state over an empty store, returning the log queue receiver
/// so tests can assert on emitted events and the store for direct seeding.
pub fn create_test_state() -> (AppState, mpsc::Receiver<LogEvent>, Arc<InMemoryUrlStore>) {
    let store = Arc::new(InMemoryUrlStore::new());
    let (logger, rx) = RemoteLogger::channel(100);

    let state = AppState::new(store.clone(), TEST_BASE_URL.to_string(), logger);

    (state, rx, store)
}

/// Full application route set with a mocked peer address.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state)
}

pub async fn seed_entry(store: &InMemoryUrlStore, code: &str, url: &str) {
    let now = Utc::now();
    seed_entry_with_expiry(store, code, url, now, now + Duration::minutes(30)).await;
}

pub async fn seed_expired_entry(store: &InMemoryUrlStore, code: &str, url: &str) {
    let now = Utc::now();
    seed_entry_with_expiry(store, code, url, now - Duration::hours(1), now - Duration::minutes(1))
        .await;
}

pub async fn seed_entry_with_expiry(
    store: &InMemoryUrlStore,
    code: &str,
    url: &str,
    created_at: DateTime<Utc>,
    expiry: DateTime<Utc>,
) {
    let entry = UrlEntry::new(code.to_string(), url.to_string(), created_at, expiry);
    store.insert(entry).await.unwrap();
}

/// Injects a fixed `ConnectInfo` peer address, since `TestServer` requests do
/// not go through a real socket.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
