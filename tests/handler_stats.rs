mod common;

use axum_test::TestServer;
use serde_json::{Value, json};

#[tokio::test]
async fn test_stats_not_found() {
    let (state, _rx, _store) = common::create_test_state();
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/stats/missing").await;

    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"].as_str().unwrap(), "Shortcode not found");
}

#[tokio::test]
async fn test_stats_projection_fields() {
    let (state, _rx, store) = common::create_test_state();
    let server = TestServer::new(common::test_router(state)).unwrap();

    common::seed_entry(&store, "proj", "https://example.com/page").await;

    // One click with a referrer, one without.
    server
        .get("/proj")
        .add_header("Referer", "https://google.com")
        .await;
    server.get("/proj").await;

    let response = server.get("/stats/proj").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["shortcode"], "proj");
    assert_eq!(body["originalUrl"], "https://example.com/page");
    assert!(body["createdAt"].is_string());
    assert!(body["expiry"].is_string());
    assert_eq!(body["totalClicks"], 2);

    let history = body["clickHistory"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["referrer"], "https://google.com");
    assert_eq!(history[0]["location"], "127.0.0.1");
    // Absent referrer is omitted from the wire format.
    assert!(history[1].get("referrer").is_none());
}

#[tokio::test]
async fn test_stats_unaffected_by_refused_redirect() {
    let (state, _rx, store) = common::create_test_state();
    let server = TestServer::new(common::test_router(state)).unwrap();

    common::seed_expired_entry(&store, "gone", "https://example.com").await;

    let redirect = server.get("/gone").await;
    assert_eq!(redirect.status_code(), 410);

    // Expired entries stay queryable and report the original count.
    let response = server.get("/stats/gone").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["totalClicks"], 0);
    assert_eq!(body["clickHistory"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_stats_route_wins_over_redirect_catch_all() {
    let (state, _rx, store) = common::create_test_state();
    let server = TestServer::new(common::test_router(state)).unwrap();

    common::seed_entry(&store, "abc", "https://example.com").await;

    // /stats/abc must hit the stats handler, not redirect with code "stats".
    let response = server.get("/stats/abc").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["shortcode"], "abc");
}

#[tokio::test]
async fn test_create_redirect_stats_scenario() {
    let (state, _rx, _store) = common::create_test_state();
    let server = TestServer::new(common::test_router(state)).unwrap();

    let created = server
        .post("/")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    assert_eq!(created.status_code(), 201);

    let body: Value = created.json();
    let short_link = body["shortLink"].as_str().unwrap();
    let code = short_link.rsplit('/').next().unwrap().to_string();
    assert_eq!(code.len(), 6);

    let redirect = server.get(&format!("/{code}")).await;
    assert_eq!(redirect.status_code(), 302);
    assert_eq!(redirect.header("location"), "https://example.com");

    let stats = server.get(&format!("/stats/{code}")).await;
    assert_eq!(stats.status_code(), 200);

    let stats_body: Value = stats.json();
    assert_eq!(stats_body["shortcode"], code);
    assert_eq!(stats_body["totalClicks"], 1);
}
