#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use shorturls::api::routes::short_url_routes;
use shorturls::infrastructure::persistence::InMemoryShortUrlRepository;
use shorturls::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryShortUrlRepository::new()))
}

pub fn create_test_server() -> TestServer {
    let app: Router = short_url_routes().with_state(create_test_state());
    TestServer::new(app).unwrap()
}

/// Creates a short URL through the API and returns the response body.
pub async fn create_short_url(server: &TestServer, url: &str) -> Value {
    let response = server.post("/shorturls").json(&json!({ "url": url })).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}
