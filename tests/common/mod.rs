#![allow(dead_code)]

use axum_test::TestServer;
use hbnb::api::routes::api_routes;
use hbnb::application::{AmenityPolicy, HBnBFacade};
use hbnb::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

pub fn create_test_state() -> AppState {
    create_test_state_with(AmenityPolicy::Skip)
}

pub fn create_test_state_with(policy: AmenityPolicy) -> AppState {
    AppState::new(Arc::new(HBnBFacade::in_memory(policy)))
}

/// Serves the `/api/v1` routes at the root, without the top-level middleware.
pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(api_routes().with_state(state)).unwrap()
}

pub async fn create_user(server: &TestServer, first_name: &str, email: &str) -> Value {
    let response = server
        .post("/users")
        .json(&json!({
            "first_name": first_name,
            "last_name": "Tester",
            "email": email
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

pub async fn create_amenity(server: &TestServer, name: &str) -> Value {
    let response = server.post("/amenities").json(&json!({ "name": name })).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

pub async fn create_place(server: &TestServer, owner_id: &str, amenities: &[&str]) -> Value {
    let response = server
        .post("/places")
        .json(&json!({
            "title": "Cabin",
            "description": "Quiet cabin",
            "price": 200.0,
            "latitude": 45.0,
            "longitude": -120.0,
            "owner_id": owner_id,
            "amenities": amenities
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

pub fn id_of(record: &Value) -> String {
    record["id"].as_str().unwrap().to_string()
}
