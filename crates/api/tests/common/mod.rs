#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use resman_api::config::ServerConfig;
use resman_api::router::build_app_router;
use resman_api::state::AppState;

/// Test `ServerConfig` with the development CORS origin.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the production router over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState { pool };
    build_app_router(state, &config)
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::GET, uri)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::DELETE, uri)).await
}

/// Bodyless POST, for endpoints driven by query parameters.
pub async fn post(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::POST, uri)).await
}

/// Bodyless PATCH, for endpoints driven by query parameters.
pub async fn patch(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::PATCH, uri)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::PUT, uri, body)).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// POST a JSON body, assert 201, and return the created row's id.
pub async fn create(pool: &PgPool, uri: &str, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), uri, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED, "POST {uri}");
    body_json(response).await["id"].as_i64().unwrap()
}

/// Employee, zone, dated project, station and assignment wired together.
pub struct Fixture {
    pub employee_id: i64,
    pub zone_id: i64,
    pub project_id: i64,
    pub station_id: i64,
    pub assignment_id: i64,
}

pub async fn seed_assignment(pool: &PgPool, start: &str, end: &str) -> Fixture {
    let employee_id = create(
        pool,
        "/employees",
        serde_json::json!({"firstname": "Ada", "lastname": "Lovelace"}),
    )
    .await;
    let zone_id = create(pool, "/zones", serde_json::json!({"name": "Hall A"})).await;
    let project_id = create(
        pool,
        "/projects",
        serde_json::json!({"name": "Line 7", "start_date": start, "end_date": end}),
    )
    .await;
    let station_id = create(
        pool,
        "/stations",
        serde_json::json!({"name": "ST-010", "project_id": project_id}),
    )
    .await;
    let assignment_id = create(
        pool,
        "/assignments",
        serde_json::json!({
            "employee_id": employee_id,
            "project_id": project_id,
            "zone_id": zone_id,
            "station_id": station_id,
        }),
    )
    .await;

    Fixture {
        employee_id,
        zone_id,
        project_id,
        station_id,
        assignment_id,
    }
}
