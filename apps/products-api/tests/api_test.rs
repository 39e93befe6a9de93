//! Integration tests for the assembled application router.
//!
//! The router under test is exactly what `main` serves; only the database
//! connection is a SeaORM mock, so no external services are required.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use axum_helpers::{BearerAuth, TokenConfig, TRACE_ID_HEADER};
use core_config::server::ServerConfig;
use database::postgres::PostgresConfig;
use http_body_util::BodyExt;
use products_api::build_router;
use products_api::config::{Config, Environment};
use products_api::state::AppState;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use serde_json::{json, Value};
use tower::ServiceExt;

const TEST_SECRET: &str = "integration-test-secret-at-least-32-chars";

fn app_with(db: DatabaseConnection) -> Router {
    let config = Config {
        database: PostgresConfig::new("postgresql://localhost/products"),
        server: ServerConfig::default(),
        token: TokenConfig::new(TEST_SECRET),
        environment: Environment::Development,
    };
    let auth = BearerAuth::new(&config.token);
    let state = AppState { config, db, auth };

    build_router(&state)
}

fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

fn db_accepting_one_insert() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            rows_affected: 1,
            ..Default::default()
        }])
        .into_connection()
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn obtain_token(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/get-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    body["token"].as_str().unwrap().to_string()
}

fn valid_product() -> Value {
    json!({
        "name": "Test Product",
        "description": "Test Description",
        "price": 19.99,
        "colour": "Red"
    })
}

fn create_request(token: Option<&str>, body: String) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/products")
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::from(body)).unwrap()
}

#[tokio::test]
async fn get_token_returns_token() {
    let app = app_with(empty_db());
    let token = obtain_token(&app).await;

    assert!(!token.is_empty());
}

#[tokio::test]
async fn create_product_without_token_returns_401_problem() {
    let app = app_with(empty_db());

    let response = app
        .oneshot(create_request(None, valid_product().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));

    let body = json_body(response.into_body()).await;
    assert_eq!(body["title"], "No token provided");
    assert_eq!(body["status"], 401);
    assert_eq!(body["instance"], "/api/products");
    assert!(body["traceId"].is_string());
}

#[tokio::test]
async fn list_products_without_token_returns_401() {
    let app = app_with(empty_db());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn tampered_token_is_rejected() {
    let app = app_with(empty_db());
    let token = obtain_token(&app).await;

    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/products")
                .header(header::AUTHORIZATION, format!("Bearer {}", tampered))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["title"], "Invalid token");
}

#[tokio::test]
async fn create_product_with_valid_token_returns_201() {
    let app = app_with(db_accepting_one_insert());
    let token = obtain_token(&app).await;

    let response = app
        .oneshot(create_request(Some(&token), valid_product().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let body = json_body(response.into_body()).await;

    assert_eq!(location, format!("/api/products/{}", body["id"].as_str().unwrap()));
    assert_eq!(body["name"], "Test Product");
    assert_eq!(body["colour"], "Red");
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn create_product_with_invalid_data_names_every_field() {
    // No exec results are queued: if validation failed to short-circuit, the
    // insert would error and this would surface as a 500 instead.
    let app = app_with(empty_db());
    let token = obtain_token(&app).await;

    let invalid = json!({
        "name": "",
        "description": "AB",
        "price": -10,
        "colour": ""
    });

    let response = app
        .oneshot(create_request(Some(&token), invalid.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["title"], "One or more validation errors occurred.");
    let errors = body["errors"].as_object().unwrap();
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("description"));
    assert!(errors.contains_key("price"));
    assert!(errors.contains_key("colour"));
}

#[tokio::test]
async fn create_product_with_malformed_json_returns_400() {
    let app = app_with(empty_db());
    let token = obtain_token(&app).await;

    let response = app
        .oneshot(create_request(Some(&token), "{not json".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["title"], "Invalid JSON in request body");
}

#[tokio::test]
async fn list_products_with_valid_token_returns_200() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<domain_products::entity::Model>::new()])
        .into_connection();
    let app = app_with(db);
    let token = obtain_token(&app).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/products")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn unknown_route_returns_problem_404() {
    let app = app_with(empty_db());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["instance"], "/does-not-exist");
}

#[tokio::test]
async fn get_token_with_wrong_method_returns_problem_405() {
    let app = app_with(empty_db());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/get-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], 405);
}

#[tokio::test]
async fn health_reports_database_check() {
    let mut row = std::collections::BTreeMap::new();
    row.insert("?column?", sea_orm::Value::Int(Some(1)));

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();
    let app = app_with(db);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"], "connected");
    assert_eq!(body["checks"]["self"], "connected");
}
