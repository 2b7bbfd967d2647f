#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use shoplist_api::config::{Config, Environment};
use shoplist_api::dto::IdentityUpsert;
use shoplist_api::entities::{Role, user};
use shoplist_api::services::IdentityService;
use shoplist_api::state::AppState;

/// Base64 of the 24-byte key `shoplist-webhook-secret!`.
pub const WEBHOOK_SECRET: &str = "whsec_c2hvcGxpc3Qtd2ViaG9vay1zZWNyZXQh";

pub fn test_config(identity_webhook_secret: Option<&str>) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: std::net::IpAddr::from([127, 0, 0, 1]),
        server_port: 0,
        environment: Environment::Development,
        log_level: "warn".to_string(),
        frontend_url: "http://localhost:3001".to_string(),
        identity_webhook_secret: identity_webhook_secret.map(str::to_string),
    }
}

/// Build the app router backed by an in-memory `SQLite` database with migrations.
///
/// The connection is returned too so tests can seed and inspect rows directly.
pub async fn test_app() -> (Router, DatabaseConnection) {
    test_app_with(test_config(Some(WEBHOOK_SECRET))).await
}

pub async fn test_app_with(config: Config) -> (Router, DatabaseConnection) {
    let db = shoplist_api::db::connect("sqlite::memory:")
        .await
        .unwrap_or_default();
    Migrator::up(&db, None).await.unwrap_or_default();

    let state = AppState {
        db: db.clone(),
        config,
    };

    (shoplist_api::routes::router().with_state(state), db)
}

/// Insert a user the way the identity webhook would and return its id.
pub async fn create_user(db: &DatabaseConnection, external_id: &str) -> Uuid {
    let user = IdentityService::upsert(
        db,
        IdentityUpsert {
            external_id: external_id.to_string(),
            email: format!("{external_id}@example.com"),
            name: format!("User {external_id}"),
            avatar_url: None,
        },
    )
    .await;
    assert!(user.is_ok(), "user upsert failed: {user:?}");
    user.map(|u| u.id).unwrap_or_default()
}

/// Create a user and give them the admin role.
pub async fn create_admin(db: &DatabaseConnection, external_id: &str) -> Uuid {
    let id = create_user(db, external_id).await;
    let found = user::Entity::find_by_id(id).one(db).await.ok().flatten();
    assert!(found.is_some(), "admin user missing");
    if let Some(found) = found {
        let mut active: user::ActiveModel = found.into();
        active.role = Set(Role::Admin.as_str().to_string());
        assert!(active.update(db).await.is_ok(), "promotion failed");
    }
    id
}

pub fn json(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or(Value::Null)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();
    let body_str = String::from_utf8(body.to_vec()).unwrap_or_default();

    (status, body_str)
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_default()
}

/// Test helper: send a GET request to the app and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_default();
    send(app, request).await
}

/// Test helper: send a DELETE request to the app and return (status, body).
pub async fn delete(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_default();
    send(app, request).await
}

/// Test helper: send a POST request with a JSON body and return (status, body).
pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, String) {
    send(app, json_request("POST", uri, body)).await
}

/// Test helper: send a PATCH request with a JSON body and return (status, body).
pub async fn patch_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, String) {
    send(app, json_request("PATCH", uri, body)).await
}

/// Test helper: POST a raw body with extra headers.
pub async fn post_raw(
    app: &Router,
    uri: &str,
    headers: &[(&str, &str)],
    body: &str,
) -> (StatusCode, String) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap_or_default()).await
}
