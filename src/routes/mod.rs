mod activity;
mod admin;
mod categories;
mod health;
mod items;
mod lists;
mod notifications;
mod templates;
mod users;
mod webhooks;

use axum::Router;
use serde::Deserialize;
use uuid::Uuid;

use crate::state::AppState;

/// Build the complete application router.
///
/// Structure:
/// - `GET /health` lightweight liveness check
/// - `POST /webhooks/identity` signed identity-provider events
/// - `/api/v1/...` the JSON API, including a detailed health check
pub fn router() -> Router<AppState> {
    let api_v1 = Router::new()
        .merge(health::api_router())
        .nest("/users", users::router())
        .nest("/lists", lists::router())
        .nest("/items", items::router())
        .nest("/templates", templates::router())
        .nest("/categories", categories::router())
        .nest("/activity", activity::router())
        .nest("/notifications", notifications::router())
        .nest("/admin", admin::router());

    Router::new()
        .merge(health::root_router())
        .nest("/webhooks", webhooks::router())
        .nest("/api/v1", api_v1)
}

/// `?userId=` on reads and deletes, where there is no body to carry the caller.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CallerQuery {
    user_id: Uuid,
}

/// Body for actions that carry nothing but the caller.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CallerBody {
    user_id: Uuid,
}
