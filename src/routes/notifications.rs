use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use super::CallerBody;
use crate::dto::{NewNotification, NotificationResponse};
use crate::error::AppError;
use crate::services::NotificationService;
use crate::state::AppState;
use crate::utils::validation::require_name;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications).post(create_notification))
        .route("/{notification_id}/read", post(mark_read))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotificationQuery {
    user_id: Uuid,
    #[serde(default)]
    unread_only: bool,
}

async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<NotificationQuery>,
) -> Result<Json<Vec<NotificationResponse>>, AppError> {
    let found = NotificationService::for_user(&state.db, query.user_id, query.unread_only).await?;
    Ok(Json(found.into_iter().map(Into::into).collect()))
}

async fn create_notification(
    State(state): State<AppState>,
    Json(req): Json<NewNotification>,
) -> Result<impl IntoResponse, AppError> {
    require_name("kind", &req.kind)?;
    require_name("title", &req.title)?;

    let created = NotificationService::create(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(NotificationResponse::from(created))))
}

async fn mark_read(
    State(state): State<AppState>,
    Path(notification_id): Path<Uuid>,
    Json(req): Json<CallerBody>,
) -> Result<Json<NotificationResponse>, AppError> {
    let updated = NotificationService::mark_read(&state.db, notification_id, req.user_id).await?;
    Ok(Json(updated.into()))
}
