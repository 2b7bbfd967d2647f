use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use crate::dto::{UserResponse, UserStats};
use crate::error::AppError;
use crate::services::{IdentityService, StatsService};
use crate::state::AppState;

/// Build the user route group: `/users/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/external/{external_id}", get(get_current_user))
        .route("/{user_id}/stats", get(get_user_stats))
}

/// `GET /users/external/:externalId`. `null` when no user has synced yet.
async fn get_current_user(
    State(state): State<AppState>,
    Path(external_id): Path<String>,
) -> Result<Json<Option<UserResponse>>, AppError> {
    let user = IdentityService::find_by_external_id(&state.db, &external_id).await?;
    Ok(Json(user.map(UserResponse::from)))
}

/// `GET /users/:userId/stats`
async fn get_user_stats(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserStats>, AppError> {
    Ok(Json(StatsService::user_stats(&state.db, user_id).await?))
}
