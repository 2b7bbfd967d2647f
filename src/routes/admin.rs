use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use uuid::Uuid;

use crate::dto::{AdminBody, AdminUsersQuery, CascadeSummary, SetRoleRequest, UserResponse};
use crate::error::AppError;
use crate::services::AdminService;
use crate::state::AppState;

/// Build the admin route group: `/admin/...`. Every route requires `adminId` to resolve
/// to a user with the admin role.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_all_users))
        .route("/users/{user_id}", delete(delete_user))
        .route("/users/{user_id}/suspend", post(suspend_user))
        .route("/users/{user_id}/reactivate", post(reactivate_user))
        .route("/users/{user_id}/toggle-status", post(toggle_user_status))
        .route("/users/{user_id}/role", patch(set_user_role))
}

/// `GET /admin/users?adminId=&search=&isActive=`
async fn get_all_users(
    State(state): State<AppState>,
    Query(query): Query<AdminUsersQuery>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = AdminService::list_users(
        &state.db,
        &query.admin_id,
        query.search.as_deref(),
        query.is_active,
    )
    .await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

async fn suspend_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<AdminBody>,
) -> Result<Json<UserResponse>, AppError> {
    let user = AdminService::suspend(&state.db, &req.admin_id, user_id).await?;
    Ok(Json(user.into()))
}

async fn reactivate_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<AdminBody>,
) -> Result<Json<UserResponse>, AppError> {
    let user = AdminService::reactivate(&state.db, &req.admin_id, user_id).await?;
    Ok(Json(user.into()))
}

async fn toggle_user_status(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<AdminBody>,
) -> Result<Json<UserResponse>, AppError> {
    let user = AdminService::toggle_status(&state.db, &req.admin_id, user_id).await?;
    Ok(Json(user.into()))
}

async fn set_user_role(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<SetRoleRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = AdminService::set_role(&state.db, &req.admin_id, user_id, req.role).await?;
    Ok(Json(user.into()))
}

/// `DELETE /admin/users/:id?adminId=`. Returns what the cascade removed.
async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(req): Query<AdminBody>,
) -> Result<Json<CascadeSummary>, AppError> {
    Ok(Json(
        AdminService::delete_user(&state.db, &req.admin_id, user_id).await?,
    ))
}
