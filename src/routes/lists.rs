use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use uuid::Uuid;

use super::{CallerBody, CallerQuery};
use crate::dto::{
    BulkItems, ItemResponse, ListDetailResponse, ListPatch, ListResponse, ListSummaryResponse,
    NewItem, NewList, UpdateList,
};
use crate::error::AppError;
use crate::services::{ItemService, ListService};
use crate::state::AppState;
use crate::utils::validation::{require_color, require_name, require_price, require_quantity};

/// Build the list route group: `/lists/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_user_lists).post(create_list))
        .route("/completed", get(get_completed_lists))
        .route(
            "/{list_id}",
            get(get_list).patch(update_list).delete(delete_list),
        )
        .route("/{list_id}/complete", post(complete_list))
        .route("/{list_id}/items", post(add_item))
        .route("/{list_id}/items/bulk", post(bulk_add_items))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BulkAddResponse {
    item_ids: Vec<Uuid>,
}

fn validate_patch(patch: &ListPatch) -> Result<(), AppError> {
    if let Some(name) = &patch.name {
        require_name("name", name)?;
    }
    require_color(patch.color.as_deref())
}

/// `GET /lists?userId=`. Open lists, newest first.
async fn get_user_lists(
    State(state): State<AppState>,
    Query(caller): Query<CallerQuery>,
) -> Result<Json<Vec<ListSummaryResponse>>, AppError> {
    let lists = ListService::open_lists(&state.db, caller.user_id).await?;
    Ok(Json(lists.into_iter().map(Into::into).collect()))
}

/// `GET /lists/completed?userId=`
async fn get_completed_lists(
    State(state): State<AppState>,
    Query(caller): Query<CallerQuery>,
) -> Result<Json<Vec<ListSummaryResponse>>, AppError> {
    let lists = ListService::completed_lists(&state.db, caller.user_id).await?;
    Ok(Json(lists.into_iter().map(Into::into).collect()))
}

/// `POST /lists`
async fn create_list(
    State(state): State<AppState>,
    Json(req): Json<NewList>,
) -> Result<impl IntoResponse, AppError> {
    require_name("name", &req.name)?;
    require_color(req.color.as_deref())?;

    let list = ListService::create(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(ListResponse::from(list))))
}

/// `GET /lists/:id?userId=`. `null` when the list is missing or belongs to someone else.
async fn get_list(
    State(state): State<AppState>,
    Path(list_id): Path<Uuid>,
    Query(caller): Query<CallerQuery>,
) -> Result<Json<Option<ListDetailResponse>>, AppError> {
    let detail = ListService::detail(&state.db, list_id, caller.user_id).await?;
    Ok(Json(detail.map(Into::into)))
}

/// `PATCH /lists/:id`
async fn update_list(
    State(state): State<AppState>,
    Path(list_id): Path<Uuid>,
    Json(req): Json<UpdateList>,
) -> Result<Json<ListResponse>, AppError> {
    validate_patch(&req.patch)?;

    let list = ListService::update(&state.db, list_id, req.user_id, req.patch).await?;
    Ok(Json(list.into()))
}

/// `DELETE /lists/:id?userId=`
async fn delete_list(
    State(state): State<AppState>,
    Path(list_id): Path<Uuid>,
    Query(caller): Query<CallerQuery>,
) -> Result<StatusCode, AppError> {
    ListService::delete(&state.db, list_id, caller.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /lists/:id/complete`
async fn complete_list(
    State(state): State<AppState>,
    Path(list_id): Path<Uuid>,
    Json(req): Json<CallerBody>,
) -> Result<Json<ListResponse>, AppError> {
    let list = ListService::complete(&state.db, list_id, req.user_id).await?;
    Ok(Json(list.into()))
}

/// `POST /lists/:id/items`
async fn add_item(
    State(state): State<AppState>,
    Path(list_id): Path<Uuid>,
    Json(req): Json<NewItem>,
) -> Result<impl IntoResponse, AppError> {
    require_name("name", &req.name)?;
    require_quantity(req.quantity)?;
    require_price(req.price)?;

    let item = ItemService::add(&state.db, list_id, req).await?;
    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// `POST /lists/:id/items/bulk`
async fn bulk_add_items(
    State(state): State<AppState>,
    Path(list_id): Path<Uuid>,
    Json(req): Json<BulkItems>,
) -> Result<impl IntoResponse, AppError> {
    if req.items.is_empty() {
        return Err(AppError::BadRequest("items must not be empty".to_string()));
    }
    for item in &req.items {
        require_name("name", &item.name)?;
        require_quantity(item.quantity)?;
    }

    let item_ids = ItemService::bulk_add(&state.db, list_id, req).await?;
    Ok((StatusCode::CREATED, Json(BulkAddResponse { item_ids })))
}
