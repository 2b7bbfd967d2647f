use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::patch;
use axum::{Json, Router};
use uuid::Uuid;

use super::CallerQuery;
use crate::dto::{ItemResponse, UpdateItem};
use crate::error::AppError;
use crate::services::ItemService;
use crate::state::AppState;
use crate::utils::validation::{require_name, require_price, require_quantity};

/// Build the item route group: `/items/...`. Items are created under `/lists/:id/items`.
pub fn router() -> Router<AppState> {
    Router::new().route("/{item_id}", patch(update_item).delete(delete_item))
}

/// `PATCH /items/:id`
async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
    Json(req): Json<UpdateItem>,
) -> Result<Json<ItemResponse>, AppError> {
    if let Some(name) = &req.patch.name {
        require_name("name", name)?;
    }
    if let Some(quantity) = req.patch.quantity {
        require_quantity(quantity)?;
    }
    require_price(req.patch.price)?;

    let item = ItemService::update(&state.db, item_id, req.user_id, req.patch).await?;
    Ok(Json(item.into()))
}

/// `DELETE /items/:id?userId=`
async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
    Query(caller): Query<CallerQuery>,
) -> Result<StatusCode, AppError> {
    ItemService::delete(&state.db, item_id, caller.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
