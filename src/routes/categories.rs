use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use crate::dto::{CategoryResponse, InitializeOutcome, NewCategory};
use crate::error::AppError;
use crate::services::CategoryService;
use crate::state::AppState;
use crate::utils::validation::{require_color, require_name};

/// Build the category route group: `/categories/...`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_categories).post(create_category))
        .route("/initialize", post(initialize_system_categories))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryQuery {
    user_id: Option<Uuid>,
}

/// `GET /categories?userId=`. System categories, then the user's own.
async fn get_categories(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let categories = CategoryService::list(&state.db, query.user_id).await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// `POST /categories`
async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<NewCategory>,
) -> Result<impl IntoResponse, AppError> {
    require_name("name", &req.name)?;
    require_color(Some(&req.color))?;

    let category = CategoryService::create(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}

/// `POST /categories/initialize`
async fn initialize_system_categories(
    State(state): State<AppState>,
) -> Result<Json<InitializeOutcome>, AppError> {
    Ok(Json(CategoryService::initialize_system(&state.db).await?))
}
