use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use crate::dto::TemplateResponse;
use crate::error::AppError;
use crate::services::TemplateService;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_item_templates))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TemplateQuery {
    user_id: Uuid,
    search: Option<String>,
}

/// `GET /templates?userId=&search=`
async fn get_item_templates(
    State(state): State<AppState>,
    Query(query): Query<TemplateQuery>,
) -> Result<Json<Vec<TemplateResponse>>, AppError> {
    let templates =
        TemplateService::suggestions(&state.db, query.user_id, query.search.as_deref()).await?;
    Ok(Json(templates.into_iter().map(Into::into).collect()))
}
