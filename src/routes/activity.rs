use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use crate::dto::ActivityResponse;
use crate::error::AppError;
use crate::services::ActivityService;
use crate::services::activity::DEFAULT_RECENT_LIMIT;
use crate::state::AppState;
use crate::utils::validation::clamp_limit;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_recent_activity))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivityQuery {
    user_id: Uuid,
    limit: Option<u64>,
}

/// `GET /activity?userId=&limit=`
async fn get_recent_activity(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> Result<Json<Vec<ActivityResponse>>, AppError> {
    let limit = clamp_limit(query.limit, DEFAULT_RECENT_LIMIT);
    let entries = ActivityService::recent(&state.db, query.user_id, limit).await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}
