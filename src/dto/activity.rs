use serde::Serialize;
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::entities::activity_log;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub action: String,
    pub entity_type: String,
    pub entity_id: String,
    pub details: Option<JsonValue>,
    pub created_at: String,
}

impl From<activity_log::Model> for ActivityResponse {
    fn from(entry: activity_log::Model) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            action: entry.action,
            entity_type: entry.entity_type,
            entity_id: entry.entity_id,
            details: entry.details,
            created_at: entry.created_at.to_rfc3339(),
        }
    }
}
