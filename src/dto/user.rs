use serde::Serialize;
use uuid::Uuid;

use crate::entities::{Role, user};

/// Identity fields carried by a `user.created` / `user.updated` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityUpsert {
    pub external_id: String,
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Per-user rollup computed by scanning the user's lists and items.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_lists: usize,
    pub completed_lists: usize,
    pub total_items: usize,
    pub completed_items: usize,
    pub categories_used: usize,
    pub avg_items_per_list: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub external_id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub role: Role,
    pub created_at: String,
    pub last_active_at: String,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            role: Role::from_str(&user.role).unwrap_or_default(),
            id: user.id,
            external_id: user.external_id,
            name: user.name,
            email: user.email,
            avatar_url: user.avatar_url,
            is_active: user.is_active,
            created_at: user.created_at.to_rfc3339(),
            last_active_at: user.last_active_at.to_rfc3339(),
        }
    }
}
