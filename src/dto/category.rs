use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::category;

/// POST /categories - Create a personal category
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub icon: String,
}

/// Result of seeding the system categories.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeOutcome {
    pub message: String,
    /// Number of categories inserted by this call (0 when already seeded).
    pub created: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub icon: String,
    pub is_system: bool,
    pub created_at: String,
}

impl From<category::Model> for CategoryResponse {
    fn from(category: category::Model) -> Self {
        Self {
            id: category.id,
            user_id: category.user_id,
            name: category.name,
            description: category.description,
            color: category.color,
            icon: category.icon,
            is_system: category.is_system,
            created_at: category.created_at.to_rfc3339(),
        }
    }
}
