use serde::Serialize;
use uuid::Uuid;

use crate::entities::item_template;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category_id: Option<Uuid>,
    pub default_quantity: i32,
    pub default_unit: Option<String>,
    pub usage_count: i64,
    pub last_used: String,
    pub created_at: String,
}

impl From<item_template::Model> for TemplateResponse {
    fn from(template: item_template::Model) -> Self {
        Self {
            id: template.id,
            user_id: template.user_id,
            name: template.name,
            category_id: template.category_id,
            default_quantity: template.default_quantity,
            default_unit: template.default_unit,
            usage_count: template.usage_count,
            last_used: template.last_used.to_rfc3339(),
            created_at: template.created_at.to_rfc3339(),
        }
    }
}
