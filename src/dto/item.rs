use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::CategoryResponse;
use crate::entities::{Priority, category, list_item};

// ============ Request DTOs ============

/// POST /lists/:id/items - Add item request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub quantity: i32,
    pub unit: Option<String>,
    pub price: Option<f64>,
    pub priority: Priority,
}

/// One entry of a bulk import. Bulk entries carry no price or description.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkItem {
    pub name: String,
    pub quantity: i32,
    pub unit: Option<String>,
    pub priority: Priority,
    pub category_id: Option<Uuid>,
}

/// POST /lists/:id/items/bulk - Bulk add request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkItems {
    pub user_id: Uuid,
    pub items: Vec<BulkItem>,
}

/// Sparse item update: only fields present in the request are touched.
///
/// Also serialized into the `update_item` / `toggle_item` activity entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

/// PATCH /items/:id - Update item request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub patch: ItemPatch,
}

// ============ Response DTOs ============

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: Uuid,
    pub list_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub quantity: i32,
    pub unit: Option<String>,
    pub price: Option<f64>,
    pub priority: Priority,
    pub is_completed: bool,
    pub created_at: String,
    pub updated_at: String,
    pub completed_at: Option<String>,
}

impl From<list_item::Model> for ItemResponse {
    fn from(item: list_item::Model) -> Self {
        Self {
            id: item.id,
            list_id: item.list_id,
            user_id: item.user_id,
            name: item.name,
            description: item.description,
            category_id: item.category_id,
            quantity: item.quantity,
            unit: item.unit,
            price: item.price,
            priority: Priority::from_stored(&item.priority),
            is_completed: item.is_completed,
            created_at: item.created_at.to_rfc3339(),
            updated_at: item.updated_at.to_rfc3339(),
            completed_at: item.completed_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// An item with its category resolved; `category` is null when unset or deleted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemWithCategoryResponse {
    #[serde(flatten)]
    pub item: ItemResponse,
    pub category: Option<CategoryResponse>,
}

impl From<(list_item::Model, Option<category::Model>)> for ItemWithCategoryResponse {
    fn from((item, category): (list_item::Model, Option<category::Model>)) -> Self {
        Self {
            item: item.into(),
            category: category.map(CategoryResponse::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_item_flattens_patch() {
        let body = serde_json::json!({
            "userId": Uuid::nil(),
            "isCompleted": true,
            "quantity": 3,
        });
        let parsed: Result<UpdateItem, _> = serde_json::from_value(body);
        assert!(parsed.is_ok());
        let patch = parsed.map(|u| u.patch).unwrap_or_default();
        assert_eq!(patch.is_completed, Some(true));
        assert_eq!(patch.quantity, Some(3));
        assert_eq!(patch.name, None);
    }

    #[test]
    fn test_new_item_requires_priority() {
        let mut body = serde_json::json!({
            "userId": Uuid::nil(),
            "name": "Bread",
            "quantity": 1,
        });
        assert!(serde_json::from_value::<NewItem>(body.clone()).is_err());

        body["priority"] = serde_json::json!("low");
        let parsed: Result<NewItem, _> = serde_json::from_value(body);
        assert_eq!(parsed.map(|i| i.priority).ok(), Some(Priority::Low));
    }
}
