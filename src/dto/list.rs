use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::item::ItemWithCategoryResponse;
use crate::entities::{Priority, category, list_item, shopping_list};

// ============ Request DTOs ============

/// POST /lists - Create list request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewList {
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub scheduled_date: Option<DateTime<FixedOffset>>,
    pub color: Option<String>,
}

/// Sparse list update: only fields present in the request are touched.
///
/// Also serialized into the `update_list` activity entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// PATCH /lists/:id - Update list request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateList {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub patch: ListPatch,
}

// ============ Derived values ============

/// Aggregates recomputed from a list's items on every read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTotals {
    pub item_count: usize,
    pub completed_count: usize,
    /// Sum of item prices; items without a price count as 0.
    pub total_price: f64,
}

impl ListTotals {
    #[must_use]
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a list_item::Model>) -> Self {
        items.into_iter().fold(Self::default(), |mut totals, item| {
            totals.item_count += 1;
            if item.is_completed {
                totals.completed_count += 1;
            }
            totals.total_price += item.price.unwrap_or(0.0);
            totals
        })
    }
}

/// A list together with its derived totals.
#[derive(Debug, Clone)]
pub struct ListSummary {
    pub list: shopping_list::Model,
    pub totals: ListTotals,
}

/// A list with its items (each resolved to its category) and derived totals.
#[derive(Debug, Clone)]
pub struct ListDetail {
    pub list: shopping_list::Model,
    pub items: Vec<(list_item::Model, Option<category::Model>)>,
    pub totals: ListTotals,
}

// ============ Response DTOs ============

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub scheduled_date: Option<String>,
    pub priority: Priority,
    pub color: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub completed_at: Option<String>,
}

impl From<shopping_list::Model> for ListResponse {
    fn from(list: shopping_list::Model) -> Self {
        Self {
            id: list.id,
            user_id: list.user_id,
            name: list.name,
            description: list.description,
            is_completed: list.is_completed,
            scheduled_date: list.scheduled_date.map(|t| t.to_rfc3339()),
            priority: Priority::from_stored(&list.priority),
            color: list.color,
            created_at: list.created_at.to_rfc3339(),
            updated_at: list.updated_at.to_rfc3339(),
            completed_at: list.completed_at.map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSummaryResponse {
    #[serde(flatten)]
    pub list: ListResponse,
    #[serde(flatten)]
    pub totals: ListTotals,
}

impl From<ListSummary> for ListSummaryResponse {
    fn from(summary: ListSummary) -> Self {
        Self {
            list: summary.list.into(),
            totals: summary.totals,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDetailResponse {
    #[serde(flatten)]
    pub list: ListResponse,
    pub items: Vec<ItemWithCategoryResponse>,
    #[serde(flatten)]
    pub totals: ListTotals,
}

impl From<ListDetail> for ListDetailResponse {
    fn from(detail: ListDetail) -> Self {
        Self {
            list: detail.list.into(),
            items: detail
                .items
                .into_iter()
                .map(ItemWithCategoryResponse::from)
                .collect(),
            totals: detail.totals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(price: Option<f64>, is_completed: bool) -> list_item::Model {
        let now = Utc::now().fixed_offset();
        list_item::Model {
            id: Uuid::new_v4(),
            list_id: Uuid::nil(),
            user_id: Uuid::nil(),
            name: "Milk".to_string(),
            description: None,
            category_id: None,
            quantity: 1,
            unit: None,
            price,
            priority: "medium".to_string(),
            is_completed,
            created_at: now,
            updated_at: now,
            completed_at: is_completed.then_some(now),
        }
    }

    #[test]
    fn test_totals_of_empty_list() {
        let totals = ListTotals::from_items(&Vec::<list_item::Model>::new());
        assert_eq!(totals, ListTotals::default());
    }

    #[test]
    fn test_totals_treat_missing_price_as_zero() {
        let items = vec![item(Some(3.5), true), item(None, false), item(Some(1.25), false)];
        let totals = ListTotals::from_items(&items);
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.completed_count, 1);
        assert!((totals.total_price - 4.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = ListPatch {
            name: Some("Weekend".to_string()),
            priority: Some(Priority::High),
            ..ListPatch::default()
        };
        let value = serde_json::to_value(&patch).unwrap_or_default();
        assert_eq!(value, serde_json::json!({ "name": "Weekend", "priority": "high" }));
    }
}
