//! Append-only audit trail of mutating actions.

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::{ItemPatch, ListPatch};
use crate::entities::{Role, activity_log};
use crate::error::AppError;

/// Default page size for [`ActivityService::recent`].
pub const DEFAULT_RECENT_LIMIT: u64 = 10;

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityAction {
    CreateList,
    UpdateList,
    DeleteList,
    CompleteList,
    AddItem,
    BulkAddItems,
    UpdateItem,
    ToggleItem,
    DeleteItem,
    CreateCategory,
    SuspendUser,
    ReactivateUser,
    ToggleUserStatus,
    SetUserRole,
    DeleteUser,
}

impl ActivityAction {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreateList => "create_list",
            Self::UpdateList => "update_list",
            Self::DeleteList => "delete_list",
            Self::CompleteList => "complete_list",
            Self::AddItem => "add_item",
            Self::BulkAddItems => "bulk_add_items",
            Self::UpdateItem => "update_item",
            Self::ToggleItem => "toggle_item",
            Self::DeleteItem => "delete_item",
            Self::CreateCategory => "create_category",
            Self::SuspendUser => "suspend_user",
            Self::ReactivateUser => "reactivate_user",
            Self::ToggleUserStatus => "toggle_user_status",
            Self::SetUserRole => "set_user_role",
            Self::DeleteUser => "delete_user",
        }
    }
}

/// Kind of record an entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    ShoppingList,
    ListItem,
    Category,
    User,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ShoppingList => "shopping_list",
            Self::ListItem => "list_item",
            Self::Category => "category",
            Self::User => "user",
        }
    }
}

/// Per-action detail payload, stored as tagged JSON.
///
/// | action                                   | shape          |
/// |------------------------------------------|----------------|
/// | create/delete/complete list, create category | `Named`    |
/// | update_list                              | `ListChanges`  |
/// | add_item, delete_item                    | `ItemRef`      |
/// | update_item, toggle_item                 | `ItemChanges`  |
/// | bulk_add_items                           | `BulkAdd`      |
/// | suspend/reactivate/toggle/delete user    | `TargetUser`   |
/// | set_user_role                            | `RoleChange`   |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ActivityDetails {
    Named { name: String },
    ListChanges(ListPatch),
    ItemRef { name: String, list_id: Uuid },
    ItemChanges(ItemPatch),
    BulkAdd { item_count: usize },
    TargetUser { target_user: String },
    RoleChange { target_user: String, role: Role },
}

pub struct ActivityService;

impl ActivityService {
    /// Append one entry. Runs on whatever connection or transaction the caller holds.
    pub async fn record<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        action: ActivityAction,
        entity_type: EntityType,
        entity_id: Uuid,
        details: Option<ActivityDetails>,
    ) -> Result<activity_log::Model, AppError> {
        let details = details.map(|d| serde_json::to_value(&d)).transpose()?;

        let entry = activity_log::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            action: Set(action.as_str().to_string()),
            entity_type: Set(entity_type.as_str().to_string()),
            entity_id: Set(entity_id.to_string()),
            details: Set(details),
            created_at: Set(Utc::now().fixed_offset()),
        };

        Ok(entry.insert(conn).await?)
    }

    /// The most recent `limit` entries for a user, newest first.
    pub async fn recent(
        db: &DatabaseConnection,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<activity_log::Model>, AppError> {
        let entries = activity_log::Entity::find()
            .filter(activity_log::Column::UserId.eq(user_id))
            .order_by_desc(activity_log::Column::CreatedAt)
            .limit(limit)
            .all(db)
            .await?;

        Ok(entries)
    }
}
