//! Items nested under shopping lists.

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, TransactionTrait,
};
use uuid::Uuid;

use crate::dto::{BulkItems, ItemPatch, NewItem};
use crate::entities::{list_item, shopping_list};
use crate::error::AppError;
use crate::services::activity::{ActivityAction, ActivityDetails, ActivityService, EntityType};
use crate::services::categories::CategoryService;
use crate::services::lists::ListService;
use crate::services::templates::TemplateService;

pub struct ItemService;

impl ItemService {
    /// Load an item only if `user_id` owns it.
    async fn require_owned<C: ConnectionTrait>(
        conn: &C,
        item_id: Uuid,
        user_id: Uuid,
    ) -> Result<list_item::Model, AppError> {
        list_item::Entity::find_by_id(item_id)
            .one(conn)
            .await?
            .filter(|item| item.user_id == user_id)
            .ok_or_else(AppError::item_not_found)
    }

    async fn touch_list<C: ConnectionTrait>(
        conn: &C,
        list_id: Uuid,
        now: chrono::DateTime<chrono::FixedOffset>,
    ) -> Result<(), AppError> {
        shopping_list::ActiveModel {
            id: Set(list_id),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(conn)
        .await?;
        Ok(())
    }

    /// Insert an item into a list owned by the caller, refresh the list, and record the
    /// item name as a template.
    pub async fn add(
        db: &DatabaseConnection,
        list_id: Uuid,
        request: NewItem,
    ) -> Result<list_item::Model, AppError> {
        let now = Utc::now().fixed_offset();
        let txn = db.begin().await?;

        let list = ListService::find_owned(&txn, list_id, request.user_id)
            .await?
            .ok_or_else(AppError::list_not_found)?;
        if let Some(category_id) = request.category_id {
            CategoryService::require_usable(&txn, category_id, list.user_id).await?;
        }

        let item = list_item::ActiveModel {
            id: Set(Uuid::new_v4()),
            list_id: Set(list.id),
            // Always the list owner, which the check above pins to the caller.
            user_id: Set(list.user_id),
            name: Set(request.name.clone()),
            description: Set(request.description.clone()),
            category_id: Set(request.category_id),
            quantity: Set(request.quantity),
            unit: Set(request.unit.clone()),
            price: Set(request.price),
            priority: Set(request.priority.as_str().to_string()),
            is_completed: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            completed_at: Set(None),
        }
        .insert(&txn)
        .await?;

        Self::touch_list(&txn, list.id, now).await?;
        TemplateService::record_usage(&txn, &request, now).await?;

        ActivityService::record(
            &txn,
            request.user_id,
            ActivityAction::AddItem,
            EntityType::ListItem,
            item.id,
            Some(ActivityDetails::ItemRef {
                name: item.name.clone(),
                list_id: list.id,
            }),
        )
        .await?;

        txn.commit().await?;

        Ok(item)
    }

    /// Insert many items at once. No templates are touched and a single summary entry is
    /// logged for the whole batch.
    pub async fn bulk_add(
        db: &DatabaseConnection,
        list_id: Uuid,
        request: BulkItems,
    ) -> Result<Vec<Uuid>, AppError> {
        let now = Utc::now().fixed_offset();
        let txn = db.begin().await?;

        let list = ListService::find_owned(&txn, list_id, request.user_id)
            .await?
            .ok_or_else(AppError::list_not_found)?;

        for category_id in request.items.iter().filter_map(|entry| entry.category_id) {
            CategoryService::require_usable(&txn, category_id, list.user_id).await?;
        }

        let mut item_ids = Vec::with_capacity(request.items.len());
        for entry in &request.items {
            let item = list_item::ActiveModel {
                id: Set(Uuid::new_v4()),
                list_id: Set(list.id),
                user_id: Set(list.user_id),
                name: Set(entry.name.clone()),
                description: Set(None),
                category_id: Set(entry.category_id),
                quantity: Set(entry.quantity),
                unit: Set(entry.unit.clone()),
                price: Set(None),
                priority: Set(entry.priority.as_str().to_string()),
                is_completed: Set(false),
                created_at: Set(now),
                updated_at: Set(now),
                completed_at: Set(None),
            }
            .insert(&txn)
            .await?;
            item_ids.push(item.id);
        }

        Self::touch_list(&txn, list.id, now).await?;

        ActivityService::record(
            &txn,
            request.user_id,
            ActivityAction::BulkAddItems,
            EntityType::ShoppingList,
            list.id,
            Some(ActivityDetails::BulkAdd {
                item_count: request.items.len(),
            }),
        )
        .await?;

        txn.commit().await?;

        Ok(item_ids)
    }

    /// Apply a sparse patch. `completed_at` follows `is_completed` when it is present.
    pub async fn update(
        db: &DatabaseConnection,
        item_id: Uuid,
        user_id: Uuid,
        patch: ItemPatch,
    ) -> Result<list_item::Model, AppError> {
        let now = Utc::now().fixed_offset();
        let txn = db.begin().await?;
        let item = Self::require_owned(&txn, item_id, user_id).await?;
        let list_id = item.list_id;
        if let Some(category_id) = patch.category_id {
            CategoryService::require_usable(&txn, category_id, user_id).await?;
        }

        let mut active: list_item::ActiveModel = item.into();
        if let Some(name) = &patch.name {
            active.name = Set(name.clone());
        }
        if let Some(description) = &patch.description {
            active.description = Set(Some(description.clone()));
        }
        if let Some(category_id) = patch.category_id {
            active.category_id = Set(Some(category_id));
        }
        if let Some(quantity) = patch.quantity {
            active.quantity = Set(quantity);
        }
        if let Some(unit) = &patch.unit {
            active.unit = Set(Some(unit.clone()));
        }
        if let Some(price) = patch.price {
            active.price = Set(Some(price));
        }
        if let Some(priority) = patch.priority {
            active.priority = Set(priority.as_str().to_string());
        }
        if let Some(is_completed) = patch.is_completed {
            active.is_completed = Set(is_completed);
            active.completed_at = Set(is_completed.then_some(now));
        }
        active.updated_at = Set(now);
        let updated = active.update(&txn).await?;

        Self::touch_list(&txn, list_id, now).await?;

        let action = if patch.is_completed.is_some() {
            ActivityAction::ToggleItem
        } else {
            ActivityAction::UpdateItem
        };
        ActivityService::record(
            &txn,
            user_id,
            action,
            EntityType::ListItem,
            item_id,
            Some(ActivityDetails::ItemChanges(patch)),
        )
        .await?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Remove an item and refresh its list's `updated_at`.
    pub async fn delete(
        db: &DatabaseConnection,
        item_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), AppError> {
        let now = Utc::now().fixed_offset();
        let txn = db.begin().await?;
        let item = Self::require_owned(&txn, item_id, user_id).await?;

        Self::touch_list(&txn, item.list_id, now).await?;
        list_item::Entity::delete_by_id(item_id).exec(&txn).await?;

        ActivityService::record(
            &txn,
            user_id,
            ActivityAction::DeleteItem,
            EntityType::ListItem,
            item_id,
            Some(ActivityDetails::ItemRef {
                name: item.name,
                list_id: item.list_id,
            }),
        )
        .await?;

        txn.commit().await?;

        Ok(())
    }
}
