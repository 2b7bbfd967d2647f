//! Shopping lists: ownership checks, mutations and read-time aggregates.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::dto::{ListDetail, ListPatch, ListSummary, ListTotals, NewList};
use crate::entities::{category, list_item, shopping_list};
use crate::error::AppError;
use crate::services::activity::{ActivityAction, ActivityDetails, ActivityService, EntityType};

pub struct ListService;

impl ListService {
    /// Load a list only if `user_id` owns it. Missing and foreign lists both yield `None`.
    pub async fn find_owned<C: ConnectionTrait>(
        conn: &C,
        list_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<shopping_list::Model>, AppError> {
        let list = shopping_list::Entity::find_by_id(list_id)
            .one(conn)
            .await?
            .filter(|list| list.user_id == user_id);
        Ok(list)
    }

    async fn require_owned<C: ConnectionTrait>(
        conn: &C,
        list_id: Uuid,
        user_id: Uuid,
    ) -> Result<shopping_list::Model, AppError> {
        Self::find_owned(conn, list_id, user_id)
            .await?
            .ok_or_else(AppError::list_not_found)
    }

    /// Create a list. The name is expected to be validated by the caller.
    pub async fn create(
        db: &DatabaseConnection,
        request: NewList,
    ) -> Result<shopping_list::Model, AppError> {
        let now = Utc::now().fixed_offset();
        let txn = db.begin().await?;

        let list = shopping_list::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(request.user_id),
            name: Set(request.name),
            description: Set(request.description),
            is_completed: Set(false),
            scheduled_date: Set(request.scheduled_date),
            priority: Set(request.priority.as_str().to_string()),
            color: Set(request.color),
            created_at: Set(now),
            updated_at: Set(now),
            completed_at: Set(None),
        }
        .insert(&txn)
        .await?;

        ActivityService::record(
            &txn,
            list.user_id,
            ActivityAction::CreateList,
            EntityType::ShoppingList,
            list.id,
            Some(ActivityDetails::Named {
                name: list.name.clone(),
            }),
        )
        .await?;

        txn.commit().await?;

        Ok(list)
    }

    /// Open lists, newest first, with totals.
    pub async fn open_lists(
        db: &DatabaseConnection,
        user_id: Uuid,
    ) -> Result<Vec<ListSummary>, AppError> {
        Self::lists_by_completion(db, user_id, false).await
    }

    /// Completed lists, newest first, with totals.
    pub async fn completed_lists(
        db: &DatabaseConnection,
        user_id: Uuid,
    ) -> Result<Vec<ListSummary>, AppError> {
        Self::lists_by_completion(db, user_id, true).await
    }

    async fn lists_by_completion(
        db: &DatabaseConnection,
        user_id: Uuid,
        is_completed: bool,
    ) -> Result<Vec<ListSummary>, AppError> {
        let lists = shopping_list::Entity::find()
            .filter(shopping_list::Column::UserId.eq(user_id))
            .filter(shopping_list::Column::IsCompleted.eq(is_completed))
            .order_by_desc(shopping_list::Column::CreatedAt)
            .all(db)
            .await?;

        if lists.is_empty() {
            return Ok(Vec::new());
        }

        let items = list_item::Entity::find()
            .filter(list_item::Column::ListId.is_in(lists.iter().map(|l| l.id)))
            .all(db)
            .await?;

        let mut by_list: HashMap<Uuid, Vec<list_item::Model>> = HashMap::new();
        for item in items {
            by_list.entry(item.list_id).or_default().push(item);
        }

        Ok(lists
            .into_iter()
            .map(|list| {
                let totals = by_list
                    .get(&list.id)
                    .map(ListTotals::from_items)
                    .unwrap_or_default();
                ListSummary { list, totals }
            })
            .collect())
    }

    /// A list with its items and totals, or `None` when missing or not owned by `user_id`.
    pub async fn detail(
        db: &DatabaseConnection,
        list_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ListDetail>, AppError> {
        let Some(list) = Self::find_owned(db, list_id, user_id).await? else {
            return Ok(None);
        };

        let items = list
            .find_related(list_item::Entity)
            .order_by_asc(list_item::Column::IsCompleted)
            .order_by_asc(list_item::Column::CreatedAt)
            .all(db)
            .await?;

        let category_ids: Vec<Uuid> = items.iter().filter_map(|i| i.category_id).collect();
        let categories: HashMap<Uuid, category::Model> = if category_ids.is_empty() {
            HashMap::new()
        } else {
            category::Entity::find()
                .filter(category::Column::Id.is_in(category_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        let totals = ListTotals::from_items(&items);
        let items = items
            .into_iter()
            .map(|item| {
                let category = item.category_id.and_then(|id| categories.get(&id).cloned());
                (item, category)
            })
            .collect();

        Ok(Some(ListDetail {
            list,
            items,
            totals,
        }))
    }

    /// Apply a sparse patch. `updated_at` is always refreshed.
    pub async fn update(
        db: &DatabaseConnection,
        list_id: Uuid,
        user_id: Uuid,
        patch: ListPatch,
    ) -> Result<shopping_list::Model, AppError> {
        let txn = db.begin().await?;
        let list = Self::require_owned(&txn, list_id, user_id).await?;

        let mut active: shopping_list::ActiveModel = list.into();
        if let Some(name) = &patch.name {
            active.name = Set(name.clone());
        }
        if let Some(description) = &patch.description {
            active.description = Set(Some(description.clone()));
        }
        if let Some(scheduled_date) = patch.scheduled_date {
            active.scheduled_date = Set(Some(scheduled_date));
        }
        if let Some(priority) = patch.priority {
            active.priority = Set(priority.as_str().to_string());
        }
        if let Some(color) = &patch.color {
            active.color = Set(Some(color.clone()));
        }
        active.updated_at = Set(Utc::now().fixed_offset());
        let updated = active.update(&txn).await?;

        ActivityService::record(
            &txn,
            user_id,
            ActivityAction::UpdateList,
            EntityType::ShoppingList,
            list_id,
            Some(ActivityDetails::ListChanges(patch)),
        )
        .await?;

        txn.commit().await?;

        Ok(updated)
    }

    /// Delete every item of the list, then the list itself.
    ///
    /// Returns the number of items removed.
    pub async fn delete(
        db: &DatabaseConnection,
        list_id: Uuid,
        user_id: Uuid,
    ) -> Result<u64, AppError> {
        let txn = db.begin().await?;
        let list = Self::require_owned(&txn, list_id, user_id).await?;

        let removed = delete_list_cascade(&txn, list_id).await?;

        ActivityService::record(
            &txn,
            user_id,
            ActivityAction::DeleteList,
            EntityType::ShoppingList,
            list_id,
            Some(ActivityDetails::Named { name: list.name }),
        )
        .await?;

        txn.commit().await?;

        Ok(removed)
    }

    /// Mark a list completed, stamping `completed_at`.
    pub async fn complete(
        db: &DatabaseConnection,
        list_id: Uuid,
        user_id: Uuid,
    ) -> Result<shopping_list::Model, AppError> {
        let now = Utc::now().fixed_offset();
        let txn = db.begin().await?;
        let list = Self::require_owned(&txn, list_id, user_id).await?;
        let name = list.name.clone();

        let mut active: shopping_list::ActiveModel = list.into();
        active.is_completed = Set(true);
        active.completed_at = Set(Some(now));
        active.updated_at = Set(now);
        let updated = active.update(&txn).await?;

        ActivityService::record(
            &txn,
            user_id,
            ActivityAction::CompleteList,
            EntityType::ShoppingList,
            list_id,
            Some(ActivityDetails::Named { name }),
        )
        .await?;

        txn.commit().await?;

        Ok(updated)
    }
}

/// Remove a list's items and then the list row. Returns the number of items removed.
pub(crate) async fn delete_list_cascade<C: ConnectionTrait>(
    conn: &C,
    list_id: Uuid,
) -> Result<u64, AppError> {
    let items = list_item::Entity::delete_many()
        .filter(list_item::Column::ListId.eq(list_id))
        .exec(conn)
        .await?;

    shopping_list::Entity::delete_by_id(list_id)
        .exec(conn)
        .await?;

    Ok(items.rows_affected)
}
