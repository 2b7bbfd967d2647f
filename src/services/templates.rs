//! Per-user memory of item names, used for quick-add suggestions.

use chrono::{DateTime, FixedOffset};
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use crate::dto::NewItem;
use crate::entities::item_template;
use crate::error::AppError;

/// Only the most used templates are considered for suggestions.
pub const SUGGESTION_WINDOW: u64 = 20;

pub struct TemplateService;

impl TemplateService {
    /// Up to [`SUGGESTION_WINDOW`] templates ordered by usage, then filtered by `search`.
    ///
    /// The search runs after truncation, so a match outside the top window is not returned.
    pub async fn suggestions(
        db: &DatabaseConnection,
        user_id: Uuid,
        search: Option<&str>,
    ) -> Result<Vec<item_template::Model>, AppError> {
        let templates = item_template::Entity::find()
            .filter(item_template::Column::UserId.eq(user_id))
            .order_by_desc(item_template::Column::UsageCount)
            .order_by_desc(item_template::Column::LastUsed)
            .limit(SUGGESTION_WINDOW)
            .all(db)
            .await?;

        Ok(match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(needle) => filter_by_name(templates, needle),
            None => templates,
        })
    }

    /// Bump the template for `(user, item.name)` or create it from the item.
    ///
    /// Names match exactly and case-sensitively. The write is a single upsert against the
    /// unique `(user_id, name)` index, so concurrent adds of one name share a template.
    pub async fn record_usage<C: ConnectionTrait>(
        conn: &C,
        item: &NewItem,
        now: DateTime<FixedOffset>,
    ) -> Result<item_template::Model, AppError> {
        let fresh = item_template::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(item.user_id),
            name: Set(item.name.clone()),
            category_id: Set(item.category_id),
            default_quantity: Set(item.quantity),
            default_unit: Set(item.unit.clone()),
            usage_count: Set(1),
            last_used: Set(now),
            created_at: Set(now),
        };

        item_template::Entity::insert(fresh)
            .on_conflict(
                OnConflict::columns([item_template::Column::UserId, item_template::Column::Name])
                    .value(
                        item_template::Column::UsageCount,
                        Expr::col((item_template::Entity, item_template::Column::UsageCount))
                            .add(1),
                    )
                    .update_column(item_template::Column::LastUsed)
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await?;

        item_template::Entity::find()
            .filter(item_template::Column::UserId.eq(item.user_id))
            .filter(item_template::Column::Name.eq(&item.name))
            .one(conn)
            .await?
            .ok_or_else(|| {
                let name = &item.name;
                AppError::Internal(anyhow::anyhow!("no template row after upserting {name:?}"))
            })
    }
}

/// Case-insensitive substring filter on template names.
fn filter_by_name(templates: Vec<item_template::Model>, needle: &str) -> Vec<item_template::Model> {
    let needle = needle.to_lowercase();
    templates
        .into_iter()
        .filter(|t| t.name.to_lowercase().contains(&needle))
        .collect()
}
