use std::collections::HashSet;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::dto::UserStats;
use crate::entities::{list_item, shopping_list};
use crate::error::AppError;

pub struct StatsService;

impl StatsService {
    /// Full scan of the user's lists and items. Nothing is pre-aggregated.
    pub async fn user_stats(db: &DatabaseConnection, user_id: Uuid) -> Result<UserStats, AppError> {
        let lists = shopping_list::Entity::find()
            .filter(shopping_list::Column::UserId.eq(user_id))
            .all(db)
            .await?;

        let items = list_item::Entity::find()
            .filter(list_item::Column::UserId.eq(user_id))
            .all(db)
            .await?;

        Ok(compute_stats(&lists, &items))
    }
}

fn compute_stats(lists: &[shopping_list::Model], items: &[list_item::Model]) -> UserStats {
    let categories_used = items
        .iter()
        .filter_map(|item| item.category_id)
        .collect::<HashSet<_>>()
        .len();

    #[allow(clippy::cast_precision_loss)]
    let avg_items_per_list = if lists.is_empty() {
        0.0
    } else {
        items.len() as f64 / lists.len() as f64
    };

    UserStats {
        total_lists: lists.len(),
        completed_lists: lists.iter().filter(|l| l.is_completed).count(),
        total_items: items.len(),
        completed_items: items.iter().filter(|i| i.is_completed).count(),
        categories_used,
        avg_items_per_list,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn list(is_completed: bool) -> shopping_list::Model {
        let now = Utc::now().fixed_offset();
        shopping_list::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            name: "Groceries".to_string(),
            description: None,
            is_completed,
            scheduled_date: None,
            priority: "medium".to_string(),
            color: None,
            created_at: now,
            updated_at: now,
            completed_at: is_completed.then_some(now),
        }
    }

    fn item(category_id: Option<Uuid>, is_completed: bool) -> list_item::Model {
        let now = Utc::now().fixed_offset();
        list_item::Model {
            id: Uuid::new_v4(),
            list_id: Uuid::nil(),
            user_id: Uuid::nil(),
            name: "Eggs".to_string(),
            description: None,
            category_id,
            quantity: 12,
            unit: None,
            price: None,
            priority: "low".to_string(),
            is_completed,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    #[test]
    fn test_no_lists_has_zero_average() {
        let stats = compute_stats(&[], &[]);
        assert_eq!(stats.total_lists, 0);
        assert!(stats.avg_items_per_list.abs() < f64::EPSILON);
    }

    #[test]
    fn test_counts_and_distinct_categories() {
        let dairy = Uuid::new_v4();
        let bakery = Uuid::new_v4();
        let lists = vec![list(true), list(false)];
        let items = vec![
            item(Some(dairy), true),
            item(Some(dairy), false),
            item(Some(bakery), false),
            item(None, true),
            item(None, false),
        ];

        let stats = compute_stats(&lists, &items);
        assert_eq!(stats.total_lists, 2);
        assert_eq!(stats.completed_lists, 1);
        assert_eq!(stats.total_items, 5);
        assert_eq!(stats.completed_items, 2);
        assert_eq!(stats.categories_used, 2);
        assert!((stats.avg_items_per_list - 2.5).abs() < f64::EPSILON);
    }
}
