//! System and per-user item categories.

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::dto::{InitializeOutcome, NewCategory};
use crate::entities::category;
use crate::error::AppError;
use crate::services::activity::{ActivityAction, ActivityDetails, ActivityService, EntityType};

/// A seeded system category.
pub struct SystemCategory {
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

#[rustfmt::skip]
pub const SYSTEM_CATEGORIES: &[SystemCategory] = &[
    SystemCategory { name: "Fruits & Vegetables", color: "#10B981", icon: "apple" },
    SystemCategory { name: "Meat & Seafood",      color: "#EF4444", icon: "beef" },
    SystemCategory { name: "Dairy & Eggs",        color: "#F59E0B", icon: "milk" },
    SystemCategory { name: "Bakery",              color: "#8B5CF6", icon: "wheat" },
    SystemCategory { name: "Pantry",              color: "#6B7280", icon: "package" },
    SystemCategory { name: "Frozen",              color: "#06B6D4", icon: "snowflake" },
    SystemCategory { name: "Beverages",           color: "#3B82F6", icon: "coffee" },
    SystemCategory { name: "Snacks",              color: "#F97316", icon: "cookie" },
    SystemCategory { name: "Health & Beauty",     color: "#EC4899", icon: "heart" },
    SystemCategory { name: "Household",           color: "#84CC16", icon: "home" },
    SystemCategory { name: "Other",               color: "#6B7280", icon: "more-horizontal" },
];

pub struct CategoryService;

impl CategoryService {
    /// System categories first, then the user's own categories when a user is given.
    pub async fn list(
        db: &DatabaseConnection,
        user_id: Option<Uuid>,
    ) -> Result<Vec<category::Model>, AppError> {
        let mut categories = category::Entity::find()
            .filter(category::Column::IsSystem.eq(true))
            .order_by_asc(category::Column::CreatedAt)
            .all(db)
            .await?;

        if let Some(user_id) = user_id {
            let personal = category::Entity::find()
                .filter(category::Column::UserId.eq(user_id))
                .order_by_asc(category::Column::CreatedAt)
                .all(db)
                .await?;
            categories.extend(personal);
        }

        Ok(categories)
    }

    /// Check that `category_id` names a system category or one owned by `user_id`.
    pub async fn require_usable<C: ConnectionTrait>(
        conn: &C,
        category_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), AppError> {
        category::Entity::find_by_id(category_id)
            .one(conn)
            .await?
            .filter(|category| category.is_system || category.user_id == Some(user_id))
            .map(|_| ())
            .ok_or_else(AppError::category_not_found)
    }

    /// Seed [`SYSTEM_CATEGORIES`] unless any system category already exists.
    pub async fn initialize_system(db: &DatabaseConnection) -> Result<InitializeOutcome, AppError> {
        let txn = db.begin().await?;

        let existing = category::Entity::find()
            .filter(category::Column::IsSystem.eq(true))
            .count(&txn)
            .await?;

        if existing > 0 {
            return Ok(InitializeOutcome {
                message: "System categories already initialized".to_string(),
                created: 0,
            });
        }

        let now = Utc::now().fixed_offset();
        let seeds = SYSTEM_CATEGORIES.iter().map(|seed| category::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(None),
            name: Set(seed.name.to_string()),
            description: Set(None),
            color: Set(seed.color.to_string()),
            icon: Set(seed.icon.to_string()),
            is_system: Set(true),
            created_at: Set(now),
        });
        category::Entity::insert_many(seeds).exec(&txn).await?;

        txn.commit().await?;

        tracing::info!(count = SYSTEM_CATEGORIES.len(), "System categories seeded");

        Ok(InitializeOutcome {
            message: "System categories initialized successfully".to_string(),
            created: SYSTEM_CATEGORIES.len(),
        })
    }

    /// Insert a personal category. Duplicate names are allowed.
    pub async fn create(
        db: &DatabaseConnection,
        request: NewCategory,
    ) -> Result<category::Model, AppError> {
        let txn = db.begin().await?;

        let created = category::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(Some(request.user_id)),
            name: Set(request.name),
            description: Set(request.description),
            color: Set(request.color),
            icon: Set(request.icon),
            is_system: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
        }
        .insert(&txn)
        .await?;

        ActivityService::record(
            &txn,
            request.user_id,
            ActivityAction::CreateCategory,
            EntityType::Category,
            created.id,
            Some(ActivityDetails::Named {
                name: created.name.clone(),
            }),
        )
        .await?;

        txn.commit().await?;

        Ok(created)
    }
}
