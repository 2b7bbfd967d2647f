//! Admin-only user management, including the cascading user delete.

use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::dto::CascadeSummary;
use crate::entities::{
    Role, activity_log, category, item_template, notification, shopping_list, user,
};
use crate::error::AppError;
use crate::services::activity::{ActivityAction, ActivityDetails, ActivityService, EntityType};
use crate::services::lists::delete_list_cascade;

pub struct AdminService;

impl AdminService {
    /// Resolve `admin_external_id` to a user holding the admin role.
    pub async fn require_admin<C: ConnectionTrait>(
        conn: &C,
        admin_external_id: &str,
    ) -> Result<user::Model, AppError> {
        user::Entity::find()
            .filter(user::Column::ExternalId.eq(admin_external_id))
            .one(conn)
            .await?
            .filter(user::Model::is_admin)
            .ok_or_else(AppError::admin_required)
    }

    async fn require_user<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
    ) -> Result<user::Model, AppError> {
        user::Entity::find_by_id(user_id)
            .one(conn)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// All users, optionally narrowed by active flag and a case-insensitive search over
    /// email and name.
    pub async fn list_users(
        db: &DatabaseConnection,
        admin_external_id: &str,
        search: Option<&str>,
        is_active: Option<bool>,
    ) -> Result<Vec<user::Model>, AppError> {
        Self::require_admin(db, admin_external_id).await?;

        let mut query = user::Entity::find();
        if let Some(is_active) = is_active {
            query = query.filter(user::Column::IsActive.eq(is_active));
        }
        let users = query.order_by_desc(user::Column::CreatedAt).all(db).await?;

        Ok(match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(needle) => {
                let needle = needle.to_lowercase();
                users
                    .into_iter()
                    .filter(|u| {
                        u.email.to_lowercase().contains(&needle)
                            || u.name.to_lowercase().contains(&needle)
                    })
                    .collect()
            }
            None => users,
        })
    }

    pub async fn suspend(
        db: &DatabaseConnection,
        admin_external_id: &str,
        user_id: Uuid,
    ) -> Result<user::Model, AppError> {
        Self::set_active(db, admin_external_id, user_id, |_| false, ActivityAction::SuspendUser)
            .await
    }

    pub async fn reactivate(
        db: &DatabaseConnection,
        admin_external_id: &str,
        user_id: Uuid,
    ) -> Result<user::Model, AppError> {
        Self::set_active(
            db,
            admin_external_id,
            user_id,
            |_| true,
            ActivityAction::ReactivateUser,
        )
        .await
    }

    pub async fn toggle_status(
        db: &DatabaseConnection,
        admin_external_id: &str,
        user_id: Uuid,
    ) -> Result<user::Model, AppError> {
        Self::set_active(
            db,
            admin_external_id,
            user_id,
            |current| !current,
            ActivityAction::ToggleUserStatus,
        )
        .await
    }

    async fn set_active(
        db: &DatabaseConnection,
        admin_external_id: &str,
        user_id: Uuid,
        next: impl FnOnce(bool) -> bool,
        action: ActivityAction,
    ) -> Result<user::Model, AppError> {
        let txn = db.begin().await?;
        let admin = Self::require_admin(&txn, admin_external_id).await?;
        let target = Self::require_user(&txn, user_id).await?;
        let email = target.email.clone();

        let is_active = next(target.is_active);
        let mut active: user::ActiveModel = target.into();
        active.is_active = Set(is_active);
        let updated = active.update(&txn).await?;

        ActivityService::record(
            &txn,
            admin.id,
            action,
            EntityType::User,
            user_id,
            Some(ActivityDetails::TargetUser { target_user: email }),
        )
        .await?;

        txn.commit().await?;

        tracing::info!(
            admin_id = %admin.id,
            target_id = %user_id,
            is_active,
            action = action.as_str(),
            "User status changed"
        );

        Ok(updated)
    }

    pub async fn set_role(
        db: &DatabaseConnection,
        admin_external_id: &str,
        user_id: Uuid,
        role: Role,
    ) -> Result<user::Model, AppError> {
        let txn = db.begin().await?;
        let admin = Self::require_admin(&txn, admin_external_id).await?;
        let target = Self::require_user(&txn, user_id).await?;

        if admin.id == target.id && role != Role::Admin {
            return Err(AppError::BadRequest(
                "Admins cannot revoke their own admin role".to_string(),
            ));
        }

        let email = target.email.clone();
        let mut active: user::ActiveModel = target.into();
        active.role = Set(role.as_str().to_string());
        let updated = active.update(&txn).await?;

        ActivityService::record(
            &txn,
            admin.id,
            ActivityAction::SetUserRole,
            EntityType::User,
            user_id,
            Some(ActivityDetails::RoleChange {
                target_user: email,
                role,
            }),
        )
        .await?;

        txn.commit().await?;

        tracing::info!(admin_id = %admin.id, target_id = %user_id, %role, "User role changed");

        Ok(updated)
    }

    /// Remove a user and everything they own.
    ///
    /// Order: each list's items then the list, templates, notifications, personal
    /// categories, the user's own activity, then the admin's `delete_user` entry, and
    /// finally the user row. The entry is keyed to the admin so it outlives the user.
    pub async fn delete_user(
        db: &DatabaseConnection,
        admin_external_id: &str,
        user_id: Uuid,
    ) -> Result<CascadeSummary, AppError> {
        let txn = db.begin().await?;
        let admin = Self::require_admin(&txn, admin_external_id).await?;
        let target = Self::require_user(&txn, user_id).await?;

        if admin.id == target.id {
            return Err(AppError::BadRequest(
                "Admins cannot delete their own account".to_string(),
            ));
        }

        let mut summary = CascadeSummary::default();

        let lists = shopping_list::Entity::find()
            .filter(shopping_list::Column::UserId.eq(user_id))
            .all(&txn)
            .await?;
        for list in lists {
            summary.items += delete_list_cascade(&txn, list.id).await?;
            summary.lists += 1;
        }

        summary.templates = item_template::Entity::delete_many()
            .filter(item_template::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?
            .rows_affected;

        summary.notifications = notification::Entity::delete_many()
            .filter(notification::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?
            .rows_affected;

        summary.categories = category::Entity::delete_many()
            .filter(category::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?
            .rows_affected;

        activity_log::Entity::delete_many()
            .filter(activity_log::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        ActivityService::record(
            &txn,
            admin.id,
            ActivityAction::DeleteUser,
            EntityType::User,
            user_id,
            Some(ActivityDetails::TargetUser {
                target_user: target.email,
            }),
        )
        .await?;

        user::Entity::delete_by_id(user_id).exec(&txn).await?;

        txn.commit().await?;

        tracing::info!(
            admin_id = %admin.id,
            target_id = %user_id,
            lists = summary.lists,
            items = summary.items,
            templates = summary.templates,
            notifications = summary.notifications,
            "User deleted"
        );

        Ok(summary)
    }
}
