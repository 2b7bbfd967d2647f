use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::dto::NewNotification;
use crate::entities::notification;
use crate::error::AppError;

pub struct NotificationService;

impl NotificationService {
    pub async fn create(
        db: &DatabaseConnection,
        request: NewNotification,
    ) -> Result<notification::Model, AppError> {
        let created = notification::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(request.user_id),
            kind: Set(request.kind),
            title: Set(request.title),
            message: Set(request.message),
            data: Set(request.data),
            is_read: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
        }
        .insert(db)
        .await?;
        Ok(created)
    }

    /// Newest first.
    pub async fn for_user(
        db: &DatabaseConnection,
        user_id: Uuid,
        unread_only: bool,
    ) -> Result<Vec<notification::Model>, AppError> {
        let mut query = notification::Entity::find()
            .filter(notification::Column::UserId.eq(user_id));
        if unread_only {
            query = query.filter(notification::Column::IsRead.eq(false));
        }

        let found = query
            .order_by_desc(notification::Column::CreatedAt)
            .all(db)
            .await?;
        Ok(found)
    }

    pub async fn mark_read(
        db: &DatabaseConnection,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<notification::Model, AppError> {
        let found = notification::Entity::find_by_id(notification_id)
            .one(db)
            .await?
            .filter(|n| n.user_id == user_id)
            .ok_or_else(|| {
                AppError::NotFound("Notification not found or unauthorized".to_string())
            })?;

        let mut active: notification::ActiveModel = found.into();
        active.is_read = Set(true);
        Ok(active.update(db).await?)
    }
}
