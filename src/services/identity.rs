//! Local user records mirrored from the identity provider.

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait,
};
use uuid::Uuid;

use crate::dto::IdentityUpsert;
use crate::entities::{Role, user};
use crate::error::AppError;

pub struct IdentityService;

impl IdentityService {
    /// Look a user up by identity-provider id.
    pub async fn find_by_external_id(
        db: &DatabaseConnection,
        external_id: &str,
    ) -> Result<Option<user::Model>, AppError> {
        let found = user::Entity::find()
            .filter(user::Column::ExternalId.eq(external_id))
            .one(db)
            .await?;
        Ok(found)
    }

    /// Insert or refresh the user for `event.external_id`. Repeated events are harmless.
    pub async fn upsert(
        db: &DatabaseConnection,
        event: IdentityUpsert,
    ) -> Result<user::Model, AppError> {
        let now = Utc::now().fixed_offset();
        let txn = db.begin().await?;

        let existing = user::Entity::find()
            .filter(user::Column::ExternalId.eq(&event.external_id))
            .one(&txn)
            .await?;

        let model = if let Some(existing) = existing {
            let mut active: user::ActiveModel = existing.into();
            active.name = Set(event.name);
            active.email = Set(event.email);
            active.avatar_url = Set(event.avatar_url);
            active.last_active_at = Set(now);
            let updated = active.update(&txn).await?;
            tracing::debug!(user_id = %updated.id, "Identity refreshed");
            updated
        } else {
            let created = user::ActiveModel {
                id: Set(Uuid::new_v4()),
                external_id: Set(event.external_id),
                name: Set(event.name),
                email: Set(event.email),
                avatar_url: Set(event.avatar_url),
                is_active: Set(true),
                role: Set(Role::User.as_str().to_string()),
                created_at: Set(now),
                last_active_at: Set(now),
            }
            .insert(&txn)
            .await?;
            tracing::info!(user_id = %created.id, "User created from identity event");
            created
        };

        txn.commit().await?;

        Ok(model)
    }
}
