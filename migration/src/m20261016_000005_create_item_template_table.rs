use sea_orm_migration::prelude::*;

/// Creates the `item_template` table backing quick-add suggestions.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ItemTemplate {
    Table,
    Id,
    UserId,
    Name,
    CategoryId,
    DefaultQuantity,
    DefaultUnit,
    UsageCount,
    LastUsed,
    CreatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Category {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemTemplate::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ItemTemplate::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ItemTemplate::UserId).uuid().not_null())
                    .col(ColumnDef::new(ItemTemplate::Name).text().not_null())
                    .col(ColumnDef::new(ItemTemplate::CategoryId).uuid().null())
                    .col(
                        ColumnDef::new(ItemTemplate::DefaultQuantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(ItemTemplate::DefaultUnit).text().null())
                    .col(
                        ColumnDef::new(ItemTemplate::UsageCount)
                            .big_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(ItemTemplate::LastUsed)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ItemTemplate::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_template_user_id")
                            .from(ItemTemplate::Table, ItemTemplate::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_template_category_id")
                            .from(ItemTemplate::Table, ItemTemplate::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_item_template_user_name")
                    .table(ItemTemplate::Table)
                    .col(ItemTemplate::UserId)
                    .col(ItemTemplate::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_item_template_user_usage")
                    .table(ItemTemplate::Table)
                    .col(ItemTemplate::UserId)
                    .col(ItemTemplate::UsageCount)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemTemplate::Table).to_owned())
            .await
    }
}
