use sea_orm_migration::prelude::*;

/// Creates the `shopping_list` table.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ShoppingList {
    Table,
    Id,
    UserId,
    Name,
    Description,
    IsCompleted,
    ScheduledDate,
    Priority,
    Color,
    CreatedAt,
    UpdatedAt,
    CompletedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShoppingList::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ShoppingList::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ShoppingList::UserId).uuid().not_null())
                    .col(ColumnDef::new(ShoppingList::Name).text().not_null())
                    .col(ColumnDef::new(ShoppingList::Description).text().null())
                    .col(
                        ColumnDef::new(ShoppingList::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ShoppingList::ScheduledDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ShoppingList::Priority)
                            .string_len(10)
                            .not_null()
                            .default("medium"),
                    )
                    .col(ColumnDef::new(ShoppingList::Color).string_len(16).null())
                    .col(
                        ColumnDef::new(ShoppingList::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ShoppingList::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ShoppingList::CompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shopping_list_user_id")
                            .from(ShoppingList::Table, ShoppingList::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shopping_list_user_completed")
                    .table(ShoppingList::Table)
                    .col(ShoppingList::UserId)
                    .col(ShoppingList::IsCompleted)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_shopping_list_user_scheduled")
                    .table(ShoppingList::Table)
                    .col(ShoppingList::UserId)
                    .col(ShoppingList::ScheduledDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShoppingList::Table).to_owned())
            .await
    }
}
