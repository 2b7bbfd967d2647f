use sea_orm_migration::prelude::*;

/// Creates the `list_item` table. Items carry both their list and the list owner.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ListItem {
    Table,
    Id,
    ListId,
    UserId,
    Name,
    Description,
    CategoryId,
    Quantity,
    Unit,
    Price,
    Priority,
    IsCompleted,
    CreatedAt,
    UpdatedAt,
    CompletedAt,
}

#[derive(DeriveIden)]
enum ShoppingList {
    Table,
    Id,
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
#[allow(clippy::too_many_lines)]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ListItem::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ListItem::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(ListItem::ListId).uuid().not_null())
                    .col(ColumnDef::new(ListItem::UserId).uuid().not_null())
                    .col(ColumnDef::new(ListItem::Name).text().not_null())
                    .col(ColumnDef::new(ListItem::Description).text().null())
                    .col(ColumnDef::new(ListItem::CategoryId).uuid().null())
                    .col(
                        ColumnDef::new(ListItem::Quantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(ListItem::Unit).text().null())
                    .col(ColumnDef::new(ListItem::Price).double().null())
                    .col(
                        ColumnDef::new(ListItem::Priority)
                            .string_len(10)
                            .not_null()
                            .default("medium"),
                    )
                    .col(
                        ColumnDef::new(ListItem::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ListItem::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ListItem::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ListItem::CompletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_item_list_id")
                            .from(ListItem::Table, ListItem::ListId)
                            .to(ShoppingList::Table, ShoppingList::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_item_user_id")
                            .from(ListItem::Table, ListItem::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_item_category_id")
                            .from(ListItem::Table, ListItem::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_list_item_list_completed")
                    .table(ListItem::Table)
                    .col(ListItem::ListId)
                    .col(ListItem::IsCompleted)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_list_item_user_id")
                    .table(ListItem::Table)
                    .col(ListItem::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ListItem::Table).to_owned())
            .await
    }
}
