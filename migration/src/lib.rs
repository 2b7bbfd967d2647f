pub use sea_orm_migration::prelude::*;

mod m20261016_000001_create_user_table;
mod m20261016_000002_create_category_table;
mod m20261016_000003_create_shopping_list_table;
mod m20261016_000004_create_list_item_table;
mod m20261016_000005_create_item_template_table;
mod m20261016_000006_create_notification_table;
mod m20261016_000007_create_activity_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_user_table::Migration),
            Box::new(m20261016_000002_create_category_table::Migration),
            Box::new(m20261016_000003_create_shopping_list_table::Migration),
            Box::new(m20261016_000004_create_list_item_table::Migration),
            Box::new(m20261016_000005_create_item_template_table::Migration),
            Box::new(m20261016_000006_create_notification_table::Migration),
            Box::new(m20261016_000007_create_activity_log_table::Migration),
        ]
    }
}
