pub mod activity;
pub mod admin;
pub mod categories;
pub mod identity;
pub mod items;
pub mod lists;
pub mod notifications;
pub mod stats;
pub mod templates;

pub use activity::ActivityService;
pub use admin::AdminService;
pub use categories::CategoryService;
pub use identity::IdentityService;
pub use items::ItemService;
pub use lists::ListService;
pub use notifications::NotificationService;
pub use stats::StatsService;
pub use templates::TemplateService;
