pub mod activity_log;
pub mod category;
pub mod item_template;
pub mod list_item;
pub mod notification;
pub mod priority;
pub mod role;
pub mod shopping_list;
pub mod user;

pub use priority::Priority;
pub use role::Role;
