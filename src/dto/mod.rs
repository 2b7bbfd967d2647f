pub mod activity;
pub mod admin;
pub mod category;
pub mod item;
pub mod list;
pub mod notification;
pub mod template;
pub mod user;

pub use activity::ActivityResponse;
pub use admin::{AdminBody, AdminUsersQuery, CascadeSummary, SetRoleRequest};
pub use category::{CategoryResponse, InitializeOutcome, NewCategory};
pub use item::{BulkItem, BulkItems, ItemPatch, ItemResponse, NewItem, UpdateItem};
pub use list::{
    ListDetail, ListDetailResponse, ListPatch, ListResponse, ListSummary, ListSummaryResponse,
    ListTotals, NewList, UpdateList,
};
pub use notification::{NewNotification, NotificationResponse};
pub use template::TemplateResponse;
pub use user::{IdentityUpsert, UserResponse, UserStats};
