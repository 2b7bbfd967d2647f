use serde::{Deserialize, Serialize};

use crate::entities::Role;

/// GET /admin/users query. `adminId` is the caller's external identity id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUsersQuery {
    pub admin_id: String,
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

/// Body (or query) for admin actions that need nothing but the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBody {
    pub admin_id: String,
}

/// PATCH /admin/users/:id/role
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRoleRequest {
    pub admin_id: String,
    pub role: Role,
}

/// What the admin cascade removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeSummary {
    pub lists: u64,
    pub items: u64,
    pub templates: u64,
    pub notifications: u64,
    pub categories: u64,
}
