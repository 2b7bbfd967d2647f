mod common;

use axum::Router;
use axum::http::StatusCode;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;
use uuid::Uuid;

use shoplist_api::dto::NewNotification;
use shoplist_api::entities::{
    activity_log, category, item_template, list_item, notification, shopping_list, user,
};
use shoplist_api::services::NotificationService;

/// Give `user` two lists holding three items, one template and one notification.
async fn seed_user_data(app: &Router, db: &DatabaseConnection, user: Uuid) {
    let mut list_ids = Vec::new();
    for name in ["Home", "Office"] {
        let (_, body) = common::post_json(
            app,
            "/api/v1/lists",
            &json!({ "userId": user, "name": name, "priority": "medium" }),
        )
        .await;
        list_ids.push(common::json(&body)["id"].as_str().unwrap_or_default().to_string());
    }

    // Three adds of one name leave a single template.
    for list_id in [&list_ids[0], &list_ids[0], &list_ids[1]] {
        let (status, _) = common::post_json(
            app,
            &format!("/api/v1/lists/{list_id}/items"),
            &json!({ "userId": user, "name": "Milk", "quantity": 1, "priority": "medium" }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let created = NotificationService::create(
        db,
        NewNotification {
            user_id: user,
            kind: "reminder".to_string(),
            title: "Shopping day".to_string(),
            message: "Your Home list is scheduled".to_string(),
            data: None,
        },
    )
    .await;
    assert!(created.is_ok());
}

async fn count_owned(db: &DatabaseConnection, user: Uuid) -> [u64; 5] {
    [
        shopping_list::Entity::find()
            .filter(shopping_list::Column::UserId.eq(user))
            .count(db)
            .await
            .unwrap_or(u64::MAX),
        list_item::Entity::find()
            .filter(list_item::Column::UserId.eq(user))
            .count(db)
            .await
            .unwrap_or(u64::MAX),
        item_template::Entity::find()
            .filter(item_template::Column::UserId.eq(user))
            .count(db)
            .await
            .unwrap_or(u64::MAX),
        notification::Entity::find()
            .filter(notification::Column::UserId.eq(user))
            .count(db)
            .await
            .unwrap_or(u64::MAX),
        category::Entity::find()
            .filter(category::Column::UserId.eq(user))
            .count(db)
            .await
            .unwrap_or(u64::MAX),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Cascade delete
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn admin_delete_cascades_through_user_data() {
    let (app, db) = common::test_app().await;
    let admin = common::create_admin(&db, "admin_root").await;
    let target = common::create_user(&db, "user_doomed").await;
    seed_user_data(&app, &db, target).await;
    assert_eq!(count_owned(&db, target).await, [2, 3, 1, 1, 0]);

    let (status, body) = common::delete(
        &app,
        &format!("/api/v1/admin/users/{target}?adminId=admin_root"),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let summary = common::json(&body);
    assert_eq!(summary["lists"], 2);
    assert_eq!(summary["items"], 3);
    assert_eq!(summary["templates"], 1);
    assert_eq!(summary["notifications"], 1);

    assert_eq!(count_owned(&db, target).await, [0, 0, 0, 0, 0]);
    let gone = user::Entity::find_by_id(target).one(&db).await.ok().flatten();
    assert!(gone.is_none());

    let target_log = activity_log::Entity::find()
        .filter(activity_log::Column::UserId.eq(target))
        .count(&db)
        .await
        .unwrap_or(u64::MAX);
    assert_eq!(target_log, 0);

    let admin_log = activity_log::Entity::find()
        .filter(activity_log::Column::UserId.eq(admin))
        .filter(activity_log::Column::Action.eq("delete_user"))
        .all(&db)
        .await
        .unwrap_or_default();
    assert_eq!(admin_log.len(), 1);
    assert_eq!(admin_log[0].entity_id, target.to_string());
    assert_eq!(
        admin_log[0].details.as_ref().map(|d| d["targetUser"].clone()),
        Some(json!("user_doomed@example.com"))
    );
}

#[tokio::test]
async fn non_admin_cannot_delete_or_list() {
    let (app, db) = common::test_app().await;
    common::create_user(&db, "user_sneaky").await;
    let target = common::create_user(&db, "user_victim").await;
    seed_user_data(&app, &db, target).await;

    let (status, body) = common::delete(
        &app,
        &format!("/api/v1/admin/users/{target}?adminId=user_sneaky"),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        common::json(&body)["error"]["message"],
        "Unauthorized: Admin access required"
    );

    let (status, _) = common::get(&app, "/api/v1/admin/users?adminId=user_sneaky").await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = common::get(&app, "/api/v1/admin/users?adminId=nobody").await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    assert_eq!(count_owned(&db, target).await, [2, 3, 1, 1, 0]);
}

#[tokio::test]
async fn admin_cannot_delete_self() {
    let (app, db) = common::test_app().await;
    let admin = common::create_admin(&db, "admin_self").await;

    let (status, _) = common::delete(
        &app,
        &format!("/api/v1/admin/users/{admin}?adminId=admin_self"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(user::Entity::find_by_id(admin).one(&db).await.ok().flatten().is_some());
}

#[tokio::test]
async fn deleting_missing_user_is_not_found() {
    let (app, db) = common::test_app().await;
    common::create_admin(&db, "admin_missing").await;

    let (status, _) = common::delete(
        &app,
        &format!("/api/v1/admin/users/{}?adminId=admin_missing", Uuid::new_v4()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ─────────────────────────────────────────────────────────────────────────────
// User management
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn admin_lists_and_filters_users() {
    let (app, db) = common::test_app().await;
    common::create_admin(&db, "admin_list").await;
    common::create_user(&db, "grocer_one").await;
    let quiet = common::create_user(&db, "grocer_two").await;

    let (status, _) = common::post_json(
        &app,
        &format!("/api/v1/admin/users/{quiet}/suspend"),
        &json!({ "adminId": "admin_list" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = common::get(&app, "/api/v1/admin/users?adminId=admin_list").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::json(&body).as_array().map(Vec::len), Some(3));

    let (_, body) =
        common::get(&app, "/api/v1/admin/users?adminId=admin_list&search=GROCER").await;
    assert_eq!(common::json(&body).as_array().map(Vec::len), Some(2));

    let (_, body) = common::get(
        &app,
        "/api/v1/admin/users?adminId=admin_list&search=grocer&isActive=true",
    )
    .await;
    let active = common::json(&body);
    assert_eq!(active.as_array().map(Vec::len), Some(1));
    assert_eq!(active[0]["externalId"], "grocer_one");
}

#[tokio::test]
async fn suspend_reactivate_and_toggle() {
    let (app, db) = common::test_app().await;
    let admin = common::create_admin(&db, "admin_status").await;
    let target = common::create_user(&db, "user_status").await;
    let body = json!({ "adminId": "admin_status" });

    let (_, resp) = common::post_json(
        &app,
        &format!("/api/v1/admin/users/{target}/suspend"),
        &body,
    )
    .await;
    assert_eq!(common::json(&resp)["isActive"], false);

    let (_, resp) = common::post_json(
        &app,
        &format!("/api/v1/admin/users/{target}/reactivate"),
        &body,
    )
    .await;
    assert_eq!(common::json(&resp)["isActive"], true);

    let (_, resp) = common::post_json(
        &app,
        &format!("/api/v1/admin/users/{target}/toggle-status"),
        &body,
    )
    .await;
    assert_eq!(common::json(&resp)["isActive"], false);

    let (_, log) = common::get(&app, &format!("/api/v1/activity?userId={admin}")).await;
    let actions: Vec<String> = common::json(&log)
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|e| e["action"].as_str().map(str::to_string))
        .collect();
    for expected in ["suspend_user", "reactivate_user", "toggle_user_status"] {
        assert!(actions.iter().any(|a| a == expected), "missing {expected}");
    }
}

#[tokio::test]
async fn toggle_requires_admin() {
    let (app, db) = common::test_app().await;
    common::create_user(&db, "user_plain").await;
    let target = common::create_user(&db, "user_target").await;

    let (status, _) = common::post_json(
        &app,
        &format!("/api/v1/admin/users/{target}/toggle-status"),
        &json!({ "adminId": "user_plain" }),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let still_active = user::Entity::find_by_id(target)
        .one(&db)
        .await
        .ok()
        .flatten()
        .is_some_and(|u| u.is_active);
    assert!(still_active);
}

#[tokio::test]
async fn role_changes_grant_admin_access() {
    let (app, db) = common::test_app().await;
    common::create_admin(&db, "admin_roles").await;
    let promoted = common::create_user(&db, "user_promoted").await;

    let (status, body) = common::patch_json(
        &app,
        &format!("/api/v1/admin/users/{promoted}/role"),
        &json!({ "adminId": "admin_roles", "role": "admin" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(common::json(&body)["role"], "admin");

    let (status, _) = common::get(&app, "/api/v1/admin/users?adminId=user_promoted").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = common::patch_json(
        &app,
        &format!("/api/v1/admin/users/{promoted}/role"),
        &json!({ "adminId": "admin_roles", "role": "owner" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
