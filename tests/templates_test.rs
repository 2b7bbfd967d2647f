mod common;

use axum::Router;
use axum::http::StatusCode;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;
use shoplist_api::entities::item_template;
use uuid::Uuid;

async fn list_with_items(app: &Router, user: Uuid, names: &[&str]) -> String {
    let (_, body) = common::post_json(
        app,
        "/api/v1/lists",
        &json!({ "userId": user, "name": "Templates", "priority": "medium" }),
    )
    .await;
    let list_id = common::json(&body)["id"].as_str().unwrap_or_default().to_string();

    for name in names {
        let (status, body) = common::post_json(
            app,
            &format!("/api/v1/lists/{list_id}/items"),
            &json!({
                "userId": user,
                "name": name,
                "quantity": 2,
                "unit": "L",
                "priority": "medium",
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
    }
    list_id
}

#[tokio::test]
async fn adding_same_name_twice_bumps_one_template() {
    let (app, db) = common::test_app().await;
    let user = common::create_user(&db, "user_milk").await;
    list_with_items(&app, user, &["Milk", "Milk"]).await;

    let (status, body) = common::get(&app, &format!("/api/v1/templates?userId={user}")).await;
    assert_eq!(status, StatusCode::OK);

    let templates = common::json(&body);
    assert_eq!(templates.as_array().map(Vec::len), Some(1));
    assert_eq!(templates[0]["name"], "Milk");
    assert_eq!(templates[0]["usageCount"], 2);
    assert_eq!(templates[0]["defaultQuantity"], 2);
    assert_eq!(templates[0]["defaultUnit"], "L");
}

#[tokio::test]
async fn second_template_row_for_same_name_is_refused() {
    let (app, db) = common::test_app().await;
    let user = common::create_user(&db, "user_dup_tpl").await;
    list_with_items(&app, user, &["Eggs"]).await;

    let now = Utc::now().fixed_offset();
    let duplicate = item_template::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user),
        name: Set("Eggs".to_string()),
        category_id: Set(None),
        default_quantity: Set(1),
        default_unit: Set(None),
        usage_count: Set(1),
        last_used: Set(now),
        created_at: Set(now),
    }
    .insert(&db)
    .await;
    assert!(duplicate.is_err());

    list_with_items(&app, user, &["Eggs"]).await;
    let rows = item_template::Entity::find()
        .filter(item_template::Column::UserId.eq(user))
        .filter(item_template::Column::Name.eq("Eggs"))
        .count(&db)
        .await
        .unwrap_or_default();
    assert_eq!(rows, 1);

    let (_, body) = common::get(&app, &format!("/api/v1/templates?userId={user}")).await;
    assert_eq!(common::json(&body)[0]["usageCount"], 2);
}

#[tokio::test]
async fn template_names_are_case_sensitive() {
    let (app, db) = common::test_app().await;
    let user = common::create_user(&db, "user_case").await;
    list_with_items(&app, user, &["Milk", "milk"]).await;

    let (_, body) = common::get(&app, &format!("/api/v1/templates?userId={user}")).await;
    assert_eq!(common::json(&body).as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn templates_ordered_by_usage_and_searchable() {
    let (app, db) = common::test_app().await;
    let user = common::create_user(&db, "user_search").await;
    list_with_items(&app, user, &["Bread", "Oat Milk", "Oat Milk", "Butter"]).await;

    let (_, body) = common::get(&app, &format!("/api/v1/templates?userId={user}")).await;
    let all = common::json(&body);
    assert_eq!(all.as_array().map(Vec::len), Some(3));
    assert_eq!(all[0]["name"], "Oat Milk");

    let (_, body) =
        common::get(&app, &format!("/api/v1/templates?userId={user}&search=MILK")).await;
    let found = common::json(&body);
    assert_eq!(found.as_array().map(Vec::len), Some(1));
    assert_eq!(found[0]["name"], "Oat Milk");
}

#[tokio::test]
async fn bulk_add_does_not_touch_templates() {
    let (app, db) = common::test_app().await;
    let user = common::create_user(&db, "user_bulk_tpl").await;
    let list_id = list_with_items(&app, user, &[]).await;

    let (status, _) = common::post_json(
        &app,
        &format!("/api/v1/lists/{list_id}/items/bulk"),
        &json!({
            "userId": user,
            "items": [{ "name": "Flour", "quantity": 1, "priority": "medium" }],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = common::get(&app, &format!("/api/v1/templates?userId={user}")).await;
    assert_eq!(common::json(&body).as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn templates_are_per_user() {
    let (app, db) = common::test_app().await;
    let alice = common::create_user(&db, "user_alice").await;
    let bob = common::create_user(&db, "user_bob").await;
    list_with_items(&app, alice, &["Cheese"]).await;

    let (_, body) = common::get(&app, &format!("/api/v1/templates?userId={bob}")).await;
    assert_eq!(common::json(&body).as_array().map(Vec::len), Some(0));
}
