mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

fn actions(body: &str) -> Vec<String> {
    common::json(body)
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|e| e["action"].as_str().map(str::to_string))
        .collect()
}

#[tokio::test]
async fn mutations_are_logged() {
    let (app, db) = common::test_app().await;
    let user = common::create_user(&db, "user_activity").await;

    let (_, body) = common::post_json(
        &app,
        "/api/v1/lists",
        &json!({ "userId": user, "name": "Logged", "priority": "medium" }),
    )
    .await;
    let list_id = common::json(&body)["id"].as_str().unwrap_or_default().to_string();
    let (_, body) = common::post_json(
        &app,
        &format!("/api/v1/lists/{list_id}/items"),
        &json!({ "userId": user, "name": "Coffee", "quantity": 1, "priority": "medium" }),
    )
    .await;
    let item_id = common::json(&body)["id"].as_str().unwrap_or_default().to_string();
    common::patch_json(
        &app,
        &format!("/api/v1/items/{item_id}"),
        &json!({ "userId": user, "isCompleted": true }),
    )
    .await;
    common::patch_json(
        &app,
        &format!("/api/v1/items/{item_id}"),
        &json!({ "userId": user, "quantity": 2 }),
    )
    .await;

    let (status, body) = common::get(&app, &format!("/api/v1/activity?userId={user}")).await;
    assert_eq!(status, StatusCode::OK);

    let logged = actions(&body);
    assert_eq!(logged.len(), 4);
    for expected in ["create_list", "add_item", "toggle_item", "update_item"] {
        assert!(logged.iter().any(|a| a == expected), "missing {expected}: {logged:?}");
    }

    let entries = common::json(&body);
    let create = entries
        .as_array()
        .into_iter()
        .flatten()
        .find(|e| e["action"] == "create_list")
        .cloned()
        .unwrap_or(Value::Null);
    assert_eq!(create["entityType"], "shopping_list");
    assert_eq!(create["entityId"], list_id);
    assert_eq!(create["details"]["kind"], "named");
    assert_eq!(create["details"]["name"], "Logged");
}

#[tokio::test]
async fn recent_activity_respects_limit() {
    let (app, db) = common::test_app().await;
    let user = common::create_user(&db, "user_limit").await;
    for i in 0..12 {
        common::post_json(
            &app,
            "/api/v1/lists",
            &json!({ "userId": user, "name": format!("List {i}"), "priority": "low" }),
        )
        .await;
    }

    let (_, body) = common::get(&app, &format!("/api/v1/activity?userId={user}")).await;
    assert_eq!(actions(&body).len(), 10);

    let (_, body) = common::get(&app, &format!("/api/v1/activity?userId={user}&limit=3")).await;
    assert_eq!(actions(&body).len(), 3);

    let (_, body) = common::get(&app, &format!("/api/v1/activity?userId={user}&limit=0")).await;
    assert_eq!(actions(&body).len(), 1);
}

#[tokio::test]
async fn bulk_add_logs_one_summary_entry() {
    let (app, db) = common::test_app().await;
    let user = common::create_user(&db, "user_bulk_log").await;
    let (_, body) = common::post_json(
        &app,
        "/api/v1/lists",
        &json!({ "userId": user, "name": "Bulk", "priority": "medium" }),
    )
    .await;
    let list_id = common::json(&body)["id"].as_str().unwrap_or_default().to_string();

    common::post_json(
        &app,
        &format!("/api/v1/lists/{list_id}/items/bulk"),
        &json!({
            "userId": user,
            "items": [
                { "name": "A", "quantity": 1, "priority": "medium" },
                { "name": "B", "quantity": 1, "priority": "medium" },
                { "name": "C", "quantity": 1, "priority": "medium" },
            ],
        }),
    )
    .await;

    let (_, body) = common::get(&app, &format!("/api/v1/activity?userId={user}")).await;
    let logged = actions(&body);
    assert_eq!(logged.iter().filter(|a| *a == "bulk_add_items").count(), 1);
    assert_eq!(logged.iter().filter(|a| *a == "add_item").count(), 0);
}
