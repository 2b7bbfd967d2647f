use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::error::AppError;
use crate::services::IdentityService;
use crate::state::AppState;
use crate::webhook::{
    self, HEADER_ID, HEADER_SIGNATURE, HEADER_TIMESTAMP, IdentityEvent, SignatureError,
    WebhookAction,
};

/// `POST /webhooks/identity`
pub fn router() -> Router<AppState> {
    Router::new().route("/identity", post(identity_webhook))
}

#[derive(Serialize)]
struct WebhookAck {
    success: bool,
    message: &'static str,
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

async fn identity_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookAck>, AppError> {
    let Some(secret) = state.config.identity_webhook_secret.as_deref() else {
        return Err(AppError::Misconfigured(
            "IDENTITY_WEBHOOK_SECRET is not set".to_string(),
        ));
    };

    let (Some(id), Some(timestamp), Some(signature)) = (
        header(&headers, HEADER_ID),
        header(&headers, HEADER_TIMESTAMP),
        header(&headers, HEADER_SIGNATURE),
    ) else {
        return Err(AppError::BadRequest(
            "Missing webhook signature headers".to_string(),
        ));
    };

    match webhook::verify(secret, id, timestamp, signature, &body, Utc::now()) {
        Ok(()) => {}
        Err(SignatureError::InvalidSecret) => {
            return Err(AppError::Misconfigured(
                SignatureError::InvalidSecret.to_string(),
            ));
        }
        Err(err) => {
            tracing::warn!(webhook_id = id, "Rejected webhook: {err}");
            return Err(AppError::BadRequest(
                "Webhook verification failed".to_string(),
            ));
        }
    }

    let event = IdentityEvent::parse(&body)
        .map_err(|e| AppError::BadRequest(format!("Malformed webhook payload: {e}")))?;
    tracing::info!(webhook_id = id, event_type = %event.kind, "Webhook received");

    let action = event
        .into_action()
        .map_err(|e| AppError::BadRequest(format!("Malformed user payload: {e}")))?;

    match action {
        WebhookAction::UpsertUser(upsert) => {
            IdentityService::upsert(&state.db, upsert).await?;
        }
        WebhookAction::Ignore(kind) => {
            tracing::info!(event_type = %kind, "Unhandled webhook event");
        }
    }

    Ok(Json(WebhookAck {
        success: true,
        message: "Webhook processed successfully",
    }))
}
