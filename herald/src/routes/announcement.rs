use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde_json::{Value, json};

use crate::{
    dto::announcement::PublishAnnouncement, state::AppState, usecases::announce::notify_discord,
};

const ADMIN_PASS_HEADER: &str = "x-admin-pass";

fn authorize(state: &AppState, headers: &HeaderMap) -> bool {
    let admin_pass = headers
        .get(ADMIN_PASS_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    tracing::debug!(
        "admin pass check: {}",
        if admin_pass.is_empty() {
            "missing"
        } else {
            "provided"
        }
    );

    // an unset secret matches nothing
    !state.config.admin_password.is_empty() && admin_pass == state.config.admin_password
}

pub async fn publish_announcement(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    if !authorize(&state, &headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        );
    }

    let announcement = match serde_json::from_slice::<PublishAnnouncement>(&body) {
        Ok(PublishAnnouncement {
            announcement: Some(text),
        }) if !text.is_empty() => text,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing announcement text" })),
            );
        },
    };

    if let Err(e) = state.store.publish(&state.config.github, &announcement).await {
        tracing::error!("failed to publish announcement: {e:#}");

        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "Failed to update announcement",
                "details": e.to_string(),
            })),
        );
    }

    tracing::info!("announcement updated ({} chars)", announcement.len());

    notify_discord(state.config.webhook.announcement.as_deref(), &announcement).await;

    (StatusCode::OK, Json(json!({ "success": true })))
}

/// Plain OPTIONS probes that don't carry preflight headers fall through the
/// cors layer, so answer them here.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
