//! Identity provider webhook endpoint

use axum::{body::Bytes, extract::State, http::HeaderMap, Json};

use crate::{
    error::{AppError, AppResult},
    services::webhooks::{WebhookAck, WebhookHeaders},
};

fn header(headers: &HeaderMap, name: &str) -> AppResult<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .ok_or_else(|| AppError::Webhook(format!("Missing {} header", name)))
}

/// Receive user lifecycle events from the identity provider
#[utoipa::path(
    post,
    path = "/webhooks/clerk",
    tag = "webhooks",
    request_body(content = String, description = "Signed event payload", content_type = "application/json"),
    responses(
        (status = 200, description = "Event accepted", body = WebhookAck),
        (status = 400, description = "Missing headers or invalid signature", body = crate::error::ErrorResponse),
        (status = 500, description = "Webhook secret not configured", body = crate::error::ErrorResponse)
    )
)]
pub async fn clerk_webhook(
    State(state): State<crate::AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<Json<WebhookAck>> {
    let delivery = WebhookHeaders {
        id: header(&headers, "svix-id")?,
        timestamp: header(&headers, "svix-timestamp")?,
        signature: header(&headers, "svix-signature")?,
    };

    let ack = state.services.webhooks.handle(&delivery, &body).await?;
    Ok(Json(ack))
}
