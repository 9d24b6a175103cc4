//! Identity provider webhooks
//!
//! Deliveries are signed Svix-style: the signed content is
//! `{svix-id}.{svix-timestamp}.{body}`, keyed with the base64 part of the
//! `whsec_` secret, and `svix-signature` lists one or more `v1,<base64>`
//! entries separated by spaces.

use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use utoipa::ToSchema;

use crate::{
    config::WebhookConfig,
    error::{AppError, AppResult},
    models::user::{SyncUser, UserRole},
    repository::Repository,
};

type HmacSha256 = Hmac<Sha256>;

const SECRET_PREFIX: &str = "whsec_";

/// Raw Svix delivery headers
#[derive(Debug, Clone)]
pub struct WebhookHeaders {
    pub id: String,
    pub timestamp: String,
    pub signature: String,
}

#[derive(Debug, Deserialize)]
pub struct IdentityEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct EmailAddress {
    email_address: String,
}

#[derive(Debug, Deserialize)]
struct UserEventData {
    id: String,
    #[serde(default)]
    email_addresses: Vec<EmailAddress>,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl From<UserEventData> for SyncUser {
    fn from(data: UserEventData) -> Self {
        SyncUser {
            clerk_id: data.id,
            email: data
                .email_addresses
                .into_iter()
                .next()
                .map(|e| e.email_address)
                .unwrap_or_default(),
            first_name: data.first_name.filter(|s| !s.is_empty()),
            last_name: data.last_name.filter(|s| !s.is_empty()),
        }
    }
}

/// Acknowledgement returned to the provider
#[derive(Debug, Serialize, ToSchema)]
pub struct WebhookAck {
    pub received: bool,
    pub event_type: String,
    /// Whether the event changed local state
    pub handled: bool,
}

fn signing_key(secret: &str) -> AppResult<Vec<u8>> {
    let encoded = secret.strip_prefix(SECRET_PREFIX).unwrap_or(secret);
    general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| AppError::Internal(format!("Webhook secret is not valid base64: {}", e)))
}

/// Base64 signature of one delivery
pub fn sign(secret: &str, id: &str, timestamp: &str, body: &[u8]) -> AppResult<String> {
    let key = signing_key(secret)?;
    let mut mac = HmacSha256::new_from_slice(&key)
        .map_err(|e| AppError::Internal(format!("Invalid webhook key: {}", e)))?;
    mac.update(id.as_bytes());
    mac.update(b".");
    mac.update(timestamp.as_bytes());
    mac.update(b".");
    mac.update(body);
    Ok(general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
}

/// Check a delivery's signature and timestamp
pub fn verify_signature(
    secret: &str,
    headers: &WebhookHeaders,
    body: &[u8],
    now: DateTime<Utc>,
    tolerance_secs: i64,
) -> AppResult<()> {
    let timestamp: i64 = headers
        .timestamp
        .trim()
        .parse()
        .map_err(|_| AppError::Webhook("Invalid svix-timestamp header".to_string()))?;

    let outside = now
        .timestamp()
        .checked_sub(timestamp)
        .map_or(true, |drift| drift.unsigned_abs() > tolerance_secs.unsigned_abs());
    if outside {
        return Err(AppError::Webhook("Message timestamp outside tolerance".to_string()));
    }

    let key = signing_key(secret)?;
    let mut mac = HmacSha256::new_from_slice(&key)
        .map_err(|e| AppError::Internal(format!("Invalid webhook key: {}", e)))?;
    mac.update(headers.id.as_bytes());
    mac.update(b".");
    mac.update(headers.timestamp.as_bytes());
    mac.update(b".");
    mac.update(body);

    let matched = headers
        .signature
        .split_whitespace()
        .filter_map(|entry| entry.split_once(','))
        .filter(|(version, _)| *version == "v1")
        .filter_map(|(_, sig)| general_purpose::STANDARD.decode(sig).ok())
        .any(|sig| mac.clone().verify_slice(&sig).is_ok());

    if matched {
        Ok(())
    } else {
        Err(AppError::Webhook("No matching signature found".to_string()))
    }
}

#[derive(Clone)]
pub struct WebhookService {
    repository: Repository,
    config: WebhookConfig,
}

impl WebhookService {
    pub fn new(repository: Repository, config: WebhookConfig) -> Self {
        Self { repository, config }
    }

    /// Verify and apply one identity-provider delivery
    pub async fn handle(&self, headers: &WebhookHeaders, body: &[u8]) -> AppResult<WebhookAck> {
        let secret = self
            .config
            .secret
            .as_deref()
            .ok_or_else(|| AppError::Internal("Webhook secret is not configured".to_string()))?;

        if let Err(e) = verify_signature(secret, headers, body, Utc::now(), self.config.tolerance_secs) {
            tracing::warn!(svix_id = %headers.id, error = %e, "Rejected identity webhook");
            return Err(e);
        }

        let event: IdentityEvent = serde_json::from_slice(body)
            .map_err(|e| AppError::BadRequest(format!("Invalid webhook payload: {}", e)))?;

        match event.event_type.as_str() {
            "user.created" | "user.updated" => {
                let data: UserEventData = serde_json::from_value(event.data)
                    .map_err(|e| AppError::BadRequest(format!("Invalid user event: {}", e)))?;
                let user = self
                    .repository
                    .users
                    .upsert(&SyncUser::from(data), UserRole::Client)
                    .await?;
                tracing::info!(
                    event = %event.event_type,
                    clerk_id = %user.clerk_id,
                    role = %user.role,
                    "Synced user from identity provider"
                );
                Ok(WebhookAck {
                    received: true,
                    event_type: event.event_type,
                    handled: true,
                })
            }
            _ => {
                tracing::debug!(event = %event.event_type, "Ignoring identity webhook event");
                Ok(WebhookAck {
                    received: true,
                    event_type: event.event_type,
                    handled: false,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // "test-webhook-secret-key" in base64
    const SECRET: &str = "whsec_dGVzdC13ZWJob29rLXNlY3JldC1rZXk=";
    const BODY: &[u8] = br#"{"type":"user.created","data":{"id":"user_1"}}"#;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn headers(signature: String) -> WebhookHeaders {
        WebhookHeaders {
            id: "msg_1".to_string(),
            timestamp: now().timestamp().to_string(),
            signature,
        }
    }

    fn valid_signature() -> String {
        let sig = sign(SECRET, "msg_1", &now().timestamp().to_string(), BODY).unwrap();
        format!("v1,{}", sig)
    }

    #[test]
    fn test_valid_signature_accepted() {
        assert!(verify_signature(SECRET, &headers(valid_signature()), BODY, now(), 300).is_ok());
    }

    #[test]
    fn test_any_listed_signature_may_match() {
        let header = format!("v1,Zm9vYmFy {}", valid_signature());
        assert!(verify_signature(SECRET, &headers(header), BODY, now(), 300).is_ok());
    }

    #[test]
    fn test_tampered_body_rejected() {
        let tampered = br#"{"type":"user.created","data":{"id":"user_2"}}"#;
        let err = verify_signature(SECRET, &headers(valid_signature()), tampered, now(), 300).unwrap_err();
        assert!(matches!(err, AppError::Webhook(_)));
    }

    #[test]
    fn test_stale_timestamp_rejected() {
        let later = now() + chrono::Duration::seconds(301);
        let err = verify_signature(SECRET, &headers(valid_signature()), BODY, later, 300).unwrap_err();
        assert!(matches!(err, AppError::Webhook(_)));
    }

    #[test]
    fn test_extreme_timestamp_rejected() {
        let mut delivery = headers(valid_signature());
        delivery.timestamp = i64::MIN.to_string();
        let err = verify_signature(SECRET, &delivery, BODY, now(), 300).unwrap_err();
        assert!(matches!(err, AppError::Webhook(_)));

        delivery.timestamp = i64::MAX.to_string();
        assert!(verify_signature(SECRET, &delivery, BODY, now(), 300).is_err());
    }

    #[test]
    fn test_unknown_version_ignored() {
        let header = valid_signature().replacen("v1,", "v2,", 1);
        assert!(verify_signature(SECRET, &headers(header), BODY, now(), 300).is_err());
    }

    #[test]
    fn test_secret_without_prefix() {
        let bare = SECRET.trim_start_matches(SECRET_PREFIX);
        assert!(verify_signature(bare, &headers(valid_signature()), BODY, now(), 300).is_ok());
    }

    #[test]
    fn test_user_event_mapping() {
        let data: UserEventData = serde_json::from_value(serde_json::json!({
            "id": "user_42",
            "email_addresses": [
                { "email_address": "first@example.com" },
                { "email_address": "second@example.com" }
            ],
            "first_name": "Sam",
            "last_name": ""
        }))
        .unwrap();

        let user = SyncUser::from(data);
        assert_eq!(user.clerk_id, "user_42");
        assert_eq!(user.email, "first@example.com");
        assert_eq!(user.first_name.as_deref(), Some("Sam"));
        assert_eq!(user.last_name, None);
    }
}
