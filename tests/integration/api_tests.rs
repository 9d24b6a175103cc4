//! API integration tests against a running server
//!
//! Start the server with `JWT_SECRET` matching [`JWT_SECRET`] on a fresh
//! database, then run `cargo test -- --ignored`.

use chrono::{Duration, Utc};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use ramblers_server::models::user::IdentityClaims;

const BASE_URL: &str = "http://localhost:8080/api/v1";
const JWT_SECRET: &str = "change-this-secret-in-production";

fn token_for(sub: &str) -> String {
    let now = Utc::now();
    IdentityClaims {
        sub: sub.to_string(),
        email: Some(format!("{}@example.com", sub)),
        given_name: None,
        family_name: None,
        exp: (now + Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
    }
    .create_token(JWT_SECRET)
    .expect("Failed to sign token")
}

/// Token of the site admin, promoting it on first use
async fn admin_token(client: &Client) -> String {
    let token = token_for("user_it_admin");
    let response = client
        .post(format!("{}/setup/promote", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send promote request");
    assert!(response.status().is_success(), "admin promotion failed: {}", response.status());
    token
}

async fn submit_contact(client: &Client) -> Value {
    let response = client
        .post(format!("{}/contact", BASE_URL))
        .json(&json!({
            "name": "Integration Tester",
            "email": "tester@example.com",
            "message": "We need a launch video",
            "service_type": "production",
            "budget": "5k-10k"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_duplicate_contact_creates_two_records() {
    let client = Client::new();

    let first = submit_contact(&client).await;
    let second = submit_contact(&client).await;

    assert_eq!(first["status"], "new");
    assert!(first["responded_at"].is_null());
    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
#[ignore]
async fn test_contact_status_keeps_response_time() {
    let client = Client::new();
    let token = admin_token(&client).await;
    let contact = submit_contact(&client).await;
    let id = contact["id"].as_i64().expect("No id");

    let contacted: Value = client
        .put(format!("{}/admin/contacts/{}/status", BASE_URL, id))
        .bearer_auth(&token)
        .json(&json!({ "status": "contacted" }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(contacted["status"], "contacted");
    let responded_at = contacted["responded_at"].clone();
    assert!(responded_at.is_string());

    let reopened: Value = client
        .put(format!("{}/admin/contacts/{}/status", BASE_URL, id))
        .bearer_auth(&token)
        .json(&json!({ "status": "new" }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(reopened["status"], "new");
    assert_eq!(reopened["responded_at"], responded_at);
}

#[tokio::test]
#[ignore]
async fn test_portfolio_category_filter() {
    let client = Client::new();
    let token = admin_token(&client).await;

    for (title, category, published) in [
        ("Brand film", "Commercial", true),
        ("Draft spot", "Commercial", false),
        ("Conference recap", "Event", true),
    ] {
        let response = client
            .post(format!("{}/admin/portfolio", BASE_URL))
            .bearer_auth(&token)
            .json(&json!({
                "title": title,
                "description": "",
                "category": category,
                "video_url": "https://vimeo.com/123456",
                "video_type": "vimeo",
                "published": published
            }))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let items: Vec<Value> = client
        .get(format!("{}/portfolio?category=Commercial", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert!(!items.is_empty());
    for item in &items {
        assert_eq!(item["category"], "Commercial");
        assert_eq!(item["published"], true);
    }
}

#[tokio::test]
#[ignore]
async fn test_admin_gating() {
    let client = Client::new();
    let admin = admin_token(&client).await;
    let client_token = token_for("user_it_client");

    client
        .post(format!("{}/me", BASE_URL))
        .bearer_auth(&client_token)
        .send()
        .await
        .expect("Failed to send request");

    let equipment = json!({
        "name": "Sony FX3",
        "description": "Compact cinema camera",
        "category": "Camera",
        "price_per_day": "100",
        "price_per_week": "700",
        "price_per_month": "3000"
    });

    let denied = client
        .post(format!("{}/admin/equipment", BASE_URL))
        .bearer_auth(&client_token)
        .json(&equipment)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);

    let created = client
        .post(format!("{}/admin/equipment", BASE_URL))
        .bearer_auth(&admin)
        .json(&equipment)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(created.status(), StatusCode::CREATED);

    let body: Value = created.json().await.expect("Failed to parse response");
    let id = body["id"].as_i64().expect("No id");

    let quote: Value = client
        .post(format!("{}/equipment/{}/quote", BASE_URL, id))
        .json(&json!({
            "start_date": "2030-01-01T00:00:00Z",
            "end_date": "2030-01-08T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(quote["days"], 7);
    let total: f64 = quote["total_price"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .expect("No total");
    assert_eq!(total, 700.0);
}

#[tokio::test]
#[ignore]
async fn test_concurrent_admin_promotion_grants_one() {
    let client = Client::new();
    let suffix = Utc::now().timestamp_millis();
    let first = token_for(&format!("user_it_race_a_{}", suffix));
    let second = token_for(&format!("user_it_race_b_{}", suffix));

    let promote = |token: String| {
        let client = client.clone();
        async move {
            client
                .post(format!("{}/setup/promote", BASE_URL))
                .bearer_auth(token)
                .send()
                .await
                .expect("Failed to send promote request")
                .status()
        }
    };

    let (a, b) = tokio::join!(promote(first), promote(second));
    let granted = [a, b].iter().filter(|status| status.is_success()).count();
    assert!(granted <= 1, "both callers were promoted: {} {}", a, b);

    let late = token_for(&format!("user_it_race_c_{}", suffix));
    let response = client
        .post(format!("{}/setup/promote", BASE_URL))
        .bearer_auth(&late)
        .send()
        .await
        .expect("Failed to send promote request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
