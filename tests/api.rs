//! End-to-end API tests against the in-memory store

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use dribble::{
    config::{Config, JwtConfig, ServerConfig, StoreBackend, StoreConfig},
    constants::API_BASE_PATH,
    handlers,
    state::AppState,
    store::MemoryStore,
};

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "warn".to_string(),
        },
        store: StoreConfig {
            backend: StoreBackend::Memory,
            database_url: None,
            max_connections: 1,
            seed_demo_data: true,
        },
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            expiry_hours: 1,
        },
    }
}

fn app() -> Router {
    let state = AppState::new(
        Arc::new(MemoryStore::with_demo_data().unwrap()),
        test_config(),
    );
    Router::new()
        .nest(API_BASE_PATH, handlers::routes(state.clone()))
        .with_state(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

/// Login as one of the demo accounts and return the bearer token.
///
/// Demo passwords are the local part of the email address.
async fn login(app: &Router, email: &str) -> String {
    let password = email.split('@').next().unwrap();
    let (status, body) = send(
        app,
        json_request(
            Method::POST,
            "/api/auth/login",
            None,
            json!({ "email": email, "password": password }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_check_is_public() {
    let app = app();
    let (status, body) = send(&app, get_request("/api/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn register_then_login_then_me() {
    let app = app();

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/auth/register",
            None,
            json!({
                "email": "newplayer@futsal.com",
                "password": "secret123",
                "name": "New Player",
                "role": "regular_user"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["user"]["email"], "newplayer@futsal.com");
    assert!(body["user"].get("passwordHash").is_none());

    let token = body["token"].as_str().unwrap();
    let (status, body) = send(&app, get_request("/api/auth/me", Some(token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["role"], "regular_user");
}

#[tokio::test]
async fn register_rejects_super_admin_role() {
    let app = app();
    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/auth/register",
            None,
            json!({
                "email": "sneaky@futsal.com",
                "password": "secret123",
                "name": "Sneaky",
                "role": "super_admin"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() {
    let app = app();
    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/auth/login",
            None,
            json!({ "email": "user@futsal.com", "password": "wrong" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = app();
    let (status, _) = send(&app, get_request("/api/courts", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn regular_user_cannot_list_accounts() {
    let app = app();
    let token = login(&app, "user@futsal.com").await;

    let (status, body) = send(&app, get_request("/api/users", Some(&token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn super_admin_lists_accounts_without_password_hashes() {
    let app = app();
    let token = login(&app, "admin@futsal.com").await;

    let (status, body) = send(&app, get_request("/api/users", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert!(users.len() >= 4);
    assert!(users.iter().all(|u| u.get("passwordHash").is_none()));
}

#[tokio::test]
async fn field_owner_creates_and_updates_own_court() {
    let app = app();
    let token = login(&app, "owner@futsal.com").await;

    let (status, court) = send(
        &app,
        json_request(
            Method::POST,
            "/api/courts",
            Some(&token),
            json!({
                "name": "Arena Nova",
                "description": "Indoor court",
                "pricePerHour": 45.0,
                "location": "Downtown",
                "facilities": ["parking"]
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{court}");
    assert_eq!(court["name"], "Arena Nova");
    let id = court["id"].as_str().unwrap();

    let (status, updated) = send(
        &app,
        json_request(
            Method::PATCH,
            &format!("/api/courts/{id}"),
            Some(&token),
            json!({ "pricePerHour": 50.0 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["pricePerHour"], 50.0);
    // Untouched fields survive the partial update
    assert_eq!(updated["location"], "Downtown");
}

#[tokio::test]
async fn field_owner_cannot_update_foreign_court() {
    let app = app();
    let owner = login(&app, "owner@futsal.com").await;
    let other = login(&app, "owner2@futsal.com").await;

    let (status, court) = send(
        &app,
        json_request(
            Method::POST,
            "/api/courts",
            Some(&owner),
            json!({
                "name": "Arena Nova",
                "description": "Indoor court",
                "pricePerHour": 45.0,
                "location": "Downtown"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = court["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        json_request(
            Method::PATCH,
            &format!("/api/courts/{id}"),
            Some(&other),
            json!({ "pricePerHour": 1.0 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn regular_user_cannot_create_courts() {
    let app = app();
    let token = login(&app, "user@futsal.com").await;

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/courts",
            Some(&token),
            json!({
                "name": "Arena Nova",
                "description": "Indoor court",
                "pricePerHour": 45.0,
                "location": "Downtown"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn booking_price_is_computed_server_side() {
    let app = app();
    let owner = login(&app, "owner@futsal.com").await;
    let player = login(&app, "user@futsal.com").await;

    let (_, court) = send(
        &app,
        json_request(
            Method::POST,
            "/api/courts",
            Some(&owner),
            json!({
                "name": "Arena Nova",
                "description": "Indoor court",
                "pricePerHour": 40.0,
                "location": "Downtown"
            }),
        ),
    )
    .await;
    let court_id = court["id"].as_str().unwrap();

    let (status, booking) = send(
        &app,
        json_request(
            Method::POST,
            "/api/bookings",
            Some(&player),
            json!({
                "courtId": court_id,
                "date": "2026-09-01",
                "startTime": "18:00",
                "endTime": "19:30"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{booking}");
    // 1.5 hours at 40/hour
    assert_eq!(booking["totalPrice"], 60.0);
    assert_eq!(booking["status"], "pending");
    assert_eq!(booking["paymentStatus"], "pending");
}

#[tokio::test]
async fn booking_shorter_than_minimum_is_rejected() {
    let app = app();
    let owner = login(&app, "owner@futsal.com").await;
    let player = login(&app, "user@futsal.com").await;

    let (_, court) = send(
        &app,
        json_request(
            Method::POST,
            "/api/courts",
            Some(&owner),
            json!({
                "name": "Arena Nova",
                "description": "Indoor court",
                "pricePerHour": 40.0,
                "location": "Downtown"
            }),
        ),
    )
    .await;
    let court_id = court["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/bookings",
            Some(&player),
            json!({
                "courtId": court_id,
                "date": "2026-09-01",
                "startTime": "18:00",
                "endTime": "18:30"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleting_a_booking_twice_returns_not_found() {
    let app = app();
    let admin = login(&app, "admin@futsal.com").await;

    let (_, bookings) = send(&app, get_request("/api/bookings", Some(&admin))).await;
    let id = bookings[0]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        json_request(Method::DELETE, &format!("/api/bookings/{id}"), Some(&admin), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = send(
        &app,
        json_request(Method::DELETE, &format!("/api/bookings/{id}"), Some(&admin), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn regular_user_sees_only_own_bookings() {
    let app = app();
    let owner = login(&app, "owner@futsal.com").await;
    let player = login(&app, "user@futsal.com").await;

    let (_, court) = send(
        &app,
        json_request(
            Method::POST,
            "/api/courts",
            Some(&owner),
            json!({
                "name": "Arena Nova",
                "description": "Indoor court",
                "pricePerHour": 40.0,
                "location": "Downtown"
            }),
        ),
    )
    .await;
    let court_id = court["id"].as_str().unwrap();

    send(
        &app,
        json_request(
            Method::POST,
            "/api/bookings",
            Some(&player),
            json!({
                "courtId": court_id,
                "date": "2026-09-01",
                "startTime": "18:00",
                "endTime": "19:00"
            }),
        ),
    )
    .await;

    let (_, me) = send(&app, get_request("/api/auth/me", Some(&player))).await;
    let my_id = me["user"]["id"].as_str().unwrap();

    let (status, bookings) = send(&app, get_request("/api/bookings", Some(&player))).await;
    assert_eq!(status, StatusCode::OK);
    let bookings = bookings.as_array().unwrap();
    assert!(!bookings.is_empty());
    assert!(bookings.iter().all(|b| b["userId"] == my_id));
}

#[tokio::test]
async fn booking_list_filters_by_user_and_court() {
    let app = app();
    let owner = login(&app, "owner@futsal.com").await;
    let admin = login(&app, "admin@futsal.com").await;
    let player = login(&app, "user@futsal.com").await;

    let mut court_ids = Vec::new();
    for name in ["Filter Court A", "Filter Court B"] {
        let (status, court) = send(
            &app,
            json_request(
                Method::POST,
                "/api/courts",
                Some(&owner),
                json!({
                    "name": name,
                    "description": "Indoor court",
                    "pricePerHour": 40.0,
                    "location": "Downtown"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        court_ids.push(court["id"].as_str().unwrap().to_string());
    }

    // Player books the first court, admin books the second
    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/bookings",
            Some(&player),
            json!({
                "courtId": court_ids[0],
                "date": "2026-09-01",
                "startTime": "18:00",
                "endTime": "19:00"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, admin_booking) = send(
        &app,
        json_request(
            Method::POST,
            "/api/bookings",
            Some(&admin),
            json!({
                "courtId": court_ids[1],
                "date": "2026-09-02",
                "startTime": "20:00",
                "endTime": "21:00"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let admin_id = admin_booking["userId"].as_str().unwrap().to_string();

    // Court filter narrows to that court's bookings
    let (status, bookings) = send(
        &app,
        get_request(&format!("/api/bookings?courtId={}", court_ids[0]), Some(&admin)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let bookings = bookings.as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["courtId"], court_ids[0].as_str());

    // User filter narrows to that user's bookings
    let (status, bookings) = send(
        &app,
        get_request(&format!("/api/bookings?userId={admin_id}"), Some(&admin)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let bookings = bookings.as_array().unwrap();
    assert!(!bookings.is_empty());
    assert!(bookings.iter().all(|b| b["userId"] == admin_id.as_str()));

    // When both filters are given, the user filter takes precedence
    let (status, bookings) = send(
        &app,
        get_request(
            &format!("/api/bookings?userId={admin_id}&courtId={}", court_ids[0]),
            Some(&admin),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let bookings = bookings.as_array().unwrap();
    assert!(!bookings.is_empty());
    assert!(bookings.iter().all(|b| b["userId"] == admin_id.as_str()));
    assert!(bookings.iter().all(|b| b["courtId"] == court_ids[1].as_str()));
}

#[tokio::test]
async fn booking_filters_still_respect_visibility() {
    let app = app();
    let owner = login(&app, "owner@futsal.com").await;
    let admin = login(&app, "admin@futsal.com").await;
    let player = login(&app, "user@futsal.com").await;

    let (_, court) = send(
        &app,
        json_request(
            Method::POST,
            "/api/courts",
            Some(&owner),
            json!({
                "name": "Hidden Court",
                "description": "Indoor court",
                "pricePerHour": 40.0,
                "location": "Downtown"
            }),
        ),
    )
    .await;
    let court_id = court["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        json_request(
            Method::POST,
            "/api/bookings",
            Some(&admin),
            json!({
                "courtId": court_id,
                "date": "2026-09-03",
                "startTime": "18:00",
                "endTime": "19:00"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // The court filter matches only the admin's booking, which the player
    // may not see
    let (status, bookings) = send(
        &app,
        get_request(&format!("/api/bookings?courtId={court_id}"), Some(&player)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(bookings.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn dashboard_stats_hide_user_counts_from_non_admins() {
    let app = app();
    let admin = login(&app, "admin@futsal.com").await;
    let owner = login(&app, "owner@futsal.com").await;

    let (status, stats) = send(&app, get_request("/api/dashboard/stats", Some(&admin))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(stats["totalUsers"].as_i64().unwrap() >= 4);

    let (status, stats) = send(&app, get_request("/api/dashboard/stats", Some(&owner))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["totalUsers"], 0);
}

#[tokio::test]
async fn user_can_update_own_profile_but_not_active_flag() {
    let app = app();
    let player = login(&app, "user@futsal.com").await;

    let (_, me) = send(&app, get_request("/api/auth/me", Some(&player))).await;
    let my_id = me["user"]["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        json_request(
            Method::PATCH,
            &format!("/api/users/{my_id}"),
            Some(&player),
            json!({ "name": "Renamed Player" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["name"], "Renamed Player");

    let (status, _) = send(
        &app,
        json_request(
            Method::PATCH,
            &format!("/api/users/{my_id}"),
            Some(&player),
            json!({ "isActive": false }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_court_id_is_not_found() {
    let app = app();
    let admin = login(&app, "admin@futsal.com").await;

    let (status, body) = send(
        &app,
        get_request(
            "/api/courts/00000000-0000-0000-0000-000000000000",
            Some(&admin),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
