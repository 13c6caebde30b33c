//! HTTP-level tests: the real router over mock providers.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tutoria_booking::mocks::{MockAccessCodeStore, MockBookingStore, MockEmailProvider};
use tutoria_booking::{Booking, BookingId, CodeId, Environment, ReminderConfig, Secrets};
use tutoria_web::{api_router, AppState};

const ADMIN_KEY: &str = "test-admin-key";
const CRON_SECRET: &str = "test-cron-secret";

struct TestApp {
    server: TestServer,
    codes: MockAccessCodeStore,
    bookings: MockBookingStore,
    email: MockEmailProvider,
}

/// Stand up the real router over mock providers.
fn create_test_app() -> TestApp {
    let codes = MockAccessCodeStore::new();
    let bookings = MockBookingStore::new();
    let email = MockEmailProvider::new();

    let env = Environment::new(
        codes.clone(),
        bookings.clone(),
        email.clone(),
        Secrets::new()
            .with_admin_key(ADMIN_KEY)
            .with_cron_secret(CRON_SECRET),
        Some("operator@example.com".to_string()),
        ReminderConfig::default(),
    );

    let server = TestServer::new(api_router(AppState::new(env))).unwrap();
    TestApp {
        server,
        codes,
        bookings,
        email,
    }
}

/// Mint a code through the API and return the code string.
async fn mint_code(app: &TestApp) -> String {
    let response = app
        .server
        .post("/api/admin/generate-code")
        .json(&json!({"adminKey": ADMIN_KEY}))
        .await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    body["code"].as_str().unwrap().to_string()
}

/// Validate a code through the API and return its identifier.
async fn validate_code(app: &TestApp, code: &str) -> String {
    let response = app
        .server
        .post("/api/validate-code")
        .json(&json!({"code": code}))
        .await;
    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    body["codeId"].as_str().unwrap().to_string()
}

fn booking_body(code_id: &str) -> Value {
    json!({
        "name": "Ana",
        "email": "ana@example.com",
        "schoolYear": "11",
        "hoursPerWeek": "2",
        "date": (Utc::now() + Duration::days(2)).to_rfc3339(),
        "codeId": code_id,
    })
}

#[tokio::test]
async fn test_health() {
    let app = create_test_app();
    let response = app.server.get("/health").await;
    response.assert_status(StatusCode::OK);
    response.assert_text("ok");
}

#[tokio::test]
async fn test_generate_code_happy_path() {
    let app = create_test_app();
    let code = mint_code(&app).await;

    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')));
    assert_eq!(app.codes.len().unwrap(), 1);
}

#[tokio::test]
async fn test_generate_code_rejects_bad_key() {
    let app = create_test_app();

    let response = app
        .server
        .post("/api/admin/generate-code")
        .json(&json!({"adminKey": "wrong"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Unauthorized");
    assert!(app.codes.is_empty().unwrap());
}

#[tokio::test]
async fn test_generate_code_without_configured_secret_is_500() {
    let codes = MockAccessCodeStore::new();
    let env = Environment::new(
        codes.clone(),
        MockBookingStore::new(),
        MockEmailProvider::new(),
        Secrets::new().with_cron_secret(CRON_SECRET),
        None,
        ReminderConfig::default(),
    );
    let server = TestServer::new(api_router(AppState::new(env))).unwrap();

    let response = server
        .post("/api/admin/generate-code")
        .json(&json!({"adminKey": ADMIN_KEY}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(codes.is_empty().unwrap());
}

#[tokio::test]
async fn test_validate_unknown_code() {
    let app = create_test_app();

    let response = app
        .server
        .post("/api/validate-code")
        .json(&json!({"code": "DEADBEEF"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["valid"], false);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_validate_is_case_insensitive_and_repeatable() {
    let app = create_test_app();
    let code = mint_code(&app).await;

    let first = validate_code(&app, &code.to_lowercase()).await;
    let second = validate_code(&app, &code).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_create_booking_happy_path() {
    let app = create_test_app();
    let code = mint_code(&app).await;
    let code_id = validate_code(&app, &code).await;

    let response = app
        .server
        .post("/api/bookings/create")
        .json(&booking_body(&code_id))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert!(body["bookingId"].is_string());

    assert_eq!(app.bookings.len().unwrap(), 1);
    // Confirmation to the requester, notification to the operator.
    assert_eq!(app.email.sent_count().unwrap(), 2);
}

#[tokio::test]
async fn test_used_code_cannot_book_again() {
    let app = create_test_app();
    let code = mint_code(&app).await;
    let code_id = validate_code(&app, &code).await;

    app.server
        .post("/api/bookings/create")
        .json(&booking_body(&code_id))
        .await
        .assert_status(StatusCode::OK);

    // Validation now reports the code as spent...
    let response = app
        .server
        .post("/api/validate-code")
        .json(&json!({"code": code}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["valid"], false);

    // ...and a second booking referencing the stale id fails too.
    let response = app
        .server
        .post("/api/bookings/create")
        .json(&booking_body(&code_id))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(app.bookings.len().unwrap(), 1);
}

#[tokio::test]
async fn test_create_booking_missing_fields() {
    let app = create_test_app();
    let code = mint_code(&app).await;
    let code_id = validate_code(&app, &code).await;

    let mut body = booking_body(&code_id);
    body.as_object_mut().unwrap().remove("name");
    body.as_object_mut().unwrap().remove("hoursPerWeek");

    let response = app.server.post("/api/bookings/create").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    let message = error["error"].as_str().unwrap();
    assert!(message.contains("name"));
    assert!(message.contains("hoursPerWeek"));

    assert!(app.bookings.is_empty().unwrap());
    assert_eq!(app.email.sent_count().unwrap(), 0);
}

#[tokio::test]
async fn test_create_booking_malformed_date() {
    let app = create_test_app();
    let code = mint_code(&app).await;
    let code_id = validate_code(&app, &code).await;

    let mut body = booking_body(&code_id);
    body["date"] = json!("next tuesday");

    let response = app.server.post("/api/bookings/create").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(app.bookings.is_empty().unwrap());
}

#[tokio::test]
async fn test_cron_requires_bearer_secret() {
    let app = create_test_app();

    let response = app.server.get("/api/cron/send-reminders").await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .get("/api/cron/send-reminders")
        .authorization_bearer("wrong-secret")
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_cron_reports_scan_and_send_counts() {
    let app = create_test_app();

    // One booking inside the 24h window, one outside every window.
    let in_window = Booking {
        id: BookingId::new(),
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        school_year: "11".to_string(),
        hours_per_week: "2".to_string(),
        date: Utc::now() + Duration::minutes(23 * 60 + 55),
        code_id: CodeId::new(),
        email_24h_sent: false,
        email_1h_sent: false,
        email_15m_sent: false,
        created_at: Utc::now(),
    };
    let mut out_of_window = in_window.clone();
    out_of_window.id = BookingId::new();
    out_of_window.date = Utc::now() + Duration::hours(6);
    app.bookings.insert(in_window.clone()).unwrap();
    app.bookings.insert(out_of_window).unwrap();

    let response = app
        .server
        .get("/api/cron/send-reminders")
        .authorization_bearer(CRON_SECRET)
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["bookingsChecked"], 2);
    assert_eq!(body["emailsSent"], 1);

    assert!(app.bookings.get(in_window.id).unwrap().unwrap().email_24h_sent);

    // A second trigger is idempotent for the same window.
    let response = app
        .server
        .get("/api/cron/send-reminders")
        .authorization_bearer(CRON_SECRET)
        .await;
    let body: Value = response.json();
    assert_eq!(body["emailsSent"], 0);
}
