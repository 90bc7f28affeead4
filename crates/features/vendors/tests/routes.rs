mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::{Extension, Router};
use common::{app, inserted, vendor_42};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use vhub_database::SqlValue;
use vhub_database::testing::ScriptedExecutor;
use vhub_vendors::model::AuthenticatedVendor;

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

fn register(body: &Value) -> Request<Body> {
    Request::post("/api/v1/vendors/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn me() -> Request<Body> {
    Request::get("/api/v1/vendors/me").body(Body::empty()).expect("request")
}

fn acme_body() -> Value {
    json!({
        "vendorSlug": " ACME ",
        "email": "A@acme.com",
        "fullname": "Acme Co",
        "password": "correct horse battery"
    })
}

#[tokio::test]
async fn register_stores_normalized_fields_and_a_password_hash() {
    let executor = ScriptedExecutor::new().respond(inserted("acme"));

    let (status, body) = send(app(&executor), register(&acme_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "msg": "Vendor registered", "data": { "vendorSlug": "acme" } }));

    let executed = executor.executed();
    assert_eq!(executed.len(), 1);
    let values = executed[0].values();
    assert_eq!(values[0], SqlValue::from("acme"));
    assert_eq!(values[1], SqlValue::from("a@acme.com"));
    assert_eq!(values[2], SqlValue::from("Acme Co"));
    let SqlValue::Text(hash) = &values[3] else { panic!("hash should be text") };
    assert!(hash.starts_with("$argon2id$"));
    assert!(!hash.contains("correct horse battery"));
}

#[tokio::test]
async fn invalid_payloads_are_400_and_never_reach_the_store() {
    let cases = [
        json!({ "vendorSlug": "a", "email": "a@acme.com", "fullname": "Acme", "password": "password1" }),
        json!({ "vendorSlug": "acme", "email": "not-an-email", "fullname": "Acme", "password": "password1" }),
        json!({ "vendorSlug": "acme", "email": "a@acme.com", "fullname": "Acme", "password": "short" }),
        json!({ "vendorSlug": "acme", "email": "a@acme.com", "fullname": "Acme" }),
        json!({ "vendorSlug": "acme", "email": "a@acme.com", "fullname": "Acme", "password": "password1", "isPremium": true }),
    ];

    for case in cases {
        let executor = ScriptedExecutor::new();
        let (status, body) = send(app(&executor), register(&case)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{case}");
        assert_eq!(body["success"], false);
        assert!(body["msg"].is_string());
        assert!(executor.executed().is_empty(), "{case}");
    }
}

#[tokio::test]
async fn oversized_body_is_413_and_never_reaches_the_store() {
    let executor = ScriptedExecutor::new();
    let mut body = acme_body();
    body["fullname"] = Value::String("x".repeat(128 * 1024));

    let (status, body) = send(app(&executor), register(&body)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["success"], false);
    assert!(body["msg"].as_str().is_some_and(|msg| msg.contains("exceeds")));
    assert!(executor.executed().is_empty());
}

#[tokio::test]
async fn duplicate_registration_is_500_with_a_generic_message() {
    let executor = ScriptedExecutor::new().fail(vhub_database::DatabaseError::UniqueViolation {
        message: "duplicate key value violates unique constraint".into(),
        constraint: Some("vendors_email_key".to_owned()),
        context: None,
    });

    let (status, body) = send(app(&executor), register(&acme_body())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "msg": "Error while inserting vendor." }));
}

#[tokio::test]
async fn profile_uses_the_resolved_identity() {
    let executor = ScriptedExecutor::new().respond(vendor_42());
    let app = app(&executor).layer(Extension(AuthenticatedVendor { vendor_id: 42 }));

    let (status, body) = send(app, me()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["vendorId"], "42");
    assert_eq!(body["data"]["isPremium"], true);
    assert_eq!(executor.executed()[0].values(), &[SqlValue::Int(42)]);
}

#[tokio::test]
async fn profile_without_identity_is_401() {
    let executor = ScriptedExecutor::new();

    let (status, body) = send(app(&executor), me()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn unknown_vendor_is_404() {
    let executor = ScriptedExecutor::new();
    let app = app(&executor).layer(Extension(AuthenticatedVendor { vendor_id: 999 }));

    let (status, body) = send(app, me()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "msg": "Vendor not found" }));
}
