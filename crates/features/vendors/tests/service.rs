mod common;

use common::{acme_input, inserted, repository, vendor_42};
use serde_json::json;
use vhub_database::testing::ScriptedExecutor;
use vhub_database::{DatabaseError, QueryResult, SqlValue};
use vhub_kernel::server::{ApiError, StatusCode};
use vhub_vendors::VendorError;
use vhub_vendors::model::AuthenticatedVendor;
use vhub_vendors::repository::{INSERT_VENDOR, SELECT_VENDOR_BY_ID};
use vhub_vendors::service::{INSERT_FAILED, get_vendor, register_vendor};

#[tokio::test]
async fn acme_registration_returns_the_stored_slug() {
    let executor = ScriptedExecutor::new().respond(inserted("acme"));

    let response = register_vendor(&repository(&executor), Some(acme_input())).await.unwrap();

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({ "success": true, "msg": "Vendor registered", "data": { "vendorSlug": "acme" } })
    );

    let executed = executor.executed();
    assert_eq!(executed.len(), 1);
    assert_eq!(executed[0].text(), INSERT_VENDOR);
    let input = acme_input();
    assert_eq!(
        executed[0].values(),
        &[
            SqlValue::from("acme"),
            SqlValue::from("a@acme.com"),
            SqlValue::from("Acme Co"),
            SqlValue::from(input.hash_password),
        ]
    );
}

#[tokio::test]
async fn missing_input_is_404_and_never_reaches_the_store() {
    let executor = ScriptedExecutor::new();

    let err = register_vendor(&repository(&executor), None).await.unwrap_err();

    assert!(matches!(err, VendorError::PreconditionMissing { .. }));
    assert_eq!(ApiError::from(err).status(), StatusCode::NOT_FOUND);
    assert!(executor.executed().is_empty());
}

#[tokio::test]
async fn zero_inserted_rows_is_500() {
    let executor = ScriptedExecutor::new().respond(QueryResult::empty());

    let err = register_vendor(&repository(&executor), Some(acme_input())).await.unwrap_err();

    assert!(matches!(err, VendorError::Persistence { .. }));
    let api = ApiError::from(err);
    assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(api.message(), INSERT_FAILED);
}

#[tokio::test]
async fn duplicate_slug_is_500() {
    let executor = ScriptedExecutor::new().fail(DatabaseError::UniqueViolation {
        message: "duplicate key value violates unique constraint".into(),
        constraint: Some("vendors_vendor_slug_key".to_owned()),
        context: None,
    });

    let err = register_vendor(&repository(&executor), Some(acme_input())).await.unwrap_err();

    assert!(matches!(err, VendorError::Persistence { .. }));
    assert_eq!(ApiError::from(err).status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn store_failures_hide_driver_details() {
    let executor = ScriptedExecutor::new().fail(DatabaseError::Connection {
        message: "connection reset by peer at 10.0.0.7".into(),
        context: None,
    });

    let err = register_vendor(&repository(&executor), Some(acme_input())).await.unwrap_err();

    assert!(matches!(err, VendorError::Database { .. }));
    let api = ApiError::from(err);
    assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!api.message().contains("10.0.0.7"));
}

#[tokio::test]
async fn vendor_42_profile_has_a_string_id_and_no_hash() {
    let executor = ScriptedExecutor::new().respond(vendor_42());
    let identity = AuthenticatedVendor { vendor_id: 42 };

    let response = get_vendor(&repository(&executor), Some(&identity)).await.unwrap();
    let body = serde_json::to_value(&response).unwrap();

    assert_eq!(
        body,
        json!({
            "success": true,
            "data": {
                "email": "a@acme.com",
                "fullname": "Acme Co",
                "isPremium": true,
                "vendorId": "42",
                "vendorSlug": "acme"
            }
        })
    );
    assert!(body["data"].get("hashPassword").is_none());
    assert!(body["data"].get("hash_password").is_none());

    let executed = executor.executed();
    assert_eq!(executed[0].text(), SELECT_VENDOR_BY_ID);
    assert!(!executed[0].text().contains("hash_password"));
    assert_eq!(executed[0].values(), &[SqlValue::Int(42)]);
}

#[tokio::test]
async fn vendor_999_is_a_structured_404() {
    let executor = ScriptedExecutor::new().respond(QueryResult::empty());
    let identity = AuthenticatedVendor { vendor_id: 999 };

    let err = get_vendor(&repository(&executor), Some(&identity)).await.unwrap_err();

    assert!(matches!(err, VendorError::NotFound { .. }));
    let api = ApiError::from(err);
    assert_eq!(api.status(), StatusCode::NOT_FOUND);
    assert_eq!(api.message(), "Vendor not found");
}

#[tokio::test]
async fn missing_identity_is_401() {
    let executor = ScriptedExecutor::new();

    let err = get_vendor(&repository(&executor), None).await.unwrap_err();

    assert_eq!(ApiError::from(err).status(), StatusCode::UNAUTHORIZED);
    assert!(executor.executed().is_empty());
}
