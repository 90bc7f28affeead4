#![allow(dead_code, unreachable_pub)]

use axum::Router;
use std::sync::Arc;
use vhub_database::testing::ScriptedExecutor;
use vhub_database::{QueryResult, Row, SharedExecutor};
use vhub_kernel::domain::config::ApiConfig;
use vhub_kernel::server::ApiState;
use vhub_vendors::model::ValidatedRegistrationInput;
use vhub_vendors::repository::VendorRepository;

pub fn acme_input() -> ValidatedRegistrationInput {
    ValidatedRegistrationInput {
        vendor_slug: "acme".to_owned(),
        email: "a@acme.com".to_owned(),
        fullname: "Acme Co".to_owned(),
        hash_password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_owned(),
    }
}

/// Row the store returns for `INSERT ... RETURNING vendor_slug`.
pub fn inserted(slug: &str) -> QueryResult {
    QueryResult::from_rows(vec![Row::new().with("vendor_slug", slug)])
}

/// Row the store returns for vendor 42.
pub fn vendor_42() -> QueryResult {
    QueryResult::from_rows(vec![
        Row::new()
            .with("vendor_id", 42_i64)
            .with("vendor_slug", "acme")
            .with("email", "a@acme.com")
            .with("fullname", "Acme Co")
            .with("is_premium", true),
    ])
}

pub fn repository(executor: &ScriptedExecutor) -> VendorRepository {
    VendorRepository::new(Arc::new(executor.clone()))
}

pub fn state(executor: &ScriptedExecutor) -> ApiState {
    let config = ApiConfig::default();
    let executor: SharedExecutor = Arc::new(executor.clone());
    let slice = vhub_vendors::init(&config, &executor).expect("vendor slice");

    ApiState::builder()
        .config(config)
        .database(executor)
        .register_slice(slice)
        .build()
        .expect("state")
}

pub fn app(executor: &ScriptedExecutor) -> Router {
    let state = state(executor);
    let (router, _) = vhub_vendors::routes::router(&state).with_state(state).split_for_parts();
    router
}
