// src/lib.rs

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    // DatabaseConnection loses Clone under the mock driver the tests
    // compile in, so the shared handle is an Arc
    pub db: Arc<DatabaseConnection>,
}

pub mod config;

pub mod entities {
    pub mod prelude;
    pub mod sales_persons;
    pub mod customers;
    pub mod company_profiles;
    pub mod addresses_info;
    pub mod bank_details;
    pub mod suppliers;
    pub mod customer_suppliers;
    pub mod declarations;
    pub mod sales_info;
    pub mod accounts_info;
}

pub mod services {
    pub mod submission;
}

pub mod wizard {
    pub mod client;
    pub mod controller;
    pub mod form;
    pub mod nav;
    pub mod rules;
    pub mod validate;
}

pub mod models;
pub mod handlers;

/// Build the application router. Shared between `main` and the integration
/// tests so both exercise the same middleware stack.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::submit::health))
        .route("/submit-form", post(handlers::submit::submit_form))
        .layer(DefaultBodyLimit::max(config::MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
