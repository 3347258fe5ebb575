//! Common test utilities and fixtures for integration tests.
//!
//! The catalog API is stateless over an in-memory catalog, so tests build
//! the real router directly against fixture data; no external services are
//! required.

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use wordgym_backend::{router, AppState};
use wordgym_core::Catalog;

/// Build the application router over a fixture catalog.
pub fn test_router(catalog: Catalog) -> Router {
    router(AppState {
        catalog: Arc::new(catalog),
    })
}

/// Start a test server over the standard fixture catalog.
pub fn test_server() -> TestServer {
    TestServer::new(test_router(fixtures::sample_catalog())).unwrap()
}
