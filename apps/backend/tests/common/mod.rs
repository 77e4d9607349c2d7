//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for building the app over an in-memory store
//! - A fixed clock so door gating is deterministic

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use chrono::NaiveDate;

use advent_backend::db::ProgressStore;
use advent_backend::services::clock::FixedClock;
use advent_backend::services::riddles::CatalogProvider;
use advent_backend::{app, AppState};

/// Test context holding the shared store and router.
pub struct TestContext {
    pub store: Arc<ProgressStore>,
    app: Router,
}

impl TestContext {
    /// Create a context whose clock reads `today`, serving the sample catalog.
    pub fn new(today: NaiveDate) -> Self {
        let riddles = CatalogProvider::from_json(&fixtures::sample_catalog())
            .expect("sample catalog is valid");
        let store = Arc::new(ProgressStore::in_memory());

        let state = AppState {
            store: store.clone(),
            riddles: Arc::new(riddles),
            clock: Arc::new(FixedClock(today)),
            calendar_year: fixtures::YEAR,
        };

        Self {
            store,
            app: app(state),
        }
    }

    /// Create a context on Christmas Eve, with every door unlocked.
    pub fn all_unlocked() -> Self {
        Self::new(fixtures::december(24))
    }

    /// Get a test server for the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.app.clone()).expect("Failed to start test server")
    }
}
