//! Server dependencies for report activities (using traits for testability)
//!
//! This module provides the dependency container passed to every analytics
//! activity. Storage sits behind `BaseReportStore` so reports can run against
//! Postgres in production and an in-memory store in tests.

use sqlx::PgPool;
use std::sync::Arc;

use crate::kernel::{BaseReportStore, PostgresReportStore};

// =============================================================================
// ServerDeps
// =============================================================================

/// Dependencies accessible to report activities
#[derive(Clone)]
pub struct ServerDeps {
    pub report_store: Arc<dyn BaseReportStore>,
}

impl ServerDeps {
    pub fn new(report_store: Arc<dyn BaseReportStore>) -> Self {
        Self { report_store }
    }

    /// Dependencies backed by the Postgres report store
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(PostgresReportStore::new(pool)))
    }
}
