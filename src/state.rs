//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use redis::aio::ConnectionManager;
use sqlx::PgPool;

use crate::{config::Config, judge::DynJudgeClient, relay::RelayHub};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    pub db: PgPool,

    /// Redis connection manager
    pub redis: ConnectionManager,

    /// External judge service client
    pub judge: DynJudgeClient,

    /// In-process messaging relay hub
    pub relay: RelayHub,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        db: PgPool,
        redis: ConnectionManager,
        judge: DynJudgeClient,
        relay: RelayHub,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                redis,
                judge,
                relay,
                config,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a clone of the Redis connection manager
    pub fn redis(&self) -> ConnectionManager {
        self.inner.redis.clone()
    }

    /// Get a reference to the judge client
    pub fn judge(&self) -> &DynJudgeClient {
        &self.inner.judge
    }

    /// Get a reference to the relay hub
    pub fn relay(&self) -> &RelayHub {
        &self.inner.relay
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
