//! Configuration for the connection pool
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

/// Configuration for a [`Pool`](crate::pool::Pool)
#[derive(Debug, Clone)]
pub struct PoolConfig {
    // -------------------------------------------------------------------------
    // Capacity Configuration
    // -------------------------------------------------------------------------
    /// Maximum number of clients the pool will ever create. Clients are
    /// built lazily on first need, and this many operations may be "in
    /// client" simultaneously; further callers block until a release.
    pub max_clients: usize,

    // -------------------------------------------------------------------------
    // Checkout Configuration
    // -------------------------------------------------------------------------
    /// Optional bound on how long an acquirer waits for an exhausted pool.
    /// `None` (the default) blocks until another caller releases a client.
    pub acquire_timeout: Option<Duration>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_clients: 8,
            acquire_timeout: None,
        }
    }
}

impl PoolConfig {
    /// Create a new config builder
    pub fn builder() -> PoolConfigBuilder {
        PoolConfigBuilder::default()
    }
}

/// Builder for PoolConfig
#[derive(Default)]
pub struct PoolConfigBuilder {
    config: PoolConfig,
}

impl PoolConfigBuilder {
    /// Set the maximum number of pooled clients
    pub fn max_clients(mut self, count: usize) -> Self {
        self.config.max_clients = count;
        self
    }

    /// Bound the wait for an exhausted pool
    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.config.acquire_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> PoolConfig {
        self.config
    }
}
