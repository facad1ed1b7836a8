//! Connection pool
//!
//! A bounded set of reusable clients with blocking checkout/checkin. The
//! pool hands one client out per logical unit of work (a single command or
//! a whole transaction) and takes it back afterwards, so a client is never
//! used by two operations at once.
//!
//! ## Design
//! - Clients are created lazily through the factory, never up front, and
//!   never beyond `max_clients`.
//! - The idle list and created count are the only shared mutable state; all
//!   mutation happens inside one mutex, with a condvar signalled on release
//!   so blocked acquirers wake instead of spinning.
//! - Checkin rides on an RAII guard ([`PooledClient`]), so the client comes
//!   back on every exit path: success, error, and panic alike.

use std::ops::{Deref, DerefMut};
use std::time::Instant;

use parking_lot::{Condvar, Mutex};

use crate::client::Client;
use crate::config::PoolConfig;
use crate::error::{CorralError, Result};
use crate::reply::Reply;
use crate::transaction::Transaction;

type Factory<C> = Box<dyn Fn() -> C + Send + Sync>;

struct PoolState<C> {
    /// Clients currently checked in, most recently released last
    idle: Vec<C>,

    /// Clients created so far; never exceeds `max_clients`
    created: usize,
}

/// Bounded pool of interchangeable clients
///
/// Concurrent callers share the pooled clients safely: at most
/// `max_clients` operations run "in client" simultaneously and the rest
/// block until a release. The pool adds no error kind of its own to a unit
/// of work: it guarantees checkin, then propagates the operation's result
/// unchanged.
pub struct Pool<C> {
    state: Mutex<PoolState<C>>,
    available: Condvar,
    factory: Factory<C>,
    config: PoolConfig,
}

impl<C: Client> Pool<C> {
    /// Creates a pool with the given configuration and client factory
    ///
    /// The factory runs lazily, at most `max_clients` times over the pool's
    /// lifetime.
    ///
    /// # Panics
    /// Panics if `max_clients` is zero.
    pub fn new<F>(config: PoolConfig, factory: F) -> Self
    where
        F: Fn() -> C + Send + Sync + 'static,
    {
        assert!(config.max_clients > 0, "pool capacity must be at least 1");
        Self {
            state: Mutex::new(PoolState {
                idle: Vec::with_capacity(config.max_clients),
                created: 0,
            }),
            available: Condvar::new(),
            factory: Box::new(factory),
            config,
        }
    }

    /// Creates a pool of the given capacity with default configuration
    pub fn with_capacity<F>(max_clients: usize, factory: F) -> Self
    where
        F: Fn() -> C + Send + Sync + 'static,
    {
        Self::new(
            PoolConfig {
                max_clients,
                ..PoolConfig::default()
            },
            factory,
        )
    }

    /// Executes a single command on a pooled client
    ///
    /// Acquires a client, runs the command, and returns the client to the
    /// idle set whether the command succeeded or not.
    pub fn execute(&self, command: &str, args: &[&str]) -> Result<Reply> {
        let mut client = self.acquire()?;
        client.execute(command, args)
    }

    /// Runs a MULTI/EXEC transaction on a pooled client
    ///
    /// The whole transaction occupies one client; it is returned to the
    /// idle set after commit and abort alike. See
    /// [`transaction`](crate::transaction) for the protocol rules.
    pub fn multi<F>(&self, body: F) -> Result<Vec<Reply>>
    where
        F: FnOnce(&mut C, &Transaction) -> Result<()>,
    {
        let mut client = self.acquire()?;
        client.multi(body)
    }

    /// Checks a client out of the pool
    ///
    /// Prefers an idle client; otherwise creates one while below capacity;
    /// otherwise blocks until a release (bounded by `acquire_timeout` when
    /// configured). Callers normally go through [`execute`](Self::execute)
    /// or [`multi`](Self::multi) instead.
    pub fn acquire(&self) -> Result<PooledClient<'_, C>> {
        let deadline = self.config.acquire_timeout.map(|timeout| Instant::now() + timeout);
        let mut state = self.state.lock();

        loop {
            if let Some(client) = state.idle.pop() {
                tracing::trace!(idle = state.idle.len(), "checked out idle client");
                return Ok(PooledClient {
                    pool: self,
                    client: Some(client),
                });
            }

            if state.created < self.config.max_clients {
                state.created += 1;
                let created = state.created;
                // Build outside the critical section; the factory may be
                // slow (e.g. a TCP connect).
                drop(state);
                let client = (self.factory)();
                tracing::debug!(created, capacity = self.config.max_clients, "created pooled client");
                return Ok(PooledClient {
                    pool: self,
                    client: Some(client),
                });
            }

            match deadline {
                None => self.available.wait(&mut state),
                Some(deadline) => {
                    if self.available.wait_until(&mut state, deadline).timed_out() {
                        return Err(CorralError::AcquireTimeout);
                    }
                }
            }
        }
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of clients created so far
    pub fn created(&self) -> usize {
        self.state.lock().created
    }

    /// Number of clients currently checked in
    pub fn idle(&self) -> usize {
        self.state.lock().idle.len()
    }

    /// Maximum number of clients this pool will create
    pub fn capacity(&self) -> usize {
        self.config.max_clients
    }
}

/// RAII guard for a checked-out client
///
/// Dereferences to the underlying client. Dropping the guard returns the
/// exact client instance to the idle set and wakes one blocked acquirer;
/// this runs during unwinding too, so a failed or panicking unit of work
/// never leaks a client.
pub struct PooledClient<'a, C: Client> {
    pool: &'a Pool<C>,
    client: Option<C>,
}

impl<C: Client> Deref for PooledClient<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.client.as_ref().expect("client present until drop")
    }
}

impl<C: Client> DerefMut for PooledClient<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.client.as_mut().expect("client present until drop")
    }
}

impl<C: Client> Drop for PooledClient<'_, C> {
    fn drop(&mut self) {
        if let Some(client) = self.client.take() {
            let mut state = self.pool.state.lock();
            state.idle.push(client);
            tracing::trace!(idle = state.idle.len(), "checked client back in");
            drop(state);
            self.pool.available.notify_one();
        }
    }
}
