//! Client trait
//!
//! The capability contract the rest of the crate is built on: a stateful
//! handle that executes exactly one command at a time against the store.
//! `&mut self` encodes the single-in-flight rule in the type system, and the
//! pool exists solely to enforce it across threads.

use crate::error::Result;
use crate::reply::Reply;
use crate::transaction::{self, Transaction};

/// A handle capable of one in-flight command execution at a time
///
/// A client is long-lived and reusable across many operations; it is a
/// resource, not a value. Application-level failures (e.g. `WRONGTYPE`)
/// arrive as [`Reply::Error`], never as `Err`; `Err` is reserved for
/// protocol-contract violations and transport failures.
///
/// Any implementer is a valid [`Pool`](crate::pool::Pool) element, which
/// keeps pools and transactions testable against lightweight fakes.
pub trait Client {
    /// Executes a single command and returns its reply
    fn execute(&mut self, command: &str, args: &[&str]) -> Result<Reply>;

    /// Runs a MULTI/EXEC transaction on this client
    ///
    /// The body enqueues commands through the provided [`Transaction`]
    /// handle; on success the per-command replies are returned in enqueue
    /// order. See the [`transaction`] module for the protocol rules.
    fn multi<F>(&mut self, body: F) -> Result<Vec<Reply>>
    where
        Self: Sized,
        F: FnOnce(&mut Self, &Transaction) -> Result<()>,
    {
        transaction::run(self, body)
    }
}
