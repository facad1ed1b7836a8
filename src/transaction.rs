//! Transaction coordinator
//!
//! Implements the MULTI/EXEC protocol bracket on top of a single client:
//! queue N commands, verify each was buffered, then execute all as a batch
//! or discard all.
//!
//! ## State Machine
//!
//! ```text
//! Idle ──MULTI ok──▶ Queuing ──body ok──▶ Committing ──EXEC array──▶ Committed
//!   │                   │
//!   │ MULTI not OK      │ body error ──DISCARD (best effort)──▶ Aborted
//!   ▼                   ▼
//! InvalidResponse   TransactionAborted
//! ```
//!
//! A coordinator is ephemeral: every `multi` call builds a fresh one, and
//! the terminal states are never reused.
//!
//! ## Enqueue Protocol
//!
//! While a MULTI bracket is open the store does not execute commands; it
//! buffers them and answers `QUEUED`. A typed command wrapper therefore
//! "fails" with [`CorralError::InvalidResponse`] carrying the `QUEUED`
//! status, which is the expected success case for enqueueing. Conversely, a
//! command that returns normally bypassed the transaction buffer entirely,
//! which would silently break atomicity. [`EnqueueOutcome`] names the three
//! possibilities explicitly so the transitions stay exhaustively matchable.

use crate::client::Client;
use crate::error::{CorralError, Result};
use crate::reply::Reply;

/// The three ways a command issued inside a MULTI bracket can turn out
#[derive(Debug)]
pub enum EnqueueOutcome {
    /// The store buffered the command (`QUEUED` status); the expected case
    Queued,

    /// The command executed immediately instead of queuing, a protocol or
    /// usage violation that must not pass silently
    ExecutedImmediately,

    /// The command failed with something other than a `QUEUED` status
    Failed(CorralError),
}

impl EnqueueOutcome {
    /// Classifies the result of running one command mid-transaction
    pub fn classify<T>(result: Result<T>) -> Self {
        match result {
            Ok(_) => EnqueueOutcome::ExecutedImmediately,
            Err(CorralError::InvalidResponse(reply)) if reply.is_queued() => {
                EnqueueOutcome::Queued
            }
            Err(err) => EnqueueOutcome::Failed(err),
        }
    }
}

/// Handle passed to `multi` bodies for enqueueing commands
///
/// Holds no state of its own; it exists to make the queue-verification step
/// explicit at every call site inside the bracket.
#[derive(Debug, Default)]
pub struct Transaction {
    _priv: (),
}

impl Transaction {
    /// Creates a fresh transaction handle
    pub fn new() -> Self {
        Transaction { _priv: () }
    }

    /// Submits one command for buffering inside the bracket
    ///
    /// The closure issues exactly one command through the client the body
    /// received. Enqueue succeeds only when the store answered `QUEUED`:
    /// - a normal return means the command bypassed the buffer and fails
    ///   with [`CorralError::EnqueueCommand`];
    /// - any non-`QUEUED` failure propagates, aborting the transaction.
    pub fn enqueue<T, F>(&self, command: F) -> Result<()>
    where
        F: FnOnce() -> Result<T>,
    {
        match EnqueueOutcome::classify(command()) {
            EnqueueOutcome::Queued => Ok(()),
            EnqueueOutcome::ExecutedImmediately => Err(CorralError::EnqueueCommand),
            EnqueueOutcome::Failed(err) => Err(err),
        }
    }
}

/// Runs one transaction on the given client
///
/// Protocol steps:
/// 1. Send `MULTI`; anything but an `OK` status fails with
///    `InvalidResponse` before any further command is sent.
/// 2. Run the body, which enqueues commands via [`Transaction::enqueue`].
/// 3. On body failure, send `DISCARD` best-effort and surface
///    `TransactionAborted`. An enqueue-bypass violation is the exception:
///    it surfaces as `EnqueueCommand` without entering the abort path.
/// 4. On body success, send `EXEC`; the reply must be an array with one
///    element per enqueued command, in enqueue order, returned verbatim.
///    Individual elements may be `Error` variants; the coordinator does not
///    inspect them.
pub(crate) fn run<C, F>(client: &mut C, body: F) -> Result<Vec<Reply>>
where
    C: Client,
    F: FnOnce(&mut C, &Transaction) -> Result<()>,
{
    let reply = client.execute("MULTI", &[])?;
    if !reply.is_ok() {
        return Err(CorralError::InvalidResponse(reply));
    }

    let transaction = Transaction::new();
    match body(client, &transaction) {
        Ok(()) => {}
        Err(err @ CorralError::EnqueueCommand) => return Err(err),
        Err(cause) => {
            tracing::debug!(%cause, "transaction body failed, discarding queued commands");
            // Best effort: the abort error is what the caller sees either way.
            if let Err(err) = client.execute("DISCARD", &[]) {
                tracing::debug!(%err, "DISCARD failed after abort");
            }
            return Err(CorralError::TransactionAborted);
        }
    }

    let reply = client.execute("EXEC", &[])?;
    match reply {
        Reply::Array(replies) => Ok(replies),
        other => Err(CorralError::InvalidResponse(other)),
    }
}
