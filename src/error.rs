//! Error types for Corral
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::reply::Reply;

/// Result type alias using CorralError
pub type Result<T> = std::result::Result<T, CorralError>;

/// Unified error type for Corral operations
///
/// None of these are retried internally; all surface to the direct caller.
/// The pool never adds errors of its own to a unit of work: it guarantees
/// the client is returned, then propagates the original error unchanged.
#[derive(Debug, Error)]
pub enum CorralError {
    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// The reply did not match the shape the operation contractually
    /// requires (wrong variant, unexpected status). Carries the offending
    /// reply verbatim.
    #[error("invalid response: {0:?}")]
    InvalidResponse(Reply),

    // -------------------------------------------------------------------------
    // Transaction Errors
    // -------------------------------------------------------------------------
    /// The transaction body failed after entering the MULTI bracket; all
    /// queued commands were discarded and none took effect.
    #[error("transaction aborted, queued commands discarded")]
    TransactionAborted,

    /// A command inside a transaction body executed immediately instead of
    /// being queued, which would break the atomicity guarantee.
    #[error("command executed immediately instead of being queued")]
    EnqueueCommand,

    // -------------------------------------------------------------------------
    // Pool Errors
    // -------------------------------------------------------------------------
    /// Waiting for a pooled client exceeded the configured deadline. Only
    /// reachable when an acquire timeout is set; the default is to block
    /// until a client is released.
    #[error("timed out waiting for a pooled client")]
    AcquireTimeout,
}
