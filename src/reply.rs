//! Reply definitions
//!
//! Represents the typed result of one command execution against the store.
//! Every execution produces exactly one [`Reply`]; callers interpret it by
//! variant, never by assuming a shape the command's contract does not
//! declare.

/// Status string acknowledging a successful command.
pub const OK: &str = "OK";

/// Status string replied to commands buffered inside a MULTI bracket.
pub const QUEUED: &str = "QUEUED";

/// A reply from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Simple status line, e.g. `OK` or `QUEUED`
    Status(String),

    /// Signed 64-bit integer
    Integer(i64),

    /// Bulk string; `None` encodes a null (missing-key) result
    Bulk(Option<String>),

    /// Ordered sequence of replies, e.g. the result of EXEC or LRANGE
    Array(Vec<Reply>),

    /// Store-side error, message carried verbatim
    Error(String),
}

impl Reply {
    // =========================================================================
    // Accessors
    // =========================================================================
    //
    // Each returns the typed payload when the variant matches and `None`
    // otherwise. They never panic; turning a mismatch into a domain error is
    // the caller's responsibility.

    /// Status text, if this is a `Status` reply
    pub fn as_status(&self) -> Option<&str> {
        match self {
            Reply::Status(status) => Some(status),
            _ => None,
        }
    }

    /// Integer payload, if this is an `Integer` reply
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Reply::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Bulk string payload, if this is a non-null `Bulk` reply
    ///
    /// A null bulk and a variant mismatch both yield `None`; callers that
    /// must tell them apart match on the variant directly.
    pub fn as_bulk(&self) -> Option<&str> {
        match self {
            Reply::Bulk(Some(value)) => Some(value),
            _ => None,
        }
    }

    /// Reply sequence, if this is an `Array` reply
    pub fn as_array(&self) -> Option<&[Reply]> {
        match self {
            Reply::Array(replies) => Some(replies),
            _ => None,
        }
    }

    // =========================================================================
    // Protocol Predicates
    // =========================================================================

    /// True when this is the `OK` status acknowledgement
    pub fn is_ok(&self) -> bool {
        self.as_status() == Some(OK)
    }

    /// True when this is the `QUEUED` status a store sends back for
    /// commands buffered inside a MULTI bracket
    pub fn is_queued(&self) -> bool {
        self.as_status() == Some(QUEUED)
    }
}
