//! # Corral
//!
//! A client-side abstraction for key-value stores that speak a simple
//! request/reply protocol (command name + string arguments → typed reply),
//! such as Redis. Corral layers two capabilities over a user-provided
//! transport:
//! - Bounded connection pooling with blocking checkout/checkin
//! - MULTI/EXEC transactions with abort-on-error semantics
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Callers (threads)                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ execute / multi
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Pool                                  │
//! │        (bounded, lazy creation, blocking checkout)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ one client per unit of work
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Client    │◀─────────│ Transaction │
//!   │ (transport) │          │ coordinator │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! The wire protocol itself (framing, reconnects, socket I/O) is out of
//! scope: anything implementing [`Client`] is a valid pool element, so the
//! whole crate can be exercised against lightweight fakes.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod reply;
pub mod client;
pub mod commands;
pub mod pool;
pub mod transaction;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CorralError, Result};
pub use config::{PoolConfig, PoolConfigBuilder};
pub use reply::Reply;
pub use client::Client;
pub use commands::Commands;
pub use pool::{Pool, PooledClient};
pub use transaction::{EnqueueOutcome, Transaction};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Corral
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
