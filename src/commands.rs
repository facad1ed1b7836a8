//! Typed command wrappers
//!
//! Convenience shims over [`Client::execute`]: each formats one command's
//! arguments, issues it, and converts a reply of the wrong variant into
//! [`CorralError::InvalidResponse`]. Blanket-implemented for every client,
//! so pooled clients and transaction bodies get them for free.
//!
//! Inside a MULTI bracket these wrappers "fail" with the `QUEUED` status,
//! which is exactly what [`Transaction::enqueue`] expects; see the
//! [`transaction`](crate::transaction) module.
//!
//! [`Transaction::enqueue`]: crate::transaction::Transaction::enqueue

use crate::client::Client;
use crate::error::{CorralError, Result};
use crate::reply::Reply;

/// Per-command convenience methods for any [`Client`]
pub trait Commands: Client {
    // =========================================================================
    // Strings
    // =========================================================================

    /// GET: fetch a value; `Ok(None)` when the key is missing
    fn get(&mut self, key: &str) -> Result<Option<String>> {
        match self.execute("GET", &[key])? {
            Reply::Bulk(value) => Ok(value),
            other => Err(CorralError::InvalidResponse(other)),
        }
    }

    /// SET: store a value without expiration
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        expect_ok(self.execute("SET", &[key, value])?)
    }

    /// SETEX: store a value that expires after `seconds`
    fn setex(&mut self, key: &str, seconds: u64, value: &str) -> Result<()> {
        let seconds = seconds.to_string();
        expect_ok(self.execute("SETEX", &[key, seconds.as_str(), value])?)
    }

    /// INCR: increment a counter, returning the new value
    fn incr(&mut self, key: &str) -> Result<i64> {
        expect_integer(self.execute("INCR", &[key])?)
    }

    /// DEL: remove keys, returning how many existed
    fn del(&mut self, keys: &[&str]) -> Result<i64> {
        expect_integer(self.execute("DEL", keys)?)
    }

    // =========================================================================
    // Lists
    // =========================================================================

    /// LPUSH: prepend values, returning the new list length
    fn lpush(&mut self, key: &str, values: &[&str]) -> Result<i64> {
        let mut args = Vec::with_capacity(values.len() + 1);
        args.push(key);
        args.extend_from_slice(values);
        expect_integer(self.execute("LPUSH", &args)?)
    }

    /// RPUSH: append values, returning the new list length
    fn rpush(&mut self, key: &str, values: &[&str]) -> Result<i64> {
        let mut args = Vec::with_capacity(values.len() + 1);
        args.push(key);
        args.extend_from_slice(values);
        expect_integer(self.execute("RPUSH", &args)?)
    }

    /// RPOPLPUSH: rotate the tail of `source` onto `destination`;
    /// `Ok(None)` when the source list is empty
    fn rpoplpush(&mut self, source: &str, destination: &str) -> Result<Option<String>> {
        match self.execute("RPOPLPUSH", &[source, destination])? {
            Reply::Bulk(value) => Ok(value),
            other => Err(CorralError::InvalidResponse(other)),
        }
    }

    /// BRPOPLPUSH: blocking RPOPLPUSH; `timeout_secs` of zero blocks
    /// indefinitely server-side
    fn brpoplpush(&mut self, source: &str, destination: &str, timeout_secs: u64) -> Result<String> {
        let timeout = timeout_secs.to_string();
        match self.execute("BRPOPLPUSH", &[source, destination, timeout.as_str()])? {
            Reply::Bulk(Some(value)) => Ok(value),
            other => Err(CorralError::InvalidResponse(other)),
        }
    }

    /// LREM: remove occurrences of `value`, returning how many were
    /// removed; `count` follows the Redis sign convention
    fn lrem(&mut self, key: &str, value: &str, count: Option<i64>) -> Result<i64> {
        let count = count.map(|count| count.to_string());
        let mut args = vec![key];
        if let Some(ref count) = count {
            args.push(count.as_str());
        }
        args.push(value);
        expect_integer(self.execute("LREM", &args)?)
    }

    /// LRANGE: list elements between `start` and `stop`, inclusive
    fn lrange(&mut self, key: &str, start: i64, stop: i64) -> Result<Vec<String>> {
        let (start, stop) = (start.to_string(), stop.to_string());
        expect_strings(self.execute("LRANGE", &[key, start.as_str(), stop.as_str()])?)
    }

    // =========================================================================
    // Sorted Sets
    // =========================================================================

    /// ZADD: add scored members, returning how many were newly added
    fn zadd(&mut self, key: &str, entries: &[(f64, &str)]) -> Result<i64> {
        let scores: Vec<String> = entries.iter().map(|(score, _)| score.to_string()).collect();
        let mut args = Vec::with_capacity(entries.len() * 2 + 1);
        args.push(key);
        for (&(_, member), score) in entries.iter().zip(&scores) {
            args.push(score.as_str());
            args.push(member);
        }
        expect_integer(self.execute("ZADD", &args)?)
    }

    /// ZRANGE: members between ranks `start` and `stop`, inclusive
    fn zrange(&mut self, key: &str, start: i64, stop: i64) -> Result<Vec<String>> {
        let (start, stop) = (start.to_string(), stop.to_string());
        expect_strings(self.execute("ZRANGE", &[key, start.as_str(), stop.as_str()])?)
    }

    /// ZRANGEBYSCORE: members with scores between `min` and `max`;
    /// exclusive bounds render as `(<score>` per the Redis grammar
    fn zrangebyscore(
        &mut self,
        key: &str,
        min: f64,
        max: f64,
        include_min: bool,
        include_max: bool,
    ) -> Result<Vec<String>> {
        let min = if include_min {
            min.to_string()
        } else {
            format!("({}", min)
        };
        let max = if include_max {
            max.to_string()
        } else {
            format!("({}", max)
        };
        expect_strings(self.execute("ZRANGEBYSCORE", &[key, min.as_str(), max.as_str()])?)
    }

    /// ZREM: remove a member, returning 1 when it existed
    fn zrem(&mut self, key: &str, member: &str) -> Result<i64> {
        expect_integer(self.execute("ZREM", &[key, member])?)
    }
}

impl<C: Client> Commands for C {}

// =============================================================================
// Reply Shape Helpers
// =============================================================================

fn expect_ok(reply: Reply) -> Result<()> {
    if reply.is_ok() {
        Ok(())
    } else {
        Err(CorralError::InvalidResponse(reply))
    }
}

fn expect_integer(reply: Reply) -> Result<i64> {
    match reply {
        Reply::Integer(value) => Ok(value),
        other => Err(CorralError::InvalidResponse(other)),
    }
}

/// Collects the bulk strings out of an array reply, skipping nulls and
/// non-string elements
fn expect_strings(reply: Reply) -> Result<Vec<String>> {
    match reply {
        Reply::Array(replies) => Ok(replies
            .into_iter()
            .filter_map(|reply| match reply {
                Reply::Bulk(Some(value)) => Some(value),
                _ => None,
            })
            .collect()),
        other => Err(CorralError::InvalidResponse(other)),
    }
}
