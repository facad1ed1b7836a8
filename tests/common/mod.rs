//! Shared test doubles
//!
//! A scripted in-memory client so pool and transaction behavior can be
//! exercised without a real transport.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use corral::{Client, Reply, Result};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

type Script = Box<dyn FnMut(&str, &[&str]) -> Result<Reply> + Send>;
type CallLog = Arc<Mutex<Vec<(String, Vec<String>)>>>;

/// Client whose replies come from a caller-supplied script
///
/// Every call is recorded (command plus arguments) so tests can assert on
/// the exact sequence sent. Each instance carries a process-unique `id`,
/// which the pool tests use to check client identity.
pub struct MockClient {
    pub id: usize,
    calls: CallLog,
    script: Script,
}

impl MockClient {
    pub fn new<F>(script: F) -> Self
    where
        F: FnMut(&str, &[&str]) -> Result<Reply> + Send + 'static,
    {
        MockClient {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            calls: Arc::new(Mutex::new(Vec::new())),
            script: Box::new(script),
        }
    }

    /// Commands issued so far, in order
    pub fn commands(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(command, _)| command.clone())
            .collect()
    }

    /// Full call log: command name plus arguments, in order
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Client for MockClient {
    fn execute(&mut self, command: &str, args: &[&str]) -> Result<Reply> {
        self.calls.lock().unwrap().push((
            command.to_string(),
            args.iter().map(|arg| arg.to_string()).collect(),
        ));
        (self.script)(command, args)
    }
}

/// Routes `RUST_LOG`-filtered tracing output to the test harness
#[allow(dead_code)]
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Shorthand for a status reply
#[allow(dead_code)]
pub fn status(name: &str) -> Reply {
    Reply::Status(name.to_string())
}
