//! Benchmarks for pool checkout and transaction coordination overhead

use corral::{Client, CorralError, Pool, Reply, Result};
use criterion::{criterion_group, criterion_main, Criterion};

/// Zero-latency client so the benchmarks measure the pool, not a transport
struct ScriptedClient;

impl Client for ScriptedClient {
    fn execute(&mut self, command: &str, _args: &[&str]) -> Result<Reply> {
        match command {
            "MULTI" | "DISCARD" => Ok(Reply::Status("OK".to_string())),
            "EXEC" => Ok(Reply::Array(vec![Reply::Status("OK".to_string())])),
            "PING" => Ok(Reply::Status("PONG".to_string())),
            _ => Err(CorralError::InvalidResponse(Reply::Status(
                "QUEUED".to_string(),
            ))),
        }
    }
}

fn pool_benchmarks(c: &mut Criterion) {
    let pool = Pool::with_capacity(4, || ScriptedClient);

    c.bench_function("pool_execute", |b| {
        b.iter(|| pool.execute("PING", &[]).unwrap())
    });

    c.bench_function("pool_multi_one_command", |b| {
        b.iter(|| {
            pool.multi(|client, tx| tx.enqueue(|| client.execute("INCR", &["counter"])))
                .unwrap()
        })
    });
}

criterion_group!(benches, pool_benchmarks);
criterion_main!(benches);
