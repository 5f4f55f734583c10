//! Growth trace example.
//!
//! Demonstrates the capacity contract by printing length/capacity after
//! each operation, with the container's reallocation events routed to
//! stderr. Run with `RUST_LOG=simvec=trace` to see every reallocation.

use simvec::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("simvec=trace")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("=== simvec growth trace ===\n");

    let mut v = SimpleVector::new();
    for i in 1..=5 {
        v.push_back(i);
        println!(
            "push_back({i:>2})   len={:<3} cap={:<3} gen={}",
            v.len(),
            v.capacity(),
            v.generation()
        );
    }

    let pos = v.insert(v.begin() + 1, 9).unwrap();
    println!("insert(1, 9)    -> {pos}  {v:?}");

    let pos = v.erase(v.begin() + 2).unwrap();
    println!("erase(2)        -> {pos}  {v:?}");

    v.resize(9);
    println!("resize(9)       len={} cap={}", v.len(), v.capacity());

    v.clear();
    println!("clear()         len={} cap={}", v.len(), v.capacity());

    match v.at(5) {
        Ok(value) => println!("at(5) = {value}"),
        Err(e) => println!("at(5) failed: {e}"),
    }

    let hinted: SimpleVector<u8> = SimpleVector::from(reserve(32));
    println!("\nfrom(reserve(32)) len={} cap={}", hinted.len(), hinted.capacity());

    if let Err(e) = SimpleVector::<u8>::new().try_reserve(usize::MAX) {
        tracing::warn!(error = %e, "oversized reservation rejected");
    }
}
