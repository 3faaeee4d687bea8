//! Basic ID generation example.
//!
//! Generates a few sortable and random IDs from an explicit generator,
//! then prints how often the pool had to go back to the OS for entropy.
//!
//! Run: `cargo run --example basic`

use ksortid_core::{IdConfig, IdGenerator, split_sortid};

fn main() {
    let mut generator = IdGenerator::new();

    // Sortable IDs: 8-character millisecond timestamp + random suffix
    for _ in 0..3 {
        let id = generator.sortid(&IdConfig::default()).unwrap();
        let (millis, random) = split_sortid(&id).unwrap();
        println!("sortid   {id}  (t={millis}ms, random={random})");
    }

    // Random-only IDs, nanoid-style
    for length in [8, 21, 32] {
        println!("randomid {}", generator.randomid(length));
    }

    let stats = generator.stats();
    println!(
        "\nPool: {} bytes served from {} refill(s) of {} bytes",
        stats.bytes_served, stats.refills, stats.capacity
    );
}
