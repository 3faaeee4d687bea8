//! `ksortid bench`: throughput against uuid v4 and nanoid.
//!
//! Category 1 compares database-key style generators (sortable or unique),
//! category 2 URL/token style generators (purely random).

use std::hint::black_box;
use std::time::Instant;

use ksortid_core::{
    DEFAULT_RANDOM_LENGTH, DistributionReport, IdConfig, IdGenerator, PoolStats,
    distribution_report,
};
use serde::Serialize;

/// IDs sampled for the character distribution section.
const DISTRIBUTION_SAMPLES: usize = 10_000;

pub struct BenchCommandConfig<'a> {
    pub iterations: usize,
    pub pool_size: usize,
    pub output_path: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchResult {
    pub name: String,
    pub category: &'static str,
    pub iterations: usize,
    pub elapsed_ms: f64,
    pub ops_per_sec: f64,
}

#[derive(Debug, Serialize)]
struct BenchReport {
    version: &'static str,
    iterations: usize,
    pool_size: usize,
    results: Vec<BenchResult>,
    pool: PoolStats,
    distribution: DistributionReport,
}

/// Time `iterations` calls of `f`.
pub fn measure(
    name: &str,
    category: &'static str,
    iterations: usize,
    mut f: impl FnMut() -> String,
) -> BenchResult {
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(f());
    }
    let elapsed = start.elapsed().as_secs_f64();

    BenchResult {
        name: name.to_string(),
        category,
        iterations,
        elapsed_ms: elapsed * 1000.0,
        ops_per_sec: if elapsed > 0.0 {
            iterations as f64 / elapsed
        } else {
            0.0
        },
    }
}

fn print_result(result: &BenchResult) {
    println!(
        "  {:<10}: {:>12} ops/sec",
        result.name,
        super::format_thousands(result.ops_per_sec as u64)
    );
}

pub fn run(config: BenchCommandConfig<'_>) {
    let iterations = config.iterations;
    let mut generator = IdGenerator::with_pool_size(config.pool_size);
    let id_config = IdConfig::default();
    let sortid = |generator: &mut IdGenerator| {
        generator
            .sortid(&id_config)
            .unwrap_or_else(|e| super::exit_with(e))
    };

    println!(
        "Benchmark: {} iterations, {} byte pool",
        super::format_thousands(iterations as u64),
        generator.pool().capacity()
    );
    println!("{}", "-".repeat(47));

    // Warmup
    sortid(&mut generator);
    generator.randomid(DEFAULT_RANDOM_LENGTH);

    let mut results = Vec::new();

    println!("Category 1: Database Keys (Sortable/Unique)");
    for result in [
        measure("uuid", "database_keys", iterations, || {
            uuid::Uuid::new_v4().to_string()
        }),
        measure("ksortid", "database_keys", iterations, || {
            sortid(&mut generator)
        }),
    ] {
        print_result(&result);
        results.push(result);
    }

    println!("\nCategory 2: URL / Token Generation (Pure Random)");
    for result in [
        measure("nanoid", "url_tokens", iterations, || nanoid::nanoid!()),
        measure("ksortid", "url_tokens", iterations, || {
            generator.randomid(DEFAULT_RANDOM_LENGTH)
        }),
    ] {
        print_result(&result);
        results.push(result);
    }

    let pool = generator.stats();
    println!("\nPool");
    println!("  Capacity:       {} bytes", pool.capacity);
    println!("  Bytes served:   {}", super::format_thousands(pool.bytes_served));
    println!(
        "  Source calls:   {} ({} refills, {} direct)",
        super::format_thousands(pool.source_calls()),
        pool.refills,
        pool.direct_draws
    );
    let ids_generated = (iterations as u64 + 1) * 2;
    println!(
        "  IDs per call:   {:.1}",
        ids_generated as f64 / pool.source_calls().max(1) as f64
    );

    let sample: Vec<String> = (0..DISTRIBUTION_SAMPLES)
        .map(|_| generator.randomid(DEFAULT_RANDOM_LENGTH))
        .collect();
    let distribution = distribution_report(&sample);
    println!("\nCharacter distribution ({DISTRIBUTION_SAMPLES} random IDs)");
    print!("{distribution}");

    if let Some(path) = config.output_path {
        let report = BenchReport {
            version: ksortid_core::VERSION,
            iterations,
            pool_size: pool.capacity,
            results,
            pool,
            distribution,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => println!("\nResults written to {path}"),
                Err(e) => eprintln!("\nFailed to write {path}: {e}"),
            },
            Err(e) => eprintln!("\nFailed to serialize report: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_counts_iterations() {
        let mut calls = 0;
        let result = measure("counter", "test", 250, || {
            calls += 1;
            String::new()
        });
        assert_eq!(calls, 250);
        assert_eq!(result.iterations, 250);
        assert_eq!(result.name, "counter");
        assert!(result.elapsed_ms >= 0.0);
    }

    #[test]
    fn test_measure_zero_iterations() {
        let result = measure("none", "test", 0, String::new);
        assert_eq!(result.iterations, 0);
        assert!(result.ops_per_sec >= 0.0);
    }

    #[test]
    fn test_bench_result_serializes() {
        let result = measure("ksortid", "url_tokens", 10, || "x".to_string());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["name"], "ksortid");
        assert_eq!(json["category"], "url_tokens");
        assert_eq!(json["iterations"], 10);
    }
}
