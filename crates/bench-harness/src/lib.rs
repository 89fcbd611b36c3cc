//! Lightweight benchmark harness with optimization barrier, plus the scoped
//! wall-clock timer used at call sites that report their elapsed time.
//!
//! # Example
//!
//! ```
//! use bench_harness::{bench, timed};
//!
//! let data: Vec<u64> = (0..1_000).collect();
//!
//! let result = bench("sum", 10, || data.iter().sum::<u64>());
//! assert_eq!(result.iterations, 10);
//!
//! let run = timed("sum once", || data.iter().sum::<u64>());
//! assert_eq!(run.value, 499_500);
//! ```

mod timing;

pub use timing::{timed, ScopedTimer, Timed};

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Warmup calls made before timing starts.
const WARMUP_ITERATIONS: u32 = 3;

/// Benchmark result containing timing statistics.
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub name: String,
    pub iterations: u32,
    pub total: Duration,
    pub per_iter: Duration,
    /// Fastest single iteration
    pub fastest: Duration,
}

impl BenchResult {
    /// Format result as a table row.
    pub fn as_row(&self) -> String {
        format!(
            "{:30} {:>10.2?} total, {:>10.2?}/iter, {:>10.2?} best ({} iters)",
            self.name, self.total, self.per_iter, self.fastest, self.iterations
        )
    }

    /// `per_iter` of `self` divided by `per_iter` of `baseline`.
    pub fn relative_to(&self, baseline: &BenchResult) -> f64 {
        let base = baseline.per_iter.as_secs_f64();
        if base == 0.0 {
            return f64::NAN;
        }
        self.per_iter.as_secs_f64() / base
    }
}

/// Run a benchmark with warmup and return results.
///
/// The closure must return a value to prevent the compiler from
/// optimizing away the computation via dead code elimination.
///
/// # Arguments
///
/// * `name` - Benchmark name for display
/// * `iterations` - Number of timed iterations (at least one is run)
/// * `f` - Closure to benchmark (must return a value)
pub fn bench<F, R>(name: &str, iterations: u32, mut f: F) -> BenchResult
where
    F: FnMut() -> R,
{
    let iterations = iterations.max(1);

    for _ in 0..WARMUP_ITERATIONS {
        black_box(f());
    }

    let mut total = Duration::ZERO;
    let mut fastest = Duration::MAX;
    for _ in 0..iterations {
        let start = Instant::now();
        black_box(f());
        let elapsed = start.elapsed();
        total += elapsed;
        fastest = fastest.min(elapsed);
    }

    BenchResult {
        name: name.to_string(),
        iterations,
        total,
        per_iter: total / iterations,
        fastest,
    }
}

/// Run a benchmark and print results immediately.
///
/// Convenience wrapper around [`bench`] that prints the result.
pub fn bench_print<F, R>(name: &str, iterations: u32, f: F) -> BenchResult
where
    F: FnMut() -> R,
{
    let result = bench(name, iterations, f);
    println!("{}", result.as_row());
    result
}

/// Print a section header for organizing benchmark output.
pub fn section(name: &str) {
    println!("\n--- {} ---", name);
}

/// Print a benchmark suite header.
pub fn header(name: &str) {
    println!("=== {} ===\n", name);
}

/// Print a benchmark suite footer.
pub fn footer() {
    println!("\n=== Benchmark Complete ===");
}
