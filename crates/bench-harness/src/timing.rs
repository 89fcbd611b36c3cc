//! Scoped wall-clock timing.
//!
//! [`timed`] measures one call and hands the elapsed time back to the caller;
//! [`ScopedTimer`] logs the elapsed time of a scope when it is dropped.

use std::time::{Duration, Instant};

/// Value returned by a timed call, with its elapsed wall-clock time.
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub name: String,
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// "`name` took `secs` seconds"
    pub fn summary(&self) -> String {
        format!("{} took {:.6} seconds", self.name, self.elapsed.as_secs_f64())
    }

    /// Discard the timing.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Run `f` once and record how long it took.
pub fn timed<F, T>(name: impl Into<String>, f: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    Timed {
        name: name.into(),
        value,
        elapsed: start.elapsed(),
    }
}

/// Logs the elapsed time of the enclosing scope at `info` level on drop.
///
/// ```
/// use bench_harness::ScopedTimer;
///
/// {
///     let _timer = ScopedTimer::new("load");
///     // work
/// }
/// ```
#[derive(Debug)]
pub struct ScopedTimer {
    name: String,
    start: Instant,
}

impl ScopedTimer {
    /// Start timing.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
        }
    }

    /// Time elapsed so far.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        tracing::info!(
            name = %self.name,
            elapsed_secs = self.start.elapsed().as_secs_f64(),
            "timed scope finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_returns_value() {
        let run = timed("square", || 7 * 7);
        assert_eq!(run.value, 49);
        assert_eq!(run.name, "square");
        assert!(run.summary().starts_with("square took "));
        assert_eq!(run.into_value(), 49);
    }

    #[test]
    fn test_timed_measures_sleep() {
        let run = timed("sleep", || std::thread::sleep(Duration::from_millis(5)));
        assert!(run.elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_scoped_timer_elapsed_grows() {
        let timer = ScopedTimer::new("scope");
        let first = timer.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert!(timer.elapsed() > first);
    }
}
