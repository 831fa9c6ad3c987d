use std::sync::LazyLock;
use std::time::{Duration, Instant};

/// Moment the process started logging, all log timestamps are relative to it
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Fractional milliseconds in a [`Duration`]
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
