//! Exponential backoff with jitter between upstream attempts.

use std::time::Duration;

use rand::Rng;

/// Delay to wait after the given (1-based) failed attempt.
///
/// Doubles from `base_ms`, is capped at `max_ms`, and adds up to 10% jitter.
/// A zero base disables the delay entirely.
pub fn calculate_backoff(attempt: u32, base_ms: u64, max_ms: u64) -> Duration {
    if attempt == 0 || base_ms == 0 {
        return Duration::ZERO;
    }

    let factor = 2u64.saturating_pow(attempt - 1);
    let capped_ms = base_ms.saturating_mul(factor).min(max_ms);

    let jitter_range = capped_ms / 10;
    let jitter_ms = if jitter_range > 0 {
        rand::thread_rng().gen_range(0..jitter_range)
    } else {
        0
    };

    Duration::from_millis(capped_ms + jitter_ms)
}
