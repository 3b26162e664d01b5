//! Compression rate estimation

use crate::CompressionHistory;

/// Compressions per minute over the current history window
///
/// A sliding-window average over up to capacity-1 inter-compression
/// intervals, not an instantaneous rate: it smooths frame-to-frame jitter
/// at the cost of lagging a tempo change.
pub fn compression_rate(history: &CompressionHistory) -> f64 {
    if history.len() < 2 {
        return 0.0;
    }

    let (Some(first), Some(last)) = (history.first(), history.last()) else {
        return 0.0;
    };

    // Guarded although the debounce makes a zero span unreachable
    let span = (last.at - first.at).as_secs_f64();
    if span <= 0.0 {
        return 0.0;
    }

    (history.len() - 1) as f64 * 60.0 / span
}
