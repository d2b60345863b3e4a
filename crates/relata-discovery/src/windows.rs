//! Lag window enumeration.

use relata_core::Window;

/// Every window `(start, end)` with `1 <= start < end <= max_lag`, ordered by
/// start then end. Empty for `max_lag < 2`.
pub fn enumerate(max_lag: usize) -> Vec<Window> {
    let mut windows = Vec::with_capacity(window_count(max_lag));
    for start in 1..max_lag {
        for end in (start + 1)..=max_lag {
            windows.push(Window::new(start, end));
        }
    }
    windows
}

/// `C(max_lag, 2)`.
pub fn window_count(max_lag: usize) -> usize {
    max_lag * max_lag.saturating_sub(1) / 2
}
