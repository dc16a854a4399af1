//! Formatting utilities for terminal output

use crate::core::Score;

/// Format a score as one block per position, matched positions first
///
/// Only the count is known, not which positions matched.
#[must_use]
pub fn score_bar(score: Score, len: usize) -> String {
    let matched = score.value().min(len);
    format!("{}{}", "■".repeat(matched), "□".repeat(len - matched))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a duration in whichever unit keeps it readable
#[must_use]
pub fn format_duration(duration: std::time::Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1_000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", duration.as_secs_f64() * 1_000.0)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}
