//! Aggregated text metrics and the derived values a progress display needs.

use crate::counters::{count_graphemes, count_lines, count_words, utf8_byte_length};
use crate::limit::{LimitConfig, LimitStatus};
use crate::segmenter::Segmenter;

/// Counts for a single text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// User-perceived characters (see [`Segmenter`]).
    pub grapheme_count: usize,
    /// Runs of letters, numbers and apostrophes.
    pub word_count: usize,
    /// Display lines (at least 1).
    pub line_count: usize,
    /// UTF-8 encoded size.
    pub byte_count: usize,
}

impl Metrics {
    /// Measure `text`.
    pub fn measure(text: &str, segmenter: Segmenter) -> Self {
        Self {
            grapheme_count: count_graphemes(text, segmenter),
            word_count: count_words(text),
            line_count: count_lines(text),
            byte_count: utf8_byte_length(text),
        }
    }
}

/// Metrics plus limit-relative display values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MetricsReport {
    /// Raw counts.
    pub metrics: Metrics,
    /// The limit these values were computed against (0 = unlimited).
    pub max_graphemes: usize,
    /// `min(graphemes, max)` when limited, otherwise the grapheme count.
    pub used: usize,
    /// Fill percentage in `0.0..=100.0`; `0.0` when unlimited.
    pub percent_filled: f64,
    /// `max - graphemes` when limited (negative on overflow), `None` otherwise.
    pub remaining: Option<i64>,
}

impl MetricsReport {
    /// Limit status derived from the counts.
    pub fn status(&self) -> LimitStatus {
        LimitStatus::new(self.metrics.grapheme_count, self.max_graphemes)
    }

    /// Returns `true` if a limit is set and the text exceeds it.
    pub fn is_over_limit(&self) -> bool {
        matches!(self.status(), LimitStatus::Over { .. })
    }

    /// `"used / max"`, or `"N chars"` when unlimited.
    pub fn used_label(&self) -> String {
        if self.max_graphemes > 0 {
            format!("{} / {}", self.used, self.max_graphemes)
        } else {
            format!("{} chars", self.metrics.grapheme_count)
        }
    }

    /// Progress bar width as a CSS-like percentage string.
    pub fn fill_width(&self) -> String {
        if self.max_graphemes > 0 {
            format!("{:.2}%", self.percent_filled)
        } else {
            "0%".to_string()
        }
    }
}

/// Measure `text` and compute its position relative to `limit`.
///
/// `limit.hard_limit_enabled` does not affect the result; enforcement is
/// [`enforce_limit`](crate::enforce_limit)'s job.
pub fn compute_metrics(text: &str, limit: &LimitConfig, segmenter: Segmenter) -> MetricsReport {
    let metrics = Metrics::measure(text, segmenter);
    let max = limit.max_graphemes;
    let count = metrics.grapheme_count;

    let (used, percent_filled) = if max > 0 {
        let used = count.min(max);
        (used, (used as f64 / max as f64 * 100.0).min(100.0))
    } else {
        (count, 0.0)
    };

    MetricsReport {
        metrics,
        max_graphemes: max,
        used,
        percent_filled,
        remaining: LimitStatus::new(count, max).remaining(),
    }
}
