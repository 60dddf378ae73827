//! Grapheme-safe truncation.
//!
//! Truncation always happens on a unit boundary of the active [`Segmenter`], so an emoji or a
//! base letter with combining marks is never cut into a broken half-glyph. The clamped text is
//! always a prefix of the input and is returned as a borrow of it.

use crate::limit::LimitConfig;
use crate::metrics::Metrics;
use crate::segmenter::Segmenter;

/// A clamped prefix together with its recomputed metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampResult<'a> {
    /// The (possibly truncated) text; always a prefix of the input.
    pub text: &'a str,
    /// Metrics of `text`, not of the original input.
    pub metrics: Metrics,
}

impl ClampResult<'_> {
    /// Returns `true` if clamping removed anything from `original`.
    pub fn was_truncated(&self, original: &str) -> bool {
        self.text.len() < original.len()
    }
}

/// Truncate `text` to at most `max` units without splitting one.
///
/// `max == 0` is a no-op: the whole text is returned. Treating zero as "empty result" is a
/// decision for the caller.
pub fn clamp_to_grapheme_limit(text: &str, max: usize, segmenter: Segmenter) -> &str {
    if max == 0 {
        return text;
    }
    &text[..segmenter.prefix_end(text, max)]
}

/// Clamp `text` to `max` units and measure the result.
pub fn clamp(text: &str, max: usize, segmenter: Segmenter) -> ClampResult<'_> {
    let text = clamp_to_grapheme_limit(text, max, segmenter);
    ClampResult {
        text,
        metrics: Metrics::measure(text, segmenter),
    }
}

/// Apply a hard limit to live input.
///
/// Returns the input unchanged unless the limit is enforced and exceeded, in which case the
/// clamped prefix is returned. Callers can compare lengths to see whether anything was cut.
pub fn enforce_limit<'a>(text: &'a str, limit: &LimitConfig, segmenter: Segmenter) -> &'a str {
    if !limit.enforces() {
        return text;
    }
    clamp_to_grapheme_limit(text, limit.max_graphemes, segmenter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_is_noop() {
        let text = "hello 👋";
        assert_eq!(clamp_to_grapheme_limit(text, 0, Segmenter::Cluster), text);
        assert_eq!(clamp_to_grapheme_limit(text, 0, Segmenter::CodePoint), text);
    }

    #[test]
    fn test_clamp_result_reports_truncation() {
        let original = "abcdef";
        let result = clamp(original, 3, Segmenter::Cluster);
        assert_eq!(result.text, "abc");
        assert_eq!(result.metrics.grapheme_count, 3);
        assert!(result.was_truncated(original));

        let result = clamp(original, 10, Segmenter::Cluster);
        assert!(!result.was_truncated(original));
    }
}
