use charcount_core::{
    LimitConfig, LimitStatus, Metrics, Segmenter, clamp, compute_metrics, enforce_limit,
};
use pretty_assertions::assert_eq;

#[test]
fn test_hard_limit_end_to_end() {
    let input = "Hello \u{1F44B} world, don't!";
    let limit = LimitConfig::hard(10);

    let clamped = enforce_limit(input, &limit, Segmenter::Cluster);
    assert_eq!(clamped, "Hello \u{1F44B} wo");

    let report = compute_metrics(clamped, &limit, Segmenter::Cluster);
    assert_eq!(
        report.metrics,
        Metrics {
            grapheme_count: 10,
            word_count: 2,
            line_count: 1,
            // 9 ASCII bytes + 4 for the waving hand.
            byte_count: 13,
        }
    );
    assert_eq!(report.used, 10);
    assert_eq!(report.percent_filled, 100.0);
    assert_eq!(report.remaining, Some(0));
    assert_eq!(report.status(), LimitStatus::Within { remaining: 0 });
    assert!(!report.is_over_limit());
}

#[test]
fn test_clamp_result_carries_truncated_metrics() {
    let result = clamp("Hello \u{1F44B} world, don't!", 10, Segmenter::Cluster);
    assert_eq!(result.text, "Hello \u{1F44B} wo");
    assert_eq!(result.metrics.byte_count, result.text.len());
    assert_eq!(result.metrics.word_count, 2);
}

#[test]
fn test_soft_limit_reports_overflow() {
    let report = compute_metrics("abcdefghijkl", &LimitConfig::soft(10), Segmenter::Cluster);
    assert_eq!(report.metrics.grapheme_count, 12);
    assert_eq!(report.used, 10);
    assert_eq!(report.percent_filled, 100.0);
    assert_eq!(report.remaining, Some(-2));
    assert!(report.is_over_limit());
    assert_eq!(report.used_label(), "10 / 10");
    assert_eq!(report.fill_width(), "100.00%");
    assert_eq!(report.status().to_string(), "2 over");
}

#[test]
fn test_partial_fill() {
    let report = compute_metrics("abc", &LimitConfig::soft(8), Segmenter::Cluster);
    assert_eq!(report.used, 3);
    assert_eq!(report.percent_filled, 37.5);
    assert_eq!(report.fill_width(), "37.50%");
    assert_eq!(report.remaining, Some(5));
    assert_eq!(report.status().to_string(), "5 left");
}

#[test]
fn test_unlimited_report() {
    let report = compute_metrics("", &LimitConfig::unlimited(), Segmenter::Cluster);
    assert_eq!(
        report.metrics,
        Metrics {
            grapheme_count: 0,
            word_count: 0,
            line_count: 1,
            byte_count: 0,
        }
    );
    assert_eq!(report.used, 0);
    assert_eq!(report.percent_filled, 0.0);
    assert_eq!(report.remaining, None);
    assert_eq!(report.used_label(), "0 chars");
    assert_eq!(report.fill_width(), "0%");
    assert_eq!(report.status(), LimitStatus::Unlimited);
}

#[test]
fn test_hard_flag_does_not_change_report() {
    let text = "abcdefghijkl";
    let soft = compute_metrics(text, &LimitConfig::soft(5), Segmenter::Cluster);
    let hard = compute_metrics(text, &LimitConfig::hard(5), Segmenter::Cluster);
    assert_eq!(soft, hard);
}

#[test]
fn test_code_point_segmenter_counts_scalars() {
    let text = "\u{1F44D}\u{1F3FD}";
    let report = compute_metrics(text, &LimitConfig::soft(1), Segmenter::CodePoint);
    assert_eq!(report.metrics.grapheme_count, 2);
    assert!(report.is_over_limit());

    let report = compute_metrics(text, &LimitConfig::soft(1), Segmenter::Cluster);
    assert_eq!(report.metrics.grapheme_count, 1);
    assert!(!report.is_over_limit());
}
