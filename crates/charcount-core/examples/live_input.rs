use charcount_core::{LimitConfig, Segmenter, compute_metrics, enforce_limit, parse_max_graphemes};

fn main() {
    let segmenter = Segmenter::detect();
    let limit = LimitConfig::hard(parse_max_graphemes("12"));

    // Replay a typing session one chunk at a time, as a live input field would see it.
    let mut text = String::new();
    for piece in ["Hi", " ", "\u{1F44B}", " there,", " don't", " stop!"] {
        text.push_str(piece);
        let kept = enforce_limit(&text, &limit, segmenter).len();
        text.truncate(kept);

        let report = compute_metrics(&text, &limit, segmenter);
        println!(
            "{:<20} chars={:<3} words={:<2} bytes={:<3} {} ({})",
            format!("{text:?}"),
            report.metrics.grapheme_count,
            report.metrics.word_count,
            report.metrics.byte_count,
            report.used_label(),
            report.status(),
        );
    }

    assert_eq!(text, "Hi \u{1F44B} there, ");
}
