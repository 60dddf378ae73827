use charcount_core::{Segmenter, count_graphemes};

#[test]
fn test_empty_text_has_no_graphemes() {
    assert_eq!(count_graphemes("", Segmenter::Cluster), 0);
    assert_eq!(count_graphemes("", Segmenter::CodePoint), 0);
}

#[test]
fn test_zwj_family_is_one_cluster() {
    // Man, woman, girl, boy joined by three ZWJs: seven scalars.
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
    assert_eq!(count_graphemes(family, Segmenter::Cluster), 1);
    assert_eq!(count_graphemes(family, Segmenter::CodePoint), 7);
}

#[test]
fn test_combining_mark_joins_base() {
    // "e" + combining acute accent.
    let text = "cafe\u{301}";
    assert_eq!(count_graphemes(text, Segmenter::Cluster), 4);
    assert_eq!(count_graphemes(text, Segmenter::CodePoint), 5);
}

#[test]
fn test_flags_and_skin_tones() {
    // Regional indicator pairs: JP, FR.
    let flags = "\u{1F1EF}\u{1F1F5}\u{1F1EB}\u{1F1F7}";
    assert_eq!(count_graphemes(flags, Segmenter::Cluster), 2);
    assert_eq!(count_graphemes(flags, Segmenter::CodePoint), 4);

    let thumbs = "\u{1F44D}\u{1F3FD}";
    assert_eq!(count_graphemes(thumbs, Segmenter::Cluster), 1);
    assert_eq!(count_graphemes(thumbs, Segmenter::CodePoint), 2);
}

#[test]
fn test_crlf_is_one_cluster_but_two_code_points() {
    assert_eq!(count_graphemes("a\r\nb", Segmenter::Cluster), 3);
    assert_eq!(count_graphemes("a\r\nb", Segmenter::CodePoint), 4);
}

#[test]
fn test_plain_ascii_agrees_across_segmenters() {
    let text = "The quick brown fox";
    assert_eq!(
        count_graphemes(text, Segmenter::Cluster),
        count_graphemes(text, Segmenter::CodePoint)
    );
    assert_eq!(count_graphemes(text, Segmenter::Cluster), 19);
}
