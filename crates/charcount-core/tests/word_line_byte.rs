use charcount_core::{count_lines, count_words, utf8_byte_length};

#[test]
fn test_count_words() {
    assert_eq!(count_words(""), 0);
    assert_eq!(count_words("  "), 0);
    assert_eq!(count_words("hello world"), 2);
    assert_eq!(count_words("don't stop"), 2);
    // Right single quotation mark also joins contractions.
    assert_eq!(count_words("don\u{2019}t stop"), 2);
    assert_eq!(count_words("Hello, world! 123"), 3);
    assert_eq!(count_words("line one\nline two"), 4);
}

#[test]
fn test_count_words_ignores_emoji_and_punctuation() {
    assert_eq!(count_words("\u{1F44B} ... !!!"), 0);
    assert_eq!(count_words("hi\u{1F44B}there"), 2);
}

#[test]
fn test_count_words_literal_apostrophe_rule() {
    // A lone apostrophe is a run of the word class.
    assert_eq!(count_words("'"), 1);
    assert_eq!(count_words("rock 'n' roll"), 3);
}

#[test]
fn test_count_lines() {
    assert_eq!(count_lines(""), 1);
    assert_eq!(count_lines("single"), 1);
    assert_eq!(count_lines("a\nb\nc"), 3);
    assert_eq!(count_lines("a\r\nb"), 2);
    assert_eq!(count_lines("a\n\n"), 3);
}

#[test]
fn test_utf8_byte_length() {
    assert_eq!(utf8_byte_length(""), 0);
    assert_eq!(utf8_byte_length("a"), 1);
    assert_eq!(utf8_byte_length("\u{e9}"), 2);
    assert_eq!(utf8_byte_length("\u{20AC}"), 3);
    assert_eq!(utf8_byte_length("\u{1F600}"), 4);
}
