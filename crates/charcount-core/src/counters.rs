//! Individual text counters.
//!
//! All counters are total over `&str`; an empty input is valid and has a defined count.

use crate::segmenter::Segmenter;
use regex::Regex;
use std::sync::LazyLock;

/// Letters, numbers, ASCII apostrophe and right single quotation mark (for "don't" / "don’t").
///
/// Hyphens, underscores and other punctuation end a word.
static WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}'’]+").expect("valid word regex"));

/// Count user-perceived characters in `text` using `segmenter`.
///
/// With [`Segmenter::CodePoint`] multi-scalar graphemes are counted once per scalar; see the
/// variant docs.
pub fn count_graphemes(text: &str, segmenter: Segmenter) -> usize {
    segmenter.count(text)
}

/// Count maximal runs of letters, numbers and apostrophes.
///
/// A run made of apostrophes alone (e.g. the `'` in `"a ' b"`) still counts as a word.
pub fn count_words(text: &str) -> usize {
    WORD_RUN.find_iter(text).count()
}

/// Count display lines.
///
/// An empty text is one line. Otherwise every `'\n'` starts a new line; `'\r'` is ordinary
/// content, so `"a\r\nb"` has two lines and `"a\rb"` has one.
pub fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        return 1;
    }
    text.split('\n').count()
}

/// Number of bytes `text` occupies as UTF-8.
pub fn utf8_byte_length(text: &str) -> usize {
    text.len()
}
