//! Text segmentation capability.
//!
//! Every counting/clamping function that cares about "user-perceived characters" takes a
//! [`Segmenter`] so the host picks the unit once (at startup) and passes it down, instead of each
//! call probing for support on its own.

use unicode_segmentation::UnicodeSegmentation;

/// How text is split into countable units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Segmenter {
    /// Extended grapheme clusters (UAX #29).
    ///
    /// `"👨‍👩‍👧‍👦"` (seven scalars joined by ZWJ) is one unit, as is `"e\u{301}"`.
    #[default]
    Cluster,
    /// Unicode scalar values (`char`).
    ///
    /// Known limitation: multi-scalar graphemes (flags, skin-tone modifiers, ZWJ sequences,
    /// combining marks) are not recognized as single characters. Each scalar counts separately,
    /// so fewer visible characters fit under a limit, and clamping may cut such a grapheme in
    /// the middle. Only code-point boundaries are guaranteed.
    CodePoint,
}

impl Segmenter {
    /// Select the best segmenter available in this build.
    ///
    /// Grapheme segmentation is always compiled in, so this returns [`Segmenter::Cluster`].
    /// [`Segmenter::CodePoint`] has to be requested explicitly.
    pub fn detect() -> Self {
        Self::Cluster
    }

    /// Returns `true` if this segmenter respects grapheme cluster boundaries.
    pub fn is_grapheme_aware(self) -> bool {
        matches!(self, Self::Cluster)
    }

    /// Count the units in `text`.
    pub fn count(self, text: &str) -> usize {
        match self {
            Self::Cluster => text.graphemes(true).count(),
            Self::CodePoint => text.chars().count(),
        }
    }

    /// Byte offset just past the first `max_units` units of `text`.
    ///
    /// Returns `text.len()` when `text` has `max_units` units or fewer. The offset always falls on
    /// a unit boundary (and therefore on a `char` boundary).
    pub fn prefix_end(self, text: &str, max_units: usize) -> usize {
        let start_of_next = match self {
            Self::Cluster => text.grapheme_indices(true).nth(max_units).map(|(i, _)| i),
            Self::CodePoint => text.char_indices().nth(max_units).map(|(i, _)| i),
        };
        start_of_next.unwrap_or(text.len())
    }
}
