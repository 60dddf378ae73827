//! Length-limit configuration and status.

use std::fmt;

/// Caller-supplied length limit.
///
/// `max_graphemes == 0` means "no limit". The core never stores this across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LimitConfig {
    /// Maximum number of units (graphemes for [`Segmenter::Cluster`](crate::Segmenter::Cluster)).
    pub max_graphemes: usize,
    /// Whether input beyond the limit is truncated rather than only reported.
    pub hard_limit_enabled: bool,
}

impl LimitConfig {
    /// A configuration that applies no limit.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// A limit that is reported but never enforced.
    pub fn soft(max_graphemes: usize) -> Self {
        Self {
            max_graphemes,
            hard_limit_enabled: false,
        }
    }

    /// A limit that truncates input.
    pub fn hard(max_graphemes: usize) -> Self {
        Self {
            max_graphemes,
            hard_limit_enabled: true,
        }
    }

    /// Returns `true` if a non-zero limit is set.
    pub fn is_limited(&self) -> bool {
        self.max_graphemes > 0
    }

    /// Returns `true` if input should actually be truncated to the limit.
    pub fn enforces(&self) -> bool {
        self.hard_limit_enabled && self.is_limited()
    }
}

/// Normalize a raw limit field into a grapheme limit.
///
/// Leading whitespace and an optional sign are accepted, followed by the longest run of ASCII
/// digits; anything after that is ignored (`"12px"` is 12). Empty, non-numeric and negative
/// inputs all yield 0 (no limit). Values past `usize::MAX` saturate.
pub fn parse_max_graphemes(raw: &str) -> usize {
    let trimmed = raw.trim_start();
    let (negative, rest) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };

    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if negative || digits.is_empty() {
        return 0;
    }

    digits.bytes().fold(0usize, |acc, b| {
        acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
    })
}

/// Where a text stands relative to its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LimitStatus {
    /// No limit is configured.
    Unlimited,
    /// At or under the limit.
    Within {
        /// Units still available before the limit is reached.
        remaining: usize,
    },
    /// Past the limit.
    Over {
        /// Units beyond the limit.
        by: usize,
    },
}

impl LimitStatus {
    /// Classify `count` units against `max_graphemes` (0 = unlimited).
    pub fn new(count: usize, max_graphemes: usize) -> Self {
        if max_graphemes == 0 {
            Self::Unlimited
        } else if count <= max_graphemes {
            Self::Within {
                remaining: max_graphemes - count,
            }
        } else {
            Self::Over {
                by: count - max_graphemes,
            }
        }
    }

    /// Signed distance to the limit: positive is room left, negative is overflow.
    ///
    /// Returns `None` when unlimited.
    pub fn remaining(self) -> Option<i64> {
        match self {
            Self::Unlimited => None,
            Self::Within { remaining } => Some(i64::try_from(remaining).unwrap_or(i64::MAX)),
            Self::Over { by } => Some(i64::try_from(by).map_or(i64::MIN, |by| -by)),
        }
    }
}

impl fmt::Display for LimitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => f.write_str("No limit"),
            Self::Within { remaining } => write!(f, "{remaining} left"),
            Self::Over { by } => write!(f, "{by} over"),
        }
    }
}
