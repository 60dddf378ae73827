#![warn(missing_docs)]
//! Charcount Core - Unicode-aware text measurement
//!
//! # Overview
//!
//! `charcount-core` measures user-entered text and enforces an optional length limit. It is a
//! set of pure functions: every call borrows its input, computes, and returns. Rendering, input
//! handling and preference storage belong to the host (see the `charcount-tui` crate).
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  compute_metrics / enforce_limit            │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Metrics, LimitConfig, LimitStatus          │  ← Value objects
//! ├─────────────────────────────────────────────┤
//! │  Counters + Grapheme-safe clamp             │  ← Measurement
//! ├─────────────────────────────────────────────┤
//! │  Segmenter (clusters / code points)         │  ← Unicode units
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use charcount_core::{LimitConfig, Segmenter, compute_metrics, enforce_limit};
//!
//! let segmenter = Segmenter::detect();
//! let limit = LimitConfig::hard(10);
//!
//! let input = "Hello 👋 world, don't!";
//! let text = enforce_limit(input, &limit, segmenter);
//! assert_eq!(text, "Hello 👋 wo");
//!
//! let report = compute_metrics(text, &limit, segmenter);
//! assert_eq!(report.metrics.grapheme_count, 10);
//! assert_eq!(report.metrics.word_count, 2);
//! assert_eq!(report.used_label(), "10 / 10");
//! assert_eq!(report.status().to_string(), "0 left");
//! ```
//!
//! # Module Description
//!
//! - [`segmenter`] - grapheme cluster / code point units
//! - [`counters`] - grapheme, word, line and byte counters
//! - [`clamp`] - truncation that never splits a unit
//! - [`limit`] - limit configuration, input normalization and status
//! - [`metrics`] - aggregated metrics and display values
//!
//! # Unicode Support
//!
//! - Extended grapheme clusters per UAX #29 (`unicode-segmentation`)
//! - Word class: `\p{L}`, `\p{N}`, `'` and `’`
//! - Lines split on `'\n'` only
//! - Byte counts are UTF-8

pub mod clamp;
pub mod counters;
pub mod limit;
pub mod metrics;
pub mod segmenter;

pub use clamp::{ClampResult, clamp, clamp_to_grapheme_limit, enforce_limit};
pub use counters::{count_graphemes, count_lines, count_words, utf8_byte_length};
pub use limit::{LimitConfig, LimitStatus, parse_max_graphemes};
pub use metrics::{Metrics, MetricsReport, compute_metrics};
pub use segmenter::Segmenter;
