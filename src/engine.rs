//! Parsing engine.
//!
//! The engine owns an ordered list of matchers and a comparator and drives them
//! over a [`StringSegment`](crate::StringSegment), filling a caller-owned
//! [`ParsedNumber`](crate::ParsedNumber).
//!
//! ## How the parts work together
//!
//! ```text
//! add_matcher(..) ──┐
//! set_comparator ───┼── freeze()
//!                   v
//! input ── StringSegment::new ──┬─ Greedy:       first matcher that consumes
//!                               │                wins, repeat until stalled
//!                               └─ LongestMatch: every matcher x every window,
//!                                                recurse on full-window matches,
//!                                                keep the comparator's best
//!                               │
//!                               v
//!                   post_process (every matcher, registration order)
//!                               │
//!                               v
//!                   ParsedNumber (+ ParseMetrics)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `parser.rs`: the [`NumberParser`] registry, freeze contract, and both
//!   strategies.
//! - `metrics.rs`: counters and timing collected per run.
//!
//! ## Debugging
//!
//! The engine emits `tracing` events: `trace` for every matcher probe, `debug`
//! for committed matches and finished runs. The CLI reads its filter from
//! `NUMPARSE_LOG`.

#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/parser.rs"]
mod parser;

pub use metrics::ParseMetrics;
pub use parser::NumberParser;
