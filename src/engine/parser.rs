//! Matcher registry and parsing strategies.
//!
//! This module is the operational core of the engine:
//!
//! - Hold an ordered list of matchers and a comparator, made immutable by
//!   [`NumberParser::freeze`].
//! - Drive the matchers over a [`StringSegment`] with one of two strategies.
//! - Run every matcher's post-processing over the final result.
//!
//! ## Greedy
//!
//! ```text
//! "  -42"   whitespace ──> "-42"   minus ──> "42"   decimal ──> ""
//!           (first matcher that consumes anything wins each step)
//! ```
//!
//! ## Longest match
//!
//! At each offset every matcher is probed on windows of 1, 2, ... chars. Only a
//! probe that consumes its *whole* window is built on; the search recurses from
//! there and the finished candidate replaces the best result if the comparator
//! prefers it.
//!
//! ```text
//! offset 0, matcher m, window n:
//!   candidate = snapshot ── m on first n chars ──┬─ consumed n ──> recurse, compare
//!                                               └─ otherwise   ──> discard
//!   rewind offset; widen window only while m reports "maybe more"
//! ```
//!
//! The probe always rewinds the segment; only the recursive call moves past the
//! consumed window. Recursion depth is bounded by the number of chars in the
//! input, and the work is exponential in the number of ambiguous matcher/window
//! combinations, so this strategy is meant for short inputs.

use super::metrics::ParseMetrics;
use crate::{Comparator, NumberParseMatcher, ParseStrategy, ParsedNumber, StringSegment};
use std::cmp::Ordering;
use std::fmt;
use std::time::Instant;
use tracing::{debug, trace};

type CompareFn = dyn Fn(&ParsedNumber, &ParsedNumber) -> Ordering + Send + Sync;

/// An ordered set of matchers plus a tie-break comparator.
///
/// Usage: `new()`, then `add_matcher(..)` in priority order, `set_comparator(..)`,
/// `freeze()`, then `parse(..)` as often as needed. A frozen parser is
/// immutable and can be shared across threads.
pub struct NumberParser {
    matchers: Vec<Box<dyn NumberParseMatcher>>,
    comparator: Option<Comparator>,
    frozen: bool,
}

impl fmt::Debug for NumberParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberParser")
            .field("matchers", &self.matchers)
            .field("comparator", &self.comparator.as_ref().map(|_| "<function>"))
            .field("frozen", &self.frozen)
            .finish()
    }
}

impl Default for NumberParser {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberParser {
    pub fn new() -> Self {
        NumberParser { matchers: Vec::new(), comparator: None, frozen: false }
    }

    /// Append a matcher. Matchers are tried in the order they were added.
    pub fn add_matcher(&mut self, matcher: impl NumberParseMatcher + 'static) {
        self.add_boxed_matcher(Box::new(matcher));
    }

    pub fn add_boxed_matcher(&mut self, matcher: Box<dyn NumberParseMatcher>) {
        assert!(!self.frozen, "cannot add a matcher to a frozen NumberParser");
        self.matchers.push(matcher);
    }

    /// Set the comparator used by [`ParseStrategy::LongestMatch`].
    pub fn set_comparator(&mut self, comparator: Comparator) {
        assert!(!self.frozen, "cannot change the comparator of a frozen NumberParser");
        self.comparator = Some(comparator);
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Registered matchers, in registration order.
    pub fn matchers(&self) -> impl Iterator<Item = &dyn NumberParseMatcher> {
        self.matchers.iter().map(|m| m.as_ref())
    }

    /// Parse `input` into `result`.
    ///
    /// Partial consumption is not an error: compare `result.chars_consumed`
    /// with `input.len()` to see how far the parse got.
    ///
    /// # Panics
    ///
    /// If the parser is not frozen, or if `strategy` is
    /// [`ParseStrategy::LongestMatch`] and no comparator was set.
    pub fn parse(&self, input: &str, strategy: ParseStrategy, result: &mut ParsedNumber) {
        self.parse_with_metrics(input, strategy, result);
    }

    /// Like [`parse`](Self::parse), returning counters and timing for the run.
    pub fn parse_with_metrics(&self, input: &str, strategy: ParseStrategy, result: &mut ParsedNumber) -> ParseMetrics {
        assert!(self.frozen, "NumberParser::parse called before freeze()");

        let start = Instant::now();
        let mut metrics = ParseMetrics { strategy, ..ParseMetrics::default() };
        let mut segment = StringSegment::new(input);

        match strategy {
            ParseStrategy::Greedy => self.parse_greedy(&mut segment, result, &mut metrics),
            ParseStrategy::LongestMatch => {
                let Some(comparator) = self.comparator.as_deref() else {
                    panic!("longest-match parsing requires a comparator; call set_comparator() before freeze()");
                };
                self.parse_longest_recursive(&mut segment, result, comparator, &mut metrics, 1);
            }
        }

        for matcher in &self.matchers {
            matcher.post_process(result);
        }

        metrics.total = start.elapsed();
        debug!(
            input,
            ?strategy,
            consumed = result.chars_consumed,
            complete = result.chars_consumed == input.len(),
            matcher_calls = metrics.matcher_calls,
            "parse finished"
        );
        metrics
    }

    /// Commit to the first matcher that consumes anything, then continue from
    /// the new offset. Stops at the end of input or when no matcher consumes.
    fn parse_greedy(&self, segment: &mut StringSegment<'_>, result: &mut ParsedNumber, metrics: &mut ParseMetrics) {
        'step: while !segment.is_empty() {
            metrics.max_depth += 1;
            let initial_offset = segment.offset();

            for matcher in &self.matchers {
                metrics.matcher_calls += 1;
                matcher.try_match(segment, result);
                debug_assert!(segment.offset() >= initial_offset, "matcher {matcher:?} moved the segment backwards");

                if segment.offset() != initial_offset {
                    result.set_chars_consumed(segment);
                    metrics.committed_matches += 1;
                    debug!(?matcher, from = initial_offset, to = segment.offset(), "greedy match");
                    continue 'step;
                }
            }

            trace!(offset = initial_offset, "greedy parse stalled");
            break;
        }
    }

    fn parse_longest_recursive(
        &self,
        segment: &mut StringSegment<'_>,
        result: &mut ParsedNumber,
        comparator: &CompareFn,
        metrics: &mut ParseMetrics,
        depth: usize,
    ) {
        if segment.is_empty() {
            return;
        }
        metrics.max_depth = metrics.max_depth.max(depth);

        let initial = result.clone();
        let mut candidate = ParsedNumber::new();
        let initial_offset = segment.offset();
        let windows = segment.char_boundaries();

        for matcher in &self.matchers {
            for &chars_to_consume in &windows {
                candidate.copy_from(&initial);

                metrics.matcher_calls += 1;
                let maybe_more = segment.with_length(chars_to_consume, |seg| matcher.try_match(seg, &mut candidate));
                let consumed = segment.offset() - initial_offset;
                trace!(?matcher, offset = initial_offset, window = chars_to_consume, consumed, maybe_more, "probe");

                if consumed == chars_to_consume {
                    candidate.set_chars_consumed(segment);
                    metrics.committed_matches += 1;
                    self.parse_longest_recursive(segment, &mut candidate, comparator, metrics, depth + 1);

                    metrics.candidates_compared += 1;
                    if comparator(&candidate, result) == Ordering::Greater {
                        result.copy_from(&candidate);
                    }
                }

                segment.set_offset(initial_offset);

                if !maybe_more {
                    break;
                }
            }
        }
    }
}
