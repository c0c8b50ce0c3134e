extern crate self as numparse;

#[macro_use]
mod macros;
mod api;
pub mod comparators;
mod engine;
pub mod matchers;
mod parsed_number;
mod pattern;
mod segment;

pub use api::{Options, ParseOutput, ParseOutputVerbose, parse, parse_verbose_with, parse_with};
pub use engine::{NumberParser, ParseMetrics};
pub use parsed_number::{DecimalQuantity, ParseFlags, ParsedNumber};
pub use pattern::{PatternError, create_parser_from_pattern, create_parser_from_pattern_with};
pub use segment::StringSegment;

use std::cmp::Ordering;

// --- Matcher protocol -------------------------------------------------------

/// A pluggable unit recognizing one component of a numeric string (digits,
/// sign, currency, affix text, ...).
///
/// Matchers inspect the segment's *visible* text. On success they move the
/// segment's offset past what they recognized and record it in `result`. A
/// non-match is signaled by leaving the offset untouched.
pub trait NumberParseMatcher: std::fmt::Debug + Send + Sync {
    /// Try to consume a prefix of the visible text.
    ///
    /// Returns `true` when a longer window might let this matcher recognize
    /// more than it did on this one.
    fn try_match(&self, segment: &mut StringSegment<'_>, result: &mut ParsedNumber) -> bool;

    /// Called once per matcher after the parse has finished. Must be
    /// idempotent and must not rely on other matchers' post-processing.
    fn post_process(&self, _result: &mut ParsedNumber) {}
}

/// Orders two complete candidates; `Greater` means the first one is better.
pub type Comparator = Box<dyn Fn(&ParsedNumber, &ParsedNumber) -> Ordering + Send + Sync>;

/// How [`NumberParser::parse`] explores the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseStrategy {
    /// Commit to the first matcher (in registration order) that consumes
    /// anything, then continue from there.
    #[default]
    Greedy,
    /// Try every matcher on every window length and keep the best full parse
    /// according to the comparator.
    LongestMatch,
}
