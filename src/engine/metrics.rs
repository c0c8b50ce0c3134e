//! Engine run metrics.
//!
//! Collected by [`NumberParser::parse_with_metrics`](crate::NumberParser::parse_with_metrics).
//! Counting is cheap enough to happen on every run; callers that don't care
//! use [`NumberParser::parse`](crate::NumberParser::parse), which drops them.
//!
//! ## Design notes
//!
//! - `matcher_calls` grows combinatorially under the longest-match strategy;
//!   it is the number to watch when an input is slow.
//! - `candidates_compared` is always zero for greedy runs.
//! - `max_depth` counts loop steps for greedy runs, which do not recurse.

use crate::ParseStrategy;
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct ParseMetrics {
    /// Strategy the run used.
    pub strategy: ParseStrategy,
    /// Total elapsed time, including post-processing.
    pub total: Duration,
    /// Number of `try_match` invocations.
    pub matcher_calls: usize,
    /// Number of invocations that consumed input the engine then built on.
    pub committed_matches: usize,
    /// Number of comparator calls between a finished candidate and the best so far.
    pub candidates_compared: usize,
    /// Longest match: deepest recursion level reached (1 for a single step).
    /// Greedy: number of steps taken, including a final one where no matcher
    /// consumed anything.
    pub max_depth: usize,
}
