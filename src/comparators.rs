//! Ready-made comparators for [`ParseStrategy::LongestMatch`](crate::ParseStrategy::LongestMatch).

use crate::{Comparator, ParseFlags, ParsedNumber};

/// More consumed input wins: a longest-match parse.
pub fn by_chars_consumed() -> Comparator {
    Box::new(|a: &ParsedNumber, b: &ParsedNumber| a.chars_consumed.cmp(&b.chars_consumed))
}

/// A candidate that recognized a currency beats one that did not; otherwise
/// more consumed input wins.
pub fn prefer_currency() -> Comparator {
    Box::new(|a: &ParsedNumber, b: &ParsedNumber| {
        let has_currency = |p: &ParsedNumber| p.flags.contains(ParseFlags::HAS_CURRENCY);
        has_currency(a).cmp(&has_currency(b)).then(a.chars_consumed.cmp(&b.chars_consumed))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    fn consumed(n: usize) -> ParsedNumber {
        ParsedNumber { chars_consumed: n, ..ParsedNumber::default() }
    }

    #[test]
    fn chars_consumed_ordering() {
        let cmp = by_chars_consumed();
        assert_eq!(cmp(&consumed(3), &consumed(2)), Ordering::Greater);
        assert_eq!(cmp(&consumed(2), &consumed(2)), Ordering::Equal);
    }

    #[test]
    fn currency_outranks_length() {
        let cmp = prefer_currency();
        let mut short = consumed(1);
        short.flags |= ParseFlags::HAS_CURRENCY;
        assert_eq!(cmp(&short, &consumed(5)), Ordering::Greater);
        assert_eq!(cmp(&consumed(5), &consumed(1)), Ordering::Greater);
    }
}
