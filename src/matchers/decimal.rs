use super::DecimalSymbols;
use crate::{DecimalQuantity, NumberParseMatcher, ParseFlags, ParsedNumber, StringSegment};

/// Recognizes the digits of a decimal number, with optional grouping
/// separators in the integer part and at most one decimal separator.
///
/// ```text
/// "1,234.5x"
///  ^^^^^^^   consumed; "x" stops the scan
/// "12,x"
///  ^^        consumed; the dangling grouping separator is left alone
/// ```
#[derive(Debug, Clone)]
pub struct DecimalMatcher {
    symbols: DecimalSymbols,
    grouping: bool,
    integer_only: bool,
}

/// Outcome of scanning the visible text.
struct Scan {
    quantity: DecimalQuantity,
    /// Bytes that form a complete number.
    committed: usize,
    committed_fraction: bool,
    any_digit: bool,
    /// The scan ran into text it could not use, as opposed to the window end.
    stopped: bool,
}

impl DecimalMatcher {
    pub fn new(symbols: &DecimalSymbols) -> Self {
        DecimalMatcher { symbols: symbols.clone(), grouping: true, integer_only: false }
    }

    pub fn english() -> Self {
        Self::new(&DecimalSymbols::english())
    }

    /// Treat the grouping separator as ordinary, non-numeric text.
    pub fn without_grouping(mut self) -> Self {
        self.grouping = false;
        self
    }

    /// Stop at the decimal separator.
    pub fn integer_only(mut self) -> Self {
        self.integer_only = true;
        self
    }

    fn scan(&self, text: &str) -> Scan {
        let decimal = self.symbols.decimal_separator.as_str();
        let grouping = if self.grouping { self.symbols.grouping_separator.as_str() } else { "" };

        let mut scan = Scan {
            quantity: DecimalQuantity::new(),
            committed: 0,
            committed_fraction: false,
            any_digit: false,
            stopped: false,
        };
        let mut pos = 0;
        let mut fractional = false;
        let mut after_grouping = false;

        while pos < text.len() {
            let rest = &text[pos..];
            let Some(c) = rest.chars().next() else { break };

            if let Some(digit) = self.symbols.digit_value(c) {
                scan.quantity.append_digit(digit, fractional);
                pos += c.len_utf8();
                scan.committed = pos;
                scan.committed_fraction = fractional;
                scan.any_digit = true;
                after_grouping = false;
                continue;
            }

            let decimal_allowed = !self.integer_only && !fractional && !after_grouping && !decimal.is_empty();
            if decimal_allowed && rest.starts_with(decimal) {
                fractional = true;
                pos += decimal.len();
                if scan.any_digit {
                    scan.committed = pos;
                    scan.committed_fraction = true;
                }
                continue;
            }

            let grouping_allowed = scan.any_digit && !fractional && !after_grouping && !grouping.is_empty();
            if grouping_allowed && rest.starts_with(grouping) {
                after_grouping = true;
                pos += grouping.len();
                continue;
            }

            // A separator cut short by the window end may still complete.
            let partial_separator = (decimal_allowed && decimal.starts_with(rest) && !rest.is_empty())
                || (grouping_allowed && grouping.starts_with(rest) && !rest.is_empty());
            scan.stopped = !partial_separator;
            break;
        }

        scan
    }
}

impl NumberParseMatcher for DecimalMatcher {
    fn try_match(&self, segment: &mut StringSegment<'_>, result: &mut ParsedNumber) -> bool {
        if result.seen_number() {
            return false;
        }

        let scan = self.scan(segment.as_str());
        if scan.any_digit {
            segment.adjust_offset(scan.committed);
            result.quantity = Some(scan.quantity);
            if scan.committed_fraction {
                result.flags |= ParseFlags::HAS_DECIMAL_SEPARATOR;
            }
        }
        !scan.stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(matcher: &DecimalMatcher, input: &str) -> (usize, Option<String>, bool, ParseFlags) {
        let mut seg = StringSegment::new(input);
        let mut result = ParsedNumber::new();
        let more = matcher.try_match(&mut seg, &mut result);
        (seg.offset(), result.quantity.map(|q| q.to_string()), more, result.flags)
    }

    #[test]
    fn decimal_examples() {
        // (input, consumed, value, maybe_more)
        let cases: Vec<(&str, usize, Option<&str>, bool)> = vec![
            ("42", 2, Some("42"), true),
            ("42abc", 2, Some("42"), false),
            ("1,234.5", 7, Some("1234.5"), true),
            ("1,234.5x", 7, Some("1234.5"), false),
            ("12,x", 2, Some("12"), false),
            ("12,", 2, Some("12"), true),
            ("12.", 3, Some("12"), true),
            (".77", 3, Some("0.77"), true),
            ("0033", 4, Some("33"), true),
            ("1.2.3", 3, Some("1.2"), false),
            ("1,,2", 1, Some("1"), false),
            (",5", 0, None, false),
            (".", 0, None, true),
            ("abc", 0, None, false),
        ];

        let matcher = DecimalMatcher::english();
        for (input, consumed, value, maybe_more) in cases {
            let (got_consumed, got_value, got_more, _) = run(&matcher, input);
            assert_eq!(got_consumed, consumed, "consumed for {input:?}");
            assert_eq!(got_value.as_deref(), value, "value for {input:?}");
            assert_eq!(got_more, maybe_more, "maybe_more for {input:?}");
        }
    }

    #[test]
    fn decimal_separator_flag_only_when_committed() {
        let matcher = DecimalMatcher::english();
        assert!(run(&matcher, "1.5").3.contains(ParseFlags::HAS_DECIMAL_SEPARATOR));
        assert!(!run(&matcher, "15").3.contains(ParseFlags::HAS_DECIMAL_SEPARATOR));
    }

    #[test]
    fn options_restrict_separators() {
        let no_grouping = DecimalMatcher::english().without_grouping();
        assert_eq!(run(&no_grouping, "1,234").0, 1);

        let integer_only = DecimalMatcher::english().integer_only();
        assert_eq!(run(&integer_only, "1.5").0, 1);
        assert!(!run(&integer_only, "1.5").2);
    }

    #[test]
    fn refuses_second_number() {
        let matcher = DecimalMatcher::english();
        let mut seg = StringSegment::new("7");
        let mut result = ParsedNumber::new();
        result.quantity = Some(DecimalQuantity::new());
        assert!(!matcher.try_match(&mut seg, &mut result));
        assert_eq!(seg.offset(), 0);
    }

    #[test]
    fn european_symbols() {
        let mut symbols = DecimalSymbols::english();
        symbols.decimal_separator = ",".to_string();
        symbols.grouping_separator = ".".to_string();
        let (consumed, value, _, _) = run(&DecimalMatcher::new(&symbols), "1.234,5");
        assert_eq!(consumed, 7);
        assert_eq!(value.as_deref(), Some("1234.5"));
    }
}
