use super::{DecimalSymbols, is_strict_prefix_ignore_case, prefix_len_ignore_case};
use crate::{NumberParseMatcher, ParseFlags, ParsedNumber, StringSegment};

/// Recognizes a scientific exponent (`E5`, `e-3`, `E+12`) after a number and
/// applies it to the quantity.
#[derive(Debug, Clone)]
pub struct ScientificMatcher {
    symbols: DecimalSymbols,
    minus_signs: Vec<String>,
    plus_signs: Vec<String>,
}

impl ScientificMatcher {
    pub fn new(symbols: &DecimalSymbols) -> Self {
        ScientificMatcher {
            symbols: symbols.clone(),
            minus_signs: vec![symbols.minus_sign.clone(), "-".to_string(), "\u{2212}".to_string()],
            plus_signs: vec![symbols.plus_sign.clone(), "+".to_string()],
        }
    }

    pub fn english() -> Self {
        Self::new(&DecimalSymbols::english())
    }

    /// Length of the sign at the start of `text` and whether it is negative.
    fn sign(&self, text: &str) -> Option<(usize, bool)> {
        let minus = self.minus_signs.iter().filter(|s| !s.is_empty() && text.starts_with(s.as_str()));
        let plus = self.plus_signs.iter().filter(|s| !s.is_empty() && text.starts_with(s.as_str()));
        minus.map(|s| (s.len(), true)).chain(plus.map(|s| (s.len(), false))).max_by_key(|(len, _)| *len)
    }

    fn is_partial_sign(&self, text: &str) -> bool {
        !text.is_empty()
            && self
                .minus_signs
                .iter()
                .chain(self.plus_signs.iter())
                .any(|s| s.len() > text.len() && s.starts_with(text))
    }
}

impl NumberParseMatcher for ScientificMatcher {
    fn try_match(&self, segment: &mut StringSegment<'_>, result: &mut ParsedNumber) -> bool {
        if !result.seen_number() || result.flags.contains(ParseFlags::HAS_EXPONENT) {
            return false;
        }

        let text = segment.as_str();
        let separator = self.symbols.exponent_separator.as_str();
        let Some(mut pos) = prefix_len_ignore_case(text, separator) else {
            return is_strict_prefix_ignore_case(text, separator);
        };

        let mut negative = false;
        if let Some((len, is_minus)) = self.sign(&text[pos..]) {
            pos += len;
            negative = is_minus;
        } else if self.is_partial_sign(&text[pos..]) {
            return true;
        }

        let mut exponent: i32 = 0;
        let mut any_digit = false;
        for c in text[pos..].chars() {
            let Some(digit) = self.symbols.digit_value(c) else { break };
            exponent = exponent.saturating_mul(10).saturating_add(i32::from(digit));
            pos += c.len_utf8();
            any_digit = true;
        }

        let window_exhausted = pos == text.len();
        if !any_digit {
            return window_exhausted;
        }

        segment.adjust_offset(pos);
        if let Some(quantity) = result.quantity.as_mut() {
            quantity.adjust_magnitude(if negative { -exponent } else { exponent });
        }
        result.flags |= ParseFlags::HAS_EXPONENT;
        window_exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::DecimalMatcher;

    fn after_number(number: &str, rest: &str) -> (usize, Option<String>, bool) {
        let input = format!("{number}{rest}");
        let mut seg = StringSegment::new(&input);
        let mut result = ParsedNumber::new();
        DecimalMatcher::english().try_match(&mut seg, &mut result);
        let start = seg.offset();
        let more = ScientificMatcher::english().try_match(&mut seg, &mut result);
        (seg.offset() - start, result.quantity.map(|q| q.to_string()), more)
    }

    #[test]
    fn exponent_examples() {
        let cases: Vec<(&str, &str, usize, &str, bool)> = vec![
            ("1.5", "E3", 2, "1500", true),
            ("12", "e-1", 3, "1.2", true),
            ("7", "E+2x", 3, "700", false),
            ("7", "E", 0, "7", true),
            ("7", "E-", 0, "7", true),
            ("7", "Ex", 0, "7", false),
            ("7", "x", 0, "7", false),
        ];

        for (number, rest, consumed, value, maybe_more) in cases {
            let (got_consumed, got_value, got_more) = after_number(number, rest);
            assert_eq!(got_consumed, consumed, "consumed for {number}{rest}");
            assert_eq!(got_value.as_deref(), Some(value), "value for {number}{rest}");
            assert_eq!(got_more, maybe_more, "maybe_more for {number}{rest}");
        }
    }

    #[test]
    fn requires_a_number_first() {
        let mut seg = StringSegment::new("E5");
        let mut result = ParsedNumber::new();
        assert!(!ScientificMatcher::english().try_match(&mut seg, &mut result));
        assert_eq!(seg.offset(), 0);
        assert!(!result.flags.contains(ParseFlags::HAS_EXPONENT));
    }
}
