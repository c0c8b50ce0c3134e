//! The parse accumulator.
//!
//! [`ParsedNumber`] is filled in progressively by matchers. It is a plain value
//! type: speculative parses branch it with [`ParsedNumber::copy_from`] and never
//! share it by reference, so rolling back is just copying an older snapshot.

use crate::segment::StringSegment;
use std::fmt;

bitflags::bitflags! {
    /// Semantic facts discovered while parsing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ParseFlags: u16 {
        const NEGATIVE              = 1 << 0;
        const PERCENT               = 1 << 1;
        const PERMILLE              = 1 << 2;
        const HAS_EXPONENT          = 1 << 3;
        const HAS_DECIMAL_SEPARATOR = 1 << 4;
        const HAS_CURRENCY          = 1 << 5;
    }
}

/// Padding zeros [`DecimalQuantity`]'s `Display` writes before switching to
/// `E` notation. Exponents can reach `i32::MAX`.
const MAX_DISPLAY_PADDING: usize = 32;

/// Exact decimal value: `digits * 10^scale`.
///
/// Digits are stored most significant first. Leading zeros are dropped; trailing
/// fraction zeros are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DecimalQuantity {
    digits: Vec<u8>,
    scale: i32,
}

impl DecimalQuantity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one digit (0..=9). Fractional digits shift the scale down.
    pub fn append_digit(&mut self, digit: u8, fractional: bool) {
        debug_assert!(digit < 10);
        if fractional {
            self.scale -= 1;
        }
        if digit == 0 && self.digits.is_empty() {
            return;
        }
        self.digits.push(digit);
    }

    /// Multiply by `10^delta`.
    pub fn adjust_magnitude(&mut self, delta: i32) {
        self.scale = self.scale.saturating_add(delta);
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let mut text: String = self.digits.iter().map(|d| char::from(b'0' + d)).collect();
        text.push('e');
        text.push_str(&self.scale.to_string());
        text.parse::<f64>().unwrap_or(f64::INFINITY)
    }
}

impl fmt::Display for DecimalQuantity {
    /// Plain decimal notation, or `{digits}E{scale}` when that would need more
    /// than `MAX_DISPLAY_PADDING` padding zeros.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let digits: String = self.digits.iter().map(|d| char::from(b'0' + d)).collect();
        let padding = if self.scale >= 0 {
            self.scale.unsigned_abs() as usize
        } else {
            (self.scale.unsigned_abs() as usize).saturating_sub(digits.len())
        };
        if padding > MAX_DISPLAY_PADDING {
            return write!(f, "{digits}E{}", self.scale);
        }

        if self.scale >= 0 {
            write!(f, "{}{}", digits, "0".repeat(padding))
        } else {
            let frac_len = self.scale.unsigned_abs() as usize;
            if frac_len >= digits.len() {
                write!(f, "0.{}{}", "0".repeat(padding), digits)
            } else {
                let (int, frac) = digits.split_at(digits.len() - frac_len);
                write!(f, "{int}.{frac}")
            }
        }
    }
}

/// Everything recognized so far in one parse attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedNumber {
    /// The numeric value, once a number has been seen.
    pub quantity: Option<DecimalQuantity>,
    /// Bytes of input consumed since the parse began.
    pub chars_consumed: usize,
    pub flags: ParseFlags,
    /// Affix text matched before the number.
    pub prefix: Option<String>,
    /// Affix text matched after the number.
    pub suffix: Option<String>,
    /// ISO 4217 code of a matched currency.
    pub currency_code: Option<String>,
}

impl ParsedNumber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Overwrite `self` with a deep copy of `other`.
    pub fn copy_from(&mut self, other: &ParsedNumber) {
        self.clone_from(other);
    }

    /// Record the segment's offset as the number of bytes consumed.
    pub fn set_chars_consumed(&mut self, segment: &StringSegment<'_>) {
        self.chars_consumed = segment.offset();
    }

    pub fn seen_number(&self) -> bool {
        self.quantity.is_some()
    }

    /// Some input was consumed and it contained a number.
    pub fn success(&self) -> bool {
        self.chars_consumed > 0 && self.seen_number()
    }

    /// The value as `f64`, with sign and percent/permille scaling applied.
    pub fn to_f64(&self) -> Option<f64> {
        let mut value = self.quantity.as_ref()?.to_f64();
        if self.flags.contains(ParseFlags::PERCENT) {
            value /= 100.0;
        }
        if self.flags.contains(ParseFlags::PERMILLE) {
            value /= 1000.0;
        }
        if self.flags.contains(ParseFlags::NEGATIVE) {
            value = -value;
        }
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantity(digits: &str, fraction: &str) -> DecimalQuantity {
        let mut dq = DecimalQuantity::new();
        for b in digits.bytes() {
            dq.append_digit(b - b'0', false);
        }
        for b in fraction.bytes() {
            dq.append_digit(b - b'0', true);
        }
        dq
    }

    #[test]
    fn quantity_display_and_value() {
        let cases: Vec<(&str, &str, &str, f64)> = vec![
            ("42", "", "42", 42.0),
            ("0042", "", "42", 42.0),
            ("1", "5", "1.5", 1.5),
            ("", "05", "0.05", 0.05),
            ("0", "0", "0", 0.0),
            ("100", "", "100", 100.0),
        ];

        for (int, frac, text, value) in cases {
            let dq = quantity(int, frac);
            assert_eq!(dq.to_string(), text, "display of {int}.{frac}");
            assert!((dq.to_f64() - value).abs() < 1e-12, "value of {int}.{frac}");
        }
    }

    #[test]
    fn huge_scale_displays_in_exponent_form() {
        // (digits, magnitude shift, display, value)
        let cases: Vec<(&str, i32, &str, f64)> = vec![
            ("1", 32, "100000000000000000000000000000000", 1e32),
            ("1", 33, "1E33", 1e33),
            ("15", -34, "0.0000000000000000000000000000000015", 1.5e-33),
            ("15", -35, "15E-35", 1.5e-34),
            ("1", -300_000_000, "1E-300000000", 0.0),
            ("12", i32::MAX, "12E2147483647", f64::INFINITY),
            ("12", i32::MIN, "12E-2147483648", 0.0),
        ];

        for (digits, shift, text, value) in cases {
            let mut dq = quantity(digits, "");
            dq.adjust_magnitude(shift);
            assert_eq!(dq.to_string(), text, "display of {digits} shifted by {shift}");
            let got = dq.to_f64();
            assert!(got == value || (got - value).abs() <= value.abs() * 1e-12, "value of {text}: {got}");
        }
    }

    #[test]
    fn quantity_magnitude_shift() {
        let mut dq = quantity("12", "5");
        dq.adjust_magnitude(2);
        assert_eq!(dq.to_string(), "1250");
        dq.adjust_magnitude(-5);
        assert_eq!(dq.to_string(), "0.0125");
    }

    #[test]
    fn copy_is_a_value_snapshot() {
        let mut initial = ParsedNumber::new();
        initial.quantity = Some(quantity("7", ""));
        initial.prefix = Some("(".to_string());
        initial.flags |= ParseFlags::NEGATIVE;

        let mut candidate = ParsedNumber::new();
        candidate.copy_from(&initial);
        candidate.copy_from(&initial);
        assert_eq!(candidate, initial);

        candidate.quantity.as_mut().unwrap().append_digit(3, false);
        candidate.prefix.as_mut().unwrap().push('x');
        candidate.flags |= ParseFlags::PERCENT;

        assert_eq!(initial.quantity, Some(quantity("7", "")));
        assert_eq!(initial.prefix.as_deref(), Some("("));
        assert_eq!(initial.flags, ParseFlags::NEGATIVE);
    }

    #[test]
    fn value_applies_sign_and_scaling() {
        let mut pn = ParsedNumber::new();
        assert_eq!(pn.to_f64(), None);

        pn.quantity = Some(quantity("25", ""));
        pn.flags = ParseFlags::NEGATIVE | ParseFlags::PERCENT;
        assert_eq!(pn.to_f64(), Some(-0.25));

        pn.flags = ParseFlags::PERMILLE;
        assert_eq!(pn.to_f64(), Some(0.025));
    }

    #[test]
    fn success_needs_consumption_and_number() {
        let mut pn = ParsedNumber::new();
        pn.chars_consumed = 2;
        assert!(!pn.success());
        pn.quantity = Some(DecimalQuantity::new());
        assert!(pn.success());
        pn.clear();
        assert_eq!(pn, ParsedNumber::new());
    }
}
