/// Locale-dependent strings the matchers look for.
///
/// This is a plain value: callers fill it from whatever locale source they
/// have. [`DecimalSymbols::english`] gives en-US values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalSymbols {
    pub decimal_separator: String,
    pub grouping_separator: String,
    pub minus_sign: String,
    pub plus_sign: String,
    pub percent_sign: String,
    pub permille_sign: String,
    pub exponent_separator: String,
    pub currency_symbol: String,
    /// ISO 4217 code of the locale's default currency.
    pub currency_code: String,
    /// First char of the locale's native digit block (`'0'` for Latin digits).
    pub zero_digit: char,
}

impl DecimalSymbols {
    pub fn english() -> Self {
        DecimalSymbols {
            decimal_separator: ".".to_string(),
            grouping_separator: ",".to_string(),
            minus_sign: "-".to_string(),
            plus_sign: "+".to_string(),
            percent_sign: "%".to_string(),
            permille_sign: "‰".to_string(),
            exponent_separator: "E".to_string(),
            currency_symbol: "$".to_string(),
            currency_code: "USD".to_string(),
            zero_digit: '0',
        }
    }

    /// Value of `c` as a digit: ASCII digits always count, as do the ten chars
    /// starting at `zero_digit`.
    pub fn digit_value(&self, c: char) -> Option<u8> {
        if let Some(d) = c.to_digit(10) {
            return Some(d as u8);
        }
        let offset = (c as u32).checked_sub(self.zero_digit as u32)?;
        (offset < 10).then_some(offset as u8)
    }
}

impl Default for DecimalSymbols {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_digits_are_recognized() {
        let mut symbols = DecimalSymbols::english();
        assert_eq!(symbols.digit_value('7'), Some(7));
        assert_eq!(symbols.digit_value('٣'), None);

        symbols.zero_digit = '٠';
        assert_eq!(symbols.digit_value('٣'), Some(3));
        assert_eq!(symbols.digit_value('7'), Some(7));
        assert_eq!(symbols.digit_value('a'), None);
    }
}
