//! Concrete matchers.
//!
//! Each matcher recognizes one component of a numeric string and implements
//! [`NumberParseMatcher`](crate::NumberParseMatcher). The engine does not know
//! about any of them; they are wired together by callers, by
//! [`create_parser_from_pattern`](crate::create_parser_from_pattern), or by the
//! default parser behind [`parse`](crate::parse).
//!
//! ## Shared conventions
//!
//! - A matcher consumes only complete units (a whole symbol, a digit run that
//!   ends on a digit, an exponent with at least one digit).
//! - The returned "maybe more" flag is `true` when the visible window ended
//!   while the text seen so far could still grow into a longer match. The
//!   longest-match strategy uses it to decide whether to keep widening the
//!   window for this matcher.
//! - Matchers that may only fire once per parse (signs, currency, exponent,
//!   percent) check the accumulator before consuming anything.

#[path = "matchers/affix.rs"]
mod affix;
#[path = "matchers/currency.rs"]
mod currency;
#[path = "matchers/decimal.rs"]
mod decimal;
#[path = "matchers/scientific.rs"]
mod scientific;
#[path = "matchers/symbol.rs"]
mod symbol;
#[path = "matchers/symbols.rs"]
mod symbols;
#[path = "matchers/whitespace.rs"]
mod whitespace;

pub use affix::AffixMatcher;
pub use currency::CurrencyMatcher;
pub use decimal::DecimalMatcher;
pub use scientific::ScientificMatcher;
pub use symbol::{SymbolKind, SymbolMatcher};
pub use symbols::DecimalSymbols;
pub use whitespace::WhitespaceMatcher;

/// Byte length of `needle` if `text` starts with it, ignoring ASCII case.
pub(crate) fn prefix_len_ignore_case(text: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    text.get(..needle.len()).filter(|head| head.eq_ignore_ascii_case(needle)).map(|_| needle.len())
}

/// Whether all of `text` is a strict prefix of `needle`, ignoring ASCII case.
pub(crate) fn is_strict_prefix_ignore_case(text: &str, needle: &str) -> bool {
    text.len() < needle.len() && needle.get(..text.len()).is_some_and(|head| head.eq_ignore_ascii_case(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignore_case_prefix_helpers() {
        assert_eq!(prefix_len_ignore_case("usd 5", "USD"), Some(3));
        assert_eq!(prefix_len_ignore_case("US", "USD"), None);
        assert_eq!(prefix_len_ignore_case("5", ""), None);

        assert!(is_strict_prefix_ignore_case("u", "USD"));
        assert!(!is_strict_prefix_ignore_case("usd", "USD"));
        assert!(!is_strict_prefix_ignore_case("ux", "USD"));
    }
}
