use super::{DecimalSymbols, is_strict_prefix_ignore_case, prefix_len_ignore_case};
use crate::{NumberParseMatcher, ParseFlags, ParsedNumber, StringSegment};

/// Recognizes currency symbols and ISO codes from a fixed table.
///
/// The longest matching entry wins; comparisons ignore ASCII case so `usd`
/// and `USD` both match.
#[derive(Debug, Clone)]
pub struct CurrencyMatcher {
    /// `(text, ISO 4217 code)` pairs.
    entries: Vec<(String, String)>,
}

impl CurrencyMatcher {
    pub fn new<T: Into<String>, C: Into<String>>(entries: impl IntoIterator<Item = (T, C)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(text, code)| (text.into(), code.into()))
            .filter(|(text, _)| !text.is_empty())
            .collect();
        CurrencyMatcher { entries }
    }

    /// The locale's currency symbol and its ISO code.
    pub fn from_symbols(symbols: &DecimalSymbols) -> Self {
        Self::new([
            (symbols.currency_symbol.clone(), symbols.currency_code.clone()),
            (symbols.currency_code.clone(), symbols.currency_code.clone()),
        ])
    }
}

impl NumberParseMatcher for CurrencyMatcher {
    fn try_match(&self, segment: &mut StringSegment<'_>, result: &mut ParsedNumber) -> bool {
        if result.flags.contains(ParseFlags::HAS_CURRENCY) {
            return false;
        }

        let text = segment.as_str();
        let maybe_more = self.entries.iter().any(|(name, _)| is_strict_prefix_ignore_case(text, name));
        let best = self
            .entries
            .iter()
            .filter_map(|(name, code)| prefix_len_ignore_case(text, name).map(|len| (len, code)))
            .max_by_key(|(len, _)| *len);

        if let Some((len, code)) = best {
            segment.adjust_offset(len);
            result.currency_code = Some(code.clone());
            result.flags |= ParseFlags::HAS_CURRENCY;
        }
        maybe_more
    }
}
