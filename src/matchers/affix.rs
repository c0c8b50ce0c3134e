use crate::{NumberParseMatcher, ParseFlags, ParsedNumber, StringSegment};

/// Literal text around the number, such as `(` / `)` for accounting negatives
/// or a trailing `%`.
///
/// Matching records which prefix and suffix text was seen. Post-processing
/// then applies this matcher's flags when the recorded pair is exactly its own,
/// so several affix matchers can share prefix or suffix text without
/// conflicting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixMatcher {
    prefix: String,
    suffix: String,
    flags: ParseFlags,
    /// ISO code implied by a currency sign inside the affix text.
    currency_code: Option<String>,
}

impl AffixMatcher {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>, flags: ParseFlags) -> Self {
        AffixMatcher { prefix: prefix.into(), suffix: suffix.into(), flags, currency_code: None }
    }

    /// Record `code` as the currency when this affix pair is the one matched.
    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = Some(code.into());
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn flags(&self) -> ParseFlags {
        self.flags
    }
}

impl NumberParseMatcher for AffixMatcher {
    fn try_match(&self, segment: &mut StringSegment<'_>, result: &mut ParsedNumber) -> bool {
        let (affix, slot) = if result.seen_number() {
            (&self.suffix, &mut result.suffix)
        } else {
            (&self.prefix, &mut result.prefix)
        };
        if affix.is_empty() || slot.is_some() {
            return false;
        }

        if segment.starts_with(affix) {
            segment.adjust_offset(affix.len());
            *slot = Some(affix.clone());
            return false;
        }
        segment.is_strict_prefix_of(affix)
    }

    fn post_process(&self, result: &mut ParsedNumber) {
        let prefix = result.prefix.as_deref().unwrap_or("");
        let suffix = result.suffix.as_deref().unwrap_or("");
        if prefix != self.prefix || suffix != self.suffix {
            return;
        }
        result.flags |= self.flags;
        if let Some(code) = &self.currency_code {
            if result.currency_code.is_none() {
                result.currency_code = Some(code.clone());
            }
            result.flags |= ParseFlags::HAS_CURRENCY;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DecimalQuantity;

    #[test]
    fn prefix_before_number_suffix_after() {
        let matcher = AffixMatcher::new("(", ")", ParseFlags::NEGATIVE);
        let mut result = ParsedNumber::new();

        let mut seg = StringSegment::new("(");
        matcher.try_match(&mut seg, &mut result);
        assert_eq!(result.prefix.as_deref(), Some("("));

        // Already recorded: a second prefix is not consumed.
        let mut seg = StringSegment::new("(");
        matcher.try_match(&mut seg, &mut result);
        assert_eq!(seg.offset(), 0);

        result.quantity = Some(DecimalQuantity::new());
        let mut seg = StringSegment::new(")");
        matcher.try_match(&mut seg, &mut result);
        assert_eq!(result.suffix.as_deref(), Some(")"));
    }

    #[test]
    fn post_process_requires_exact_pair() {
        let matcher = AffixMatcher::new("(", ")", ParseFlags::NEGATIVE);

        let mut result = ParsedNumber::new();
        result.prefix = Some("(".to_string());
        matcher.post_process(&mut result);
        assert!(result.flags.is_empty());

        result.suffix = Some(")".to_string());
        matcher.post_process(&mut result);
        assert_eq!(result.flags, ParseFlags::NEGATIVE);

        let snapshot = result.clone();
        matcher.post_process(&mut result);
        assert_eq!(result, snapshot);
    }

    #[test]
    fn currency_affix_records_code() {
        let matcher = AffixMatcher::new("$", "", ParseFlags::empty()).with_currency("USD");
        let mut result = ParsedNumber::new();
        result.prefix = Some("$".to_string());
        matcher.post_process(&mut result);
        matcher.post_process(&mut result);
        assert_eq!(result.currency_code.as_deref(), Some("USD"));
        assert_eq!(result.flags, ParseFlags::HAS_CURRENCY);
    }

    #[test]
    fn partial_affix_asks_for_more() {
        let matcher = AffixMatcher::new("USD ", "", ParseFlags::empty());
        let mut seg = StringSegment::new("USD 5");
        let mut result = ParsedNumber::new();

        assert!(seg.with_length(2, |s| matcher.try_match(s, &mut result)));
        assert_eq!(seg.offset(), 0);
        assert!(!matcher.try_match(&mut seg, &mut result));
        assert_eq!(seg.as_str(), "5");
    }
}
