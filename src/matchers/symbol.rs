use super::DecimalSymbols;
use crate::{NumberParseMatcher, ParseFlags, ParsedNumber, StringSegment};

/// What a [`SymbolMatcher`] records when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Sets [`ParseFlags::NEGATIVE`]; only before the number.
    Minus,
    /// Consumed without effect; only before the number.
    Plus,
    /// Sets [`ParseFlags::PERCENT`]; once.
    Percent,
    /// Sets [`ParseFlags::PERMILLE`]; once.
    Permille,
}

/// Matches one of a fixed set of strings, preferring the longest.
#[derive(Debug, Clone)]
pub struct SymbolMatcher {
    kind: SymbolKind,
    strings: Vec<String>,
}

impl SymbolMatcher {
    pub fn new<S: Into<String>>(kind: SymbolKind, strings: impl IntoIterator<Item = S>) -> Self {
        let mut strings: Vec<String> = strings.into_iter().map(Into::into).filter(|s| !s.is_empty()).collect();
        strings.sort();
        strings.dedup();
        SymbolMatcher { kind, strings }
    }

    /// The locale's minus sign plus the common Unicode minus variants.
    pub fn minus_sign(symbols: &DecimalSymbols) -> Self {
        Self::new(SymbolKind::Minus, [symbols.minus_sign.as_str(), "-", "\u{2212}", "\u{FE63}", "\u{FF0D}"])
    }

    pub fn plus_sign(symbols: &DecimalSymbols) -> Self {
        Self::new(SymbolKind::Plus, [symbols.plus_sign.as_str(), "+", "\u{FB29}", "\u{FE62}", "\u{FF0B}"])
    }

    pub fn percent(symbols: &DecimalSymbols) -> Self {
        Self::new(SymbolKind::Percent, [symbols.percent_sign.as_str(), "%", "\u{066A}", "\u{FE6A}", "\u{FF05}"])
    }

    pub fn permille(symbols: &DecimalSymbols) -> Self {
        Self::new(SymbolKind::Permille, [symbols.permille_sign.as_str(), "‰", "\u{0609}"])
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    fn is_disabled(&self, result: &ParsedNumber) -> bool {
        match self.kind {
            SymbolKind::Minus => result.seen_number() || result.flags.contains(ParseFlags::NEGATIVE),
            SymbolKind::Plus => result.seen_number(),
            SymbolKind::Percent => result.flags.intersects(ParseFlags::PERCENT | ParseFlags::PERMILLE),
            SymbolKind::Permille => result.flags.intersects(ParseFlags::PERCENT | ParseFlags::PERMILLE),
        }
    }

    fn accept(&self, result: &mut ParsedNumber) {
        match self.kind {
            SymbolKind::Minus => result.flags |= ParseFlags::NEGATIVE,
            SymbolKind::Plus => {}
            SymbolKind::Percent => result.flags |= ParseFlags::PERCENT,
            SymbolKind::Permille => result.flags |= ParseFlags::PERMILLE,
        }
    }
}

impl NumberParseMatcher for SymbolMatcher {
    fn try_match(&self, segment: &mut StringSegment<'_>, result: &mut ParsedNumber) -> bool {
        if self.is_disabled(result) {
            return false;
        }

        let maybe_more = self.strings.iter().any(|s| segment.is_strict_prefix_of(s));
        let longest = self.strings.iter().filter(|s| segment.starts_with(s)).map(String::len).max();
        if let Some(len) = longest {
            segment.adjust_offset(len);
            self.accept(result);
        }
        maybe_more
    }
}
