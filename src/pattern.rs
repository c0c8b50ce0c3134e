//! Build a parser from a decimal format pattern.
//!
//! A pattern has a positive subpattern and an optional negative one:
//!
//! ```text
//! "¤#,##0.00;(¤#,##0.00)"
//!  │└──────┘ └─ ';' then negative subpattern
//!  │   number part (only its presence matters here)
//!  └ prefix; everything after the number part is the suffix
//! ```
//!
//! Affix tokens: `'quoted text'` (`''` is an apostrophe), `%`, `‰`, `¤`
//! (currency symbol), `¤¤` (ISO code), `-`, `+`. Anything else is literal.
//! Without a negative subpattern the negative affixes are the minus sign
//! followed by the positive prefix, and the positive suffix.

use crate::comparators;
use crate::matchers::{
    AffixMatcher, CurrencyMatcher, DecimalMatcher, DecimalSymbols, ScientificMatcher, SymbolMatcher, WhitespaceMatcher,
};
use crate::{NumberParser, ParseFlags};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern has no number part (expected one of `#0-9@,.`)")]
    MissingNumber,
    #[error("unterminated quote starting at byte {0}")]
    UnterminatedQuote(usize),
    #[error("pattern has {0} subpatterns; at most two (positive;negative) are allowed")]
    TooManySubpatterns(usize),
    #[error("number characters at byte {0} after the suffix began")]
    SplitNumber(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'p> {
    Literal(String),
    Number,
    Percent,
    Permille,
    /// Count of consecutive `¤`.
    Currency(usize),
    Minus,
    Plus,
    Separator,
    Other(&'p str),
}

fn tokenize(pattern: &str) -> Result<Vec<(usize, Token<'_>)>, PatternError> {
    let re = regex!(
        r"(?s)(?P<quoted>'(?:[^']|'')*')|(?P<open>'.*)|(?P<number>[#0-9@,.]+(?:E\+?0+)?)|(?P<currency>¤+)|(?P<other>.)"
    );

    let mut tokens = Vec::new();
    for caps in re.captures_iter(pattern) {
        let Some(whole) = caps.get(0) else { continue };
        let token = if let Some(quoted) = caps.name("quoted") {
            let text = quoted.as_str();
            if text == "''" {
                Token::Literal("'".to_string())
            } else {
                Token::Literal(text[1..text.len() - 1].replace("''", "'"))
            }
        } else if caps.name("open").is_some() {
            return Err(PatternError::UnterminatedQuote(whole.start()));
        } else if caps.name("number").is_some() {
            Token::Number
        } else if let Some(currency) = caps.name("currency") {
            Token::Currency(currency.as_str().chars().count())
        } else {
            match whole.as_str() {
                "%" => Token::Percent,
                "‰" => Token::Permille,
                "-" => Token::Minus,
                "+" => Token::Plus,
                ";" => Token::Separator,
                other => Token::Other(other),
            }
        };
        tokens.push((whole.start(), token));
    }
    Ok(tokens)
}

/// Prefix and suffix text of one subpattern with what they imply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Affixes {
    prefix: String,
    suffix: String,
    flags: ParseFlags,
    currency: bool,
}

impl Affixes {
    fn from_tokens(tokens: &[(usize, Token<'_>)], symbols: &DecimalSymbols) -> Result<Self, PatternError> {
        let mut affixes = Affixes::default();
        let mut seen_number = false;
        let mut in_suffix = false;

        for (pos, token) in tokens {
            if *token == Token::Number {
                if in_suffix {
                    return Err(PatternError::SplitNumber(*pos));
                }
                seen_number = true;
                continue;
            }
            in_suffix = seen_number;

            let text: &str = match token {
                Token::Literal(text) => text.as_str(),
                Token::Other(text) => *text,
                Token::Percent => {
                    affixes.flags |= ParseFlags::PERCENT;
                    symbols.percent_sign.as_str()
                }
                Token::Permille => {
                    affixes.flags |= ParseFlags::PERMILLE;
                    symbols.permille_sign.as_str()
                }
                Token::Currency(1) => {
                    affixes.currency = true;
                    symbols.currency_symbol.as_str()
                }
                Token::Currency(_) => {
                    affixes.currency = true;
                    symbols.currency_code.as_str()
                }
                Token::Minus => symbols.minus_sign.as_str(),
                Token::Plus => symbols.plus_sign.as_str(),
                Token::Number | Token::Separator => unreachable!("handled before affix expansion"),
            };
            if in_suffix {
                affixes.suffix.push_str(text);
            } else {
                affixes.prefix.push_str(text);
            }
        }

        if !seen_number {
            return Err(PatternError::MissingNumber);
        }
        Ok(affixes)
    }

    fn to_matcher(&self, symbols: &DecimalSymbols) -> AffixMatcher {
        let matcher = AffixMatcher::new(self.prefix.clone(), self.suffix.clone(), self.flags);
        if self.currency { matcher.with_currency(symbols.currency_code.clone()) } else { matcher }
    }
}

/// Positive and negative affixes of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PatternInfo {
    positive: Affixes,
    negative: Affixes,
}

impl PatternInfo {
    fn parse(pattern: &str, symbols: &DecimalSymbols) -> Result<Self, PatternError> {
        let tokens = tokenize(pattern)?;
        let subpatterns: Vec<&[(usize, Token<'_>)]> = tokens.split(|(_, t)| *t == Token::Separator).collect();

        match subpatterns.as_slice() {
            [positive] => {
                let positive = Affixes::from_tokens(positive, symbols)?;
                let negative = Affixes {
                    prefix: format!("{}{}", symbols.minus_sign, positive.prefix),
                    suffix: positive.suffix.clone(),
                    flags: positive.flags | ParseFlags::NEGATIVE,
                    currency: positive.currency,
                };
                Ok(PatternInfo { positive, negative })
            }
            [positive, negative] => {
                let positive = Affixes::from_tokens(positive, symbols)?;
                let mut negative = Affixes::from_tokens(negative, symbols)?;
                negative.flags |= ParseFlags::NEGATIVE;
                Ok(PatternInfo { positive, negative })
            }
            more => Err(PatternError::TooManySubpatterns(more.len())),
        }
    }
}

/// Build a frozen longest-match-ready parser for `pattern` with en-US symbols.
pub fn create_parser_from_pattern(pattern: &str) -> Result<NumberParser, PatternError> {
    create_parser_from_pattern_with(pattern, &DecimalSymbols::english())
}

/// Build a frozen parser for `pattern` using `symbols`.
///
/// Matchers, in order: positive affixes, negative affixes, decimal digits,
/// whitespace, minus sign, scientific exponent, currency. The comparator
/// prefers the candidate that consumed more input.
pub fn create_parser_from_pattern_with(pattern: &str, symbols: &DecimalSymbols) -> Result<NumberParser, PatternError> {
    let info = PatternInfo::parse(pattern, symbols)?;
    debug!(pattern, positive = ?info.positive, negative = ?info.negative, "compiled pattern affixes");

    let mut parser = NumberParser::new();
    parser.add_matcher(info.positive.to_matcher(symbols));
    parser.add_matcher(info.negative.to_matcher(symbols));
    parser.add_matcher(DecimalMatcher::new(symbols));
    parser.add_matcher(WhitespaceMatcher::new());
    parser.add_matcher(SymbolMatcher::minus_sign(symbols));
    parser.add_matcher(ScientificMatcher::new(symbols));
    parser.add_matcher(CurrencyMatcher::from_symbols(symbols));
    parser.set_comparator(comparators::by_chars_consumed());
    parser.freeze();
    Ok(parser)
}
