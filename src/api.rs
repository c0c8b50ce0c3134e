use crate::comparators;
use crate::engine::{NumberParser, ParseMetrics};
use crate::matchers::{
    CurrencyMatcher, DecimalMatcher, DecimalSymbols, ScientificMatcher, SymbolMatcher, WhitespaceMatcher,
};
use crate::{ParseStrategy, ParsedNumber};
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_PARSER: Lazy<NumberParser> = Lazy::new(|| {
    let symbols = DecimalSymbols::english();
    parser! {
        matchers: [
            WhitespaceMatcher::new(),
            SymbolMatcher::minus_sign(&symbols),
            SymbolMatcher::plus_sign(&symbols),
            CurrencyMatcher::from_symbols(&symbols),
            DecimalMatcher::new(&symbols),
            ScientificMatcher::new(&symbols),
            SymbolMatcher::percent(&symbols),
            SymbolMatcher::permille(&symbols),
        ],
        comparator: comparators::by_chars_consumed(),
    }
});

/// Options that affect parsing.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Strategy used by the default parser.
    pub strategy: ParseStrategy,
}

/// Result from [`parse`] and [`parse_with`].
#[derive(Debug, Clone)]
pub struct ParseOutput {
    /// The parsed input text.
    pub text: String,
    /// Everything the parser recognized.
    pub number: ParsedNumber,
    /// Numeric value with sign and percent/permille applied, if a number was seen.
    pub value: Option<f64>,
    /// Whether the whole input was consumed.
    pub complete: bool,
    /// Time spent parsing.
    pub elapsed: Duration,
}

/// Result from [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseOutputVerbose {
    pub output: ParseOutput,
    pub metrics: ParseMetrics,
}

/// Parse `text` with the default en-US parser and default [`Options`].
///
/// # Example
/// ```
/// use numparse::parse;
///
/// let out = parse("  -42");
/// assert_eq!(out.value, Some(-42.0));
/// assert!(out.complete);
/// ```
pub fn parse(text: &str) -> ParseOutput {
    parse_with(text, &Options::default())
}

/// Parse `text` with the default en-US parser and the provided `options`.
pub fn parse_with(text: &str, options: &Options) -> ParseOutput {
    parse_verbose_with(text, options).output
}

/// Parse `text` and also return the engine's run metrics.
pub fn parse_verbose_with(text: &str, options: &Options) -> ParseOutputVerbose {
    run(&DEFAULT_PARSER, text, options.strategy)
}

/// Run any frozen parser and package the result like the default API does.
fn run(parser: &NumberParser, text: &str, strategy: ParseStrategy) -> ParseOutputVerbose {
    let mut number = ParsedNumber::new();
    let metrics = parser.parse_with_metrics(text, strategy, &mut number);

    let output = ParseOutput {
        text: text.to_string(),
        value: number.to_f64(),
        complete: number.chars_consumed == text.len(),
        elapsed: metrics.total,
        number,
    };
    ParseOutputVerbose { output, metrics }
}
