#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a frozen [`NumberParser`](crate::NumberParser) from an ordered list of
/// matchers and an optional comparator.
///
/// ```
/// use numparse::matchers::{DecimalMatcher, WhitespaceMatcher};
/// use numparse::{ParseStrategy, ParsedNumber, comparators};
///
/// let parser = numparse::parser! {
///     matchers: [WhitespaceMatcher::new(), DecimalMatcher::english()],
///     comparator: comparators::by_chars_consumed(),
/// };
/// let mut result = ParsedNumber::new();
/// parser.parse(" 12", ParseStrategy::Greedy, &mut result);
/// assert_eq!(result.chars_consumed, 3);
/// ```
#[macro_export]
macro_rules! parser {
    (
        matchers: [ $($matcher:expr),* $(,)? ]
        $(, comparator: $cmp:expr)?
        $(,)?
    ) => {{
        let mut parser = $crate::NumberParser::new();
        $( parser.add_matcher($matcher); )*
        $( parser.set_comparator($cmp); )?
        parser.freeze();
        parser
    }};
}
