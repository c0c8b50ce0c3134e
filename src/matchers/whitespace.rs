use crate::{NumberParseMatcher, ParsedNumber, StringSegment};

/// Consumes a run of Unicode whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceMatcher;

impl WhitespaceMatcher {
    pub fn new() -> Self {
        WhitespaceMatcher
    }
}

impl NumberParseMatcher for WhitespaceMatcher {
    fn try_match(&self, segment: &mut StringSegment<'_>, _result: &mut ParsedNumber) -> bool {
        let run: usize = segment.as_str().chars().take_while(|c| c.is_whitespace()).map(char::len_utf8).sum();
        segment.adjust_offset(run);
        // Only a window that was all whitespace could continue.
        segment.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumes_leading_whitespace_only() {
        let cases: Vec<(&str, usize, bool)> =
            vec![("  -42", 2, false), ("\t\u{00A0}x", 3, false), ("   ", 3, true), ("x ", 0, false)];

        for (input, consumed, maybe_more) in cases {
            let mut seg = StringSegment::new(input);
            let mut result = ParsedNumber::new();
            let more = WhitespaceMatcher::new().try_match(&mut seg, &mut result);
            assert_eq!(seg.offset(), consumed, "consumed for {input:?}");
            assert_eq!(more, maybe_more, "maybe_more for {input:?}");
            assert_eq!(result, ParsedNumber::new());
        }
    }
}
