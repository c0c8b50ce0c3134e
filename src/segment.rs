//! Cursor over the unconsumed part of a parse input.
//!
//! A [`StringSegment`] borrows the original input for the duration of one
//! parse. Matchers look at the *visible* text (from the current offset up to
//! the visible end) and consume a prefix of it by moving the offset forward.
//!
//! ```text
//! input:   "  -42abc"
//!             ^offset=2
//!                 ^end=5 (after with_length(3))
//! visible: "-42"
//! ```
//!
//! All offsets are byte offsets into the original input. Narrowing only ever
//! lands on char boundaries, so the visible text is always valid UTF-8.

#[derive(Debug, Clone)]
pub struct StringSegment<'a> {
    text: &'a str,
    /// Absolute offset of the first unconsumed byte.
    start: usize,
    /// Absolute end of the visible text (exclusive).
    end: usize,
}

impl<'a> StringSegment<'a> {
    pub fn new(text: &'a str) -> Self {
        StringSegment { text, start: 0, end: text.len() }
    }

    /// Number of visible bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Absolute offset into the original input.
    pub fn offset(&self) -> usize {
        self.start
    }

    /// Move the cursor to an absolute offset.
    ///
    /// Intended for restoring an offset observed earlier, or for a matcher to
    /// commit to a position it has already examined.
    pub fn set_offset(&mut self, offset: usize) {
        assert!(
            offset <= self.end && self.text.is_char_boundary(offset),
            "segment offset {offset} outside visible text (end {})",
            self.end
        );
        self.start = offset;
    }

    /// Consume `bytes` of visible text.
    pub fn adjust_offset(&mut self, bytes: usize) {
        self.set_offset(self.start + bytes);
    }

    /// Make only the first `len` bytes of the unconsumed text visible.
    pub fn set_length(&mut self, len: usize) {
        let end = self.start + len;
        assert!(
            end <= self.text.len() && self.text.is_char_boundary(end),
            "segment length {len} does not end on a char boundary"
        );
        self.end = end;
    }

    /// Make the whole unconsumed text visible again.
    pub fn reset_length(&mut self) {
        self.end = self.text.len();
    }

    /// Run `f` with the visible text narrowed to `len` bytes, restoring the
    /// full visible length afterwards.
    pub fn with_length<R>(&mut self, len: usize, f: impl FnOnce(&mut Self) -> R) -> R {
        self.set_length(len);
        let out = f(self);
        self.reset_length();
        out
    }

    /// The visible unconsumed text.
    pub fn as_str(&self) -> &'a str {
        &self.text[self.start..self.end]
    }

    /// First visible char, if any.
    pub fn peek(&self) -> Option<char> {
        self.as_str().chars().next()
    }

    pub fn starts_with(&self, needle: &str) -> bool {
        !needle.is_empty() && self.as_str().starts_with(needle)
    }

    /// Length in bytes of the longest common prefix of the visible text and
    /// `other`, measured on char boundaries.
    pub fn common_prefix_len(&self, other: &str) -> usize {
        self.as_str()
            .char_indices()
            .zip(other.chars())
            .take_while(|((_, a), b)| a == b)
            .map(|((idx, a), _)| idx + a.len_utf8())
            .last()
            .unwrap_or(0)
    }

    /// Whether the whole visible text is a strict prefix of `other`, meaning a
    /// longer window could still complete a match against it.
    pub fn is_strict_prefix_of(&self, other: &str) -> bool {
        let visible = self.as_str();
        visible.len() < other.len() && other.starts_with(visible)
    }

    /// Byte lengths of every visible char-aligned prefix, ascending.
    ///
    /// ```text
    /// visible "a€b" -> [1, 4, 5]
    /// ```
    pub fn char_boundaries(&self) -> Vec<usize> {
        self.as_str().char_indices().map(|(idx, c)| idx + c.len_utf8()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowing_restores_visible_length() {
        let mut seg = StringSegment::new("  -42abc");
        seg.adjust_offset(2);
        assert_eq!(seg.len(), 6);

        let seen = seg.with_length(3, |s| s.as_str().to_string());
        assert_eq!(seen, "-42");
        assert_eq!(seg.len(), 6);
        assert_eq!(seg.as_str(), "-42abc");
    }

    #[test]
    fn consuming_inside_narrowed_window_keeps_offset() {
        let mut seg = StringSegment::new("12345");
        seg.with_length(2, |s| s.adjust_offset(2));
        assert_eq!(seg.offset(), 2);
        assert_eq!(seg.as_str(), "345");
    }

    #[test]
    fn char_boundaries_follow_utf8_widths() {
        let seg = StringSegment::new("a€b");
        assert_eq!(seg.char_boundaries(), vec![1, 4, 5]);
    }

    #[test]
    fn common_prefix_len_stops_at_first_difference() {
        let seg = StringSegment::new("US$5");
        assert_eq!(seg.common_prefix_len("USD"), 2);
        assert_eq!(seg.common_prefix_len("US$"), 3);
        assert_eq!(seg.common_prefix_len("€"), 0);
    }

    #[test]
    fn strict_prefix_detection() {
        let mut seg = StringSegment::new("US");
        assert!(seg.is_strict_prefix_of("USD"));
        assert!(!seg.is_strict_prefix_of("US"));
        seg.set_length(0);
        assert!(seg.is_strict_prefix_of("USD"));
    }

    #[test]
    #[should_panic(expected = "char boundary")]
    fn narrowing_inside_a_char_panics() {
        let mut seg = StringSegment::new("€");
        seg.set_length(1);
    }
}
