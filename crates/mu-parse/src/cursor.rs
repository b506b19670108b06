//! Byte-offset cursor over unit text.

/// Position in the input. Always sits on a `char` boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Unconsumed text.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Move forward by `bytes`, which must end on a `char` boundary.
    pub fn advance(self, bytes: usize) -> Self {
        debug_assert!(self.text.is_char_boundary(self.pos + bytes));
        Self {
            pos: self.pos + bytes,
            ..self
        }
    }

    /// Skip whitespace; also report whether any was skipped.
    pub fn skip_whitespace(self) -> (Self, bool) {
        let rest = self.rest();
        let skipped = rest.len() - rest.trim_start().len();
        (self.advance(skipped), skipped != 0)
    }

    /// Consume `ch` if it is next.
    pub fn eat(self, ch: char) -> Option<Self> {
        self.rest()
            .starts_with(ch)
            .then(|| self.advance(ch.len_utf8()))
    }

    /// Cursor after an optional `-` and a run of ASCII digits.
    pub fn scan_integer(self) -> Self {
        let rest = self.rest();
        let sign = usize::from(rest.starts_with('-'));
        let digits = rest[sign..]
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        self.advance(sign + digits)
    }

    /// Text between `self` and a later cursor over the same input.
    pub fn slice_to(&self, end: Cursor<'a>) -> &'a str {
        &self.text[self.pos..end.pos]
    }
}
