/// Byte-level reader over the source string.
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// Current byte position in the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// Peek one byte past the current one.
    pub fn peek_next(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos + 1).copied()
    }

    pub fn advance(&mut self) -> Option<u8> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    /// Advance while `pred` holds for the current byte.
    pub fn advance_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// The source from `start` to the current position. Empty if the range
    /// does not fall on character boundaries.
    pub fn slice_from(&self, start: usize) -> &'src str {
        self.source.get(start..self.pos).unwrap_or_default()
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}
