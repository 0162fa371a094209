/// A bounds-checked read position over a borrowed byte slice.
///
/// All field decoders advance through a line with a `Cursor`. The end of
/// the slice is the hard bound: [`peek`](Self::peek) returns `None` there
/// and [`advance`](Self::advance) becomes a no-op, so no decoder can step
/// past the line it was given.
///
/// ```text
///   M N O , 1 2 , 3 4 , ...
///           ^ pos         ^ end (buf.len())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// The byte at the current position, or `None` at the end bound.
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Step over the current byte. Does nothing at the end bound.
    pub fn advance(&mut self) {
        if self.pos < self.buf.len() {
            self.pos += 1;
        }
    }

    /// Step over up to `n` bytes, stopping at the end bound.
    pub fn skip(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.buf.len());
    }

    /// Consume the current byte if it equals `expected`.
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// The unread bytes between the current position and the end bound.
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// `true` once every byte up to the end bound has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Offset of the current position from the start of the slice.
    pub fn position(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_and_advance_walk_the_slice() {
        let mut cursor = Cursor::new(b"ab");
        assert_eq!(cursor.peek(), Some(b'a'));
        cursor.advance();
        assert_eq!(cursor.peek(), Some(b'b'));
        cursor.advance();
        assert_eq!(cursor.peek(), None);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn advance_at_end_is_a_no_op() {
        let mut cursor = Cursor::new(b"x");
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), 1);
        assert!(cursor.remaining().is_empty());
    }

    #[test]
    fn empty_slice_starts_at_end() {
        let cursor = Cursor::new(b"");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn skip_clamps_to_bound() {
        let mut cursor = Cursor::new(b"MNO,1");
        cursor.skip(4);
        assert_eq!(cursor.remaining(), b"1");
        cursor.skip(usize::MAX);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn eat_only_consumes_matching_byte() {
        let mut cursor = Cursor::new(b"-5");
        assert!(!cursor.eat(b'+'));
        assert!(cursor.eat(b'-'));
        assert_eq!(cursor.remaining(), b"5");
    }
}
