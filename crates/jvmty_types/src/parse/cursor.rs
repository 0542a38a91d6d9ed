//! Byte cursor over the text being parsed.
//!
//! Every structural character of the encoding is ASCII, so the cursor walks
//! bytes. Names may contain any UTF-8; they are only ever sliced at ASCII
//! delimiters, which are always char boundaries.

/// Returned by [`Cursor::current`] past the end of input.
pub(crate) const EOF: u8 = 0;

pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    mark: usize,
}

impl<'a> Cursor<'a> {
    /// `from` must be a char boundary within `text` (or its end).
    pub(crate) fn new(text: &'a str, from: usize) -> Self {
        Self {
            text,
            pos: from,
            mark: from,
        }
    }

    #[inline]
    pub(crate) fn text(&self) -> &'a str {
        self.text
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// The current byte, or [`EOF`] at the end.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.text.as_bytes().get(self.pos).copied().unwrap_or(EOF)
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Consume `byte` if it is next.
    #[inline]
    pub(crate) fn eat(&mut self, byte: u8) -> bool {
        if !self.is_eof() && self.current() == byte {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    pub(crate) fn mark(&mut self) {
        self.mark = self.pos;
    }

    #[inline]
    pub(crate) fn mark_pos(&self) -> usize {
        self.mark
    }

    /// Text between the mark and the current position.
    pub(crate) fn from_mark(&self) -> &'a str {
        self.text.get(self.mark..self.pos).unwrap_or("")
    }

    /// Advance until one of `stops` or the end, returning the text skipped.
    ///
    /// `stops` must be ASCII.
    pub(crate) fn take_until(&mut self, stops: &[u8]) -> &'a str {
        self.mark();
        let rest = &self.text.as_bytes()[self.pos..];
        let len = rest
            .iter()
            .position(|b| stops.contains(b))
            .unwrap_or(rest.len());
        self.pos += len;
        self.from_mark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn current_is_eof_past_end() {
        let mut cursor = Cursor::new("I", 0);
        assert_eq!(cursor.current(), b'I');
        cursor.advance();
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), EOF);
        cursor.advance();
        assert_eq!(cursor.pos(), 1);
    }

    #[test]
    fn take_until_stops_at_delimiter() {
        let mut cursor = Cursor::new("Ljava/util/List<TT;>;", 1);
        assert_eq!(cursor.take_until(b"<.;"), "java/util/List");
        assert_eq!(cursor.current(), b'<');
        assert_eq!(cursor.mark_pos(), 1);
    }

    #[test]
    fn take_until_runs_to_end_without_delimiter() {
        let mut cursor = Cursor::new("Lünïcode", 1);
        assert_eq!(cursor.take_until(b";"), "ünïcode");
        assert!(cursor.is_eof());
    }

    #[test]
    fn eat_only_matching_byte() {
        let mut cursor = Cursor::new("()V", 0);
        assert!(!cursor.eat(b')'));
        assert!(cursor.eat(b'('));
        assert!(cursor.eat(b')'));
        assert_eq!(cursor.current(), b'V');
    }
}
