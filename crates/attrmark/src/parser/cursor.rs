//! Forward-only character cursor.

/// A position in a sequence of Unicode scalar values.
///
/// The cursor only moves forward. [`advance`](Cursor::advance) and the
/// helpers built on it are the only way to change its position.
pub(crate) struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Character under the cursor.
    pub(crate) fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Character after the one under the cursor.
    pub(crate) fn peek(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    /// Moves one character forward. No-op at end of input.
    pub(crate) fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn len(&self) -> usize {
        self.chars.len()
    }

    pub(crate) fn is(&self, c: char) -> bool {
        self.current() == Some(c)
    }

    /// Consumes `c` if it is under the cursor.
    pub(crate) fn eat(&mut self, c: char) -> bool {
        if self.is(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `pred` holds and returns them.
    pub(crate) fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut buf = String::new();
        while let Some(c) = self.current().filter(|&c| pred(c)) {
            buf.push(c);
            self.advance();
        }
        buf
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while self.current().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_stops_at_end() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        cursor.advance();
        assert!(cursor.at_end());
        cursor.advance();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_peek_does_not_move() {
        let cursor = Cursor::new("<b");
        assert_eq!(cursor.current(), Some('<'));
        assert_eq!(cursor.peek(), Some('b'));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_take_while() {
        let mut cursor = Cursor::new("font color");
        assert_eq!(cursor.take_while(|c| !c.is_whitespace()), "font");
        cursor.skip_whitespace();
        assert_eq!(cursor.take_while(|c| c != '='), "color");
        assert!(cursor.at_end());
    }

    #[test]
    fn test_positions_count_scalars() {
        let mut cursor = Cursor::new("é<");
        cursor.advance();
        assert_eq!(cursor.position(), 1);
        assert!(cursor.eat('<'));
        assert_eq!(cursor.len(), 2);
    }
}
