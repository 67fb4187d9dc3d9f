//! Byte-level cursor movement for the scanner.

use super::Lexer;

impl<'a> Lexer<'a> {
    pub(super) fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Consumes and returns the current byte.
    ///
    /// # Panics
    /// Panics if called at end of input; callers must check [`Lexer::is_at_end`] first.
    pub(super) fn advance(&mut self) -> u8 {
        let byte = self.source[self.current];
        self.current += 1;
        byte
    }

    /// Consumes the current byte if it equals `expected`.
    pub(super) fn match_byte(&mut self, expected: u8) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    /// Returns the current byte without consuming it, or `0` at end of input.
    pub(super) fn peek(&self) -> u8 {
        if self.is_at_end() {
            0
        } else {
            self.source[self.current]
        }
    }

    /// Returns the byte one past the current one, or `0` past end of input.
    pub(super) fn peek_next(&self) -> u8 {
        if self.current + 1 >= self.source.len() {
            0
        } else {
            self.source[self.current + 1]
        }
    }

    /// The exact source slice from `start` to `current`, as a `&str`.
    ///
    /// Valid because every token production rule only advances on ASCII
    /// bytes or within a string literal whose boundaries are themselves
    /// ASCII quote characters.
    pub(super) fn current_lexeme(&self) -> &'a str {
        std::str::from_utf8(&self.source[self.start..self.current])
            .expect("token lexemes are always valid UTF-8 slices of the source")
    }
}
