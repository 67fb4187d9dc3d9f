//! Token-stream navigation shared by the expression and statement parsers.

use super::Parser;
use super::error::ParseError;
use crate::token::{Token, TokenKind};

impl Parser {
    pub(super) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(super) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    pub(super) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// If the current token matches any of `kinds`, consumes it and returns
    /// true; otherwise leaves the cursor untouched.
    pub(super) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if self.check(*kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    /// Requires the current token to have `kind`, consuming it. On mismatch,
    /// reports `message` at the current token and returns a [`ParseError`]
    /// to unwind with.
    pub(super) fn consume(&mut self, kind: TokenKind, message: &str) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(self.peek().clone(), message))
        }
    }

    /// Reports `message` at `token` to the diagnostic sink and builds the
    /// [`ParseError`] used to unwind to `declaration()`.
    pub(super) fn error(&self, token: Token, message: &str) -> ParseError {
        self.diagnostics.borrow_mut().error_at(&token, message);
        ParseError { token, message: message.to_string() }
    }

    /// Panic-mode recovery: discard tokens until the previous one was `;`
    /// or the current one starts a new statement. Always consumes at least
    /// one token, so the parser can never spin in place.
    pub(super) fn synchronize(&mut self) {
        tracing::trace!(at_line = self.peek().line, "synchronize fired");
        self.advance();
        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }
            match self.peek().kind {
                TokenKind::Class
                | TokenKind::Function
                | TokenKind::Variable
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => {
                    self.advance();
                }
            }
        }
    }
}
