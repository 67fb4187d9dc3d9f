//! Token production rules for the scanner.

use super::Lexer;
use crate::token::{Literal, Token, TokenKind};

fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_alphanumeric(byte: u8) -> bool {
    is_alpha(byte) || is_digit(byte)
}

impl<'a> Lexer<'a> {
    pub(super) fn scan_token(&mut self) {
        let byte = self.advance();

        match byte {
            b'(' => self.add_token(TokenKind::LeftBracket),
            b')' => self.add_token(TokenKind::RightBracket),
            b'{' => self.add_token(TokenKind::LeftBrace),
            b'}' => self.add_token(TokenKind::RightBrace),
            b',' => self.add_token(TokenKind::Comma),
            b'.' => self.add_token(TokenKind::Dot),
            b'-' => {
                let kind = if self.match_byte(b'-') {
                    TokenKind::Decrement
                } else {
                    TokenKind::Minus
                };
                self.add_token(kind);
            }
            b'+' => {
                let kind = if self.match_byte(b'+') {
                    TokenKind::Increment
                } else {
                    TokenKind::Plus
                };
                self.add_token(kind);
            }
            b'^' => self.add_token(TokenKind::Caret),
            b';' => self.add_token(TokenKind::Semicolon),
            b'*' => self.add_token(TokenKind::Asterisk),
            b'&' => {
                if self.match_byte(b'&') {
                    self.add_token(TokenKind::And);
                } else {
                    self.error("unexpected character found");
                }
            }
            b'|' => {
                if self.match_byte(b'|') {
                    self.add_token(TokenKind::Or);
                } else {
                    self.error("unexpected character found");
                }
            }
            b'!' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            b'=' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            b'<' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            b'>' => {
                let kind = if self.match_byte(b'=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            b'/' => self.add_token(TokenKind::Slash),
            b'%' => self.add_token(TokenKind::Percent),
            b'#' => {
                while self.peek() != b'\n' && !self.is_at_end() {
                    self.advance();
                }
            }
            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,
            b'"' => self.string(),
            _ => {
                if is_digit(byte) {
                    self.number();
                } else if is_alpha(byte) {
                    self.identifier();
                } else {
                    self.error("unexpected character found");
                }
            }
        }
    }

    fn identifier(&mut self) {
        while is_alphanumeric(self.peek()) {
            self.advance();
        }

        let text = self.current_lexeme();
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    fn number(&mut self) {
        while is_digit(self.peek()) {
            self.advance();
        }

        if self.peek() == b'.' && is_digit(self.peek_next()) {
            self.advance();
            while is_digit(self.peek()) {
                self.advance();
            }
        }

        match self.current_lexeme().parse::<f64>() {
            Ok(value) => self.add_token_literal(TokenKind::Number, Literal::Number(value)),
            Err(_) => self.error("scanner has an issue parsing a number"),
        }
    }

    fn string(&mut self) {
        while self.peek() != b'"' && !self.is_at_end() {
            if self.peek() == b'\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error("unterminated string");
            return;
        }

        self.advance(); // closing quote

        let value = self.current_lexeme()[1..self.current_lexeme().len() - 1].to_string();
        self.add_token_literal(TokenKind::String, Literal::Str(value));
    }

    fn error(&mut self, message: &str) {
        self.diagnostics.borrow_mut().error_at_line(self.line, message);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_token_literal(kind, Literal::None);
    }

    fn add_token_literal(&mut self, kind: TokenKind, literal: Literal) {
        let lexeme = self.current_lexeme().to_string();
        self.tokens.push(Token::new(kind, lexeme, literal, self.line));
    }
}
