//! Expression grammar: precedence climbing from `assignment` down to
//! `primary`, per the grammar table.

use super::Parser;
use super::error::ParseError;
use crate::ast::Expr;
use crate::token::{Literal, TokenKind};
use crate::value::Value;

const MAX_ARGS: usize = 255;

fn literal_value(literal: &Literal) -> Value {
    match literal {
        Literal::None => Value::None,
        Literal::Number(n) => Value::Number(*n),
        Literal::Str(s) => Value::Str(s.clone()),
    }
}

impl Parser {
    pub(super) fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    /// Right-associative: parses the left side as an ordinary expression and,
    /// on seeing `=`, requires it to have been a `Variable` — otherwise the
    /// left side is kept and an "invalid assignment target" diagnostic is
    /// reported at the `=` token without aborting the parse.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.logic_or()?;

        if self.match_any(&[TokenKind::Equal]) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            if let Expr::Variable { name } = expr {
                return Ok(Expr::Assign { name, value: Box::new(value) });
            }

            self.diagnostics.borrow_mut().error_at(&equals, "invalid assignment target");
            return Ok(expr);
        }

        Ok(expr)
    }

    fn logic_or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.logic_and()?;
        while self.match_any(&[TokenKind::Or]) {
            let op = self.previous().clone();
            let right = self.logic_and()?;
            expr = Expr::Logical { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    fn logic_and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;
        while self.match_any(&[TokenKind::And]) {
            let op = self.previous().clone();
            let right = self.equality()?;
            expr = Expr::Logical { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.comparison()?;
        while self.match_any(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let op = self.previous().clone();
            let right = self.comparison()?;
            expr = Expr::Binary { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;
        while self.match_any(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let op = self.previous().clone();
            let right = self.term()?;
            expr = Expr::Binary { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    /// `^` sits here, alongside `-`/`+`, rather than above `factor` — an
    /// observable quirk preserved from the original grammar.
    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;
        while self.match_any(&[TokenKind::Minus, TokenKind::Plus, TokenKind::Caret]) {
            let op = self.previous().clone();
            let right = self.factor()?;
            expr = Expr::Binary { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;
        while self.match_any(&[TokenKind::Slash, TokenKind::Asterisk, TokenKind::Percent]) {
            let op = self.previous().clone();
            let right = self.unary()?;
            expr = Expr::Binary { left: Box::new(expr), op, right: Box::new(right) };
        }
        Ok(expr)
    }

    /// `--`/`++` are prefix, non-mutating operators here, not postfix
    /// increment/decrement.
    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.match_any(&[TokenKind::Bang, TokenKind::Minus, TokenKind::Decrement, TokenKind::Increment]) {
            let op = self.previous().clone();
            let right = self.unary()?;
            return Ok(Expr::Unary { op, right: Box::new(right) });
        }
        self.call()
    }

    fn call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;
        loop {
            if self.match_any(&[TokenKind::LeftBracket]) {
                expr = self.finish_call(expr)?;
            } else {
                break;
            }
        }
        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut arguments = Vec::new();
        if !self.check(TokenKind::RightBracket) {
            loop {
                if arguments.len() >= MAX_ARGS {
                    self.diagnostics
                        .borrow_mut()
                        .error_at(self.peek(), "can't have more than 255 arguments");
                }
                arguments.push(self.expression()?);
                if !self.match_any(&[TokenKind::Comma]) {
                    break;
                }
            }
        }
        let paren = self.consume(TokenKind::RightBracket, "expected ')' after arguments")?.clone();
        Ok(Expr::Call { callee: Box::new(callee), paren, arguments })
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        if self.match_any(&[TokenKind::False]) {
            return Ok(Expr::Literal { value: Value::Boolean(false) });
        }
        if self.match_any(&[TokenKind::True]) {
            return Ok(Expr::Literal { value: Value::Boolean(true) });
        }
        if self.match_any(&[TokenKind::Nil]) {
            return Ok(Expr::Literal { value: Value::None });
        }
        if self.match_any(&[TokenKind::Number, TokenKind::String]) {
            return Ok(Expr::Literal { value: literal_value(&self.previous().literal) });
        }
        if self.match_any(&[TokenKind::Identifier]) {
            return Ok(Expr::Variable { name: self.previous().clone() });
        }
        if self.match_any(&[TokenKind::LeftBracket]) {
            let inner = self.expression()?;
            self.consume(TokenKind::RightBracket, "expected ')' after expression")?;
            return Ok(Expr::Grouping { inner: Box::new(inner) });
        }

        Err(self.error(self.peek().clone(), "expected expression"))
    }
}
