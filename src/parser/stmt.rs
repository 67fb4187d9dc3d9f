//! Statement grammar: declarations, control flow, and `for`-loop desugaring.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, Stmt};
use crate::token::TokenKind;
use crate::value::Value;

const MAX_PARAMS: usize = 255;

impl Parser {
    pub(super) fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.match_any(&[TokenKind::Function]) {
            self.function_decl()
        } else if self.match_any(&[TokenKind::Variable]) {
            self.var_decl()
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => Some(stmt),
            Err(_) => {
                self.synchronize();
                None
            }
        }
    }

    fn function_decl(&mut self) -> Result<Stmt, ParseError> {
        let name = self.consume(TokenKind::Identifier, "expected function name")?.clone();
        self.consume(TokenKind::LeftBracket, "expected '(' after function name")?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RightBracket) {
            loop {
                if params.len() >= MAX_PARAMS {
                    self.diagnostics.borrow_mut().error_at(self.peek(), "can't have more than 255 parameters");
                }
                params.push(self.consume(TokenKind::Identifier, "expected parameter name")?.clone());
                if !self.match_any(&[TokenKind::Comma]) {
                    break;
                }
            }
        }
        self.consume(TokenKind::RightBracket, "expected ')' after parameters")?;
        self.consume(TokenKind::LeftBrace, "expected '{' before function body")?;
        let body = self.block()?;

        Ok(Stmt::Function { name, params, body })
    }

    fn var_decl(&mut self) -> Result<Stmt, ParseError> {
        let name = self.consume(TokenKind::Identifier, "expected variable name")?.clone();
        let initializer =
            if self.match_any(&[TokenKind::Equal]) { Some(self.expression()?) } else { None };
        self.consume(TokenKind::Semicolon, "expected ';' after variable declaration")?;
        Ok(Stmt::VariableDecl { name, initializer })
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.match_any(&[TokenKind::If]) {
            return self.if_stmt();
        }
        if self.match_any(&[TokenKind::While]) {
            return self.while_stmt();
        }
        if self.match_any(&[TokenKind::For]) {
            return self.for_stmt();
        }
        if self.match_any(&[TokenKind::Print]) {
            return self.print_stmt();
        }
        if self.match_any(&[TokenKind::Return]) {
            return self.return_stmt();
        }
        if self.match_any(&[TokenKind::LeftBrace]) {
            return Ok(Stmt::Block(self.block()?));
        }
        self.expr_stmt()
    }

    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                stmts.push(stmt);
            }
        }
        self.consume(TokenKind::RightBrace, "expected '}' after block")?;
        Ok(stmts)
    }

    fn if_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LeftBracket, "expected '(' after 'if'")?;
        let cond = self.expression()?;
        self.consume(TokenKind::RightBracket, "expected ')' after if condition")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch =
            if self.match_any(&[TokenKind::Else]) { Some(Box::new(self.statement()?)) } else { None };

        Ok(Stmt::If { cond, then_branch, else_branch })
    }

    fn while_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LeftBracket, "expected '(' after 'while'")?;
        let cond = self.expression()?;
        self.consume(TokenKind::RightBracket, "expected ')' after while condition")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::While { cond, body })
    }

    /// Desugars into `Block(init, While(cond, Block(body, ExprStmt(incr))))`.
    /// `cond` defaults to literal `true` when the loop omits it.
    fn for_stmt(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LeftBracket, "expected '(' after 'for'")?;

        let initializer = if self.match_any(&[TokenKind::Semicolon]) {
            None
        } else if self.match_any(&[TokenKind::Variable]) {
            Some(self.var_decl()?)
        } else {
            Some(self.expr_stmt()?)
        };

        let condition = if !self.check(TokenKind::Semicolon) {
            self.expression()?
        } else {
            Expr::Literal { value: Value::Boolean(true) }
        };
        self.consume(TokenKind::Semicolon, "expected ';' after loop condition")?;

        let increment =
            if !self.check(TokenKind::RightBracket) { Some(self.expression()?) } else { None };
        self.consume(TokenKind::RightBracket, "expected ')' after for clauses")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        body = Stmt::While { cond: condition, body: Box::new(body) };

        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        Ok(body)
    }

    fn print_stmt(&mut self) -> Result<Stmt, ParseError> {
        let value = self.expression()?;
        self.consume(TokenKind::Semicolon, "expected ';' after value")?;
        Ok(Stmt::Print(value))
    }

    fn return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.previous().clone();
        let value = if !self.check(TokenKind::Semicolon) { Some(self.expression()?) } else { None };
        self.consume(TokenKind::Semicolon, "expected ';' after return value")?;
        Ok(Stmt::Return { keyword, value })
    }

    fn expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.consume(TokenKind::Semicolon, "expected ';' after expression")?;
        Ok(Stmt::Expression(expr))
    }
}
