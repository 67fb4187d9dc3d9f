//! Expression evaluation.

use std::rc::Rc;

use super::Interpreter;
use crate::ast::Expr;
use crate::error::RuntimeError;
use crate::token::{Token, TokenKind};
use crate::value::{self, Value};

fn as_number(value: &Value, token: &Token) -> Result<f64, RuntimeError> {
    match value {
        Value::Number(n) => Ok(*n),
        _ => Err(RuntimeError::operand_must_be_number(token.clone())),
    }
}

/// Both operands of a numeric binary operator must be numbers; unlike
/// [`as_number`] (unary), the error names both operands.
fn numeric_operands(left: &Value, right: &Value, token: &Token) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::operands_must_be_numbers(token.clone())),
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    a == b
}

impl Interpreter {
    pub(super) fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal { value } => Ok(value.clone()),
            Expr::Grouping { inner } => self.evaluate(inner),
            Expr::Unary { op, right } => self.evaluate_unary(op, right),
            Expr::Binary { left, op, right } => self.evaluate_binary(left, op, right),
            Expr::Variable { name } => self.environment.get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment.assign(name, value.clone())?;
                Ok(value)
            }
            Expr::Logical { left, op, right } => self.evaluate_logical(left, op, right),
            Expr::Call { callee, paren, arguments } => self.evaluate_call(callee, paren, arguments),
        }
    }

    fn evaluate_unary(&mut self, op: &Token, right: &Expr) -> Result<Value, RuntimeError> {
        let right = self.evaluate(right)?;
        match op.kind {
            TokenKind::Bang => Ok(Value::Boolean(!value::is_truthy(&right))),
            TokenKind::Minus => Ok(Value::Number(-as_number(&right, op)?)),
            TokenKind::Increment => Ok(Value::Number(as_number(&right, op)? + 1.0)),
            TokenKind::Decrement => Ok(Value::Number(as_number(&right, op)? - 1.0)),
            _ => unreachable!("parser never produces a unary op outside {{!,-,--,++}}"),
        }
    }

    fn evaluate_binary(&mut self, left: &Expr, op: &Token, right: &Expr) -> Result<Value, RuntimeError> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;

        match op.kind {
            TokenKind::Minus => {
                let (a, b) = numeric_operands(&left, &right, op)?;
                Ok(Value::Number(a - b))
            }
            TokenKind::Slash => {
                let (a, b) = numeric_operands(&left, &right, op)?;
                Ok(Value::Number(a / b))
            }
            TokenKind::Asterisk => {
                let (a, b) = numeric_operands(&left, &right, op)?;
                Ok(Value::Number(a * b))
            }
            TokenKind::Percent => {
                let (a, b) = numeric_operands(&left, &right, op)?;
                Ok(Value::Number(a % b))
            }
            TokenKind::Caret => {
                let (a, b) = numeric_operands(&left, &right, op)?;
                Ok(Value::Number(a.powf(b)))
            }
            TokenKind::Greater => {
                let (a, b) = numeric_operands(&left, &right, op)?;
                Ok(Value::Boolean(a > b))
            }
            TokenKind::GreaterEqual => {
                let (a, b) = numeric_operands(&left, &right, op)?;
                Ok(Value::Boolean(a >= b))
            }
            TokenKind::Less => {
                let (a, b) = numeric_operands(&left, &right, op)?;
                Ok(Value::Boolean(a < b))
            }
            TokenKind::LessEqual => {
                let (a, b) = numeric_operands(&left, &right, op)?;
                Ok(Value::Boolean(a <= b))
            }
            TokenKind::EqualEqual => Ok(Value::Boolean(values_equal(&left, &right))),
            TokenKind::BangEqual => Ok(Value::Boolean(!values_equal(&left, &right))),
            TokenKind::Plus => match (&left, &right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
                _ => Err(RuntimeError::operands_must_be_numbers_or_strings(op.clone())),
            },
            _ => unreachable!("parser never produces a binary op outside the closed operator set"),
        }
    }

    fn evaluate_logical(&mut self, left: &Expr, op: &Token, right: &Expr) -> Result<Value, RuntimeError> {
        let left = self.evaluate(left)?;
        match op.kind {
            TokenKind::Or if value::is_truthy(&left) => Ok(left),
            TokenKind::And if !value::is_truthy(&left) => Ok(left),
            _ => self.evaluate(right),
        }
    }

    fn evaluate_call(
        &mut self,
        callee: &Expr,
        paren: &Token,
        arguments: &[Expr],
    ) -> Result<Value, RuntimeError> {
        let callee = self.evaluate(callee)?;

        let mut args = Vec::with_capacity(arguments.len());
        for arg in arguments {
            args.push(self.evaluate(arg)?);
        }

        let Value::Callable(callable) = callee else {
            return Err(RuntimeError::not_callable(paren.clone()));
        };

        if args.len() != callable.arity() {
            return Err(RuntimeError::arity_mismatch(paren.clone(), callable.arity(), args.len()));
        }

        let callable: Rc<dyn value::Callable> = callable;
        callable.call(self, args)
    }
}
