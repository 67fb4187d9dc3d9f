//! Runtime fault type.
//!
//! A [`RuntimeError`] is thrown by the evaluator (via `?`, never a native
//! panic) and caught exactly once, at the top of `Interpreter::interpret`.
//! It carries the offending [`Token`] so the diagnostic sink can render the
//! `(:LINE) Runtime error -> MESSAGE` line, and a [`RuntimeErrorKind`] so
//! tests can assert on the fault category without string-matching prose.

use crate::token::Token;

/// The closed set of runtime fault categories (see the error handling design).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    UndefinedVariable,
    UndefinedAssignmentTarget,
    OperandMustBeNumber,
    OperandsMustBeNumbers,
    OperandsMustBeNumbersOrStrings,
    NotCallable,
    ArityMismatch,
    ReturnOutsideFunction,
}

/// A typed runtime fault, propagated with `?` rather than a panic.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub token: Token,
    pub message: String,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, token: Token, message: impl Into<String>) -> Self {
        RuntimeError {
            kind,
            token,
            message: message.into(),
        }
    }

    pub fn undefined_variable(token: Token) -> Self {
        let message = format!("undefined variable '{}'", token.lexeme);
        RuntimeError::new(RuntimeErrorKind::UndefinedVariable, token, message)
    }

    pub fn undefined_assignment_target(token: Token) -> Self {
        let message = format!("undefined variable '{}'", token.lexeme);
        RuntimeError::new(RuntimeErrorKind::UndefinedAssignmentTarget, token, message)
    }

    pub fn operand_must_be_number(token: Token) -> Self {
        RuntimeError::new(RuntimeErrorKind::OperandMustBeNumber, token, "operand must be a number")
    }

    pub fn operands_must_be_numbers(token: Token) -> Self {
        RuntimeError::new(RuntimeErrorKind::OperandsMustBeNumbers, token, "operands must be numbers")
    }

    pub fn operands_must_be_numbers_or_strings(token: Token) -> Self {
        RuntimeError::new(
            RuntimeErrorKind::OperandsMustBeNumbersOrStrings,
            token,
            "operands must be two numbers or two strings",
        )
    }

    pub fn not_callable(token: Token) -> Self {
        RuntimeError::new(RuntimeErrorKind::NotCallable, token, "can only call functions and classes")
    }

    pub fn arity_mismatch(token: Token, expected: usize, got: usize) -> Self {
        let message = format!("expected {} arguments but got {}", expected, got);
        RuntimeError::new(RuntimeErrorKind::ArityMismatch, token, message)
    }

    pub fn return_outside_function(token: Token) -> Self {
        RuntimeError::new(RuntimeErrorKind::ReturnOutsideFunction, token, "cannot return from outside a function")
    }
}
