//! Tree-walking evaluator.
//!
//! # Pipeline Position
//!
//! ```text
//! Source → Lexer → Parser → Interpreter → side effects (print) / diagnostics
//! ```
//!
//! The evaluator walks the statement list produced by [`crate::parser`]
//! directly — no separate resolution pass, no bytecode. Variable references
//! resolve dynamically, by walking the live [`crate::environment::Environment`]
//! chain at the moment they're evaluated.
//!
//! # Non-local return
//!
//! `return` does not unwind via a native panic. [`Signal`] is an explicit,
//! typed control value threaded back up through every statement-executing
//! function with `?`-propagation of the surrounding `Result`; a `Block`
//! simply checks whether its last executed statement produced
//! [`Signal::Return`] and, if so, stops executing the remaining statements
//! and forwards it upward. This keeps environment restoration (the `Drop`-free
//! "pop on every exit path" rule) a matter of ordinary control flow rather
//! than a `catch`.
//!
//! # Module Structure
//!
//! - `expr` — expression evaluation
//! - `stmt` — statement execution, block scoping, `return` propagation
//! - `builtins` — the global built-in functions: `clock`, `milliseconds`, `stringify`, `type`
//! - `tests` — unit tests (test-only)

mod builtins;
mod expr;
mod stmt;

#[cfg(test)]
mod tests;

use std::io::Write;

use crate::ast::Stmt;
use crate::diagnostics::Diagnostics;
use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::token::Token;
use crate::value::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// The outcome of executing one statement: either control falls through
/// normally, or a `return` is propagating out of the current function call.
/// The `Return` variant carries the `return` keyword's token along with the
/// value, so a return that escapes every function call can still be reported
/// against the line it occurred on.
#[derive(Debug)]
pub enum Signal {
    Normal,
    Return(Token, Value),
}

pub struct Interpreter {
    globals: Environment,
    environment: Environment,
    diagnostics: Rc<RefCell<Diagnostics>>,
    output: Box<dyn Write>,
}

impl Interpreter {
    pub fn new(diagnostics: Rc<RefCell<Diagnostics>>) -> Self {
        Self::with_output(diagnostics, Box::new(std::io::stdout()))
    }

    /// Builds an interpreter that writes `print` output to `output` instead
    /// of stdout, primarily so tests can capture it.
    pub fn with_output(diagnostics: Rc<RefCell<Diagnostics>>, output: Box<dyn Write>) -> Self {
        let globals = Environment::global();
        builtins::install(&globals);
        Interpreter { environment: globals.clone(), globals, diagnostics, output }
    }

    /// Executes a top-level statement list, catching exactly the
    /// [`RuntimeError`] kind: reports it to the diagnostic sink, sets the
    /// sticky runtime-error flag, and returns. A `Signal::Return` that
    /// escapes every function call (a `return` outside any function) is a
    /// runtime fault too, reported against the `return` keyword's line.
    pub fn interpret(&mut self, statements: &[Stmt]) {
        for statement in statements {
            match self.execute(statement) {
                Ok(Signal::Normal) => {}
                Ok(Signal::Return(keyword, _)) => {
                    let err = RuntimeError::return_outside_function(keyword);
                    self.diagnostics.borrow_mut().runtime_error(&err.token, &err.message);
                    return;
                }
                Err(err) => {
                    self.diagnostics.borrow_mut().runtime_error(&err.token, &err.message);
                    return;
                }
            }
        }
    }

    pub(super) fn execute_block(
        &mut self,
        statements: &[Stmt],
        environment: Environment,
    ) -> Result<Signal, RuntimeError> {
        let previous = std::mem::replace(&mut self.environment, environment);
        let result = self.execute_statements(statements);
        self.environment = previous;
        tracing::trace!("pop scope");
        result
    }

    fn execute_statements(&mut self, statements: &[Stmt]) -> Result<Signal, RuntimeError> {
        for statement in statements {
            match self.execute(statement)? {
                Signal::Normal => {}
                signal @ Signal::Return(..) => return Ok(signal),
            }
        }
        Ok(Signal::Normal)
    }
}
