//! Statement execution.

use std::io::Write;
use std::rc::Rc;

use super::{Interpreter, Signal};
use crate::ast::Stmt;
use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::value::{self, Function, Value};

impl Interpreter {
    pub(super) fn execute(&mut self, stmt: &Stmt) -> Result<Signal, RuntimeError> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(Signal::Normal)
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                let _ = writeln!(self.output, "{}", value::stringify(&value));
                Ok(Signal::Normal)
            }
            Stmt::VariableDecl { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::None,
                };
                self.environment.define(name.lexeme.clone(), value);
                Ok(Signal::Normal)
            }
            Stmt::Block(statements) => {
                let scope = Environment::with_enclosing(&self.environment);
                self.execute_block(statements, scope)
            }
            Stmt::If { cond, then_branch, else_branch } => {
                if value::is_truthy(&self.evaluate(cond)?) {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Signal::Normal)
                }
            }
            Stmt::While { cond, body } => {
                while value::is_truthy(&self.evaluate(cond)?) {
                    match self.execute(body)? {
                        Signal::Normal => {}
                        signal @ Signal::Return(..) => return Ok(signal),
                    }
                }
                Ok(Signal::Normal)
            }
            Stmt::Function { name, params, body } => {
                let function = Function::new(
                    name.lexeme.clone(),
                    params.clone(),
                    Rc::new(body.clone()),
                    self.environment.clone(),
                );
                self.environment.define(name.lexeme.clone(), Value::Callable(Rc::new(function)));
                Ok(Signal::Normal)
            }
            Stmt::Return { keyword, value } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::None,
                };
                Ok(Signal::Return(keyword.clone(), value))
            }
        }
    }
}
