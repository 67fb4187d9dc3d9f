//! Lexical scope chain.
//!
//! Each [`Environment`] wraps a `HashMap` plus an optional pointer to its
//! enclosing scope. A function captures the `Environment` live at its
//! declaration site by cloning the handle (cheap — it's a reference-counted
//! pointer), which is what gives closures their captured-by-reference
//! behaviour: later mutations of an outer variable are visible inside the
//! closure.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::RuntimeError;
use crate::token::Token;
use crate::value::Value;

#[derive(Debug)]
struct Scope {
    values: HashMap<String, Value>,
    enclosing: Option<Environment>,
}

/// A handle onto one link of the scope chain. Cheap to clone; clones share
/// the same underlying scope.
#[derive(Debug, Clone)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Creates a new top-level scope with no enclosing parent.
    pub fn global() -> Self {
        Environment(Rc::new(RefCell::new(Scope {
            values: HashMap::new(),
            enclosing: None,
        })))
    }

    /// Creates a new scope nested directly inside `enclosing`.
    pub fn with_enclosing(enclosing: &Environment) -> Self {
        tracing::trace!("push scope");
        Environment(Rc::new(RefCell::new(Scope {
            values: HashMap::new(),
            enclosing: Some(enclosing.clone()),
        })))
    }

    /// Binds `name` in this scope, shadowing any binding of the same name
    /// in an enclosing scope. Re-declaring a name in the same scope simply
    /// overwrites it.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().values.insert(name.into(), value);
    }

    /// Walks the scope chain outward looking for `name`, returning its
    /// current value. Errors if no scope in the chain defines it.
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        let scope = self.0.borrow();
        if let Some(value) = scope.values.get(&name.lexeme) {
            return Ok(value.clone());
        }
        match &scope.enclosing {
            Some(enclosing) => enclosing.get(name),
            None => Err(RuntimeError::undefined_variable(name.clone())),
        }
    }

    /// Walks the scope chain outward looking for an existing binding of
    /// `name` and overwrites it in place. Unlike [`Environment::define`],
    /// assignment never creates a new binding.
    pub fn assign(&self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        let mut scope = self.0.borrow_mut();
        if scope.values.contains_key(&name.lexeme) {
            scope.values.insert(name.lexeme.clone(), value);
            return Ok(());
        }
        match &scope.enclosing {
            Some(enclosing) => enclosing.assign(name, value),
            None => Err(RuntimeError::undefined_assignment_target(name.clone())),
        }
    }
}
