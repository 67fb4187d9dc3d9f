//! A tree-walking interpreter for a small, dynamically typed, C-family
//! scripting language.
//!
//! # Architecture
//!
//! The interpreter is a straight pipeline with no separate resolution or
//! bytecode-compilation pass:
//!
//! 1. **Lexing** ([`lexer`]) — source text to a token stream ([`token`]).
//! 2. **Parsing** ([`parser`]) — tokens to a statement tree ([`ast`]), with
//!    panic-mode recovery from syntax errors.
//! 3. **Evaluation** ([`interpreter`]) — walks the tree directly against a
//!    chain of [`environment`] scopes, producing [`value::Value`]s and
//!    `print` output.
//!
//! Diagnostics from every phase funnel through a single shared
//! [`diagnostics::Diagnostics`] sink so the driver can ask one question —
//! did anything go wrong — regardless of which phase raised it.

pub mod ast;
pub mod diagnostics;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod value;

use std::cell::RefCell;
use std::rc::Rc;

use diagnostics::Diagnostics;
use interpreter::Interpreter;

/// Runs a full lex → parse → evaluate pass over `source`, sharing `sink`
/// across all three phases. Evaluation is skipped if a compile-time error
/// was already recorded, matching the driver's file-running policy.
pub fn run(source: &str, sink: Rc<RefCell<Diagnostics>>) {
    let tokens = tracing::debug_span!("lex")
        .in_scope(|| lexer::Lexer::new(source, sink.clone()).scan_tokens());

    let statements = tracing::debug_span!("parse")
        .in_scope(|| parser::Parser::new(tokens, sink.clone()).parse());

    if sink.borrow().had_error() {
        return;
    }

    let mut interpreter = Interpreter::new(sink.clone());
    tracing::debug_span!("evaluate").in_scope(|| interpreter.interpret(&statements));
}
