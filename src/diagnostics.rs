//! The diagnostic sink shared by every pipeline stage.
//!
//! A single [`Diagnostics`] instance is created once per run (REPL line or
//! file) and passed by reference — wrapped in `Rc<RefCell<_>>` by callers —
//! to the scanner, parser, and evaluator. It accumulates every reported
//! error, never dropping one, and exposes two sticky flags mirroring the
//! original implementation: `compile_error` (set by the scanner or parser)
//! and `runtime_error` (set by the evaluator). The REPL clears the former
//! between lines but preserves the latter, matching the reference driver.

use colored::Colorize;

use crate::token::Token;

/// Accumulates compile- and runtime-time diagnostics for one interpreter run.
pub struct Diagnostics {
    had_error: bool,
    had_runtime_error: bool,
    use_color: bool,
    lines: Vec<String>,
}

impl Diagnostics {
    /// Creates an empty sink. `use_color` toggles ANSI colouring of the
    /// lines written to stderr; the accumulated plain-text lines (see
    /// [`Diagnostics::lines`]) are unaffected either way.
    pub fn new(use_color: bool) -> Self {
        Diagnostics {
            had_error: false,
            had_runtime_error: false,
            use_color,
            lines: Vec::new(),
        }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clears the compile-error flag. Called by the REPL between lines;
    /// the runtime-error flag is intentionally left untouched.
    pub fn reset_compile_error(&mut self) {
        self.had_error = false;
    }

    /// The plain-text (uncoloured) rendering of every diagnostic reported
    /// so far, in report order. Useful for assertions in tests.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Reports a compile error located at a specific token.
    ///
    /// `WHERE` is derived from the token: `at end` for `EOF`, `at 'LEXEME'`
    /// otherwise (see [`Token::where_description`]).
    pub fn error_at(&mut self, token: &Token, message: &str) {
        self.report(token.line, &token.where_description(), message);
    }

    /// Reports a compile error with no associated token (scanner errors
    /// that occur before a token is formed, e.g. an unrecognised byte).
    pub fn error_at_line(&mut self, line: usize, message: &str) {
        self.report(line, "", message);
    }

    /// Reports a runtime fault. Sets `had_runtime_error`, never `had_error`.
    pub fn runtime_error(&mut self, token: &Token, message: &str) {
        let line = format!("(:{}) Runtime error -> {}", token.line, message);
        self.emit(line, true);
    }

    fn report(&mut self, line: usize, where_desc: &str, message: &str) {
        let text = format!("(:{}) Error at {} -> {}", line, where_desc, message);
        self.emit(text, false);
    }

    fn emit(&mut self, plain: String, runtime: bool) {
        if runtime {
            self.had_runtime_error = true;
        } else {
            self.had_error = true;
        }

        if self.use_color {
            eprintln!("{}", plain.red());
        } else {
            eprintln!("{}", plain);
        }

        self.lines.push(plain);
    }
}
