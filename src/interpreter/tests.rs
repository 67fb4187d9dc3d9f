use std::cell::RefCell;
use std::rc::Rc;

use super::Interpreter;
use crate::diagnostics::Diagnostics;
use crate::lexer::Lexer;
use crate::parser::Parser;

/// Runs a full lex → parse → interpret pipeline and returns everything
/// written to `print` plus the diagnostic sink, for end-to-end assertions.
fn run(source: &str) -> (String, Rc<RefCell<Diagnostics>>) {
    let diagnostics = Rc::new(RefCell::new(Diagnostics::new(false)));
    let tokens = Lexer::new(source, diagnostics.clone()).scan_tokens();
    let statements = Parser::new(tokens, diagnostics.clone()).parse();

    let output = Rc::new(RefCell::new(Vec::new()));
    struct SharedWriter(Rc<RefCell<Vec<u8>>>);
    impl std::io::Write for SharedWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut interpreter = Interpreter::with_output(diagnostics.clone(), Box::new(SharedWriter(output.clone())));
    if !diagnostics.borrow().had_error() {
        interpreter.interpret(&statements);
    }

    let text = String::from_utf8(output.borrow().clone()).unwrap();
    (text, diagnostics)
}

#[test]
fn arithmetic_precedence() {
    let (out, _) = run("print 1 + 2 * 3;");
    assert_eq!(out, "7\n");
}

#[test]
fn power_at_term_precedence_quirk() {
    // `^` sits at `term`, `*` at `factor`, so `2 ^ 3 * 2` parses as
    // `2 ^ (3 * 2)`, evaluating to 64, not `(2^3)*2 == 16`.
    let (out, _) = run("print 2 ^ 3 * 2;");
    assert_eq!(out, "64\n");
}

#[test]
fn closures_capture_environment_by_reference() {
    let source = r#"
        function mk() {
            assign i = 0;
            function f() {
                i = i + 1;
                return i;
            }
            return f;
        }
        assign c = mk();
        print c();
        print c();
    "#;
    let (out, _) = run(source);
    assert_eq!(out, "1\n2\n");
}

#[test]
fn string_concatenation() {
    let (out, _) = run(r#"print "a" + "b";"#);
    assert_eq!(out, "ab\n");
}

#[test]
fn mixed_plus_operands_is_a_runtime_error() {
    let (out, diagnostics) = run(r#"print "a" + 1;"#);
    assert_eq!(out, "");
    assert!(diagnostics.borrow().had_runtime_error());
    assert!(diagnostics.borrow().lines().last().unwrap().contains("operands must be two numbers or two strings"));
}

#[test]
fn for_loop_desugaring() {
    let (out, _) = run("for (assign i = 0; i < 3; i = i + 1) print i;");
    assert_eq!(out, "0\n1\n2\n");
}

#[test]
fn logical_operators_return_the_original_operand() {
    let (out, _) = run(r#"print nil || "x"; print 0 && "y";"#);
    assert_eq!(out, "x\ny\n");
}

#[test]
fn function_falling_off_the_end_returns_nil() {
    let (out, _) = run("function f() { assign x = 1; } print f();");
    assert_eq!(out, "nil\n");
}

#[test]
fn undefined_variable_is_a_runtime_error() {
    let (_, diagnostics) = run("print missing;");
    assert!(diagnostics.borrow().had_runtime_error());
}

#[test]
fn assign_to_undefined_variable_never_creates_a_binding() {
    let (_, diagnostics) = run("x = 1; print x;");
    assert!(diagnostics.borrow().had_runtime_error());
}

#[test]
fn block_restores_enclosing_environment_on_return() {
    let source = r#"
        assign x = "outer";
        function f() {
            assign x = "inner";
            return x;
        }
        print f();
        print x;
    "#;
    let (out, _) = run(source);
    assert_eq!(out, "inner\nouter\n");
}

#[test]
fn arity_mismatch_is_a_runtime_error() {
    let (_, diagnostics) = run("function f(a) { return a; } print f();");
    assert!(diagnostics.borrow().had_runtime_error());
}

#[test]
fn calling_a_non_callable_value_is_a_runtime_error() {
    let (_, diagnostics) = run("assign x = 1; print x();");
    assert!(diagnostics.borrow().had_runtime_error());
}

#[test]
fn prefix_increment_and_decrement_do_not_mutate() {
    let (out, _) = run("assign x = 5; print --x; print ++x; print x;");
    assert_eq!(out, "4\n6\n5\n");
}

#[test]
fn return_outside_any_function_is_a_runtime_error_and_halts() {
    let (out, diagnostics) = run("return 5; print 1;");
    assert_eq!(out, "");
    assert!(diagnostics.borrow().had_runtime_error());
    assert!(diagnostics.borrow().lines().last().unwrap().contains("cannot return from outside a function"));
}

#[test]
fn while_loop_with_early_return_inside_function() {
    let source = r#"
        function firstOver(limit) {
            assign i = 0;
            while (true) {
                if (i > limit) return i;
                i = i + 1;
            }
        }
        print firstOver(3);
    "#;
    let (out, _) = run(source);
    assert_eq!(out, "4\n");
}
