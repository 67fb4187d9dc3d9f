use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{Expr, Stmt};
use crate::diagnostics::Diagnostics;
use crate::lexer::Lexer;
use crate::value::Value;

use super::Parser;

fn parse(source: &str) -> (Vec<Stmt>, Rc<RefCell<Diagnostics>>) {
    let diagnostics = Rc::new(RefCell::new(Diagnostics::new(false)));
    let tokens = Lexer::new(source, diagnostics.clone()).scan_tokens();
    let parser = Parser::new(tokens, diagnostics.clone());
    (parser.parse(), diagnostics)
}

#[test]
fn arithmetic_precedence_nests_factor_inside_term() {
    let (stmts, diagnostics) = parse("1 + 2 * 3;");
    assert!(!diagnostics.borrow().had_error());
    match &stmts[0] {
        Stmt::Expression(Expr::Binary { left, op, right }) => {
            assert_eq!(op.lexeme, "+");
            assert!(matches!(**left, Expr::Literal { value: Value::Number(n) } if n == 1.0));
            assert!(matches!(**right, Expr::Binary { .. }));
        }
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn power_sits_at_term_precedence() {
    // 2 ^ 3 * 2 should parse as 2 ^ (3 * 2), since '*' binds at `factor`,
    // tighter than `^` at `term`.
    let (stmts, _) = parse("2 ^ 3 * 2;");
    match &stmts[0] {
        Stmt::Expression(Expr::Binary { left, op, right }) => {
            assert_eq!(op.lexeme, "^");
            assert!(matches!(**left, Expr::Literal { value: Value::Number(n) } if n == 2.0));
            assert!(matches!(**right, Expr::Binary { .. }));
        }
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn assignment_to_non_variable_is_reported_and_lhs_preserved() {
    let (stmts, diagnostics) = parse("1 = 2;");
    assert!(diagnostics.borrow().had_error());
    assert!(matches!(&stmts[0], Stmt::Expression(Expr::Literal { .. })));
}

#[test]
fn assignment_is_right_associative() {
    let (stmts, _) = parse("assign a = 0; assign b = 0; a = b = 3;");
    match &stmts[2] {
        Stmt::Expression(Expr::Assign { name, value }) => {
            assert_eq!(name.lexeme, "a");
            assert!(matches!(**value, Expr::Assign { .. }));
        }
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn for_loop_desugars_to_block_while_block() {
    let (stmts, _) = parse("for (assign i = 0; i < 3; i = i + 1) print i;");
    match &stmts[0] {
        Stmt::Block(outer) => {
            assert!(matches!(outer[0], Stmt::VariableDecl { .. }));
            match &outer[1] {
                Stmt::While { cond, body } => {
                    assert!(matches!(cond, Expr::Binary { .. }));
                    match body.as_ref() {
                        Stmt::Block(inner) => {
                            assert!(matches!(inner[0], Stmt::Print(_)));
                            assert!(matches!(inner[1], Stmt::Expression(Expr::Assign { .. })));
                        }
                        other => panic!("unexpected for body: {other:?}"),
                    }
                }
                other => panic!("unexpected for statement: {other:?}"),
            }
        }
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn for_loop_without_condition_defaults_to_true() {
    let (stmts, _) = parse("for (;;) print 1;");
    match &stmts[0] {
        Stmt::Block(outer) => match &outer[0] {
            Stmt::While { cond, .. } => {
                assert!(matches!(cond, Expr::Literal { value: Value::Boolean(true) }));
            }
            other => panic!("unexpected for statement: {other:?}"),
        },
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn return_statement_without_value() {
    let (stmts, _) = parse("function f() { return; }");
    match &stmts[0] {
        Stmt::Function { body, .. } => {
            assert!(matches!(&body[0], Stmt::Return { value: None, .. }));
        }
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn return_statement_with_value() {
    let (stmts, _) = parse("function f() { return 1 + 1; }");
    match &stmts[0] {
        Stmt::Function { body, .. } => {
            assert!(matches!(&body[0], Stmt::Return { value: Some(_), .. }));
        }
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn function_decl_collects_params() {
    let (stmts, _) = parse("function add(a, b) { return a + b; }");
    match &stmts[0] {
        Stmt::Function { name, params, .. } => {
            assert_eq!(name.lexeme, "add");
            assert_eq!(params.iter().map(|p| p.lexeme.as_str()).collect::<Vec<_>>(), vec!["a", "b"]);
        }
        other => panic!("unexpected statement: {other:?}"),
    }
}

#[test]
fn missing_semicolon_is_a_single_diagnostic_and_recovery_resumes() {
    let (stmts, diagnostics) = parse("print 1 print 2;");
    assert!(diagnostics.borrow().had_error());
    // the first (malformed) statement is dropped; the second still parses.
    assert_eq!(stmts.len(), 1);
    assert!(matches!(&stmts[0], Stmt::Print(_)));
}

#[test]
fn synchronize_recovers_at_next_statement_keyword() {
    let (stmts, diagnostics) = parse("assign x = ; print 1;");
    assert!(diagnostics.borrow().had_error());
    assert_eq!(stmts.len(), 1);
    assert!(matches!(&stmts[0], Stmt::Print(_)));
}

#[test]
fn unterminated_block_is_reported_not_infinite_looped() {
    let (_, diagnostics) = parse("{ print 1;");
    assert!(diagnostics.borrow().had_error());
}

#[test]
fn argument_cap_is_a_non_fatal_diagnostic() {
    let args = (0..300).map(|n| n.to_string()).collect::<Vec<_>>().join(", ");
    let source = format!("f({args});");
    let (stmts, diagnostics) = parse(&source);
    assert!(diagnostics.borrow().had_error());
    assert!(matches!(&stmts[0], Stmt::Expression(Expr::Call { .. })));
}

#[test]
fn if_without_else() {
    let (stmts, _) = parse("if (true) print 1;");
    assert!(matches!(&stmts[0], Stmt::If { else_branch: None, .. }));
}

#[test]
fn if_with_else() {
    let (stmts, _) = parse("if (true) print 1; else print 2;");
    assert!(matches!(&stmts[0], Stmt::If { else_branch: Some(_), .. }));
}

#[test]
fn call_can_be_chained() {
    let (stmts, _) = parse("f()();");
    match &stmts[0] {
        Stmt::Expression(Expr::Call { callee, .. }) => {
            assert!(matches!(**callee, Expr::Call { .. }));
        }
        other => panic!("unexpected statement: {other:?}"),
    }
}
