mod common;
use common::*;

#[test]
fn test_render_lex_error() {
    let e = run_err("1 $ 2");
    assert_eq!(
        e.render(),
        "Character not supported: '$'\nFile test, line 1\n\n1 $ 2\n  ^"
    );
}

#[test]
fn test_render_unmatched_paren() {
    let e = run_err("4 * (1 + 2");
    assert_eq!(
        e.render(),
        "Invalid syntax: Expected ')'\nFile test, line 1\n\n4 * (1 + 2\n    ^"
    );
}

#[test]
fn test_render_multi_char_token() {
    let e = run_err("1 + 2 345");
    assert_eq!(
        e.render(),
        "Invalid syntax: Expected '+', '-', '*', or '/'\nFile test, line 1\n\n1 + 2 345\n      ^^^"
    );
}

#[test]
fn test_render_at_end_of_input() {
    let e = run_err("1 +");
    assert_eq!(
        e.render(),
        "Invalid syntax: Expected int or float\nFile test, line 1\n\n1 +\n   ^"
    );
}

#[test]
fn test_render_overflow() {
    let e = run_err("340282366920938463463374607431768211456");
    assert_eq!(e.details(), "'340282366920938463463374607431768211456'");
    assert!(e.render().ends_with(&format!("\n{}", "^".repeat(39))));
}

#[test]
fn test_render_newline() {
    let e = run_err("1 +\n2");
    assert_eq!(
        e.render(),
        "Character not supported: '\n'\nFile test, line 1\n\n1 +\n   ^"
    );
}

#[test]
fn test_error_trait() {
    let e: Box<dyn std::error::Error> = Box::new(run_err(")"));
    assert!(e.to_string().starts_with("Invalid syntax: Expected int or float"));
}
