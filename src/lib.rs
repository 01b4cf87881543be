//! # Arith
//!
//! The front end of a small arithmetic expression language: integers,
//! floats, `+ - * /`, parentheses and unary signs.
//!
//! Source text is scanned into tokens by [`lang::lex`] and folded into a
//! tree by [`lang::parse`]. Either stage stops at the first problem and
//! reports it as a [`lang::Error`] that renders with a caret excerpt.
//! ```
//! let err = arith::run("<stdin>", "1 $ 2").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Character not supported: '$'\nFile <stdin>, line 1\n\n1 $ 2\n  ^"
//! );
//! ```
//!
//! Run the `arith` binary with no arguments for an interactive prompt.

pub mod lang;
pub mod term;

use lang::{ast::Node, Error};

/// Lex then parse `source_text`. The parser never runs if lexing fails.
pub fn run(source_name: &str, source_text: &str) -> Result<Node, Error> {
    let tokens = lang::lex(source_name, source_text)?;
    lang::parse(&tokens)
}
