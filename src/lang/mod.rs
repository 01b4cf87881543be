/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of arithmetic
expressions.

*/

#[macro_use]
mod error;
mod lex;
mod parse;
mod position;

pub mod ast;
pub mod token;

pub use error::underline;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::Lexer;
pub use parse::parse;
pub use parse::MAX_NESTING;
pub use position::{Position, Source, Span};
