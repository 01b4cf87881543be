#![allow(dead_code)]
use arith::lang::{lex, token::*, Error};

pub fn tree(s: &str) -> String {
    match arith::run("test", s) {
        Ok(node) => node.to_string(),
        Err(e) => panic!("{} : {:?}", e, e),
    }
}

pub fn run_err(s: &str) -> Error {
    match arith::run("test", s) {
        Ok(node) => panic!("expected an error, parsed {}", node),
        Err(e) => e,
    }
}

pub fn kinds(s: &str) -> Vec<TokenKind> {
    match lex("test", s) {
        Ok(tokens) => tokens.iter().map(|t| t.kind()).collect(),
        Err(e) => panic!("{} : {:?}", e, e),
    }
}
