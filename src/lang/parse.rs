use super::{ast::*, token::*, Error};
use crate::error;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// Deepest run of nested parentheses and unary signs accepted.
pub const MAX_NESTING: usize = 256;

pub fn parse(tokens: &Tokens) -> Result<Node> {
    let result = Parser::parse(tokens);
    match &result {
        Ok(_) => debug!(tokens = tokens.len(), "parsed"),
        Err(e) => debug!(details = e.details(), offset = e.start().offset, "syntax error"),
    }
    result
}

struct Parser<'a> {
    tokens: &'a [Token],
    index: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a Tokens) -> Result<Node> {
        let mut parser = Parser {
            tokens: &tokens[..],
            index: 0,
            depth: 0,
        };
        let node = parser.expression()?;
        let token = parser.current();
        if token.kind() != TokenKind::Eof {
            return Err(error!(InvalidSyntax, token.span(); "Expected '+', '-', '*', or '/'"));
        }
        Ok(node)
    }

    fn current(&self) -> &'a Token {
        &self.tokens[self.index]
    }

    // Never moves past the trailing Eof.
    fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if self.index + 1 < self.tokens.len() {
            self.index += 1;
        }
        token
    }

    fn expression(&mut self) -> Result<Node> {
        self.bin_op(Self::term, &[TokenKind::Plus, TokenKind::Minus])
    }

    fn term(&mut self) -> Result<Node> {
        self.bin_op(Self::factor, &[TokenKind::Mul, TokenKind::Div])
    }

    fn bin_op(&mut self, sub: fn(&mut Self) -> Result<Node>, ops: &[TokenKind]) -> Result<Node> {
        let mut left = sub(self)?;
        while ops.contains(&self.current().kind()) {
            let operator = self.advance().clone();
            let right = sub(self)?;
            left = Node::BinaryOp(Box::new(left), operator, Box::new(right));
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<Node> {
        let token = self.current();
        match token.kind() {
            TokenKind::Int | TokenKind::Float => {
                self.advance();
                Ok(Node::Number(token.clone()))
            }
            TokenKind::Plus | TokenKind::Minus => {
                self.nest(token)?;
                self.advance();
                let operand = self.factor()?;
                self.depth -= 1;
                Ok(Node::UnaryOp(token.clone(), Box::new(operand)))
            }
            TokenKind::LParen => {
                self.nest(token)?;
                self.advance();
                let expr = self.expression()?;
                self.depth -= 1;
                if self.current().kind() != TokenKind::RParen {
                    return Err(error!(InvalidSyntax, token.span(); "Expected ')'"));
                }
                self.advance();
                Ok(expr)
            }
            _ => Err(error!(InvalidSyntax, token.span(); "Expected int or float")),
        }
    }

    fn nest(&mut self, token: &Token) -> Result<()> {
        if self.depth >= MAX_NESTING {
            return Err(error!(InvalidSyntax, token.span(); "Expression nested too deeply"));
        }
        self.depth += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::lex;
    use super::*;

    fn parse_str(s: &str) -> String {
        match parse(&lex("test", s).unwrap()) {
            Ok(node) => node.to_string(),
            Err(e) => panic!("{} : {:?}", e, e),
        }
    }

    fn parse_err(s: &str) -> Error {
        parse(&lex("test", s).unwrap()).unwrap_err()
    }

    #[test]
    fn test_number() {
        assert_eq!(parse_str("42"), "INT:42");
        assert_eq!(parse_str("4.5"), "FLOAT:4.5");
    }

    #[test]
    fn test_precedence() {
        assert_eq!(parse_str("2 + 3 * 4"), "(INT:2, PLUS, (INT:3, MUL, INT:4))");
        assert_eq!(parse_str("(2 + 3) * 4"), "((INT:2, PLUS, INT:3), MUL, INT:4)");
    }

    #[test]
    fn test_left_assoc() {
        assert_eq!(parse_str("8 - 3 - 2"), "((INT:8, MINUS, INT:3), MINUS, INT:2)");
        assert_eq!(parse_str("8 / 4 * 2"), "((INT:8, DIV, INT:4), MUL, INT:2)");
    }

    #[test]
    fn test_unary() {
        assert_eq!(parse_str("--5"), "(MINUS, (MINUS, INT:5))");
        assert_eq!(parse_str("2 * -3"), "(INT:2, MUL, (MINUS, INT:3))");
        assert_eq!(parse_str("+(1)"), "(PLUS, INT:1)");
    }

    #[test]
    fn test_unmatched_paren_points_at_open() {
        let e = parse_err("1 * (1 + 2");
        assert_eq!(e.details(), "Expected ')'");
        assert_eq!(e.start().offset, 4);
        assert_eq!(e.end().offset, 5);
    }

    #[test]
    fn test_trailing_garbage() {
        let e = parse_err("1 2");
        assert_eq!(e.details(), "Expected '+', '-', '*', or '/'");
        assert_eq!(e.start().offset, 2);
        let e = parse_err("(1))");
        assert_eq!(e.start().offset, 3);
    }

    #[test]
    fn test_expected_number() {
        for s in &["", "1 +", "*", "()", "(*2)", "-"] {
            assert_eq!(parse_err(s).details(), "Expected int or float", "{:?}", s);
        }
    }

    #[test]
    fn test_nesting_limit() {
        let ok = format!("{}1{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        assert_eq!(parse_str(&ok), "INT:1");
        let deep = "(".repeat(MAX_NESTING + 1);
        assert_eq!(parse_err(&deep).details(), "Expression nested too deeply");
        let deep = "-".repeat(10_000);
        assert_eq!(parse_err(&deep).details(), "Expression nested too deeply");
    }
}
