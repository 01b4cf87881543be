use super::position::Span;
use super::token::{Number, Token};

/// Parse tree. Nodes own their children.
#[derive(Debug, PartialEq, Clone)]
pub enum Node {
    Number(Token),
    UnaryOp(Token, Box<Node>),
    BinaryOp(Box<Node>, Token, Box<Node>),
}

impl Node {
    pub fn number(&self) -> Option<Number> {
        match self {
            Node::Number(token) => token.literal(),
            _ => None,
        }
    }

    /// Source extent of the whole subtree.
    pub fn span(&self) -> Span {
        use Node::*;
        match self {
            Number(token) => token.span().clone(),
            UnaryOp(operator, operand) => {
                Span::new(operator.start().clone(), operand.span().end)
            }
            BinaryOp(left, _, right) => Span::new(left.span().start, right.span().end),
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Node::*;
        match self {
            Number(token) => write!(f, "{}", token),
            UnaryOp(operator, operand) => write!(f, "({}, {})", operator, operand),
            BinaryOp(left, operator, right) => write!(f, "({}, {}, {})", left, operator, right),
        }
    }
}
