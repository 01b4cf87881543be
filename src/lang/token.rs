use super::position::{Position, Span};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Int,
    Float,
    Plus,
    Minus,
    Mul,
    Div,
    LParen,
    RParen,
    Eof,
}

impl TokenKind {
    pub fn from_char(ch: char) -> Option<TokenKind> {
        use TokenKind::*;
        match ch {
            '+' => Some(Plus),
            '-' => Some(Minus),
            '*' => Some(Mul),
            '/' => Some(Div),
            '(' => Some(LParen),
            ')' => Some(RParen),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use TokenKind::*;
        match self {
            Int => write!(f, "INT"),
            Float => write!(f, "FLOAT"),
            Plus => write!(f, "PLUS"),
            Minus => write!(f, "MINUS"),
            Mul => write!(f, "MUL"),
            Div => write!(f, "DIV"),
            LParen => write!(f, "LPAREN"),
            RParen => write!(f, "RPAREN"),
            Eof => write!(f, "EOF"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Number {
    Int(u128),
    Float(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(n) => write!(f, "{:?}", n),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    kind: TokenKind,
    literal: Option<Number>,
    span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Token {
        debug_assert!(kind != TokenKind::Int && kind != TokenKind::Float);
        Token {
            kind,
            literal: None,
            span,
        }
    }

    pub fn number(number: Number, span: Span) -> Token {
        let kind = match number {
            Number::Int(_) => TokenKind::Int,
            Number::Float(_) => TokenKind::Float,
        };
        Token {
            kind,
            literal: Some(number),
            span,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn literal(&self) -> Option<Number> {
        self.literal
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn start(&self) -> &Position {
        &self.span.start
    }

    pub fn end(&self) -> &Position {
        &self.span.end
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.literal {
            Some(n) => write!(f, "{}:{}", self.kind, n),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Lexer output: never empty, always terminated by an `Eof` token.
#[derive(Debug, PartialEq, Clone)]
pub struct Tokens(Vec<Token>);

impl Tokens {
    pub(super) fn new(mut tokens: Vec<Token>, eof: Position) -> Tokens {
        tokens.push(Token::new(TokenKind::Eof, Span::new(eof.clone(), eof)));
        Tokens(tokens)
    }
}

impl std::ops::Deref for Tokens {
    type Target = [Token];
    fn deref(&self) -> &[Token] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for Tokens {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<String> = self.0.iter().map(|t| t.to_string()).collect();
        write!(f, "[{}]", s.join(", "))
    }
}
