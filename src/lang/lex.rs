use super::position::{Position, Source, Span};
use super::{token::*, Error};
use crate::error;
use std::rc::Rc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

pub fn lex(source_name: &str, source_text: &str) -> Result<Tokens> {
    Lexer::new(&Source::new(source_name, source_text)).tokenize()
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub struct Lexer {
    source: Rc<Source>,
    pos: Position,
    current_char: Option<char>,
}

impl Lexer {
    pub fn new(source: &Rc<Source>) -> Lexer {
        Lexer {
            source: Rc::clone(source),
            pos: Position::new(source),
            current_char: source.text.chars().next(),
        }
    }

    fn advance(&mut self) {
        self.pos.advance(self.current_char);
        self.current_char = self
            .source
            .text
            .get(self.pos.offset..)
            .and_then(|s| s.chars().next());
    }

    /// Scan the whole source. Stops at the first character that cannot
    /// start a token.
    pub fn tokenize(mut self) -> Result<Tokens> {
        let mut tokens = vec![];
        while let Some(ch) = self.current_char {
            if is_whitespace(ch) {
                self.advance();
                continue;
            }
            let token = if is_digit(ch) {
                self.number()?
            } else if let Some(kind) = TokenKind::from_char(ch) {
                self.symbol(kind)
            } else {
                return Err(self.illegal_char(ch));
            };
            trace!(%token, offset = token.start().offset, "token");
            tokens.push(token);
        }
        debug!(source = %self.source.name, tokens = tokens.len() + 1, "lexed");
        Ok(Tokens::new(tokens, self.pos))
    }

    fn symbol(&mut self, kind: TokenKind) -> Token {
        let start = self.pos.clone();
        self.advance();
        Token::new(kind, Span::new(start, self.pos.clone()))
    }

    // A second '.' ends the literal and is left for the next scan step.
    fn number(&mut self) -> Result<Token> {
        let start = self.pos.clone();
        let mut s = String::new();
        let mut decimal = false;
        while let Some(ch) = self.current_char {
            if ch == '.' {
                if decimal {
                    break;
                }
                decimal = true;
            } else if !is_digit(ch) {
                break;
            }
            s.push(ch);
            self.advance();
        }
        let span = Span::new(start, self.pos.clone());
        let number = if decimal {
            s.parse::<f64>().ok().map(Number::Float)
        } else {
            s.parse::<u128>().ok().map(Number::Int)
        };
        match number {
            Some(n) => Ok(Token::number(n, span)),
            None => {
                debug!(literal = %s, "number out of range");
                Err(error!(Overflow, &span; format!("'{}'", s)))
            }
        }
    }

    fn illegal_char(&mut self, ch: char) -> Error {
        let start = self.pos.clone();
        self.advance();
        debug!(%ch, line = start.line, column = start.column, "unsupported character");
        error!(IllegalChar, &Span::new(start, self.pos.clone()); format!("'{}'", ch))
    }
}
