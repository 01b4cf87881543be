use std::rc::Rc;

/// A named buffer of source text.
#[derive(Debug, PartialEq)]
pub struct Source {
    pub name: String,
    pub text: String,
}

impl Source {
    pub fn new(name: &str, text: &str) -> Rc<Source> {
        Rc::new(Source {
            name: name.to_string(),
            text: text.to_string(),
        })
    }

    /// The text of the zero-based line `line`, without its line break.
    pub fn line(&self, line: u32) -> Option<&str> {
        self.text
            .split('\n')
            .nth(line as usize)
            .map(|s| s.trim_end_matches('\r'))
    }
}

/// A location in a `Source`.
///
/// `offset` is a byte offset into the source text and always lands on a
/// character boundary. `line` and `column` are zero-based; `column` counts
/// characters. Cloning gives an independent snapshot.
#[derive(Clone, PartialEq)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
    source: Rc<Source>,
}

impl Position {
    pub fn new(source: &Rc<Source>) -> Position {
        Position {
            offset: 0,
            line: 0,
            column: 0,
            source: Rc::clone(source),
        }
    }

    /// Step over `current_char`. A newline moves to the start of the next line.
    pub fn advance(&mut self, current_char: Option<char>) -> &mut Position {
        self.offset += current_char.map_or(1, char::len_utf8);
        self.column += 1;
        if current_char == Some('\n') {
            self.line += 1;
            self.column = 0;
        }
        self
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn source_name(&self) -> &str {
        &self.source.name
    }
}

impl std::fmt::Debug for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}@{}",
            self.source.name,
            self.line + 1,
            self.column + 1,
            self.offset
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Span {
        debug_assert!(start.offset <= end.offset);
        Span { start, end }
    }

    /// The slice of source text between `start` and `end`.
    pub fn text(&self) -> &str {
        let text = &self.start.source.text;
        text.get(self.start.offset..self.end.offset.min(text.len()))
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance() {
        let source = Source::new("test", "ab\ncd");
        let mut pos = Position::new(&source);
        pos.advance(Some('a')).advance(Some('b'));
        assert_eq!((pos.offset, pos.line, pos.column), (2, 0, 2));
        pos.advance(Some('\n'));
        assert_eq!((pos.offset, pos.line, pos.column), (3, 1, 0));
        pos.advance(None);
        assert_eq!((pos.offset, pos.line, pos.column), (4, 1, 1));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let source = Source::new("test", "12");
        let mut pos = Position::new(&source);
        let snapshot = pos.clone();
        pos.advance(Some('1'));
        assert_eq!(snapshot.offset, 0);
        assert_eq!(pos.offset, 1);
    }

    #[test]
    fn test_multibyte_offset() {
        let source = Source::new("test", "é1");
        let mut pos = Position::new(&source);
        pos.advance(Some('é'));
        assert_eq!(pos.offset, 2);
        assert_eq!(pos.column, 1);
    }

    #[test]
    fn test_span_text() {
        let source = Source::new("test", "12 + 345");
        let mut start = Position::new(&source);
        for c in "12 + ".chars() {
            start.advance(Some(c));
        }
        let mut end = start.clone();
        for c in "345".chars() {
            end.advance(Some(c));
        }
        assert_eq!(Span::new(start, end).text(), "345");
    }

    #[test]
    fn test_source_line() {
        let source = Source::new("test", "one\r\ntwo\nthree");
        assert_eq!(source.line(0), Some("one"));
        assert_eq!(source.line(2), Some("three"));
        assert_eq!(source.line(3), None);
    }
}
