use super::position::{Position, Span};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    span: Span,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident, $span:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err, $span)
    };
    ($err:ident, $span:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err, $span).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode, span: &Span) -> Error {
        Error {
            code,
            span: span.clone(),
            message: String::new(),
        }
    }

    pub fn message<S: Into<String>>(&self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            span: self.span.clone(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn category(&self) -> &'static str {
        self.code.category()
    }

    pub fn details(&self) -> &str {
        &self.message
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

    /// The full diagnostic: category, details, location and the underlined
    /// source excerpt.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    IllegalChar,
    InvalidSyntax,
    Overflow,
}

impl ErrorCode {
    pub fn category(self) -> &'static str {
        match self {
            ErrorCode::IllegalChar => "Character not supported",
            ErrorCode::InvalidSyntax => "Invalid syntax",
            ErrorCode::Overflow => "Number out of range",
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.message.is_empty() {
            writeln!(f, "{}", self.category())?;
        } else {
            writeln!(f, "{}: {}", self.category(), self.message)?;
        }
        writeln!(
            f,
            "File {}, line {}",
            self.start().source_name(),
            self.start().line + 1
        )?;
        writeln!(f)?;
        write!(f, "{}", underline(&self.span))
    }
}

impl std::error::Error for Error {}

/// Reproduce every source line touched by `span` with `^` beneath the
/// covered columns. An empty span still gets one caret.
pub fn underline(span: &Span) -> String {
    let source = span.start.source();
    let first = span.start.line;
    let mut last = span.end.line;
    if last > first && span.end.column == 0 {
        last -= 1;
    }
    let mut out = String::new();
    for line_number in first..=last {
        let line = source.line(line_number).unwrap_or("");
        let width = line.chars().count() as u32;
        let col_start = if line_number == first {
            span.start.column
        } else {
            0
        };
        // A line the span runs off the end of also covers its line break.
        let col_end = if line_number == span.end.line {
            span.end.column
        } else {
            width + 1
        };
        let mut carets = col_end.saturating_sub(col_start);
        if line_number == first {
            carets = carets.max(1);
        }
        if line_number != first {
            out.push('\n');
        }
        out.push_str(&line.replace('\t', " "));
        out.push('\n');
        out.push_str(&" ".repeat(col_start as usize));
        out.push_str(&"^".repeat(carets as usize));
    }
    out
}
