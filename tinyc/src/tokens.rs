//! Tokens
use smol_str::SmolStr;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Text of an identifier. Only set for [`TokenKind::Ident`].
    pub name: Option<SmolStr>,
    /// Value of a number literal. Only set for [`TokenKind::Number`].
    pub value: Option<i32>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            span,
            name: None,
            value: None,
        }
    }

    #[inline]
    pub fn ident(name: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(TokenKind::Ident, span)
        }
    }

    #[inline]
    pub fn number(value: i32, span: Span) -> Self {
        Self {
            value: Some(value),
            ..Self::new(TokenKind::Number, span)
        }
    }
}

/// Renders the token the way it would appear in source.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use TokenKind as TK;
        match (self.kind, &self.name, self.value) {
            (TK::Ident, Some(name), _) => write!(f, "{name}"),
            (TK::Number, _, Some(value)) => write!(f, "{value}"),
            (TK::Keyword(keyword), _, _) => write!(f, "{keyword}"),
            (kind, _, _) => match kind.symbol() {
                Some(symbol) => write!(f, "{symbol}"),
                None => write!(f, "{kind}"),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[rustfmt::skip]
pub enum TokenKind {
    // Simple
    Plus,       // +
    Eq,         // =
    Semicolon,  // ;
    LeftParen,  // (
    RightParen, // )
    LeftBrace,  // {
    RightBrace, // }

    // ------------------------------------------------------------------------
    // Complex
    Ident,
    /// Reserved identifiers
    Keyword(Keyword),
    /// Decimal integer literal
    Number,

    // ------------------------------------------------------------------------
    // Special
    /// Unsupported character, rejected by the parser wherever it appears.
    Unknown,
}

impl TokenKind {
    /// Source text of single character tokens.
    #[rustfmt::skip]
    pub fn symbol(&self) -> Option<&'static str> {
        use TokenKind as TK;
        match self {
            TK::Plus       => Some("+"),
            TK::Eq         => Some("="),
            TK::Semicolon  => Some(";"),
            TK::LeftParen  => Some("("),
            TK::RightParen => Some(")"),
            TK::LeftBrace  => Some("{"),
            TK::RightBrace => Some("}"),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Keyword(keyword) => write!(f, "'{keyword}'"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Unknown => write!(f, "<invalid>"),
            kind => match kind.symbol() {
                Some(symbol) => write!(f, "'{symbol}'"),
                None => write!(f, "{kind:?}"),
            },
        }
    }
}

/// Reserved keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Keyword {
    Int,
    Return,
}

impl Keyword {
    #[rustfmt::skip]
    pub fn parse(text: impl AsRef<str>) -> Option<Self> {
        match text.as_ref() {
            "int"    => Some(Self::Int),
            "return" => Some(Self::Return),
            _ => None,
        }
    }
}

impl fmt::Display for Keyword {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Int    => write!(f, "int"),
            Self::Return => write!(f, "return"),
        }
    }
}

/// Chunk of source code, encoded as a byte position and size.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Span {
    pub index: u32,
    pub size: u32,
}

impl Span {
    pub fn new(index: u32, size: u32) -> Self {
        Self { index, size }
    }

    #[inline]
    pub fn fragment<'a>(&self, text: &'a str) -> &'a str {
        &text[(self.index as usize)..(self.end() as usize)]
    }

    /// Ending index of the span, exclusive.
    #[inline]
    pub fn end(&self) -> u32 {
        self.index + self.size
    }

    /// Find the line of source text that contains the start of this span.
    ///
    /// The returned line excludes its trailing newline. The returned span
    /// locates the line within the whole text.
    pub fn surrounding_line<'a>(&self, text: &'a str) -> (&'a str, Span) {
        let index = usize::min(self.index as usize, text.len());

        let start = text[..index].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let end = text[index..]
            .find(|c: char| c == '\n' || c == '\r')
            .map(|i| index + i)
            .unwrap_or(text.len());

        let line_span = Span {
            index: start as u32,
            size: (end - start) as u32,
        };

        (&text[start..end], line_span)
    }

    /// One based line and column numbers of the span's start.
    pub fn line_column(&self, text: &str) -> (usize, usize) {
        let (_, line_span) = self.surrounding_line(text);
        let line = text[..line_span.index as usize].matches('\n').count() + 1;
        let column = (self.index - line_span.index) as usize + 1;
        (line, column)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_span_fragment() {
        const CODE: &str = "int x = 42;";

        let spans = &[
            Span::new(0, 3),  // int
            Span::new(4, 1),  // x
            Span::new(6, 1),  // =
            Span::new(8, 2),  // 42
            Span::new(10, 1), // ;
        ];

        assert_eq!(spans[0].fragment(CODE), "int");
        assert_eq!(spans[1].fragment(CODE), "x");
        assert_eq!(spans[2].fragment(CODE), "=");
        assert_eq!(spans[3].fragment(CODE), "42");
        assert_eq!(spans[4].fragment(CODE), ";");
    }

    #[test]
    #[rustfmt::skip]
    fn test_span_surrounding_line() {
        const CODE: &str = "------------\n....here....\n------------";

        let span = Span::new(17, 4);
        assert_eq!(span.fragment(CODE), "here");

        let (line, line_span) = span.surrounding_line(CODE);
        assert_eq!(line, "....here....");
        assert_eq!(line_span, Span { index: 13, size: 12 });
        assert_eq!(span.line_column(CODE), (2, 5));
    }

    #[test]
    #[rustfmt::skip]
    fn test_span_surrounding_line_crlf() {
        const CODE: &str = "------------\r\n....here....\r\n------------";

        let span = Span::new(18, 4);
        assert_eq!(span.fragment(CODE), "here");

        let (line, line_span) = span.surrounding_line(CODE);
        assert_eq!(line, "....here....");
        assert_eq!(line_span, Span { index: 14, size: 12 });
    }

    #[test]
    fn test_span_surrounding_full_text() {
        const CODE: &str = "....here....";

        let span = Span::new(4, 4);
        let (line, line_span) = span.surrounding_line(CODE);
        assert_eq!(line, "....here....");
        assert_eq!(line_span, Span { index: 0, size: 12 });
        assert_eq!(span.line_column(CODE), (1, 5));
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::ident("main", Span::new(4, 4)).to_string(), "main");
        assert_eq!(Token::number(42, Span::new(0, 2)).to_string(), "42");
        assert_eq!(Token::new(TokenKind::Keyword(Keyword::Return), Span::new(0, 6)).to_string(), "return");
        assert_eq!(Token::new(TokenKind::LeftBrace, Span::new(0, 1)).to_string(), "{");
        assert_eq!(TokenKind::LeftBrace.to_string(), "'{'");
        assert_eq!(Token::new(TokenKind::Unknown, Span::new(0, 1)).to_string(), "<invalid>");
    }
}
