//! Lexical analysis
use crate::{
    collections::DynArray,
    error::{TinycError, TinycResult},
    tokens::{Keyword, Span, Token, TokenKind},
};

use itertools::Itertools;
use std::{
    fmt::{self, Write as FmtWrite},
    iter::Peekable,
    str::CharIndices,
};

/// Convert the whole source text into a sequence of tokens.
///
/// Unknown characters do not fail lexing. They are emitted as
/// [`TokenKind::Unknown`] for the parser to reject.
pub fn tokenize(source_code: &str) -> TinycResult<DynArray<Token>> {
    if source_code.is_empty() {
        return Err(TinycError::EmptyInput);
    }

    let tokens = Lexer::new(source_code).collect::<TinycResult<DynArray<_>>>()?;
    log::debug!("lexed {} tokens from {} bytes", tokens.len(), source_code.len());

    Ok(tokens)
}

/// Write a table of tokens, one per line.
pub fn dump_tokens<W: FmtWrite>(w: &mut W, tokens: &[Token], source_code: &str) -> fmt::Result {
    writeln!(w, "offset | len | token                | fragment")?;
    for token in tokens {
        let offset = token.span.index;
        let len = token.span.size;
        let kind = format!("{:?}", token.kind); // cannot format debug print {:?} into columns
        let fragment = token.span.fragment(source_code);
        writeln!(w, "{offset:6}:{len: <4} {kind: <22} \"{fragment}\"")?;
    }
    Ok(())
}

pub struct Lexer<'a> {
    /// Character scanner
    chars: Peekable<CharIndices<'a>>,
    /// Keep reference to the source so tokens can
    /// slice fragments from it.
    original: &'a str,
    /// Start absolute byte position of the current token
    /// in the source.
    start_pos: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source_code: &'a str) -> Self {
        Self {
            chars: source_code.char_indices().peekable(),
            original: source_code,
            start_pos: 0,
        }
    }

    /// Original source code that was passed in during construction.
    pub fn source_code(&self) -> &'a str {
        self.original
    }

    /// Scan the source characters and construct the next token.
    ///
    /// Returns `None` once the source is exhausted.
    #[rustfmt::skip]
    pub fn next_token(&mut self) -> Option<TinycResult<Token>> {
        use TokenKind as TK;

        // Erase leading whitespace.
        self.chars
            .peeking_take_while(|&(_, c)| is_whitespace(c))
            .for_each(drop);

        let (index, c) = self.chars.next()?;
        self.start_pos = index as u32;

        let token = match c {
            '+' => self.make_token(TK::Plus),
            '=' => self.make_token(TK::Eq),
            ';' => self.make_token(TK::Semicolon),
            '(' => self.make_token(TK::LeftParen),
            ')' => self.make_token(TK::RightParen),
            '{' => self.make_token(TK::LeftBrace),
            '}' => self.make_token(TK::RightBrace),
            c if is_letter(c) => self.consume_ident(),
            c if is_digit(c)  => match self.consume_number() {
                Ok(token) => token,
                Err(err) => return Some(Err(err)),
            },
            _ => self.make_token(TK::Unknown),
        };

        log::trace!("{:?} {:?}", token.kind, token.span);
        Some(Ok(token))
    }

    /// Create a span using the starting position of the current token,
    /// and the position of the next unconsumed character.
    fn make_span(&mut self) -> Span {
        let end = match self.chars.peek() {
            Some((index, _)) => *index as u32,
            None => self.original.len() as u32,
        };

        debug_assert!(end >= self.start_pos);
        Span {
            index: self.start_pos,
            size: end - self.start_pos,
        }
    }

    fn make_token(&mut self, kind: TokenKind) -> Token {
        Token::new(kind, self.make_span())
    }
}

/// Specialised tokens.
impl<'a> Lexer<'a> {
    /// Make an identifier or keyword token.
    fn consume_ident(&mut self) -> Token {
        self.chars
            .peeking_take_while(|&(_, c)| is_letter_or_digit(c))
            .for_each(drop);

        let span = self.make_span();
        let fragment = span.fragment(self.original);

        match Keyword::parse(fragment) {
            Some(keyword) => Token::new(TokenKind::Keyword(keyword), span),
            None => Token::ident(fragment, span),
        }
    }

    /// Make a decimal number literal token.
    fn consume_number(&mut self) -> TinycResult<Token> {
        self.chars
            .peeking_take_while(|&(_, c)| is_digit(c))
            .for_each(drop);

        let span = self.make_span();
        let fragment = span.fragment(self.original);

        match fragment.parse::<i32>() {
            Ok(value) => Ok(Token::number(value, span)),
            Err(_) => Err(TinycError::InvalidNumber {
                text: fragment.to_owned(),
                span,
            }),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = TinycResult<Token>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Whitespace characters separating tokens.
fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t' | '\n' | '\r'
            | '\u{000B}' // vertical tab
            | '\u{000C}' // form feed
    )
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_letter_or_digit(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[cfg(test)]
mod test {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_spans() {
        const CODE: &str = "int  x=42;";
        let tokens = tokenize(CODE).unwrap();

        let fragments: Vec<&str> = tokens.iter().map(|t| t.span.fragment(CODE)).collect();
        assert_eq!(fragments, vec!["int", "x", "=", "42", ";"]);
    }

    #[test]
    fn test_unknown_is_not_fatal() {
        use TokenKind as TK;
        assert_eq!(kinds("a - b"), vec![TK::Ident, TK::Unknown, TK::Ident]);
        assert_eq!(kinds("_x"), vec![TK::Unknown, TK::Ident]);
    }

    #[test]
    fn test_multibyte_unknown() {
        const CODE: &str = "x\u{00E9}y";
        let tokens = tokenize(CODE).unwrap();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::Unknown);
        assert_eq!(tokens[1].span, Span::new(1, 2));
        assert_eq!(tokens[2].name.as_deref(), Some("y"));
    }

    #[test]
    fn test_dump_tokens() {
        const CODE: &str = "return 1;";
        let tokens = tokenize(CODE).unwrap();
        let mut buf = String::new();
        dump_tokens(&mut buf, &tokens, CODE).unwrap();

        assert_eq!(buf.lines().count(), 4);
        assert!(buf.contains("\"return\""));
    }
}
