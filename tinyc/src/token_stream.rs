//! Peekable token stream.
use std::iter::Peekable;

use crate::{
    collections::DynArray,
    error::{Expected, TinycError, TinycResult},
    tokens::{Token, TokenKind},
};

/// Cursor over a lexed token sequence, with one token of look ahead.
///
/// The stream owns the tokens. Consuming a token moves it out, so
/// AST nodes take ownership of the tokens they were built from.
pub struct TokenStream {
    tokens: Peekable<std::vec::IntoIter<Token>>,
    /// Number of tokens consumed so far.
    position: usize,
    len: usize,
}

impl TokenStream {
    pub fn new(tokens: DynArray<Token>) -> Self {
        Self {
            len: tokens.len(),
            tokens: tokens.into_iter().peekable(),
            position: 0,
        }
    }

    /// Index of the next token to be consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of tokens the stream started with.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.position >= self.len
    }

    /// Consumes the current token regardless of kind.
    ///
    /// Returns `None` when the cursor is at the end of the token stream.
    #[inline]
    pub fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.next()?;
        self.position += 1;
        Some(token)
    }

    /// Consumes the current token if it matches the given token kind.
    ///
    /// Does not consume the token if the kinds do not match.
    pub fn match_token(&mut self, token_kind: TokenKind) -> Option<Token> {
        if self.peek_kind() == Some(token_kind) {
            self.next_token()
        } else {
            None
        }
    }

    /// Return the current token and advance the cursor.
    ///
    /// The consumed token must match the given token kind. The cursor
    /// is not advanced if the token kind does not match.
    ///
    /// # Errors
    ///
    /// Returns [`TinycError::UnexpectedToken`] if the token kind doesn't match,
    /// or [`TinycError::UnexpectedEndOfInput`] when the stream is exhausted.
    pub fn consume(&mut self, token_kind: TokenKind) -> TinycResult<Token> {
        self.expect(Expected::Token(token_kind), |kind| kind == token_kind)
    }

    /// Consume the current token if the predicate accepts its kind,
    /// otherwise report what was expected instead.
    pub fn expect(&mut self, expected: Expected, predicate: impl Fn(TokenKind) -> bool) -> TinycResult<Token> {
        match self.tokens.peek() {
            Some(token) if predicate(token.kind) => {
                self.next_token().ok_or(TinycError::UnexpectedEndOfInput { expected })
            }
            Some(token) => Err(unexpected(expected, token)),
            None => Err(TinycError::UnexpectedEndOfInput { expected }),
        }
    }

    /// Return the current token without advancing the cursor.
    ///
    /// Returns `None` when the stream is exhausted.
    #[inline]
    pub fn peek(&mut self) -> Option<&Token> {
        self.tokens.peek()
    }

    /// Return the current token kind without advancing the cursor.
    #[inline]
    pub fn peek_kind(&mut self) -> Option<TokenKind> {
        self.tokens.peek().map(|token| token.kind)
    }
}

/// Build the error for a token that was found where something else was expected.
#[inline(never)]
#[cold]
pub fn unexpected(expected: Expected, token: &Token) -> TinycError {
    TinycError::UnexpectedToken {
        expected,
        actual: token.kind,
        actual_text: token.to_string(),
        span: token.span.clone(),
    }
}
