//! Literal values.
use super::Parse;
use crate::{
    error::{TinycError, TinycResult},
    token_stream::TokenStream,
    tokens::{Span, Token, TokenKind},
};

/// Integer constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub token: Token,
    pub value: i32,
}

impl Literal {
    pub fn new(value: i32, span: Span) -> Self {
        Literal {
            token: Token::number(value, span),
            value,
        }
    }

    pub(crate) fn from_token(token: Token) -> Self {
        debug_assert_eq!(token.kind, TokenKind::Number);
        let value = token.value.unwrap_or_default();
        Literal { token, value }
    }
}

impl Parse for Literal {
    type Output = Self;
    type Err = TinycError;

    #[inline]
    fn parse(input: &mut TokenStream) -> TinycResult<Self> {
        // Only one number type.
        input.consume(TokenKind::Number).map(Literal::from_token)
    }
}
