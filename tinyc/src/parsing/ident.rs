use super::Parse;
use crate::{
    error::{TinycError, TinycResult},
    token_stream::TokenStream,
    tokens::{Span, Token, TokenKind},
};
use smol_str::SmolStr;

/// Name of a function or variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub token: Token,
    pub name: SmolStr,
}

impl Ident {
    pub fn new(name: impl Into<SmolStr>, span: Span) -> Self {
        let name = name.into();
        Ident {
            token: Token::ident(name.clone(), span),
            name,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }

    /// Build the node from an already consumed identifier token.
    pub(crate) fn from_token(token: Token) -> Self {
        debug_assert_eq!(token.kind, TokenKind::Ident);
        let name = token.name.clone().unwrap_or_else(|| SmolStr::new(""));
        Ident { token, name }
    }
}

impl Parse for Ident {
    type Output = Self;
    type Err = TinycError;

    #[inline]
    fn parse(input: &mut TokenStream) -> TinycResult<Self> {
        input.consume(TokenKind::Ident).map(Ident::from_token)
    }
}
